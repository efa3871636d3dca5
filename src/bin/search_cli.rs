// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stage 4: load an index directory and answer boolean queries.
//!
//! With `--query` the engine evaluates one query and exits. Without it,
//! queries are read line by line from stdin; each result block is prefixed
//! with `QUERY\t<q>` and blocks are separated by a blank line. The first
//! malformed query aborts the loop with a nonzero exit status.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use talpa::{render_results, run_query, verify_index, SearchIndex};

#[derive(Parser)]
#[command(
    name = "search_cli",
    about = "Evaluate boolean queries (AND / OR / NOT, parentheses) against an index"
)]
struct Args {
    /// Directory containing postings.bin, lexicon.bin and forward.bin
    #[arg(long)]
    index_dir: PathBuf,

    /// Evaluate a single query instead of reading from stdin
    #[arg(long)]
    query: Option<String>,

    /// Skip this many results before printing
    #[arg(long, default_value_t = 0)]
    offset: usize,

    /// Print at most this many results
    #[arg(long, default_value_t = 50)]
    limit: usize,

    /// Validate index invariants after loading and exit
    #[arg(long)]
    check: bool,
}

fn main() {
    let args = Args::parse();

    let index = match SearchIndex::open(&args.index_dir) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("search_cli: failed to load index: {}", e);
            process::exit(1);
        }
    };

    if args.check {
        let violations = verify_index(&index);
        if violations.is_empty() {
            println!(
                "index ok: {} documents, {} terms, {} postings",
                index.doc_count(),
                index.term_count(),
                index.postings().len()
            );
            return;
        }
        for v in &violations {
            eprintln!("violation: {}", v);
        }
        process::exit(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ok = match &args.query {
        Some(query) => run_one(&index, query, args.offset, args.limit, &mut out),
        None => run_interactive(&index, args.offset, args.limit, &mut out),
    };
    if !ok {
        process::exit(1);
    }
}

/// Evaluate one query and print its result block. Returns false on a
/// malformed query or a broken output stream.
fn run_one(
    index: &SearchIndex,
    query: &str,
    offset: usize,
    limit: usize,
    out: &mut impl Write,
) -> bool {
    let doc_ids = match run_query(index, query) {
        Ok(doc_ids) => doc_ids,
        Err(e) => {
            eprintln!("search_cli: {}", e);
            return false;
        }
    };
    if let Err(e) = render_results(out, index, &doc_ids, offset, limit) {
        eprintln!("search_cli: {}", e);
        return false;
    }
    true
}

/// Read queries from stdin until EOF; stop at the first failure.
fn run_interactive(
    index: &SearchIndex,
    offset: usize,
    limit: usize,
    out: &mut impl Write,
) -> bool {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("search_cli: {}", e);
                return false;
            }
        };
        let query = line.trim_end_matches(['\n', '\r']);
        if query.is_empty() {
            continue;
        }
        if writeln!(out, "QUERY\t{}", query).is_err() {
            return false;
        }
        if !run_one(index, query, offset, limit, out) {
            return false;
        }
        if writeln!(out).is_err() {
            return false;
        }
    }
    true
}
