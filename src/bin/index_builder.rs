// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stage 3: stemmed corpus + raw metadata → the three binary index files.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use talpa::run_build;

#[derive(Parser)]
#[command(
    name = "index_builder",
    about = "Build postings.bin, lexicon.bin and forward.bin from a stemmed corpus"
)]
struct Args {
    /// Stemmed corpus produced by the stemmer
    stemmed: PathBuf,

    /// Original corpus TSV (for document titles and URLs)
    raw_text: PathBuf,

    /// Output directory for the index files (created if missing)
    index_dir: PathBuf,

    /// Term-table capacity hint (default 2^20, minimum 1024)
    hash_capacity: Option<usize>,
}

fn main() {
    let args = Args::parse();
    match run_build(
        &args.stemmed,
        &args.raw_text,
        &args.index_dir,
        args.hash_capacity,
    ) {
        Ok(stats) => {
            println!("Index builder finished");
            print!("{}", stats);
        }
        Err(e) => {
            eprintln!("index_builder: {}", e);
            process::exit(1);
        }
    }
}
