// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index build pipeline.
//!
//! Consumes `stemmed.txt` (for posting lists) and `raw_text.tsv` (for doc
//! metadata), and writes the three index files into the output directory.
//! The whole build is single-threaded and streaming: the only things held
//! in memory are the term table and the metadata map, both of which are
//! drained into their files and dropped.
//!
//! Progress is reported with one spinner per phase so long builds are
//! visibly alive; counters land in [`BuildStats`] for the CLI to print.

mod term_table;

pub use term_table::TermTable;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::binary::{
    write_forward, write_lexicon, ForwardEntry, LexiconEntry, PostingsWriter, FORWARD_FILE,
    LEXICON_FILE, POSTINGS_FILE,
};
use crate::text::tsv::split_record;

/// Default term-table capacity hint (2^20 entries).
pub const DEFAULT_HASH_CAPACITY: usize = 1 << 20;

/// Smallest accepted capacity hint.
pub const MIN_HASH_CAPACITY: usize = 1024;

/// Counters reported by a completed build.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildStats {
    pub documents_indexed: u64,
    pub tokens_seen: u64,
    pub unique_terms: u64,
    pub total_postings: u64,
    pub docs_with_meta: u32,
    /// Records in `raw_text.tsv` whose doc_id was already seen (first wins).
    pub duplicate_docs: u64,
}

impl std::fmt::Display for BuildStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "documents_indexed={}", self.documents_indexed)?;
        writeln!(f, "tokens_seen={}", self.tokens_seen)?;
        writeln!(f, "unique_terms={}", self.unique_terms)?;
        writeln!(f, "total_postings={}", self.total_postings)?;
        writeln!(f, "docs_with_meta={}", self.docs_with_meta)
    }
}

fn spinner(multi: &MultiProgress, msg: &'static str) -> ProgressBar {
    let pb = multi.add(ProgressBar::new_spinner());
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .expect("static template"),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Build all three index files.
///
/// `hash_capacity` pre-sizes the term table; `None` means
/// [`DEFAULT_HASH_CAPACITY`], and anything below [`MIN_HASH_CAPACITY`] is
/// raised to it.
pub fn run_build(
    stemmed_path: &Path,
    raw_text_path: &Path,
    index_dir: &Path,
    hash_capacity: Option<usize>,
) -> io::Result<BuildStats> {
    let capacity = hash_capacity
        .unwrap_or(DEFAULT_HASH_CAPACITY)
        .max(MIN_HASH_CAPACITY);

    std::fs::create_dir_all(index_dir)?;

    let multi = MultiProgress::new();
    let mut stats = BuildStats::default();

    // Phase 1: accumulate posting lists from the stemmed stream.
    let pb = spinner(&multi, "Scanning stemmed tokens...");
    let mut table = TermTable::with_capacity(capacity);
    scan_stemmed(stemmed_path, &mut table, &mut stats)?;
    pb.finish_with_message(format!(
        "Indexed {} documents, {} unique terms",
        stats.documents_indexed,
        table.len()
    ));

    // Phase 2: sort terms and write postings + lexicon.
    let pb = spinner(&multi, "Writing postings and lexicon...");
    let terms = table.into_sorted();
    stats.unique_terms = terms.len() as u64;
    stats.total_postings = terms.iter().map(|(_, p)| p.len() as u64).sum();

    let mut postings = PostingsWriter::create(&index_dir.join(POSTINGS_FILE), stats.total_postings)?;
    let mut lexicon = Vec::with_capacity(terms.len());
    for (term, doc_ids) in &terms {
        let offset = postings.append(doc_ids)?;
        lexicon.push(LexiconEntry {
            term: term.clone(),
            postings_offset: offset,
            postings_count: doc_ids.len() as u32,
        });
    }
    postings.finish()?;
    write_lexicon(&index_dir.join(LEXICON_FILE), &lexicon)?;
    drop(terms);
    pb.finish_with_message(format!("Wrote {} postings", stats.total_postings));

    // Phase 3: collect doc metadata and write the forward file.
    let pb = spinner(&multi, "Writing forward metadata...");
    let metas = scan_metadata(raw_text_path, &mut stats)?;
    let entries: Vec<ForwardEntry> = metas
        .into_iter()
        .map(|(doc_id, (title, url))| ForwardEntry { doc_id, title, url })
        .collect();
    stats.docs_with_meta = entries.len() as u32;
    write_forward(&index_dir.join(FORWARD_FILE), &entries)?;
    pb.finish_with_message(format!("Wrote metadata for {} documents", stats.docs_with_meta));

    if stats.duplicate_docs > 0 {
        eprintln!(
            "warning: {} duplicate doc_id records in {} (first occurrence wins)",
            stats.duplicate_docs,
            raw_text_path.display()
        );
    }
    Ok(stats)
}

/// Feed every token of `stemmed.txt` into the term table.
///
/// Lines without a tab and doc_ids that are not positive integers are
/// skipped; a doc_id of 0 would otherwise enter posting lists while being
/// barred from the forward file, breaking the universe invariant.
fn scan_stemmed(path: &Path, table: &mut TermTable, stats: &mut BuildStats) -> io::Result<()> {
    let reader = BufReader::new(File::open(path)?);
    for line in reader.lines() {
        let line = line?;
        let Some((doc_id, body)) = line.split_once('\t') else {
            continue;
        };
        let Ok(doc_id) = doc_id.parse::<u32>() else {
            continue;
        };
        if doc_id == 0 {
            continue;
        }
        for token in body.split_whitespace() {
            table.add(token, doc_id);
            stats.tokens_seen += 1;
        }
        stats.documents_indexed += 1;
    }
    Ok(())
}

/// Collect `doc_id → (title, url)` from `raw_text.tsv`.
///
/// A `BTreeMap` keeps the map in ascending doc_id order, which is exactly
/// the order `forward.bin` wants. Malformed records and doc_id 0 are
/// skipped; duplicates keep the first occurrence and are counted.
fn scan_metadata(
    path: &Path,
    stats: &mut BuildStats,
) -> io::Result<BTreeMap<u32, (String, String)>> {
    let reader = BufReader::new(File::open(path)?);
    let mut metas = BTreeMap::new();
    for line in reader.lines() {
        let line = line?;
        let Some(record) = split_record(&line) else {
            continue;
        };
        let Ok(doc_id) = record.doc_id.parse::<u32>() else {
            continue;
        };
        if doc_id == 0 {
            continue;
        }
        if metas.contains_key(&doc_id) {
            stats.duplicate_docs += 1;
            continue;
        }
        metas.insert(doc_id, (record.title.to_owned(), record.url.to_owned()));
    }
    Ok(metas)
}
