//! Shared test fixtures: a tiny corpus pushed through the whole pipeline.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use talpa::{run_build, run_query, run_stemmer, run_tokenizer, BuildStats, SearchIndex};

/// Three documents exercising every stemmer rule the queries rely on.
pub const CORPUS: &str = "\
1\twiki\thttp://u/1\tAlpha\tThe quick brown foxes are running quickly\n\
2\twiki\thttp://u/2\tBravo\tA quick red fox is faster than slower foxes\n\
3\twiki\thttp://u/3\tCharlie\tLazy dogs sleep while foxes run\n";

/// A fully built index plus the on-disk artifacts that produced it.
/// The `TempDir` is held so the files outlive the fixture.
pub struct Fixture {
    pub dir: TempDir,
    pub raw: PathBuf,
    pub tokenized: PathBuf,
    pub stemmed: PathBuf,
    pub index_dir: PathBuf,
    pub stats: BuildStats,
    pub index: SearchIndex,
}

/// Run tokenizer → stemmer → builder over `corpus` and load the result.
pub fn build_index_from(corpus: &str) -> Fixture {
    let dir = TempDir::new().expect("create tempdir");
    let raw = dir.path().join("raw_text.tsv");
    let tokenized = dir.path().join("tokenized.txt");
    let stemmed = dir.path().join("stemmed.txt");
    let index_dir = dir.path().join("index");

    fs::write(&raw, corpus).expect("write corpus");
    run_tokenizer(&raw, &tokenized).expect("tokenize");
    run_stemmer(&tokenized, &stemmed).expect("stem");
    let stats = run_build(&stemmed, &raw, &index_dir, None).expect("build");
    let index = SearchIndex::open(&index_dir).expect("open index");

    Fixture {
        dir,
        raw,
        tokenized,
        stemmed,
        index_dir,
        stats,
        index,
    }
}

/// The standard three-document fixture.
pub fn fixture() -> Fixture {
    build_index_from(CORPUS)
}

/// Evaluate a query that is expected to be well-formed.
pub fn search(index: &SearchIndex, query: &str) -> Vec<u32> {
    run_query(index, query).unwrap_or_else(|e| panic!("query '{}' failed: {}", query, e))
}
