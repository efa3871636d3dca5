//! Query-engine microbenchmarks over a synthetic corpus.
//!
//! Builds a deterministic corpus of pseudo-articles in a temp directory,
//! runs it through the real pipeline once, then times the stages a live
//! query goes through: lexing+parsing alone, and full evaluation for
//! representative query shapes.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fmt::Write as _;

use talpa::query::{lexer, parser};
use talpa::{run_build, run_query, run_stemmer, run_tokenizer, SearchIndex};

/// Vocabulary for synthetic documents; index i of every third word keeps
/// term frequencies uneven so posting lists have realistic skew.
const WORDS: &[&str] = &[
    "search", "index", "postings", "lexicon", "corpus", "document", "boolean", "query", "merge",
    "stream", "binary", "builder", "token", "stemmer", "forward", "universe",
];

const DOCS: usize = 2_000;
const WORDS_PER_DOC: usize = 60;

fn synthetic_corpus() -> String {
    let mut corpus = String::new();
    for doc in 1..=DOCS {
        let mut text = String::new();
        for w in 0..WORDS_PER_DOC {
            // Deterministic but scrambled word choice.
            let pick = (doc * 31 + w * 17) % WORDS.len();
            text.push_str(WORDS[pick]);
            text.push(' ');
        }
        writeln!(
            corpus,
            "{}\tbench\thttp://bench/{}\tArticle {}\t{}",
            doc, doc, doc, text
        )
        .expect("write to string");
    }
    corpus
}

fn build_bench_index() -> (tempfile::TempDir, SearchIndex) {
    let dir = tempfile::tempdir().expect("tempdir");
    let raw = dir.path().join("raw_text.tsv");
    let tokenized = dir.path().join("tokenized.txt");
    let stemmed = dir.path().join("stemmed.txt");
    let index_dir = dir.path().join("index");

    std::fs::write(&raw, synthetic_corpus()).expect("write corpus");
    run_tokenizer(&raw, &tokenized).expect("tokenize");
    run_stemmer(&tokenized, &stemmed).expect("stem");
    run_build(&stemmed, &raw, &index_dir, None).expect("build");
    let index = SearchIndex::open(&index_dir).expect("open");
    (dir, index)
}

fn bench_queries(c: &mut Criterion) {
    let (_dir, index) = build_bench_index();

    let queries = [
        ("single_term", "search"),
        ("conjunction", "search && index"),
        ("negation", "search && !postings"),
        ("nested", "(lexicon || corpus) && !(merge && stream)"),
        ("implicit_and", "boolean query merge stream"),
    ];

    let mut group = c.benchmark_group("evaluate");
    for (name, query) in queries {
        group.bench_function(name, |b| {
            b.iter(|| run_query(&index, black_box(query)).expect("well-formed query"))
        });
    }
    group.finish();

    c.bench_function("lex_and_parse", |b| {
        b.iter(|| {
            let tokens = lexer::lex_query(black_box("(lexicon || corpus) && !(merge && stream)"));
            parser::to_rpn(tokens).expect("well-formed query")
        })
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
