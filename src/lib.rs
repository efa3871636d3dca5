//! Batch-built, disk-persisted inverted-index search over a TSV corpus.
//!
//! The pipeline is strictly staged:
//!
//! ```text
//! raw_text.tsv ──tokenize──▶ tokenized.txt ──stem──▶ stemmed.txt
//!                                                        │
//!       ┌──────────────── raw_text.tsv ─────────┐      build
//!       ▼                                       ▼        ▼
//!  forward.bin ◀──────────── index_dir ── lexicon.bin + postings.bin
//!                                │
//!                          SearchIndex::open
//!                                │
//!                 boolean queries (AND / OR / NOT, parens,
//!                 implicit AND), paginated TOTAL/DOC output
//! ```
//!
//! The stemmer is one module shared by the offline stage and the query
//! lexer, so both sides collapse terms byte-identically. Everything is
//! single-threaded; the searcher loads the whole index into memory once
//! and never touches disk again.
//!
//! # Usage
//!
//! ```ignore
//! use talpa::{run_build, run_query, SearchIndex};
//!
//! run_build(&stemmed, &raw_text, &index_dir, None)?;
//! let index = SearchIndex::open(&index_dir)?;
//! let docs = run_query(&index, "(brown || lazy) && fox")?;
//! ```

pub mod binary;
pub mod build;
mod index;
pub mod query;
pub mod text;
pub mod verify;

pub use build::{run_build, BuildStats, DEFAULT_HASH_CAPACITY, MIN_HASH_CAPACITY};
pub use index::{DocMeta, SearchIndex};
pub use query::{render_results, run_query, QueryError};
pub use text::stem::{run_stemmer, stem, StemStats};
pub use text::tokenize::{run_tokenizer, tokenize_text, TokenizeStats};
pub use verify::{verify_index, Violation};
