//! Text processing: TSV record splitting, tokenization, and stemming.
//!
//! The offline stages (`run_tokenizer`, `run_stemmer`) stream files line by
//! line and never hold the corpus in memory. The stemmer rules live in
//! [`stem`] and are the single source of truth for both the offline stage
//! and the query-time term normalizer, so the two sides collapse every term
//! identically.

pub mod stem;
pub mod tokenize;
pub mod tsv;
