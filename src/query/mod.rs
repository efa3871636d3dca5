//! Boolean query engine.
//!
//! A query goes through three stages, each its own module:
//!
//! 1. [`lexer`] — bytes to tokens, with query terms lowercased and stemmed
//!    by the exact table the index was built with, plus the implicit-AND
//!    pass (`quick fox` means `quick && fox`).
//! 2. [`parser`] — Shunting-Yard from infix to reverse-Polish form.
//! 3. [`eval`] — an operand stack of sorted doc_id lists; AND/OR/NOT are
//!    linear merges, NOT complements against the universe.
//!
//! [`run_query`] wires the stages together; [`render_results`] prints the
//! `TOTAL`/`DOC` output block with offset/limit pagination.

pub mod eval;
pub mod lexer;
pub mod parser;

use std::fmt;
use std::io::{self, Write};

use crate::index::SearchIndex;

/// Why a query failed to parse or evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// A `)` without a matching `(`, or an unclosed `(` at end of input.
    UnbalancedParens,
    /// An operator reached the evaluator with too few operands
    /// (e.g. `fox &&` or a bare `!`).
    MissingOperand,
    /// Parentheses that enclose nothing, leaving no expression to evaluate.
    EmptyExpression,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnbalancedParens => write!(f, "unbalanced parentheses in query"),
            QueryError::MissingOperand => write!(f, "operator is missing an operand"),
            QueryError::EmptyExpression => write!(f, "query contains no expression"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Evaluate a boolean query against the index.
///
/// Returns the matching doc_ids, ascending and duplicate-free. An empty or
/// all-whitespace query (or one lexing to nothing) yields an empty result
/// rather than an error.
pub fn run_query(index: &SearchIndex, query: &str) -> Result<Vec<u32>, QueryError> {
    let tokens = lexer::lex_query(query);
    if tokens.is_empty() {
        return Ok(Vec::new());
    }
    let rpn = parser::to_rpn(tokens)?;
    eval::eval_rpn(index, &rpn)
}

/// Print a result block: `TOTAL`, then one `DOC` line per result in the
/// `[offset, offset + limit)` window. Documents without metadata get empty
/// title and url fields.
pub fn render_results<W: Write>(
    out: &mut W,
    index: &SearchIndex,
    doc_ids: &[u32],
    offset: usize,
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "TOTAL\t{}", doc_ids.len())?;
    if offset >= doc_ids.len() {
        return Ok(());
    }
    let end = doc_ids.len().min(offset.saturating_add(limit));
    for &doc_id in &doc_ids[offset..end] {
        let (title, url) = match index.meta(doc_id) {
            Some(meta) => (meta.title.as_str(), meta.url.as_str()),
            None => ("", ""),
        };
        writeln!(out, "DOC\t{}\t{}\t{}", doc_id, title, url)?;
    }
    Ok(())
}
