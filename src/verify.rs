//! Structural invariant checks over a loaded index.
//!
//! The loaders already reject files that are internally inconsistent; this
//! module checks the cross-file properties a correct build must satisfy,
//! and reports every violation it finds instead of stopping at the first.
//! It backs `search_cli --check` and the integration test suite.

use std::fmt;

use crate::index::SearchIndex;

/// One violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A posting list is not strictly ascending.
    UnsortedPostings { term: String, position: usize },
    /// A posting references a doc_id above the forward file's maximum.
    PostingAboveMaxDoc { term: String, doc_id: u32 },
    /// A posting references a doc_id missing from the universe, which
    /// would make NOT lose documents.
    PostingOutsideUniverse { term: String, doc_id: u32 },
    /// The lexicon's postings_count values don't sum to the postings
    /// header total.
    CountMismatch { lexicon_sum: u64, header_total: u64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnsortedPostings { term, position } => {
                write!(
                    f,
                    "posting list for '{}' not strictly ascending at position {}",
                    term, position
                )
            }
            Violation::PostingAboveMaxDoc { term, doc_id } => {
                write!(
                    f,
                    "posting list for '{}' references doc {} above max_doc_id",
                    term, doc_id
                )
            }
            Violation::PostingOutsideUniverse { term, doc_id } => {
                write!(
                    f,
                    "posting list for '{}' references doc {} absent from forward.bin",
                    term, doc_id
                )
            }
            Violation::CountMismatch {
                lexicon_sum,
                header_total,
            } => {
                write!(
                    f,
                    "lexicon postings_count sum {} != postings.bin total {}",
                    lexicon_sum, header_total
                )
            }
        }
    }
}

/// Check every cross-file invariant; an empty vector means a sound index.
pub fn verify_index(index: &SearchIndex) -> Vec<Violation> {
    let mut violations = Vec::new();
    let universe = index.universe();
    let max_doc_id = index.max_doc_id();

    let mut lexicon_sum = 0u64;
    for entry in index.lexicon() {
        lexicon_sum += entry.postings_count as u64;
        let postings = index.postings_for(&entry.term);
        for (i, window) in postings.windows(2).enumerate() {
            if window[0] >= window[1] {
                violations.push(Violation::UnsortedPostings {
                    term: entry.term.clone(),
                    position: i + 1,
                });
                break;
            }
        }
        for &doc_id in postings {
            if doc_id > max_doc_id {
                violations.push(Violation::PostingAboveMaxDoc {
                    term: entry.term.clone(),
                    doc_id,
                });
            } else if universe.binary_search(&doc_id).is_err() {
                violations.push(Violation::PostingOutsideUniverse {
                    term: entry.term.clone(),
                    doc_id,
                });
            }
        }
    }

    let header_total = index.postings().len() as u64;
    if lexicon_sum != header_total {
        violations.push(Violation::CountMismatch {
            lexicon_sum,
            header_total,
        });
    }

    violations
}
