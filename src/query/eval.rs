//! RPN evaluation over sorted posting lists.
//!
//! Every operand on the stack is an ascending, duplicate-free doc_id list,
//! and every operator preserves that shape, so the algebra is closed: the
//! final result can be paginated and printed without any post-processing.
//! AND and OR are the textbook dual-pointer merges; NOT walks the universe
//! and drops whatever the operand contains.

use super::lexer::QueryToken;
use super::QueryError;
use crate::index::SearchIndex;

/// Sorted intersection of two ascending lists.
pub fn intersect(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            out.push(a[i]);
            i += 1;
            j += 1;
        } else if a[i] < b[j] {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}

/// Sorted union of two ascending lists; shared ids collapse to one.
pub fn union(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            out.push(a[i]);
            i += 1;
            j += 1;
        } else if a[i] < b[j] {
            out.push(a[i]);
            i += 1;
        } else {
            out.push(b[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Every universe id not present in `a`. Both inputs ascending.
pub fn complement(universe: &[u32], a: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(universe.len());
    let mut j = 0;
    for &id in universe {
        while j < a.len() && a[j] < id {
            j += 1;
        }
        if j < a.len() && a[j] == id {
            j += 1;
        } else {
            out.push(id);
        }
    }
    out
}

/// Execute an RPN token list against the index.
///
/// Terms push a copy of their posting list (absent terms push an empty
/// one); operators pop their operands and push the merge. Anything that
/// leaves the stack short, or leaves more or less than one value at the
/// end, is a malformed query.
pub fn eval_rpn(index: &SearchIndex, rpn: &[QueryToken]) -> Result<Vec<u32>, QueryError> {
    let mut stack: Vec<Vec<u32>> = Vec::new();

    for token in rpn {
        match token {
            QueryToken::Term(term) => stack.push(index.postings_for(term).to_vec()),
            QueryToken::Not => {
                let a = stack.pop().ok_or(QueryError::MissingOperand)?;
                stack.push(complement(index.universe(), &a));
            }
            QueryToken::And | QueryToken::Or => {
                let b = stack.pop().ok_or(QueryError::MissingOperand)?;
                let a = stack.pop().ok_or(QueryError::MissingOperand)?;
                let merged = if matches!(token, QueryToken::And) {
                    intersect(&a, &b)
                } else {
                    union(&a, &b)
                };
                stack.push(merged);
            }
            // The parser never emits parens into RPN; treat them as a
            // malformed stream rather than panicking.
            QueryToken::LParen | QueryToken::RParen => {
                return Err(QueryError::UnbalancedParens)
            }
        }
    }

    let result = stack.pop().ok_or(QueryError::EmptyExpression)?;
    if !stack.is_empty() {
        return Err(QueryError::MissingOperand);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_keeps_common_ids() {
        assert_eq!(intersect(&[1, 3, 5, 7], &[2, 3, 7, 9]), vec![3, 7]);
        assert_eq!(intersect(&[1, 2], &[]), Vec::<u32>::new());
    }

    #[test]
    fn union_collapses_duplicates() {
        assert_eq!(union(&[1, 3, 5], &[2, 3, 6]), vec![1, 2, 3, 5, 6]);
        assert_eq!(union(&[], &[4, 8]), vec![4, 8]);
    }

    #[test]
    fn complement_is_universe_minus_operand() {
        let universe = [1, 2, 3, 5, 8];
        assert_eq!(complement(&universe, &[2, 5]), vec![1, 3, 8]);
        assert_eq!(complement(&universe, &[]), universe.to_vec());
        assert_eq!(complement(&universe, &universe), Vec::<u32>::new());
        // Operand ids outside the universe are ignored.
        assert_eq!(complement(&universe, &[0, 2, 4, 9]), vec![1, 3, 5, 8]);
    }
}
