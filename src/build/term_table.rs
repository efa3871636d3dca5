// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory term → posting-list accumulation.
//!
//! The builder streams documents in file order and calls [`TermTable::add`]
//! once per token. Repeated tokens inside one document are collapsed by
//! remembering the last doc_id appended per term, so the common case costs
//! one hash lookup and no posting growth. The final sort + dedup in
//! [`TermTable::into_sorted`] makes the on-disk ordering invariant hold
//! even if the input stream was not in ascending doc_id order.

use std::collections::HashMap;

struct TermEntry {
    postings: Vec<u32>,
    last_doc_id: u32,
}

/// Accumulates posting lists keyed by term.
pub struct TermTable {
    map: HashMap<String, TermEntry>,
}

impl TermTable {
    /// `capacity` is a pre-sizing hint (the CLI's `hash_capacity` argument);
    /// the table grows beyond it as needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Record that `doc_id` contains `term`.
    pub fn add(&mut self, term: &str, doc_id: u32) {
        if let Some(entry) = self.map.get_mut(term) {
            if entry.last_doc_id != doc_id {
                entry.postings.push(doc_id);
                entry.last_doc_id = doc_id;
            }
        } else {
            self.map.insert(
                term.to_owned(),
                TermEntry {
                    postings: vec![doc_id],
                    last_doc_id: doc_id,
                },
            );
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drain into `(term, postings)` pairs sorted by term, with every
    /// posting list strictly ascending and duplicate-free.
    pub fn into_sorted(self) -> Vec<(String, Vec<u32>)> {
        let mut terms: Vec<(String, Vec<u32>)> = self
            .map
            .into_iter()
            .map(|(term, entry)| (term, entry.postings))
            .collect();
        terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        for (_, postings) in &mut terms {
            postings.sort_unstable();
            postings.dedup();
        }
        terms
    }
}
