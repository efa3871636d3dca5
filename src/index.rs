//! The loaded, queryable index.
//!
//! [`SearchIndex::open`] eagerly reads all three files into memory; after
//! that, no query touches the disk. The lexicon stays a sorted vector and
//! is binary-searched per term, postings are one flat `Vec<u32>` sliced by
//! lexicon offsets, and the universe (every doc_id the index knows) comes
//! straight from the forward file's id column.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::binary::{
    load_forward, load_lexicon, load_postings, LexiconEntry, FORWARD_FILE, LEXICON_FILE,
    POSTINGS_FILE,
};

/// Human-readable metadata for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMeta {
    pub title: String,
    pub url: String,
}

/// An immutable in-memory index: lexicon, postings, metadata, universe.
pub struct SearchIndex {
    lexicon: Vec<LexiconEntry>,
    postings: Vec<u32>,
    metas: HashMap<u32, DocMeta>,
    universe: Vec<u32>,
    max_doc_id: u32,
}

impl SearchIndex {
    /// Load `postings.bin`, `lexicon.bin`, and `forward.bin` from `dir`.
    ///
    /// On top of each file's own validation, this checks the one invariant
    /// that spans two files: every lexicon entry's postings slice must lie
    /// inside the postings payload.
    pub fn open(dir: &Path) -> io::Result<Self> {
        let postings = load_postings(&dir.join(POSTINGS_FILE))?;
        let lexicon = load_lexicon(&dir.join(LEXICON_FILE))?;
        let forward = load_forward(&dir.join(FORWARD_FILE))?;

        let payload_bytes = postings.len() as u64 * 4;
        for entry in &lexicon {
            let in_bounds = entry.postings_offset % 4 == 0
                && entry
                    .postings_offset
                    .checked_add(entry.postings_count as u64 * 4)
                    .is_some_and(|end| end <= payload_bytes);
            if !in_bounds {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "lexicon.bin: term '{}' points outside the postings payload \
                         (offset {}, count {}, payload {} bytes)",
                        entry.term, entry.postings_offset, entry.postings_count, payload_bytes
                    ),
                ));
            }
        }

        let max_doc_id = forward.max_doc_id;
        let mut universe = Vec::with_capacity(forward.entries.len());
        let mut metas = HashMap::with_capacity(forward.entries.len());
        for entry in forward.entries {
            universe.push(entry.doc_id);
            metas.insert(
                entry.doc_id,
                DocMeta {
                    title: entry.title,
                    url: entry.url,
                },
            );
        }

        Ok(Self {
            lexicon,
            postings,
            metas,
            universe,
            max_doc_id,
        })
    }

    /// The posting list for an already-stemmed term; empty if absent.
    pub fn postings_for(&self, term: &str) -> &[u32] {
        match self
            .lexicon
            .binary_search_by(|e| e.term.as_str().cmp(term))
        {
            Ok(i) => {
                let entry = &self.lexicon[i];
                let start = (entry.postings_offset / 4) as usize;
                &self.postings[start..start + entry.postings_count as usize]
            }
            Err(_) => &[],
        }
    }

    /// Every doc_id known to the index, ascending.
    pub fn universe(&self) -> &[u32] {
        &self.universe
    }

    pub fn meta(&self, doc_id: u32) -> Option<&DocMeta> {
        self.metas.get(&doc_id)
    }

    pub fn lexicon(&self) -> &[LexiconEntry] {
        &self.lexicon
    }

    /// The raw postings payload (all lists concatenated).
    pub fn postings(&self) -> &[u32] {
        &self.postings
    }

    pub fn max_doc_id(&self) -> u32 {
        self.max_doc_id
    }

    pub fn doc_count(&self) -> usize {
        self.universe.len()
    }

    pub fn term_count(&self) -> usize {
        self.lexicon.len()
    }
}
