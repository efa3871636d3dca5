// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `lexicon.bin`: the sorted term table.
//!
//! One record per term, in strictly ascending bytewise order, each pointing
//! at a slice of the postings payload. Sortedness is a file invariant, not
//! a courtesy: the searcher binary-searches this table directly, so the
//! loader rejects any file that is out of order or carries an empty list.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::{check_header, clamp_field, ByteReader, LEXICON_MAGIC, VERSION};

/// One lexicon record: a term and where its posting list lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub term: String,
    /// Byte offset into the postings payload (counted from the end of the
    /// postings header).
    pub postings_offset: u64,
    pub postings_count: u32,
}

/// Write `lexicon.bin`. Entries must already be in ascending term order;
/// terms longer than a u16 length prefix allows are truncated.
pub fn write_lexicon(path: &Path, entries: &[LexiconEntry]) -> io::Result<()> {
    debug_assert!(entries.windows(2).all(|w| w[0].term < w[1].term));

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    out.write_all(&LEXICON_MAGIC.to_le_bytes())?;
    out.write_all(&VERSION.to_le_bytes())?;
    out.write_all(&(entries.len() as u32).to_le_bytes())?;
    for entry in entries {
        let term = clamp_field(&entry.term);
        out.write_all(&(term.len() as u16).to_le_bytes())?;
        out.write_all(term.as_bytes())?;
        out.write_all(&entry.postings_offset.to_le_bytes())?;
        out.write_all(&entry.postings_count.to_le_bytes())?;
    }
    out.flush()
}

/// Load and validate `lexicon.bin`.
///
/// Beyond the structural decode, this enforces what the search side relies
/// on: terms strictly ascending (hence unique) and every count nonzero.
/// Offset bounds against the postings payload are checked by the index
/// loader, which is the first place both files meet.
pub fn load_lexicon(path: &Path) -> io::Result<Vec<LexiconEntry>> {
    let bytes = std::fs::read(path)?;
    let mut r = ByteReader::new(&bytes);
    check_header(&mut r, LEXICON_MAGIC, "lexicon.bin")?;
    let term_count = r.read_u32("term_count")?;

    let mut entries: Vec<LexiconEntry> = Vec::with_capacity(term_count as usize);
    for i in 0..term_count {
        let term_len = r.read_u16("term_len")? as usize;
        let term_bytes = r.take(term_len, "term bytes")?;
        let term = std::str::from_utf8(term_bytes)
            .map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("lexicon.bin: term {} is not valid UTF-8", i),
                )
            })?
            .to_owned();
        let postings_offset = r.read_u64("postings_offset")?;
        let postings_count = r.read_u32("postings_count")?;

        if postings_count == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("lexicon.bin: term '{}' has an empty posting list", term),
            ));
        }
        if let Some(prev) = entries.last() {
            if prev.term.as_bytes() >= term.as_bytes() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "lexicon.bin: terms out of order at {} ('{}' then '{}')",
                        i, prev.term, term
                    ),
                ));
            }
        }

        entries.push(LexiconEntry {
            term,
            postings_offset,
            postings_count,
        });
    }

    if r.remaining() != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "lexicon.bin: {} trailing bytes after {} terms",
                r.remaining(),
                term_count
            ),
        ));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(term: &str, postings_offset: u64, postings_count: u32) -> LexiconEntry {
        LexiconEntry {
            term: term.to_owned(),
            postings_offset,
            postings_count,
        }
    }

    #[test]
    fn roundtrips_sorted_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.bin");
        let entries = vec![entry("brown", 0, 1), entry("fox", 4, 3), entry("quick", 16, 2)];
        write_lexicon(&path, &entries).unwrap();
        assert_eq!(load_lexicon(&path).unwrap(), entries);
    }

    #[test]
    fn load_rejects_out_of_order_terms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.bin");
        // Bypass the writer's debug_assert by writing records by hand.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&LEXICON_MAGIC.to_le_bytes());
        bytes.extend_from_slice(&VERSION.to_le_bytes());
        bytes.extend_from_slice(&2u32.to_le_bytes());
        for term in ["fox", "brown"] {
            bytes.extend_from_slice(&(term.len() as u16).to_le_bytes());
            bytes.extend_from_slice(term.as_bytes());
            bytes.extend_from_slice(&0u64.to_le_bytes());
            bytes.extend_from_slice(&1u32.to_le_bytes());
        }
        std::fs::write(&path, bytes).unwrap();
        let err = load_lexicon(&path).unwrap_err();
        assert!(err.to_string().contains("out of order"));
    }

    #[test]
    fn load_rejects_empty_posting_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.bin");
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&LEXICON_MAGIC.to_le_bytes());
        bytes.extend_from_slice(&VERSION.to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&3u16.to_le_bytes());
        bytes.extend_from_slice(b"fox");
        bytes.extend_from_slice(&0u64.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        std::fs::write(&path, bytes).unwrap();
        let err = load_lexicon(&path).unwrap_err();
        assert!(err.to_string().contains("empty posting list"));
    }
}
