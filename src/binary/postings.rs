// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `postings.bin`: the concatenated posting lists.
//!
//! The payload is nothing but u32 doc_ids back to back; the lexicon carries
//! the per-term byte offsets into it. The header declares the total u32
//! count up front, which makes truncation detectable without any footer:
//! the payload must be exactly `total * 4` bytes.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::{check_header, ByteReader, POSTINGS_MAGIC, VERSION};

/// Streaming writer for `postings.bin`.
///
/// The total posting count must be known up front (the builder has every
/// list in memory by the time it writes), so the header is written once and
/// never patched. `append` returns the byte offset of the list it just
/// wrote, relative to the end of the header, which is exactly the value the
/// lexicon records.
pub struct PostingsWriter {
    out: BufWriter<File>,
    declared_total: u64,
    written: u64,
    offset_bytes: u64,
}

impl PostingsWriter {
    pub fn create(path: &Path, total_postings: u64) -> io::Result<Self> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        out.write_all(&POSTINGS_MAGIC.to_le_bytes())?;
        out.write_all(&VERSION.to_le_bytes())?;
        out.write_all(&total_postings.to_le_bytes())?;
        Ok(Self {
            out,
            declared_total: total_postings,
            written: 0,
            offset_bytes: 0,
        })
    }

    /// Append one term's posting list; returns its payload byte offset.
    pub fn append(&mut self, doc_ids: &[u32]) -> io::Result<u64> {
        let offset = self.offset_bytes;
        for &id in doc_ids {
            self.out.write_all(&id.to_le_bytes())?;
        }
        self.written += doc_ids.len() as u64;
        self.offset_bytes += doc_ids.len() as u64 * 4;
        Ok(offset)
    }

    /// Flush and verify that exactly the declared number of ids was written.
    pub fn finish(mut self) -> io::Result<()> {
        if self.written != self.declared_total {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "postings.bin: wrote {} ids but header declares {}",
                    self.written, self.declared_total
                ),
            ));
        }
        self.out.flush()
    }
}

/// Load the full postings payload into memory.
///
/// The returned vector holds `total_postings` doc_ids in file order; a file
/// whose payload is shorter or longer than the header declares is rejected.
pub fn load_postings(path: &Path) -> io::Result<Vec<u32>> {
    let bytes = std::fs::read(path)?;
    let mut r = ByteReader::new(&bytes);
    check_header(&mut r, POSTINGS_MAGIC, "postings.bin")?;
    let total = r.read_u64("total_postings")?;

    let payload_len = total
        .checked_mul(4)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("postings.bin: absurd total_postings {}", total),
            )
        })?;
    if r.remaining() != payload_len {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "postings.bin: header declares {} ids ({} bytes) but payload is {} bytes",
                total,
                payload_len,
                r.remaining()
            ),
        ));
    }

    let payload = r.take(payload_len, "posting ids")?;
    let ids = payload
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_lists(dir: &tempfile::TempDir, lists: &[&[u32]]) -> std::path::PathBuf {
        let path = dir.path().join("postings.bin");
        let total = lists.iter().map(|l| l.len() as u64).sum();
        let mut w = PostingsWriter::create(&path, total).unwrap();
        let mut expected_offset = 0u64;
        for list in lists {
            let offset = w.append(list).unwrap();
            assert_eq!(offset, expected_offset);
            expected_offset += list.len() as u64 * 4;
        }
        w.finish().unwrap();
        path
    }

    #[test]
    fn writes_and_loads_concatenated_lists() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lists(&dir, &[&[1, 5, 9], &[2], &[1, 2, 3, 4]]);
        let ids = load_postings(&path).unwrap();
        assert_eq!(ids, vec![1, 5, 9, 2, 1, 2, 3, 4]);
    }

    #[test]
    fn finish_rejects_undeclared_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postings.bin");
        let mut w = PostingsWriter::create(&path, 5).unwrap();
        w.append(&[1, 2]).unwrap();
        assert!(w.finish().is_err());
    }

    #[test]
    fn load_rejects_truncated_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lists(&dir, &[&[1, 2, 3]]);
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() - 2]).unwrap();
        let err = load_postings(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn load_rejects_wrong_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postings.bin");
        std::fs::write(&path, b"LEXI\x01\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00").unwrap();
        let err = load_postings(&path).unwrap_err();
        assert!(err.to_string().contains("invalid magic"));
    }
}
