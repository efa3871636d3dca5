// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `forward.bin`: doc_id → (title, url) metadata.
//!
//! Records are emitted in ascending doc_id order, which makes this file do
//! double duty: it decorates results, and its id column IS the universe the
//! NOT operator complements against. The loader therefore enforces strict
//! ascending order and rejects doc_id 0 (reserved as "absent").

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::{check_header, clamp_field, ByteReader, FORWARD_MAGIC, VERSION};

/// One forward record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardEntry {
    pub doc_id: u32,
    pub title: String,
    pub url: String,
}

/// A decoded forward file.
#[derive(Debug, Clone)]
pub struct ForwardFile {
    pub max_doc_id: u32,
    /// Records in ascending doc_id order.
    pub entries: Vec<ForwardEntry>,
}

/// Write `forward.bin`. Entries must already be ascending by doc_id;
/// titles and URLs longer than a u16 length prefix allows are truncated.
pub fn write_forward(path: &Path, entries: &[ForwardEntry]) -> io::Result<()> {
    debug_assert!(entries.windows(2).all(|w| w[0].doc_id < w[1].doc_id));

    let max_doc_id = entries.last().map_or(0, |e| e.doc_id);
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    out.write_all(&FORWARD_MAGIC.to_le_bytes())?;
    out.write_all(&VERSION.to_le_bytes())?;
    out.write_all(&(entries.len() as u32).to_le_bytes())?;
    out.write_all(&max_doc_id.to_le_bytes())?;
    for entry in entries {
        let title = clamp_field(&entry.title);
        let url = clamp_field(&entry.url);
        out.write_all(&entry.doc_id.to_le_bytes())?;
        out.write_all(&(title.len() as u16).to_le_bytes())?;
        out.write_all(&(url.len() as u16).to_le_bytes())?;
        out.write_all(title.as_bytes())?;
        out.write_all(url.as_bytes())?;
    }
    out.flush()
}

/// Load and validate `forward.bin`.
pub fn load_forward(path: &Path) -> io::Result<ForwardFile> {
    let bytes = std::fs::read(path)?;
    let mut r = ByteReader::new(&bytes);
    check_header(&mut r, FORWARD_MAGIC, "forward.bin")?;
    let doc_count = r.read_u32("doc_count")?;
    let max_doc_id = r.read_u32("max_doc_id")?;

    let mut entries = Vec::with_capacity(doc_count as usize);
    let mut prev_id = 0u32;
    for _ in 0..doc_count {
        let doc_id = r.read_u32("doc_id")?;
        let title_len = r.read_u16("title_len")? as usize;
        let url_len = r.read_u16("url_len")? as usize;
        let title = decode_str(r.take(title_len, "title bytes")?, doc_id, "title")?;
        let url = decode_str(r.take(url_len, "url bytes")?, doc_id, "url")?;

        if doc_id == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "forward.bin: doc_id 0 is reserved",
            ));
        }
        if doc_id <= prev_id && prev_id != 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "forward.bin: doc_ids out of order ({} then {})",
                    prev_id, doc_id
                ),
            ));
        }
        if doc_id > max_doc_id {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "forward.bin: doc_id {} exceeds declared max {}",
                    doc_id, max_doc_id
                ),
            ));
        }
        prev_id = doc_id;
        entries.push(ForwardEntry { doc_id, title, url });
    }

    if r.remaining() != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "forward.bin: {} trailing bytes after {} records",
                r.remaining(),
                doc_count
            ),
        ));
    }
    Ok(ForwardFile {
        max_doc_id,
        entries,
    })
}

fn decode_str(bytes: &[u8], doc_id: u32, what: &str) -> io::Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("forward.bin: {} of doc {} is not valid UTF-8", what, doc_id),
            )
        })
}
