//! Tokenization of raw corpus text.
//!
//! A token is a maximal run of ASCII alphanumerics, lowercased. Everything
//! else, including any non-ASCII byte, is a separator.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use super::tsv::split_record;

/// Split `text` into lowercased ASCII-alphanumeric tokens.
pub fn tokenize_text(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for &b in text.as_bytes() {
        if b.is_ascii_alphanumeric() {
            current.push(b.to_ascii_lowercase() as char);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Counters reported by the tokenizing pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizeStats {
    pub documents: u64,
    pub tokens: u64,
    pub token_length_sum: u64,
    pub input_bytes: u64,
    pub elapsed_seconds: f64,
}

impl TokenizeStats {
    pub fn avg_token_length(&self) -> f64 {
        if self.tokens == 0 {
            0.0
        } else {
            self.token_length_sum as f64 / self.tokens as f64
        }
    }

    pub fn seconds_per_kb(&self) -> f64 {
        let kb = self.input_bytes as f64 / 1024.0;
        if kb > 0.0 {
            self.elapsed_seconds / kb
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for TokenizeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "documents={}", self.documents)?;
        writeln!(f, "tokens={}", self.tokens)?;
        writeln!(f, "avg_token_length={}", self.avg_token_length())?;
        writeln!(f, "elapsed_seconds={}", self.elapsed_seconds)?;
        writeln!(f, "seconds_per_kb={}", self.seconds_per_kb())
    }
}

/// Stream `raw_text.tsv` to `tokenized.txt`.
///
/// Records missing any of the first four tab separators, with an empty
/// doc_id, with empty text, or with no surviving tokens are skipped
/// silently. Output is one line per accepted document:
/// `doc_id \t tok1 SP tok2 …`.
pub fn run_tokenizer(input: &Path, output: &Path) -> io::Result<TokenizeStats> {
    let reader = BufReader::new(File::open(input)?);
    let mut out = BufWriter::new(File::create(output)?);
    let started = Instant::now();
    let mut stats = TokenizeStats::default();

    for line in reader.lines() {
        let line = line?;
        stats.input_bytes += line.len() as u64 + 1;
        if line.is_empty() {
            continue;
        }
        let Some(record) = split_record(&line) else {
            continue;
        };
        if record.doc_id.is_empty() || record.text.is_empty() {
            continue;
        }
        let tokens = tokenize_text(record.text);
        if tokens.is_empty() {
            continue;
        }

        stats.documents += 1;
        out.write_all(record.doc_id.as_bytes())?;
        out.write_all(b"\t")?;
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                out.write_all(b" ")?;
            }
            out.write_all(token.as_bytes())?;
            stats.tokens += 1;
            stats.token_length_sum += token.len() as u64;
        }
        out.write_all(b"\n")?;
    }

    out.flush()?;
    stats.elapsed_seconds = started.elapsed().as_secs_f64();
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_non_alnum() {
        assert_eq!(
            tokenize_text("The quick-brown FOX, v2!"),
            vec!["the", "quick", "brown", "fox", "v2"]
        );
    }

    #[test]
    fn non_ascii_bytes_are_separators() {
        assert_eq!(tokenize_text("caféau lait"), vec!["caf", "au", "lait"]);
        assert_eq!(tokenize_text("日本語"), Vec::<String>::new());
    }

    #[test]
    fn empty_and_symbol_only_text_yields_nothing() {
        assert!(tokenize_text("").is_empty());
        assert!(tokenize_text("--- !!! ---").is_empty());
    }
}
