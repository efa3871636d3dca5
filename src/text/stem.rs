//! Light suffix stemming.
//!
//! Eight ordered rules, first match wins. The table is deliberately small
//! and ASCII-only; it is not a linguistic stemmer, it is the collapse
//! function the index was built with, and the query side must apply the
//! exact same table or lookups silently miss. Keep the ordering: `ingly`
//! must be tried before `ing`, `ies` before `es`, `es`/`ly` before the
//! bare `s` rule.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Stem a single token.
///
/// Tokens of length 2 or less are returned untouched. Lengths are byte
/// lengths; callers feed ASCII-only tokens.
pub fn stem(token: &str) -> String {
    let n = token.len();
    if n <= 2 {
        return token.to_owned();
    }
    if n > 5 && token.ends_with("ingly") {
        return token[..n - 5].to_owned();
    }
    if n > 4 && token.ends_with("edly") {
        return token[..n - 4].to_owned();
    }
    if n > 4 && token.ends_with("ing") {
        return token[..n - 3].to_owned();
    }
    if n > 3 && token.ends_with("ed") {
        return token[..n - 2].to_owned();
    }
    if n > 4 && token.ends_with("ies") {
        let mut out = String::with_capacity(n - 2);
        out.push_str(&token[..n - 3]);
        out.push('y');
        return out;
    }
    if n > 3 && token.ends_with("es") {
        return token[..n - 2].to_owned();
    }
    if n > 3 && token.ends_with("ly") {
        return token[..n - 2].to_owned();
    }
    if n > 3 && token.as_bytes()[n - 1] == b's' {
        return token[..n - 1].to_owned();
    }
    token.to_owned()
}

/// Counters reported by the offline stemming pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct StemStats {
    pub documents: u64,
    pub tokens: u64,
}

impl std::fmt::Display for StemStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "documents={}", self.documents)?;
        writeln!(f, "tokens={}", self.tokens)
    }
}

/// Stream `tokenized.txt` to `stemmed.txt`, stemming every token.
///
/// Lines keep their `doc_id \t` prefix; tokens are whitespace-separated.
/// Lines without a tab separator are skipped; tokens that stem to nothing
/// are dropped.
pub fn run_stemmer(input: &Path, output: &Path) -> io::Result<StemStats> {
    let reader = BufReader::new(File::open(input)?);
    let mut out = BufWriter::new(File::create(output)?);
    let mut stats = StemStats::default();

    for line in reader.lines() {
        let line = line?;
        let Some((doc_id, body)) = line.split_once('\t') else {
            continue;
        };

        out.write_all(doc_id.as_bytes())?;
        out.write_all(b"\t")?;
        let mut first = true;
        for token in body.split_whitespace() {
            let stemmed = stem(token);
            if stemmed.is_empty() {
                continue;
            }
            if !first {
                out.write_all(b" ")?;
            }
            out.write_all(stemmed.as_bytes())?;
            first = false;
            stats.tokens += 1;
        }
        out.write_all(b"\n")?;
        stats.documents += 1;
    }

    out.flush()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_tokens_are_untouched() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("a"), "a");
        assert_eq!(stem("is"), "is");
        assert_eq!(stem("ies"), "ies");
    }

    #[test]
    fn rule_table_in_order() {
        // One case per rule, in table order.
        assert_eq!(stem("amazingly"), "amaz"); // ingly
        assert_eq!(stem("markedly"), "mark"); // edly
        assert_eq!(stem("running"), "runn"); // ing
        assert_eq!(stem("jumped"), "jump"); // ed
        assert_eq!(stem("berries"), "berry"); // ies -> y
        assert_eq!(stem("foxes"), "fox"); // es
        assert_eq!(stem("quickly"), "quick"); // ly
        assert_eq!(stem("dogs"), "dog"); // s
        assert_eq!(stem("fox"), "fox"); // no rule
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        // "ingly" beats "ing" and "ly".
        assert_eq!(stem("singly"), "s");
        // "ed" is tried before "ies", so nothing odd happens to "died"
        // ("died" matches ed, not ies).
        assert_eq!(stem("died"), "di");
        // "es" beats the bare "s" rule.
        assert_eq!(stem("wishes"), "wish");
    }

    #[test]
    fn length_preconditions_hold_at_the_boundary() {
        // len == 5 is too short for "ingly" (needs > 5); falls to "ly"? No:
        // "ingly" itself then matches "ing"? len 5 > 4, ends with... "gly",
        // no. It ends with "ly": stripped to "ing".
        assert_eq!(stem("ingly"), "ing");
        // len == 4 too short for "edly" (needs > 4); "ly" rule needs > 3,
        // so "edly" -> "ed".
        assert_eq!(stem("edly"), "ed");
        // len == 3 never stems even with a trailing s.
        assert_eq!(stem("its"), "its");
        // len == 4 with trailing s stems.
        assert_eq!(stem("cats"), "cat");
    }

    #[test]
    fn lazy_is_not_an_ies_case() {
        assert_eq!(stem("lazy"), "lazy");
    }
}
