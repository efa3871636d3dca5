//! Raw corpus records: `doc_id \t source \t url \t title \t text`.

/// A borrowed view of one `raw_text.tsv` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub doc_id: &'a str,
    pub source: &'a str,
    pub url: &'a str,
    pub title: &'a str,
    /// Everything after the fourth tab, including any further tabs.
    pub text: &'a str,
}

/// Split a corpus line into its five columns.
///
/// Returns `None` when any of the first four tab separators is missing;
/// such records are skipped by every consumer. Fields may be empty.
pub fn split_record(line: &str) -> Option<RawRecord<'_>> {
    let mut cols = line.splitn(5, '\t');
    let doc_id = cols.next()?;
    let source = cols.next()?;
    let url = cols.next()?;
    let title = cols.next()?;
    let text = cols.next()?;
    Some(RawRecord {
        doc_id,
        source,
        url,
        title,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_five_columns() {
        let r = split_record("12\twiki\thttp://u/12\tAlpha\tsome text here").unwrap();
        assert_eq!(r.doc_id, "12");
        assert_eq!(r.source, "wiki");
        assert_eq!(r.url, "http://u/12");
        assert_eq!(r.title, "Alpha");
        assert_eq!(r.text, "some text here");
    }

    #[test]
    fn missing_separators_reject_the_record() {
        assert!(split_record("12").is_none());
        assert!(split_record("12\twiki").is_none());
        assert!(split_record("12\twiki\turl\ttitle").is_none());
    }

    #[test]
    fn text_keeps_extra_tabs() {
        let r = split_record("1\ts\tu\tt\ta\tb\tc").unwrap();
        assert_eq!(r.text, "a\tb\tc");
    }

    #[test]
    fn fields_may_be_empty() {
        let r = split_record("\t\t\t\t").unwrap();
        assert_eq!(r.doc_id, "");
        assert_eq!(r.text, "");
    }
}
