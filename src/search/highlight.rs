//! Matched-term span extraction.
//!
//! Locates whole-word, case-insensitive occurrences of matched terms inside
//! a document's raw text and returns their byte spans. Rendering (markup,
//! ellipsis, snippets) is left entirely to the caller.

use serde::Serialize;

/// One located occurrence of a matched term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    /// Byte offset where the occurrence starts.
    pub start: usize,
    /// Byte offset just past the occurrence.
    pub end: usize,
    /// The matched term, as queried (lowercase).
    pub term: String,
}

fn is_word_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Find all whole-word occurrences of `terms` in `text`, case-insensitive.
///
/// Spans are returned in text order. Overlapping occurrences keep the
/// earliest span; within equal starts the longest term wins.
///
/// # Examples
///
/// ```
/// use pilum::search::highlight::match_spans;
///
/// let spans = match_spans("The quick fox", &["quick".to_string()]);
/// assert_eq!(spans.len(), 1);
/// assert_eq!((spans[0].start, spans[0].end), (4, 9));
/// ```
pub fn match_spans(text: &str, terms: &[String]) -> Vec<MatchSpan> {
    let bytes = text.as_bytes();
    let mut spans: Vec<MatchSpan> = Vec::new();

    for term in terms {
        if term.is_empty() {
            continue;
        }
        let term_bytes = term.as_bytes();
        let mut from = 0;
        while from + term_bytes.len() <= bytes.len() {
            let end = from + term_bytes.len();
            let matches = bytes[from..end].eq_ignore_ascii_case(term_bytes)
                && (from == 0 || !is_word_char(bytes[from - 1]))
                && (end == bytes.len() || !is_word_char(bytes[end]));
            if matches {
                spans.push(MatchSpan {
                    start: from,
                    end,
                    term: term.clone(),
                });
                from = end;
            } else {
                from += 1;
            }
        }
    }

    spans.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.end.cmp(&a.end))
            .then_with(|| a.term.cmp(&b.term))
    });
    spans.dedup_by(|next, kept| next.start < kept.end);
    spans
}
