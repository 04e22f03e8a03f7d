//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text string before it reaches the
//! tokenizer. The only filter this crate ships is [`MarkupStripCharFilter`],
//! which removes angle-bracket markup and un-escapes the `&amp;` entity.

use std::sync::LazyLock;

use regex::Regex;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup pattern is valid"));

/// A filter that strips `<...>` markup sequences and un-escapes `&amp;`.
///
/// An unterminated `<` run is left in place; only complete bracketed
/// sequences are removed.
///
/// # Examples
///
/// ```
/// use pilum::analysis::char_filter::{CharFilter, MarkupStripCharFilter};
///
/// let filter = MarkupStripCharFilter::new();
/// assert_eq!(filter.filter("<b>cats &amp; dogs</b>"), "cats & dogs");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MarkupStripCharFilter;

impl MarkupStripCharFilter {
    /// Create a new markup strip filter.
    pub fn new() -> Self {
        MarkupStripCharFilter
    }
}

impl CharFilter for MarkupStripCharFilter {
    fn filter(&self, input: &str) -> String {
        let stripped = MARKUP.replace_all(input, "");
        stripped.replace("&amp;", "&")
    }

    fn name(&self) -> &'static str {
        "markup_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup() {
        let filter = MarkupStripCharFilter::new();
        assert_eq!(filter.filter("<p>hello <em>world</em></p>"), "hello world");
    }

    #[test]
    fn test_unescapes_amp() {
        let filter = MarkupStripCharFilter::new();
        assert_eq!(filter.filter("fish &amp; chips"), "fish & chips");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let filter = MarkupStripCharFilter::new();
        assert_eq!(filter.filter("no markup here"), "no markup here");
    }

    #[test]
    fn test_unterminated_bracket_kept() {
        let filter = MarkupStripCharFilter::new();
        assert_eq!(filter.filter("a < b"), "a < b");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(MarkupStripCharFilter::new().name(), "markup_strip");
    }
}
