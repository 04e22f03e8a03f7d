//! Suffix-stripping stem filter implementation.
//!
//! This is a heuristic stemmer, not a linguistic one: it strips a single
//! common English suffix per term, trying a fixed list of rules in priority
//! order and stopping at the first match.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// Stem a word by applying at most one suffix rule.
///
/// Rules are tried in order; the first that applies wins:
///
/// 1. `ing` is stripped
/// 2. `tion` becomes `t`
/// 3. `ly` is stripped
/// 4. trailing `es` is stripped
/// 5. trailing `ed` is stripped
/// 6. a trailing `s` that is not part of a double-`s` ending is stripped
///
/// Words matching no rule are returned unchanged.
///
/// # Examples
///
/// ```
/// use pilum::analysis::token_filter::stem::stem;
///
/// assert_eq!(stem("jumping"), "jump");
/// assert_eq!(stem("action"), "act");
/// assert_eq!(stem("quickly"), "quick");
/// assert_eq!(stem("foxes"), "fox");
/// assert_eq!(stem("jumped"), "jump");
/// assert_eq!(stem("rabbits"), "rabbit");
/// assert_eq!(stem("glass"), "glass");
/// ```
pub fn stem(word: &str) -> String {
    if let Some(base) = word.strip_suffix("ing") {
        return base.to_string();
    }
    if let Some(base) = word.strip_suffix("tion") {
        return format!("{base}t");
    }
    if let Some(base) = word.strip_suffix("ly") {
        return base.to_string();
    }
    if let Some(base) = word.strip_suffix("es") {
        return base.to_string();
    }
    if let Some(base) = word.strip_suffix("ed") {
        return base.to_string();
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// A filter that applies the suffix-stripping stemmer to every token.
///
/// Tokens whose stem is empty (the word was nothing but a suffix, e.g.
/// "ing") are removed from the stream.
#[derive(Clone, Debug, Default)]
pub struct SuffixStemFilter;

impl SuffixStemFilter {
    /// Create a new suffix stem filter.
    pub fn new() -> Self {
        SuffixStemFilter
    }
}

impl TokenFilter for SuffixStemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|token| {
                let stemmed = stem(&token.text);
                token.with_text(stemmed)
            })
            .filter(|token| !token.is_empty())
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "suffix_stem"
    }
}
