//! Standard tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Punctuation characters treated as token separators, in addition to
/// whitespace.
const SEPARATORS: &[char] = &[
    '-', '_', '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}',
];

/// A tokenizer that splits text on runs of whitespace and common
/// punctuation.
///
/// Empty fragments (produced by consecutive separators) are discarded.
///
/// # Examples
///
/// ```
/// use pilum::analysis::token::Token;
/// use pilum::analysis::tokenizer::{StandardTokenizer, Tokenizer};
///
/// let tokenizer = StandardTokenizer::new();
/// let tokens: Vec<Token> = tokenizer.tokenize("FOX-123!").unwrap().collect();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "FOX");
/// assert_eq!(tokens[1].text, "123");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StandardTokenizer;

impl StandardTokenizer {
    /// Create a new standard tokenizer.
    pub fn new() -> Self {
        StandardTokenizer
    }

    fn is_separator(c: char) -> bool {
        c.is_whitespace() || SEPARATORS.contains(&c)
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            if Self::is_separator(c) {
                if let Some(word_start) = start.take() {
                    tokens.push(Token::with_offsets(
                        &text[word_start..offset],
                        position,
                        word_start,
                        offset,
                    ));
                    position += 1;
                }
            } else if start.is_none() {
                start = Some(offset);
            }
        }
        if let Some(word_start) = start {
            tokens.push(Token::with_offsets(
                &text[word_start..],
                position,
                word_start,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
