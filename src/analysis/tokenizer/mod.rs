//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod standard;
pub mod whitespace;
pub mod whole;

// Re-export all tokenizers for convenient access
pub use standard::StandardTokenizer;
pub use whitespace::WhitespaceTokenizer;
pub use whole::WholeTokenizer;
