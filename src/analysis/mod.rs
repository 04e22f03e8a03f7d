//! Text analysis pipeline: char filters, tokenizers, and token filters
//! composed into the named [`analyzer::Analyzer`] pipelines.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, AnalyzerKind, StageTrace};
pub use token::{Token, TokenStream};
