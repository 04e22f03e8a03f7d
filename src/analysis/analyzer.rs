//! Analyzer pipelines.
//!
//! An [`Analyzer`] converts raw text into an ordered sequence of normalized
//! terms by running char filters, a tokenizer, and token filters in a fixed
//! order:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Tokens
//! ```
//!
//! The set of pipelines is closed: [`AnalyzerKind`] enumerates the four
//! named configurations, and each variant builds its fixed stage list.
//! Analysis is pure and deterministic — identical input and configuration
//! always produce the identical token sequence.
//!
//! # Examples
//!
//! ```
//! use pilum::analysis::analyzer::{Analyzer, AnalyzerKind};
//!
//! let analyzer = Analyzer::new(AnalyzerKind::Standard);
//! let terms = analyzer.terms("The Quick Brown FOX-123!").unwrap();
//!
//! assert_eq!(terms, ["the", "quick", "brown", "fox", "123"]);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{CharFilter, MarkupStripCharFilter};
use crate::analysis::token::Token;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter, SuffixStemFilter, TokenFilter};
use crate::analysis::tokenizer::{
    StandardTokenizer, Tokenizer, WhitespaceTokenizer, WholeTokenizer,
};
use crate::error::{PilumError, Result};

/// The closed set of analyzer pipelines.
///
/// - `Standard`: split on whitespace and punctuation, then lowercase.
/// - `Whitespace`: split on whitespace only, no case folding.
/// - `Keyword`: the entire input becomes exactly one unmodified term
///   (a single empty term when the input is empty).
/// - `Custom`: markup strip, standard tokenization, lowercase, stop word
///   removal, suffix stemming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    Standard,
    Whitespace,
    Keyword,
    Custom,
}

impl AnalyzerKind {
    /// Get the configuration name of this pipeline.
    pub fn name(&self) -> &'static str {
        match self {
            AnalyzerKind::Standard => "standard",
            AnalyzerKind::Whitespace => "whitespace",
            AnalyzerKind::Keyword => "keyword",
            AnalyzerKind::Custom => "custom",
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnalyzerKind {
    type Err = PilumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(AnalyzerKind::Standard),
            "whitespace" => Ok(AnalyzerKind::Whitespace),
            "keyword" => Ok(AnalyzerKind::Keyword),
            "custom" => Ok(AnalyzerKind::Custom),
            other => Err(PilumError::config(format!(
                "unknown analyzer: {other} (expected standard, whitespace, keyword, or custom)"
            ))),
        }
    }
}

/// Token snapshot taken after one pipeline stage, for explanatory output.
///
/// For char filter stages `terms` holds the filtered text as a single
/// entry; for tokenizer and token filter stages it holds the token texts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StageTrace {
    /// Stage category: `char_filter`, `tokenizer`, or `token_filter`.
    pub stage: &'static str,
    /// The stage's own name, e.g. `lowercase`.
    pub name: &'static str,
    /// Text state after this stage ran.
    pub terms: Vec<String>,
}

/// A text analysis pipeline.
#[derive(Clone)]
pub struct Analyzer {
    kind: AnalyzerKind,
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    token_filters: Vec<Arc<dyn TokenFilter>>,
}

impl Analyzer {
    /// Create the analyzer for the given pipeline kind.
    pub fn new(kind: AnalyzerKind) -> Self {
        let mut char_filters: Vec<Arc<dyn CharFilter>> = Vec::new();
        let mut token_filters: Vec<Arc<dyn TokenFilter>> = Vec::new();

        let tokenizer: Arc<dyn Tokenizer> = match kind {
            AnalyzerKind::Standard => {
                token_filters.push(Arc::new(LowercaseFilter::new()));
                Arc::new(StandardTokenizer::new())
            }
            AnalyzerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            AnalyzerKind::Keyword => Arc::new(WholeTokenizer::new()),
            AnalyzerKind::Custom => {
                char_filters.push(Arc::new(MarkupStripCharFilter::new()));
                token_filters.push(Arc::new(LowercaseFilter::new()));
                token_filters.push(Arc::new(StopFilter::new()));
                token_filters.push(Arc::new(SuffixStemFilter::new()));
                Arc::new(StandardTokenizer::new())
            }
        };

        Analyzer {
            kind,
            char_filters,
            tokenizer,
            token_filters,
        }
    }

    /// Get the pipeline kind of this analyzer.
    pub fn kind(&self) -> AnalyzerKind {
        self.kind
    }

    /// Analyze the given text, returning the final token sequence.
    pub fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text);
        }

        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;
        for filter in &self.token_filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens.collect())
    }

    /// Analyze the given text, returning the term strings only.
    pub fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.into_iter().map(|t| t.text).collect())
    }

    /// Analyze the given text, capturing a snapshot after every stage.
    ///
    /// The final entry's terms equal the output of [`terms`](Self::terms)
    /// for the same input.
    pub fn trace(&self, text: &str) -> Result<Vec<StageTrace>> {
        let mut stages = Vec::new();

        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text);
            stages.push(StageTrace {
                stage: "char_filter",
                name: char_filter.name(),
                terms: vec![filtered_text.clone()],
            });
        }

        let mut tokens: Vec<Token> = self.tokenizer.tokenize(&filtered_text)?.collect();
        stages.push(StageTrace {
            stage: "tokenizer",
            name: self.tokenizer.name(),
            terms: tokens.iter().map(|t| t.text.clone()).collect(),
        });

        for filter in &self.token_filters {
            tokens = filter.filter(Box::new(tokens.into_iter()))?.collect();
            stages.push(StageTrace {
                stage: "token_filter",
                name: filter.name(),
                terms: tokens.iter().map(|t| t.text.clone()).collect(),
            });
        }

        Ok(stages)
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("kind", &self.kind)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self.char_filters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field(
                "token_filters",
                &self
                    .token_filters
                    .iter()
                    .map(|t| t.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
