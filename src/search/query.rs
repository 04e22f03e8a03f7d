//! Query types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PilumError, Result};

/// How candidate documents are selected and scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// A document matches if it contains at least one query term.
    Match,
    /// A document matches if the query terms occur adjacently, in order,
    /// in its analyzed term sequence.
    MatchPhrase,
    /// Same candidates as [`Match`](Self::Match), with a fixed field boost
    /// applied to the score.
    MultiMatch,
}

impl QueryMode {
    /// Get the configuration name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            QueryMode::Match => "match",
            QueryMode::MatchPhrase => "match_phrase",
            QueryMode::MultiMatch => "multi_match",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QueryMode {
    type Err = PilumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "match" => Ok(QueryMode::Match),
            "match_phrase" => Ok(QueryMode::MatchPhrase),
            "multi_match" => Ok(QueryMode::MultiMatch),
            other => Err(PilumError::query(format!(
                "unknown query mode: {other} (expected match, match_phrase, or multi_match)"
            ))),
        }
    }
}

/// A search request: raw query text plus the evaluation mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Raw query text; analyzed with the index's analyzer at search time.
    pub text: String,
    /// Candidate selection and scoring mode.
    pub mode: QueryMode,
}

impl Query {
    /// Create a new query.
    pub fn new<S: Into<String>>(text: S, mode: QueryMode) -> Self {
        Query {
            text: text.into(),
            mode,
        }
    }
}
