//! BM25 scoring.
//!
//! Implements the BM25 term weighting used by the ranker:
//!
//! ```text
//! score(D, Q) = Σ_{t in Q} idf(t) · (f(t,D) · (k1 + 1))
//!                          / (f(t,D) + k1 · (1 − b + b · |D| / avgdl))
//! idf(t)      = ln((N − df(t) + 0.5) / (df(t) + 0.5) + 1)
//! ```
//!
//! The `+ 1` inside the logarithm keeps idf positive even for terms present
//! in most documents.

use serde::{Deserialize, Serialize};

/// Default term frequency saturation parameter.
pub const DEFAULT_K1: f64 = 1.2;

/// Default document length normalization parameter.
pub const DEFAULT_B: f64 = 0.75;

/// Tunable BM25 parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Term frequency saturation (`k1`). Higher values let repeated terms
    /// keep increasing the score for longer.
    pub k1: f64,
    /// Length normalization strength (`b`), from 0 (none) to 1 (full).
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params {
            k1: DEFAULT_K1,
            b: DEFAULT_B,
        }
    }
}

/// Inverse document frequency of a term.
pub fn idf(doc_count: usize, doc_frequency: usize) -> f64 {
    let n = doc_count as f64;
    let df = doc_frequency as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

/// One term's BM25 contribution to a document's score.
///
/// `avg_doc_length` must be non-zero; the searcher guarantees this by
/// skipping scoring entirely for an empty index.
pub fn term_score(
    term_frequency: u32,
    doc_length: usize,
    avg_doc_length: f64,
    idf: f64,
    params: &Bm25Params,
) -> f64 {
    if term_frequency == 0 {
        return 0.0;
    }
    let tf = term_frequency as f64;
    let norm = 1.0 - params.b + params.b * (doc_length as f64 / avg_doc_length);
    idf * (tf * (params.k1 + 1.0)) / (tf + params.k1 * norm)
}
