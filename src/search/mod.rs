//! Query evaluation, BM25 ranking, and matched-term highlighting.

pub mod highlight;
pub mod query;
pub mod scoring;
pub mod searcher;

pub use highlight::{MatchSpan, match_spans};
pub use query::{Query, QueryMode};
pub use scoring::{Bm25Params, DEFAULT_B, DEFAULT_K1};
pub use searcher::{MULTI_MATCH_BOOST, PHRASE_BONUS, ScoredHit, search};
