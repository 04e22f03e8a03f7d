//! Search engine service surface.
//!
//! [`SearchEngine`] owns a corpus and its inverted index as one immutable
//! [`Snapshot`] behind an `RwLock<Arc<..>>`. Mutations run one writer at a
//! time: the writer derives the next corpus, rebuilds the index, and
//! publishes a new snapshot atomically on success. Readers clone the `Arc`
//! and compute on a self-consistent snapshot without holding the lock, so
//! an in-flight search never observes a partially updated index.
//!
//! # Examples
//!
//! ```
//! use pilum::analysis::AnalyzerKind;
//! use pilum::engine::SearchEngine;
//! use pilum::search::QueryMode;
//!
//! let engine = SearchEngine::new(AnalyzerKind::Standard);
//! engine.add_document("the quick brown fox").unwrap();
//! engine.add_document("lazy turtles").unwrap();
//!
//! let hits = engine.search("quick fox", QueryMode::Match).unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].doc_id, 1);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::analysis::{Analyzer, AnalyzerKind};
use crate::corpus::{Corpus, Document};
use crate::error::Result;
use crate::fuzzy::{EditDistanceReport, FuzzyMatch, edit_distance, fuzzy_match};
use crate::index::InvertedIndex;
use crate::search::{Bm25Params, Query, QueryMode, ScoredHit, search};

/// An immutable corpus + index pair, always internally consistent.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    /// The documents as of this snapshot.
    pub corpus: Corpus,
    /// The index built from exactly those documents.
    pub index: InvertedIndex,
}

/// In-process lexical search service.
pub struct SearchEngine {
    analyzer: Analyzer,
    params: Bm25Params,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl SearchEngine {
    /// Create an engine with the given analyzer pipeline and default BM25
    /// parameters.
    pub fn new(kind: AnalyzerKind) -> Self {
        Self::with_params(kind, Bm25Params::default())
    }

    /// Create an engine with explicit BM25 parameters.
    pub fn with_params(kind: AnalyzerKind, params: Bm25Params) -> Self {
        SearchEngine {
            analyzer: Analyzer::new(kind),
            params,
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    /// The analyzer this engine indexes and queries with.
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// The BM25 parameters this engine scores with.
    pub fn params(&self) -> &Bm25Params {
        &self.params
    }

    /// The current snapshot. Callers holding it keep observing a consistent
    /// corpus/index pair regardless of later mutations.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot.read().clone()
    }

    /// Add a document and reindex, returning the assigned id.
    pub fn add_document(&self, text: &str) -> Result<u64> {
        let mut guard = self.snapshot.write();
        let mut corpus = guard.corpus.clone();
        let id = corpus.add_document(text);
        let index = Self::build_index(&corpus, &self.analyzer)?;
        *guard = Arc::new(Snapshot { corpus, index });
        debug!(doc_id = id, "document added");
        Ok(id)
    }

    /// Remove a document by id and reindex. Absent ids are a no-op.
    pub fn remove_document(&self, id: u64) -> Result<()> {
        let mut guard = self.snapshot.write();
        if guard.corpus.get_document(id).is_none() {
            return Ok(());
        }
        let mut corpus = guard.corpus.clone();
        corpus.remove_document(id);
        let index = Self::build_index(&corpus, &self.analyzer)?;
        *guard = Arc::new(Snapshot { corpus, index });
        debug!(doc_id = id, "document removed");
        Ok(())
    }

    /// Remove all documents and restart id assignment.
    pub fn clear(&self) {
        let mut guard = self.snapshot.write();
        *guard = Arc::new(Snapshot::default());
        debug!("corpus cleared");
    }

    /// Get a document by id from the current snapshot.
    pub fn get_document(&self, id: u64) -> Option<Document> {
        self.snapshot().corpus.get_document(id).cloned()
    }

    /// All documents in insertion order, from the current snapshot.
    pub fn documents(&self) -> Vec<Document> {
        self.snapshot().corpus.documents().to_vec()
    }

    /// Number of documents in the current snapshot.
    pub fn doc_count(&self) -> usize {
        self.snapshot().corpus.len()
    }

    /// The indexed vocabulary, sorted lexicographically.
    pub fn vocabulary(&self) -> Vec<String> {
        self.snapshot()
            .index
            .vocabulary()
            .into_iter()
            .map(|t| t.to_string())
            .collect()
    }

    /// Search the current snapshot.
    pub fn search(&self, text: &str, mode: QueryMode) -> Result<Vec<ScoredHit>> {
        self.search_query(&Query::new(text, mode))
    }

    /// Search the current snapshot with a prepared [`Query`].
    pub fn search_query(&self, query: &Query) -> Result<Vec<ScoredHit>> {
        let snapshot = self.snapshot();
        search(query, &snapshot.index, &self.analyzer, &self.params)
    }

    /// Find indexed terms within `max_distance` edits of `probe`.
    pub fn fuzzy_match(&self, probe: &str, max_distance: usize) -> Vec<FuzzyMatch> {
        let snapshot = self.snapshot();
        fuzzy_match(probe, snapshot.index.vocabulary(), max_distance)
    }

    /// Compute the edit distance between two strings, with the full matrix
    /// and alignment path for explanatory display.
    pub fn edit_distance(&self, a: &str, b: &str) -> EditDistanceReport {
        edit_distance(a, b)
    }

    fn build_index(corpus: &Corpus, analyzer: &Analyzer) -> Result<InvertedIndex> {
        let mut index = InvertedIndex::new();
        index.rebuild(corpus, analyzer)?;
        Ok(index)
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("SearchEngine")
            .field("analyzer", &self.analyzer.kind())
            .field("params", &self.params)
            .field("docs", &snapshot.corpus.len())
            .finish()
    }
}
