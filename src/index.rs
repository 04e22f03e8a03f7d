//! Inverted index.
//!
//! The [`InvertedIndex`] maps every term produced by the analyzer to the
//! documents containing it, with per-document frequency and positions, and
//! tracks the corpus-wide statistics the ranker needs (document count,
//! per-document token length, average document length).
//!
//! The index has no notion of staleness: it is rebuilt from the corpus as a
//! whole, and callers are expected to rebuild after every corpus mutation
//! before serving the next query.

use ahash::AHashMap;
use tracing::debug;

use crate::analysis::Analyzer;
use crate::corpus::Corpus;
use crate::error::Result;

/// A term's occurrence data within a single document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Posting {
    /// Number of occurrences of the term in the document.
    pub frequency: u32,
    /// Positions of the term in the document's analyzed term sequence,
    /// ascending.
    pub positions: Vec<u32>,
}

impl Posting {
    fn push_position(&mut self, position: u32) {
        self.positions.push(position);
        self.frequency = self.positions.len() as u32;
    }
}

/// An in-memory inverted index over a [`Corpus`].
#[derive(Clone, Debug, Default)]
pub struct InvertedIndex {
    /// term → (document id → posting)
    postings: AHashMap<String, AHashMap<u64, Posting>>,
    /// document id → analyzed token count
    doc_lengths: AHashMap<u64, usize>,
    total_tokens: usize,
}

impl InvertedIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Rebuild the index from scratch against the given corpus and analyzer.
    ///
    /// After a rebuild, `term_frequency(t, d)` equals the exact occurrence
    /// count of `t` in the analyzer's output for document `d`; terms with no
    /// occurrences anywhere are absent from the vocabulary. Rebuilding over
    /// an empty corpus yields an empty index.
    pub fn rebuild(&mut self, corpus: &Corpus, analyzer: &Analyzer) -> Result<()> {
        self.clear();

        for doc in corpus.iter() {
            let tokens = analyzer.analyze(&doc.text)?;
            self.doc_lengths.insert(doc.id, tokens.len());
            self.total_tokens += tokens.len();

            for (position, token) in tokens.into_iter().enumerate() {
                self.postings
                    .entry(token.text)
                    .or_default()
                    .entry(doc.id)
                    .or_default()
                    .push_position(position as u32);
            }
        }

        debug!(
            docs = corpus.len(),
            terms = self.postings.len(),
            tokens = self.total_tokens,
            "index rebuilt"
        );
        Ok(())
    }

    /// The postings for a term: document id → occurrence data.
    ///
    /// `None` for unknown terms, which callers treat as an empty mapping.
    pub fn postings(&self, term: &str) -> Option<&AHashMap<u64, Posting>> {
        self.postings.get(term)
    }

    /// Occurrence count of `term` in the given document (0 if absent).
    pub fn term_frequency(&self, term: &str, doc_id: u64) -> u32 {
        self.postings
            .get(term)
            .and_then(|docs| docs.get(&doc_id))
            .map_or(0, |p| p.frequency)
    }

    /// Number of documents containing `term` at least once.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, |docs| docs.len())
    }

    /// Whether any document contains `term`.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// All known terms, sorted lexicographically.
    pub fn vocabulary(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings.keys().map(|s| s.as_str()).collect();
        terms.sort_unstable();
        terms
    }

    /// Number of indexed documents.
    pub fn doc_count(&self) -> usize {
        self.doc_lengths.len()
    }

    /// Analyzed token count of the given document (0 if unknown).
    pub fn doc_length(&self, doc_id: u64) -> usize {
        self.doc_lengths.get(&doc_id).copied().unwrap_or(0)
    }

    /// Total analyzed token count across all documents.
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    /// Average analyzed document length, 0.0 for an empty index.
    pub fn average_doc_length(&self) -> f64 {
        if self.doc_lengths.is_empty() {
            0.0
        } else {
            self.total_tokens as f64 / self.doc_lengths.len() as f64
        }
    }

    /// Remove all postings and statistics.
    pub fn clear(&mut self) {
        self.postings.clear();
        self.doc_lengths.clear();
        self.total_tokens = 0;
    }
}
