//! Document corpus.
//!
//! The [`Corpus`] owns the raw documents that get indexed. It is an
//! insertion-ordered collection with monotonically increasing ids: removing
//! a document never frees its id for reuse. Only an explicit [`clear`]
//! resets id assignment.
//!
//! [`clear`]: Corpus::clear

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single stored document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique id, assigned at insertion, starting at 1.
    pub id: u64,
    /// The raw text. Immutable once stored.
    pub text: String,
}

/// An insertion-ordered collection of documents.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    positions: AHashMap<u64, usize>,
    next_id: u64,
}

impl Corpus {
    /// Create a new empty corpus.
    pub fn new() -> Self {
        Corpus::default()
    }

    /// Add a document, returning its assigned id.
    ///
    /// Ids start at 1 and increase monotonically across removals.
    pub fn add_document<S: Into<String>>(&mut self, text: S) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.positions.insert(id, self.documents.len());
        self.documents.push(Document {
            id,
            text: text.into(),
        });
        id
    }

    /// Remove a document by id. Removing an absent id is a no-op.
    pub fn remove_document(&mut self, id: u64) {
        if let Some(pos) = self.positions.remove(&id) {
            self.documents.remove(pos);
            for (i, doc) in self.documents.iter().enumerate().skip(pos) {
                self.positions.insert(doc.id, i);
            }
        }
    }

    /// Get a document by id.
    pub fn get_document(&self, id: u64) -> Option<&Document> {
        self.positions.get(&id).map(|&pos| &self.documents[pos])
    }

    /// All documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Iterate documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Remove all documents and restart id assignment at 1.
    pub fn clear(&mut self) {
        self.documents.clear();
        self.positions.clear();
        self.next_id = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut corpus = Corpus::new();
        let id = corpus.add_document("hello world");

        assert_eq!(id, 1);
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get_document(1).unwrap().text, "hello world");
        assert!(corpus.get_document(2).is_none());
    }

    #[test]
    fn test_insertion_order() {
        let mut corpus = Corpus::new();
        corpus.add_document("first");
        corpus.add_document("second");
        corpus.add_document("third");

        let texts: Vec<&str> = corpus.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut corpus = Corpus::new();
        let a = corpus.add_document("a");
        let b = corpus.add_document("b");
        corpus.remove_document(b);
        let c = corpus.add_document("c");

        assert_eq!((a, b, c), (1, 2, 3));
        assert!(corpus.get_document(b).is_none());
        assert_eq!(corpus.get_document(c).unwrap().text, "c");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut corpus = Corpus::new();
        corpus.add_document("only");
        corpus.remove_document(99);

        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_remove_keeps_positions_consistent() {
        let mut corpus = Corpus::new();
        let a = corpus.add_document("a");
        let b = corpus.add_document("b");
        let c = corpus.add_document("c");
        corpus.remove_document(a);

        assert_eq!(corpus.get_document(b).unwrap().text, "b");
        assert_eq!(corpus.get_document(c).unwrap().text, "c");
        let ids: Vec<u64> = corpus.iter().map(|d| d.id).collect();
        assert_eq!(ids, [b, c]);
    }

    #[test]
    fn test_clear_resets_ids() {
        let mut corpus = Corpus::new();
        corpus.add_document("a");
        corpus.add_document("b");
        corpus.clear();

        assert!(corpus.is_empty());
        assert_eq!(corpus.add_document("fresh"), 1);
    }
}
