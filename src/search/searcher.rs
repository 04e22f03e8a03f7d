//! Query evaluation and ranking.
//!
//! Given a [`Query`] and an [`InvertedIndex`], the searcher analyzes the
//! query text with the same analyzer the index was built with, selects
//! candidate documents per the query mode, scores them with BM25, and
//! returns them ordered by descending score with ascending document id as
//! the tie-break.

use ahash::AHashSet;
use serde::Serialize;
use tracing::trace;

use crate::analysis::Analyzer;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::search::query::{Query, QueryMode};
use crate::search::scoring::{Bm25Params, idf, term_score};

/// Fixed score bonus for phrase matches, preferring exact phrases over
/// loose term overlap.
pub const PHRASE_BONUS: f64 = 2.0;

/// Fixed boost factor applied by multi-match scoring. With a single
/// indexed field this is the whole field-boost table.
pub const MULTI_MATCH_BOOST: f64 = 1.2;

/// One ranked search result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredHit {
    /// Id of the matching document.
    pub doc_id: u64,
    /// BM25 relevance score, after any mode adjustment.
    pub score: f64,
    /// Query terms present in the document, deduplicated, in query order.
    pub matched_terms: Vec<String>,
}

/// Evaluate a query against the index.
///
/// An empty index, a query that analyzes to no terms, or a query matching
/// nothing all produce an empty result; none of these are errors.
pub fn search(
    query: &Query,
    index: &InvertedIndex,
    analyzer: &Analyzer,
    params: &Bm25Params,
) -> Result<Vec<ScoredHit>> {
    if index.doc_count() == 0 {
        return Ok(Vec::new());
    }

    let query_terms = analyzer.terms(&query.text)?;
    if query_terms.is_empty() {
        return Ok(Vec::new());
    }

    let candidates = match query.mode {
        QueryMode::Match | QueryMode::MultiMatch => term_candidates(&query_terms, index),
        QueryMode::MatchPhrase => phrase_candidates(&query_terms, index),
    };
    trace!(
        mode = %query.mode,
        terms = query_terms.len(),
        candidates = candidates.len(),
        "query evaluated"
    );

    let mut hits: Vec<ScoredHit> = candidates
        .into_iter()
        .map(|doc_id| score_document(doc_id, &query_terms, query.mode, index, params))
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });
    Ok(hits)
}

/// Documents containing at least one query term.
fn term_candidates(query_terms: &[String], index: &InvertedIndex) -> Vec<u64> {
    let mut candidates = AHashSet::new();
    for term in query_terms {
        if let Some(postings) = index.postings(term) {
            candidates.extend(postings.keys().copied());
        }
    }
    candidates.into_iter().collect()
}

/// Documents where the query terms occur as a contiguous, order-preserving
/// run in the analyzed term sequence.
fn phrase_candidates(query_terms: &[String], index: &InvertedIndex) -> Vec<u64> {
    let Some(first) = index.postings(&query_terms[0]) else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    'docs: for (&doc_id, posting) in first.iter() {
        for start in &posting.positions {
            if phrase_at(doc_id, *start, &query_terms[1..], index) {
                candidates.push(doc_id);
                continue 'docs;
            }
        }
    }
    candidates
}

/// Check that each of `rest` appears at the consecutive positions after
/// `start` in the given document.
fn phrase_at(doc_id: u64, start: u32, rest: &[String], index: &InvertedIndex) -> bool {
    rest.iter().enumerate().all(|(offset, term)| {
        index
            .postings(term)
            .and_then(|postings| postings.get(&doc_id))
            .is_some_and(|p| {
                let wanted = start + offset as u32 + 1;
                p.positions.binary_search(&wanted).is_ok()
            })
    })
}

fn score_document(
    doc_id: u64,
    query_terms: &[String],
    mode: QueryMode,
    index: &InvertedIndex,
    params: &Bm25Params,
) -> ScoredHit {
    let doc_count = index.doc_count();
    let doc_length = index.doc_length(doc_id);
    let avg_doc_length = index.average_doc_length();

    let mut score = 0.0;
    for term in query_terms {
        let tf = index.term_frequency(term, doc_id);
        let df = index.document_frequency(term);
        score += term_score(tf, doc_length, avg_doc_length, idf(doc_count, df), params);
    }

    score = match mode {
        QueryMode::Match => score,
        QueryMode::MatchPhrase => score + PHRASE_BONUS,
        QueryMode::MultiMatch => score * MULTI_MATCH_BOOST,
    };

    let mut seen = AHashSet::new();
    let matched_terms = query_terms
        .iter()
        .filter(|term| index.term_frequency(term, doc_id) > 0)
        .filter(|term| seen.insert(term.as_str()))
        .cloned()
        .collect();

    ScoredHit {
        doc_id,
        score,
        matched_terms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalyzerKind;
    use crate::corpus::Corpus;

    fn fixture() -> (InvertedIndex, Analyzer) {
        let analyzer = Analyzer::new(AnalyzerKind::Standard);
        let mut corpus = Corpus::new();
        corpus.add_document("the quick brown fox jumps over the lazy dog");
        corpus.add_document("quick brown rabbits and lazy turtles");
        corpus.add_document("the fox is very quick and smart");
        let mut index = InvertedIndex::new();
        index.rebuild(&corpus, &analyzer).unwrap();
        (index, analyzer)
    }

    fn run(text: &str, mode: QueryMode) -> Vec<ScoredHit> {
        let (index, analyzer) = fixture();
        search(
            &Query::new(text, mode),
            &index,
            &analyzer,
            &Bm25Params::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_match_ranks_two_term_docs_first() {
        let hits = run("quick fox", QueryMode::Match);

        assert_eq!(hits.len(), 3);
        let top_two: Vec<u64> = hits[..2].iter().map(|h| h.doc_id).collect();
        assert!(top_two.contains(&1));
        assert!(top_two.contains(&3));
        assert_eq!(hits[2].doc_id, 2);
        assert_eq!(hits[2].matched_terms, ["quick"]);
    }

    #[test]
    fn test_match_excludes_non_matching_docs() {
        let hits = run("turtles", QueryMode::Match);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].doc_id, 2);
    }

    #[test]
    fn test_no_candidates_is_empty_ok() {
        let hits = run("zebra", QueryMode::Match);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_query_is_empty_ok() {
        let hits = run("  ...  ", QueryMode::Match);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_index_is_empty_ok() {
        let analyzer = Analyzer::new(AnalyzerKind::Standard);
        let index = InvertedIndex::new();
        let hits = search(
            &Query::new("anything", QueryMode::Match),
            &index,
            &analyzer,
            &Bm25Params::default(),
        )
        .unwrap();

        assert!(hits.is_empty());
    }

    #[test]
    fn test_phrase_requires_adjacency() {
        // "quick brown" is adjacent in docs 1 and 2; "quick dog" is not.
        let hits = run("quick brown", QueryMode::MatchPhrase);
        let ids: Vec<u64> = hits.iter().map(|h| h.doc_id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&1));
        assert!(ids.contains(&2));

        assert!(run("quick dog", QueryMode::MatchPhrase).is_empty());
    }

    #[test]
    fn test_phrase_requires_order() {
        assert!(run("brown quick", QueryMode::MatchPhrase).is_empty());
    }

    #[test]
    fn test_phrase_bonus_applied() {
        let phrase = run("lazy dog", QueryMode::MatchPhrase);
        let plain = run("lazy dog", QueryMode::Match);

        assert_eq!(phrase.len(), 1);
        assert_eq!(phrase[0].doc_id, 1);
        let plain_doc1 = plain.iter().find(|h| h.doc_id == 1).unwrap();
        assert!((phrase[0].score - (plain_doc1.score + PHRASE_BONUS)).abs() < 1e-9);
    }

    #[test]
    fn test_phrase_single_term() {
        let hits = run("rabbits", QueryMode::MatchPhrase);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].doc_id, 2);
    }

    #[test]
    fn test_multi_match_boost() {
        let boosted = run("quick fox", QueryMode::MultiMatch);
        let plain = run("quick fox", QueryMode::Match);

        assert_eq!(boosted.len(), plain.len());
        for (b, p) in boosted.iter().zip(plain.iter()) {
            assert_eq!(b.doc_id, p.doc_id);
            assert!((b.score - p.score * MULTI_MATCH_BOOST).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tie_break_ascending_id() {
        let analyzer = Analyzer::new(AnalyzerKind::Standard);
        let mut corpus = Corpus::new();
        // Identical documents score identically.
        corpus.add_document("same words here");
        corpus.add_document("same words here");
        corpus.add_document("same words here");
        let mut index = InvertedIndex::new();
        index.rebuild(&corpus, &analyzer).unwrap();

        for _ in 0..5 {
            let hits = search(
                &Query::new("same words", QueryMode::Match),
                &index,
                &analyzer,
                &Bm25Params::default(),
            )
            .unwrap();
            let ids: Vec<u64> = hits.iter().map(|h| h.doc_id).collect();
            assert_eq!(ids, [1, 2, 3]);
        }
    }

    #[test]
    fn test_matched_terms_deduplicated_in_query_order() {
        let hits = run("fox quick fox", QueryMode::Match);
        let doc1 = hits.iter().find(|h| h.doc_id == 1).unwrap();
        assert_eq!(doc1.matched_terms, ["fox", "quick"]);
    }

    #[test]
    fn test_params_change_scores() {
        let (index, analyzer) = fixture();
        let query = Query::new("quick", QueryMode::Match);

        let default = search(&query, &index, &analyzer, &Bm25Params::default()).unwrap();
        let saturated = search(
            &query,
            &index,
            &analyzer,
            &Bm25Params { k1: 0.0, b: 0.0 },
        )
        .unwrap();

        // k1 = 0 collapses the tf component to idf alone.
        assert_eq!(default.len(), saturated.len());
        assert!(default[0].score != saturated[0].score);
    }
}
