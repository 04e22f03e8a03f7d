//! End-to-end scenarios over the public engine surface.

use pilum::analysis::{Analyzer, AnalyzerKind};
use pilum::engine::SearchEngine;
use pilum::fuzzy::edit_distance;
use pilum::search::{Bm25Params, QueryMode, match_spans};

fn seeded_engine() -> SearchEngine {
    let engine = SearchEngine::new(AnalyzerKind::Standard);
    engine
        .add_document("the quick brown fox jumps over the lazy dog")
        .unwrap();
    engine
        .add_document("quick brown rabbits and lazy turtles")
        .unwrap();
    engine
        .add_document("the fox is very quick and smart")
        .unwrap();
    engine
}

#[test]
fn quick_fox_ranking() {
    let engine = seeded_engine();
    let hits = engine.search("quick fox", QueryMode::Match).unwrap();

    // Docs 1 and 3 contain both terms and must outrank doc 2, which
    // contains only "quick".
    assert_eq!(hits.len(), 3);
    let top_two: Vec<u64> = hits[..2].iter().map(|h| h.doc_id).collect();
    assert!(top_two.contains(&1) && top_two.contains(&3));
    assert_eq!(hits[2].doc_id, 2);

    for hit in &hits[..2] {
        assert_eq!(hit.matched_terms, ["quick", "fox"]);
    }
    assert_eq!(hits[2].matched_terms, ["quick"]);
}

#[test]
fn search_over_empty_corpus_is_empty() {
    let engine = SearchEngine::new(AnalyzerKind::Standard);
    for mode in [QueryMode::Match, QueryMode::MatchPhrase, QueryMode::MultiMatch] {
        assert!(engine.search("anything at all", mode).unwrap().is_empty());
    }
}

#[test]
fn standard_analysis_scenario() {
    let analyzer = Analyzer::new(AnalyzerKind::Standard);
    let terms = analyzer.terms("The Quick Brown FOX-123!").unwrap();
    assert_eq!(terms, ["the", "quick", "brown", "fox", "123"]);
}

#[test]
fn edit_distance_scenario() {
    let report = edit_distance("quik", "quick");
    assert_eq!(report.distance, 1);
    assert_eq!(report.matrix.len(), 5);
    assert_eq!(report.matrix[0].len(), 6);
}

#[test]
fn fuzzy_match_scenario() {
    let engine = seeded_engine();
    let matches = engine.fuzzy_match("quik", 2);

    assert_eq!(matches[0].term, "quick");
    assert_eq!(matches[0].distance, 1);
    assert!(matches.iter().all(|m| m.term != "fox" && m.term != "brown"));
}

#[test]
fn index_stays_consistent_across_mutations() {
    let engine = seeded_engine();
    let id = engine.add_document("a brand new fox document").unwrap();
    engine.remove_document(2).unwrap();

    let snapshot = engine.snapshot();
    let analyzer = engine.analyzer();
    for doc in snapshot.corpus.iter() {
        let terms = analyzer.terms(&doc.text).unwrap();
        assert_eq!(snapshot.index.doc_length(doc.id), terms.len());
        for term in &terms {
            let expected = terms.iter().filter(|t| *t == term).count() as u32;
            assert_eq!(snapshot.index.term_frequency(term, doc.id), expected);
        }
    }
    assert_eq!(snapshot.index.document_frequency("fox"), 3);
    assert_eq!(snapshot.index.document_frequency("rabbits"), 0);
    assert_eq!(id, 4);
}

#[test]
fn phrase_search_end_to_end() {
    let engine = seeded_engine();

    let hits = engine.search("lazy dog", QueryMode::MatchPhrase).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].doc_id, 1);

    // Present in doc 1 but not adjacent.
    assert!(
        engine
            .search("quick dog", QueryMode::MatchPhrase)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn custom_bm25_params_are_honored() {
    let flat = SearchEngine::with_params(
        AnalyzerKind::Standard,
        Bm25Params { k1: 0.0, b: 0.0 },
    );
    flat.add_document("fox fox fox fox").unwrap();
    flat.add_document("fox").unwrap();

    // With k1 = 0, term frequency stops mattering, so the two documents tie
    // and are returned in ascending id order.
    let hits = flat.search("fox", QueryMode::Match).unwrap();
    assert_eq!(hits.len(), 2);
    assert!((hits[0].score - hits[1].score).abs() < 1e-12);
    assert_eq!(hits[0].doc_id, 1);
    assert_eq!(hits[1].doc_id, 2);
}

#[test]
fn highlight_spans_for_hits() {
    let engine = seeded_engine();
    let hits = engine.search("quick fox", QueryMode::Match).unwrap();
    let top = &hits[0];

    let doc = engine.get_document(top.doc_id).unwrap();
    let spans = match_spans(&doc.text, &top.matched_terms);

    assert!(!spans.is_empty());
    for span in &spans {
        assert_eq!(
            doc.text[span.start..span.end].to_lowercase(),
            span.term.to_lowercase()
        );
    }
}

#[test]
fn custom_analyzer_end_to_end() {
    let engine = SearchEngine::new(AnalyzerKind::Custom);
    engine
        .add_document("<p>The foxes were jumping over fences</p>")
        .unwrap();

    // Query and document are analyzed identically, so the stemmed forms
    // line up.
    let hits = engine.search("jumped fox", QueryMode::Match).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_terms, ["jump", "fox"]);
}

#[test]
fn keyword_analyzer_exact_matching() {
    let engine = SearchEngine::new(AnalyzerKind::Keyword);
    engine.add_document("Exact Phrase Here").unwrap();

    assert_eq!(
        engine
            .search("Exact Phrase Here", QueryMode::Match)
            .unwrap()
            .len(),
        1
    );
    assert!(
        engine
            .search("exact phrase here", QueryMode::Match)
            .unwrap()
            .is_empty()
    );
}
