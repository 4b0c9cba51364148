//! Search engine integration tests

use crate::common::fixtures::{services_for, TestCorpus};
use lectern::core::types::SearchOptions;

#[test]
fn test_search_across_books() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let resp = services
        .search
        .search("beginning", &SearchOptions::default())
        .unwrap();

    let books: Vec<&str> = resp.results.iter().map(|r| r.book.as_str()).collect();
    assert!(books.contains(&"Genesis"));
    assert!(books.contains(&"John"));
}

#[test]
fn test_response_reports_query_and_totals() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let resp = services
        .search
        .search("  God  ", &SearchOptions::default())
        .unwrap();

    assert_eq!(resp.query, "God");
    assert_eq!(resp.total, resp.results.len());
    assert!(!resp.has_more);
    assert!(resp.total >= 5);
}

#[test]
fn test_one_char_query_is_policy_empty() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let resp = services.search.search("a", &SearchOptions::default()).unwrap();
    assert!(resp.results.is_empty());
    assert_eq!(resp.total, 0);
}

#[test]
fn test_limit_clamped_to_max() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let opts = SearchOptions {
        limit: 1_000_000,
        ..Default::default()
    };
    let resp = services.search.search("the", &opts).unwrap();

    assert!(resp.results.len() <= services.config.search.max_limit);
}

#[test]
fn test_highlight_markers_in_results() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let resp = services
        .search
        .search("light", &SearchOptions::default())
        .unwrap();

    assert!(!resp.results.is_empty());
    for hit in &resp.results {
        assert!(hit.highlighted.contains("<mark>"));
        assert!(hit.highlighted.contains("</mark>"));
        // Stripping the markers recovers the original text
        let stripped = hit.highlighted.replace("<mark>", "").replace("</mark>", "");
        assert_eq!(stripped, hit.text);
    }
}

#[test]
fn test_context_stays_within_chapter() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let opts = SearchOptions {
        context_size: 10,
        ..Default::default()
    };
    let resp = services.search.search("only begotten", &opts).unwrap();

    assert_eq!(resp.results.len(), 1);
    let hit = &resp.results[0];
    assert!(hit
        .context
        .iter()
        .all(|v| v.book == "John" && v.chapter == 3));
    // All three verses of John 3 present, ascending
    let verses: Vec<u32> = hit.context.iter().map(|v| v.verse).collect();
    assert_eq!(verses, vec![16, 17, 18]);
}

#[test]
fn test_results_sorted_by_score_descending() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let resp = services
        .search
        .search("God", &SearchOptions::default())
        .unwrap();

    let scores: Vec<u32> = resp.results.iter().map(|r| r.score).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
}

#[test]
fn test_phrase_query_matches_whole_substring() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let resp = services
        .search
        .search("so loved the world", &SearchOptions::default())
        .unwrap();

    assert_eq!(resp.total, 1);
    assert_eq!(resp.results[0].verse, 16);

    // Reordered words do not match as a phrase
    let resp = services
        .search
        .search("loved so the world", &SearchOptions::default())
        .unwrap();
    assert_eq!(resp.total, 0);
}
