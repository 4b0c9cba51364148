//! Suggestion engine integration tests

use crate::common::fixtures::{services_for, TestCorpus};

#[test]
fn test_suggest_across_books() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let suggestions = services.suggest.suggest("beg", 10).unwrap();
    assert!(suggestions.contains(&"beginning".to_string()));
    assert!(suggestions.contains(&"begotten".to_string()));
}

#[test]
fn test_suggest_lowercases_and_trims_punctuation() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    // "Day." appears with trailing punctuation and a capital
    let suggestions = services.suggest.suggest("da", 10).unwrap();
    assert!(suggestions.contains(&"day".to_string()));
}

#[test]
fn test_suggest_triggers_lazy_build() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    // No rebuild before the first suggestion call
    let suggestions = services.suggest.suggest("wor", 10).unwrap();
    assert!(suggestions.contains(&"world".to_string()));
}

#[test]
fn test_suggest_respects_limit() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let suggestions = services.suggest.suggest("th", 2).unwrap();
    assert_eq!(suggestions.len(), 2);
}

#[test]
fn test_suggest_excludes_exact_prefix() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let suggestions = services.suggest.suggest("light", 10).unwrap();
    assert!(!suggestions.contains(&"light".to_string()));
}
