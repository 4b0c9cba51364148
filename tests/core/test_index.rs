//! Index lifecycle integration tests

use crate::common::fixtures::{services_for, TestCorpus};
use lectern::core::index::IndexState;
use lectern::core::types::VerseKey;
use std::sync::Arc;

#[test]
fn test_build_full_corpus() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    let stats = services.index.rebuild().unwrap();

    assert_eq!(stats.books, 2);
    assert_eq!(stats.chapters_indexed, 3);
    assert_eq!(stats.chapters_skipped, 0);
    assert_eq!(stats.verses, 11);
    assert_eq!(services.index.state(), IndexState::Ready);
}

#[test]
fn test_store_iterates_in_canonical_order() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());
    services.index.rebuild().unwrap();

    let store = services.index.snapshot();
    let keys: Vec<VerseKey> = store.keys().cloned().collect();
    let mut sorted = keys.clone();
    sorted.sort();

    assert_eq!(keys, sorted);
    assert_eq!(keys[0].book, "Genesis");
    assert_eq!(keys.last().unwrap(), &VerseKey::new("John", 3, 18));
}

#[test]
fn test_nonconforming_files_ignored() {
    let corpus = TestCorpus::with_chapters(&[
        ("John", "chapter-01.md", "1. Counted"),
        ("John", "notes.md", "1. Not a chapter"),
        ("John", "chapter-02.txt", "1. Wrong extension"),
        ("John", "chapter-abc.md", "1. No number"),
    ]);
    let services = services_for(corpus.path());

    let stats = services.index.rebuild().unwrap();
    assert_eq!(stats.chapters_indexed, 1);
    assert_eq!(stats.verses, 1);
}

#[test]
fn test_empty_corpus_builds_empty_store() {
    let corpus = TestCorpus::with_chapters(&[]);
    let services = services_for(corpus.path());

    let stats = services.index.rebuild().unwrap();
    assert_eq!(stats.books, 0);
    assert_eq!(stats.verses, 0);
    assert_eq!(services.index.state(), IndexState::Ready);
}

#[test]
fn test_last_stats_survives_queries() {
    let corpus = TestCorpus::gospels();
    let services = services_for(corpus.path());

    assert!(services.index.last_stats().is_none());
    services.index.rebuild().unwrap();

    let stats = services.index.last_stats().unwrap();
    assert_eq!(stats.verses, 11);
}

#[test]
fn test_concurrent_lazy_builders_see_same_store() {
    let corpus = TestCorpus::gospels();
    let services = Arc::new(services_for(corpus.path()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let services = Arc::clone(&services);
        handles.push(std::thread::spawn(move || {
            services.index.ensure_ready().unwrap().len()
        }));
    }

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 11);
    }
    assert_eq!(services.index.state(), IndexState::Ready);
}

#[test]
fn test_concurrent_rebuilds_serialize() {
    let corpus = TestCorpus::gospels();
    let services = Arc::new(services_for(corpus.path()));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let services = Arc::clone(&services);
        handles.push(std::thread::spawn(move || services.index.rebuild()));
    }

    for handle in handles {
        let stats = handle.join().unwrap().unwrap();
        assert_eq!(stats.verses, 11);
    }
    assert_eq!(services.index.state(), IndexState::Ready);
}
