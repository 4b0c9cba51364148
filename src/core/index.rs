//! The verse index: owned store plus build lifecycle.
//!
//! The index owns the only mutable copy of the verse store and
//! guards it with a three-state machine: `Empty` (nothing built),
//! `Building` (a rebuild in flight), `Ready` (queryable). Readers
//! take `Arc` snapshots of the store, so a rebuild never exposes a
//! partially populated store: the new store is assembled off to the
//! side and swapped in atomically on success.
//!
//! Builds are exclusive. A caller that finds a build in flight
//! waits on a condvar; lazy callers woken to `Empty` (the build
//! failed) become builders themselves.

use chrono::Utc;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, RwLock};
use std::time::Instant;

use crate::core::corpus::CorpusLoader;
use crate::core::error::{LecternError, Result};
use crate::core::parser::parse_chapter;
use crate::core::types::{BuildStats, VerseStore};

/// Index lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// No content yet (initial, or after a failed first build)
    Empty,
    /// A rebuild is in flight
    Building,
    /// Queryable
    Ready,
}

/// In-memory verse index over a corpus
pub struct VerseIndex {
    loader: CorpusLoader,
    state: Mutex<IndexState>,
    state_changed: Condvar,
    store: RwLock<Arc<VerseStore>>,
    last_stats: Mutex<Option<BuildStats>>,
}

impl VerseIndex {
    /// Create an empty index over the given corpus
    pub fn new(loader: CorpusLoader) -> Self {
        Self {
            loader,
            state: Mutex::new(IndexState::Empty),
            state_changed: Condvar::new(),
            store: RwLock::new(Arc::new(VerseStore::new())),
            last_stats: Mutex::new(None),
        }
    }

    /// Corpus loader backing this index
    pub fn loader(&self) -> &CorpusLoader {
        &self.loader
    }

    /// Current lifecycle state
    pub fn state(&self) -> IndexState {
        *self.lock_state()
    }

    /// Statistics of the most recent successful build
    pub fn last_stats(&self) -> Option<BuildStats> {
        self.last_stats
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Point-in-time snapshot of the store, whatever its state
    pub fn snapshot(&self) -> Arc<VerseStore> {
        self.store.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Get a queryable snapshot, building lazily if needed.
    ///
    /// Ready returns the current snapshot; Building waits for the
    /// in-flight build; Empty makes this caller the builder.
    pub fn ensure_ready(&self) -> Result<Arc<VerseStore>> {
        let mut state = self.lock_state();
        loop {
            match *state {
                IndexState::Ready => return Ok(self.snapshot()),
                IndexState::Building => {
                    state = self
                        .state_changed
                        .wait(state)
                        .unwrap_or_else(|e| e.into_inner());
                }
                IndexState::Empty => {
                    *state = IndexState::Building;
                    drop(state);
                    self.run_build()?;
                    return Ok(self.snapshot());
                }
            }
        }
    }

    /// Rebuild the index from the corpus.
    ///
    /// Fully replaces store content; never merges. Concurrent
    /// rebuild requests are serialized: a second caller blocks
    /// until the in-flight build finishes, then runs its own.
    pub fn rebuild(&self) -> Result<BuildStats> {
        let mut state = self.lock_state();
        while *state == IndexState::Building {
            state = self
                .state_changed
                .wait(state)
                .unwrap_or_else(|e| e.into_inner());
        }
        *state = IndexState::Building;
        drop(state);

        self.run_build()
    }

    /// Execute one build. Caller must have set the state to Building.
    fn run_build(&self) -> Result<BuildStats> {
        let result = self.build_store();

        let mut state = self.lock_state();
        match result {
            Ok((store, stats)) => {
                *self.store.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(store);
                *self
                    .last_stats
                    .lock()
                    .unwrap_or_else(|e| e.into_inner()) = Some(stats.clone());
                *state = IndexState::Ready;
                self.state_changed.notify_all();

                tracing::info!(
                    "Index built: {} books, {} chapters, {} verses in {}ms",
                    stats.books,
                    stats.chapters_indexed,
                    stats.verses,
                    stats.duration_ms
                );
                Ok(stats)
            }
            Err(e) => {
                // A prior snapshot stays queryable; a never-built
                // index goes back to Empty.
                let has_prior = self
                    .last_stats
                    .lock()
                    .unwrap_or_else(|p| p.into_inner())
                    .is_some();
                *state = if has_prior {
                    IndexState::Ready
                } else {
                    IndexState::Empty
                };
                self.state_changed.notify_all();

                tracing::error!("Index build failed: {}", e);
                Err(e)
            }
        }
    }

    /// Assemble a fresh store from the corpus.
    ///
    /// Unreadable books and chapters are skipped; only a failure to
    /// enumerate the corpus root aborts the build.
    fn build_store(&self) -> Result<(VerseStore, BuildStats)> {
        let start = Instant::now();

        let books = self.loader.discover_books().map_err(|e| {
            LecternError::BuildFailed(format!("Cannot enumerate corpus root: {e}"))
        })?;

        let mut store = VerseStore::new();
        let mut chapters_indexed = 0;
        let mut chapters_skipped = 0;

        for book in &books {
            let chapters = match self.loader.discover_chapters(book) {
                Ok(chapters) => chapters,
                Err(e) => {
                    tracing::warn!("Skipping book {}: {}", book, e);
                    continue;
                }
            };

            for chapter in chapters {
                let raw = match self.loader.read_chapter(&chapter) {
                    Ok(raw) => raw,
                    Err(e) => {
                        tracing::warn!("Skipping chapter {:?}: {}", chapter.path, e);
                        chapters_skipped += 1;
                        continue;
                    }
                };

                // Insertion is keyed by (book, chapter, verse);
                // duplicate numbers within a chapter resolve
                // last-write-wins by line order.
                for verse in parse_chapter(&raw, book, chapter.number) {
                    store.insert(verse.key(), verse);
                }
                chapters_indexed += 1;
            }
        }

        let stats = BuildStats {
            books: books.len(),
            chapters_indexed,
            chapters_skipped,
            verses: store.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            built_at: Utc::now(),
        };

        Ok((store, stats))
    }

    fn lock_state(&self) -> MutexGuard<'_, IndexState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::VerseKey;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_chapter(root: &Path, book: &str, file: &str, content: &str) {
        let dir = root.join(book);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
    }

    fn index_for(root: &Path) -> VerseIndex {
        VerseIndex::new(CorpusLoader::new(root, "chapter-", "md").unwrap())
    }

    #[test]
    fn test_initial_state_empty() {
        let temp = TempDir::new().unwrap();
        let index = index_for(temp.path());

        assert_eq!(index.state(), IndexState::Empty);
        assert!(index.snapshot().is_empty());
    }

    #[test]
    fn test_build_populates_store() {
        let temp = TempDir::new().unwrap();
        write_chapter(
            temp.path(),
            "John",
            "chapter-03.md",
            "# John 3\n16. For God so loved the world\n17. For God sent not his Son",
        );

        let index = index_for(temp.path());
        let stats = index.rebuild().unwrap();

        assert_eq!(index.state(), IndexState::Ready);
        assert_eq!(stats.books, 1);
        assert_eq!(stats.chapters_indexed, 1);
        assert_eq!(stats.verses, 2);

        let store = index.snapshot();
        let verse = store.get(&VerseKey::new("John", 3, 16)).unwrap();
        assert_eq!(verse.text, "For God so loved the world");
    }

    #[test]
    fn test_duplicate_verse_last_write_wins() {
        let temp = TempDir::new().unwrap();
        write_chapter(
            temp.path(),
            "John",
            "chapter-01.md",
            "1. Earlier reading\n1. Later reading",
        );

        let index = index_for(temp.path());
        index.rebuild().unwrap();

        let store = index.snapshot();
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&VerseKey::new("John", 1, 1)).unwrap().text,
            "Later reading"
        );
    }

    #[test]
    fn test_rebuild_replaces_never_merges() {
        let temp = TempDir::new().unwrap();
        write_chapter(temp.path(), "John", "chapter-01.md", "1. First");

        let index = index_for(temp.path());
        index.rebuild().unwrap();
        assert_eq!(index.snapshot().len(), 1);

        fs::write(
            temp.path().join("John").join("chapter-01.md"),
            "2. Replaced",
        )
        .unwrap();
        index.rebuild().unwrap();

        let store = index.snapshot();
        assert_eq!(store.len(), 1);
        assert!(store.contains_key(&VerseKey::new("John", 1, 2)));
        assert!(!store.contains_key(&VerseKey::new("John", 1, 1)));
    }

    #[test]
    fn test_rebuild_idempotent() {
        let temp = TempDir::new().unwrap();
        write_chapter(
            temp.path(),
            "Genesis",
            "chapter-01.md",
            "1. In the beginning\n2. And the earth",
        );
        write_chapter(temp.path(), "John", "chapter-03.md", "16. For God so loved");

        let index = index_for(temp.path());
        index.rebuild().unwrap();
        let first: Vec<(VerseKey, String)> = index
            .snapshot()
            .iter()
            .map(|(k, v)| (k.clone(), v.text.clone()))
            .collect();

        index.rebuild().unwrap();
        let second: Vec<(VerseKey, String)> = index
            .snapshot()
            .iter()
            .map(|(k, v)| (k.clone(), v.text.clone()))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unreadable_chapter_skipped() {
        let temp = TempDir::new().unwrap();
        write_chapter(temp.path(), "John", "chapter-01.md", "1. Readable");
        // A directory with a chapter filename cannot be read as text
        fs::create_dir(temp.path().join("John").join("chapter-02.md")).unwrap();

        let index = index_for(temp.path());
        let stats = index.rebuild().unwrap();

        assert_eq!(stats.chapters_indexed, 1);
        assert_eq!(stats.chapters_skipped, 1);
        assert_eq!(index.state(), IndexState::Ready);
        assert_eq!(index.snapshot().len(), 1);
    }

    #[test]
    fn test_missing_root_is_build_error() {
        let temp = TempDir::new().unwrap();
        let index = index_for(&temp.path().join("nowhere"));

        let result = index.rebuild();
        match result {
            Err(LecternError::BuildFailed(_)) => {}
            other => panic!("Expected BuildFailed, got {other:?}"),
        }
        assert_eq!(index.state(), IndexState::Empty);
    }

    #[test]
    fn test_failed_rebuild_keeps_prior_snapshot() {
        let temp = TempDir::new().unwrap();
        write_chapter(temp.path(), "John", "chapter-01.md", "1. Kept");

        let index = index_for(temp.path());
        index.rebuild().unwrap();

        // Make the root unreadable by removing it entirely
        fs::remove_dir_all(temp.path().join("John")).unwrap();
        fs::remove_dir_all(temp.path()).ok();

        let result = index.rebuild();
        assert!(result.is_err());
        assert_eq!(index.state(), IndexState::Ready);
        assert_eq!(index.snapshot().len(), 1);
    }

    #[test]
    fn test_ensure_ready_builds_lazily() {
        let temp = TempDir::new().unwrap();
        write_chapter(temp.path(), "John", "chapter-01.md", "1. Lazy");

        let index = index_for(temp.path());
        assert_eq!(index.state(), IndexState::Empty);

        let store = index.ensure_ready().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(index.state(), IndexState::Ready);
    }

    #[test]
    fn test_concurrent_readers_consistent() {
        let temp = TempDir::new().unwrap();
        for ch in 1..=4 {
            write_chapter(
                temp.path(),
                "Psalms",
                &format!("chapter-{ch:02}.md"),
                &format!("1. Verse one of chapter {ch}\n2. Verse two of chapter {ch}"),
            );
        }

        let index = Arc::new(index_for(temp.path()));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let index = Arc::clone(&index);
            handles.push(std::thread::spawn(move || {
                let store = index.ensure_ready().unwrap();
                store.len()
            }));
        }

        for handle in handles {
            // Every reader sees the fully built store
            assert_eq!(handle.join().unwrap(), 8);
        }
        assert_eq!(index.state(), IndexState::Ready);
    }
}
