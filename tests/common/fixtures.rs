// Test fixtures for integration testing

use lectern::core::config::Config;
use lectern::core::services::Services;
use std::path::Path;
use tempfile::TempDir;

/// Corpus fixture for creating synthetic book/chapter trees
#[allow(dead_code)] // Used in integration tests
pub struct TestCorpus {
    pub dir: TempDir,
}

impl TestCorpus {
    /// Create a corpus with custom chapter files.
    ///
    /// Each entry is (book, chapter filename, raw chapter content).
    pub fn with_chapters(chapters: &[(&str, &str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();

        for (book, file, content) in chapters {
            let book_dir = dir.path().join(book);
            std::fs::create_dir_all(&book_dir).unwrap();
            std::fs::write(book_dir.join(file), content).unwrap();
        }

        Self { dir }
    }

    /// A small two-book corpus with known content
    #[allow(dead_code)] // Used in integration tests
    pub fn gospels() -> Self {
        Self::with_chapters(&[
            (
                "Genesis",
                "chapter-01.md",
                "# Genesis 1\n\n\
                 1. In the beginning God created the heaven and the earth.\n\
                 2. And the earth was without form, and void.\n\
                 3. And God said, Let there be light: and there was light.\n\
                 4. And God saw the light, that it was good.\n\
                 5. And God called the light Day.",
            ),
            (
                "John",
                "chapter-01.md",
                "# John 1\n\n\
                 1. In the beginning was the Word.\n\
                 2. The same was in the beginning with God.\n\
                 3. All things were made by him.",
            ),
            (
                "John",
                "chapter-03.md",
                "# John 3\n\n\
                 16. For God so loved the world, that he gave his only begotten Son.\n\
                 17. For God sent not his Son into the world to condemn the world.\n\
                 18. He that believeth on him is not condemned.",
            ),
        ])
    }

    /// Path to the corpus root
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Create services over the given corpus root with default settings
#[allow(dead_code)] // Used in integration tests
pub fn services_for(corpus_root: &Path) -> Services {
    let mut config = Config::default();
    config.corpus.root_dir = corpus_root.to_path_buf();
    Services::new(config).unwrap()
}
