//! Corpus discovery: books and chapter files.
//!
//! The corpus is a root directory with one subdirectory per book.
//! Each book directory holds chapter files named with a literal
//! prefix, a zero-padded chapter number, and a fixed extension
//! (e.g. `chapter-01.md`). Anything else is ignored.
//!
//! Book and chapter order is canonical: lexicographic by name.
//! Unreadable book directories are skipped without failing the
//! whole discovery; a missing or unreadable root is an error.

use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::error::{LecternError, Result};

/// A chapter file discovered within a book directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterFile {
    /// Chapter number recovered from the filename (leading zeros stripped)
    pub number: u32,

    /// Full path to the chapter file
    pub path: PathBuf,

    /// Filename, used for lexicographic ordering
    pub file_name: String,
}

/// Corpus loader with a configurable chapter filename convention
pub struct CorpusLoader {
    root: PathBuf,
    chapter_pattern: Regex,
}

impl CorpusLoader {
    /// Create a loader for `root` recognizing `<prefix><digits>.<extension>`
    pub fn new(root: impl Into<PathBuf>, prefix: &str, extension: &str) -> Result<Self> {
        let pattern = format!(
            "^{}([0-9]+)\\.{}$",
            regex::escape(prefix),
            regex::escape(extension)
        );
        let chapter_pattern = Regex::new(&pattern).map_err(|e| {
            LecternError::ConfigError(format!("Invalid chapter filename pattern: {e}"))
        })?;

        Ok(Self {
            root: root.into(),
            chapter_pattern,
        })
    }

    /// Corpus root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discover all books: immediate subdirectories of the root that
    /// contain at least one recognized chapter file, sorted by name.
    pub fn discover_books(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                LecternError::NotFound(format!("Corpus root: {:?}", self.root))
            } else {
                LecternError::IoError(e)
            }
        })?;

        let mut books = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Corpus root entry unreadable: {}", e);
                    continue;
                }
            };

            if !entry.path().is_dir() {
                continue;
            }

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };

            match self.book_has_chapters(&entry.path()) {
                Ok(true) => books.push(name),
                Ok(false) => {
                    tracing::debug!("Skipping directory without chapter files: {}", name);
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable book directory {}: {}", name, e);
                }
            }
        }

        books.sort();
        Ok(books)
    }

    /// Discover the chapter files of a book, sorted lexicographically
    /// by filename. Non-conforming filenames are ignored, as is a
    /// chapter numbered 0 (chapter numbers start at 1).
    pub fn discover_chapters(&self, book: &str) -> Result<Vec<ChapterFile>> {
        let book_dir = self.root.join(book);
        let entries = fs::read_dir(&book_dir).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                LecternError::NotFound(format!("Book directory: {book_dir:?}"))
            } else {
                LecternError::IoError(e)
            }
        })?;

        let mut chapters = Vec::new();
        for entry in entries.flatten() {
            let file_name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };

            let Some(number) = self.chapter_number(&file_name) else {
                continue;
            };
            if number == 0 {
                tracing::debug!("Ignoring chapter 0 file: {}", file_name);
                continue;
            }

            chapters.push(ChapterFile {
                number,
                path: entry.path(),
                file_name,
            });
        }

        chapters.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(chapters)
    }

    /// Read a chapter file's raw text
    pub fn read_chapter(&self, chapter: &ChapterFile) -> Result<String> {
        fs::read_to_string(&chapter.path).map_err(LecternError::IoError)
    }

    /// Parse the chapter number out of a filename, if it conforms
    fn chapter_number(&self, file_name: &str) -> Option<u32> {
        let caps = self.chapter_pattern.captures(file_name)?;
        // parse() strips leading zeros; absurdly long digit runs overflow
        caps.get(1)?.as_str().parse().ok()
    }

    fn book_has_chapters(&self, book_dir: &Path) -> std::io::Result<bool> {
        for entry in fs::read_dir(book_dir)?.flatten() {
            if let Ok(name) = entry.file_name().into_string() {
                if self.chapter_number(&name).is_some() {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
