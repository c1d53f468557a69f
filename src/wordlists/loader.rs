//! Word list loading utilities
//!
//! Provides the [`WordList`] container and the built-in and file-backed
//! [`WordSource`] implementations.

use super::embedded::WORDS;
use log::info;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Ordered, read-only sequence of dictionary words
///
/// Entries keep their original case and order; duplicates are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse a newline-separated word list
    ///
    /// Lines are trimmed; blank lines and lines starting with `#` are skipped.
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::wordlists::WordList;
    ///
    /// let list = WordList::from_lines("# header\nant\n\n  Tan \n");
    /// assert_eq!(list.as_slice(), ["ant", "Tan"]);
    /// ```
    #[must_use]
    pub fn from_lines(content: &str) -> Self {
        let words = content
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();

        Self { words }
    }

    /// Convert an embedded string slice to a word list
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self {
            words: slice.iter().map(|&s| s.to_string()).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words as string slices, in order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Error type for word sources that fail to produce a list
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Empty { path: PathBuf },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty { path } => {
                write!(f, "Word list {} contains no words", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Supplier of the dictionary the filters run against
///
/// The filters never call this; callers load once and pass the list in.
pub trait WordSource {
    /// Produce the ordered word list
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the underlying storage cannot be read or holds
    /// no words.
    fn load(&self) -> Result<WordList, LoadError>;

    /// Human-readable description for logs and headers
    fn name(&self) -> String;
}

/// Dictionary compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn load(&self) -> Result<WordList, LoadError> {
        let list = WordList::from_slice(WORDS);
        info!("loaded {} built-in words", list.len());
        Ok(list)
    }

    fn name(&self) -> String {
        "builtin".to_string()
    }
}

/// Newline-separated word list on disk
#[derive(Debug, Clone)]
pub struct FileWords {
    path: PathBuf,
}

impl FileWords {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl WordSource for FileWords {
    fn load(&self) -> Result<WordList, LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let list = WordList::from_lines(&content);
        if list.is_empty() {
            return Err(LoadError::Empty {
                path: self.path.clone(),
            });
        }

        info!("loaded {} words from {}", list.len(), self.path.display());
        Ok(list)
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Select a word source from a CLI value
///
/// `"builtin"` selects the embedded dictionary; anything else is a file path.
#[must_use]
pub fn source_from_name(name: &str) -> Box<dyn WordSource> {
    match name {
        "builtin" => Box::new(EmbeddedWords),
        path => Box::new(FileWords::new(path)),
    }
}
