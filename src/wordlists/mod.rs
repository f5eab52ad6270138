//! Word sources for hangman
//!
//! A [`WordSource`] produces the eligible secret words. The bundled list is
//! compiled into the binary; custom lists are read from line-oriented files.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN, BUILTIN_COUNT};

use crate::core::Word;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("Word list file not found or unreadable at '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No words available to play.")]
    Empty,
}

/// Supplies the eligible secret words
pub trait WordSource {
    /// Load every eligible word
    ///
    /// # Errors
    /// Returns [`WordSourceError::Empty`] when nothing is playable, or
    /// [`WordSourceError::Unreadable`] when the source cannot be read.
    fn load(&self) -> Result<Vec<Word>, WordSourceError>;
}

fn non_empty(words: Vec<Word>) -> Result<Vec<Word>, WordSourceError> {
    if words.is_empty() {
        Err(WordSourceError::Empty)
    } else {
        Ok(words)
    }
}

/// The list bundled with the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinWordSource;

impl WordSource for BuiltinWordSource {
    fn load(&self) -> Result<Vec<Word>, WordSourceError> {
        non_empty(loader::words_from_slice(BUILTIN))
    }
}

/// A word list file, one entry per line
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn load(&self) -> Result<Vec<Word>, WordSourceError> {
        let words = loader::load_from_file(&self.path).map_err(|source| {
            tracing::warn!(path = %self.path.display(), error = %source, "word list unreadable");
            WordSourceError::Unreadable {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::info!(path = %self.path.display(), words = words.len(), "word list loaded");
        non_empty(words)
    }
}
