//! Choosing the word source

use crate::core::Word;
use crate::engine::InputProvider;
use crate::wordlists::{BuiltinWordSource, FileWordSource, WordSource, WordSourceError};
use std::io;
use std::path::PathBuf;

/// `--wordlist` value selecting the bundled list
pub const BUILTIN_NAME: &str = "builtin";

/// Where the secret words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListChoice {
    Builtin,
    File(PathBuf),
}

impl WordListChoice {
    /// Interpret a `--wordlist` argument: `builtin` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case(BUILTIN_NAME) {
            Self::Builtin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Ask the player which list to use
    ///
    /// Returns `None` if input ends before a path is given.
    ///
    /// # Errors
    /// Returns any I/O error from reading input.
    pub fn prompt<I: InputProvider + ?Sized>(input: &mut I) -> io::Result<Option<Self>> {
        if input.read_yes_no("Use the built-in word list? (Y/N)")? {
            return Ok(Some(Self::Builtin));
        }
        Ok(input
            .read_line("Enter word list file path")?
            .map(|path| Self::File(PathBuf::from(path.trim()))))
    }
}

impl WordSource for WordListChoice {
    fn load(&self) -> Result<Vec<Word>, WordSourceError> {
        match self {
            Self::Builtin => BuiltinWordSource.load(),
            Self::File(path) => FileWordSource::new(path.clone()).load(),
        }
    }
}
