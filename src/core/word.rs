//! Secret word representation
//!
//! A Word stores an uppercase word along with letter position indices for
//! scoring and hints.

use super::Letter;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// An uppercase alphabetic secret word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
    letter_positions: FxHashMap<Letter, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word {0:?} must contain only uppercase ASCII letters")]
    NotUppercaseAlphabetic(String),
}

impl Word {
    /// Create a new Word from an uppercase string
    ///
    /// Unlike guesses, words are not case-normalized: a lowercase or mixed-case
    /// word here means the word source broke its contract.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other than
    /// `A`-`Z`.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("CAT").unwrap();
    /// assert_eq!(word.text(), "CAT");
    ///
    /// assert!(Word::new("cat").is_err());
    /// assert!(Word::new("C4T").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::NotUppercaseAlphabetic(text));
        }

        let letters: Vec<Letter> = text.chars().filter_map(Letter::from_char).collect();

        let mut letter_positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            letter_positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            letter_positions,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept alongside `len` for clippy
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all 0-based positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn occurrences(&self, letter: Letter) -> usize {
        self.positions_of(letter).len()
    }

    /// Distinct letters in order of first appearance
    pub fn distinct_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(|&(i, letter)| self.positions_of(*letter).first() == Some(&i))
            .map(|(_, &letter)| letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
