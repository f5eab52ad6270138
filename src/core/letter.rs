//! A single guessable letter

use std::fmt;
use thiserror::Error;

/// An uppercase ASCII letter (`A`-`Z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// Why a raw guess could not be turned into a [`Letter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessInputError {
    #[error("Please enter a single letter.")]
    NotSingleCharacter,
    #[error("Please enter a valid alphabet letter.")]
    NotAlphabetic,
}

impl Letter {
    /// Parse a raw line of player input into a letter
    ///
    /// Surrounding whitespace is ignored and lowercase input is accepted.
    ///
    /// # Errors
    /// Returns [`GuessInputError::NotSingleCharacter`] for empty or multi-character
    /// input, and [`GuessInputError::NotAlphabetic`] for a single non-letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse(" q\n").unwrap().as_char(), 'Q');
    /// assert!(Letter::parse("ab").is_err());
    /// assert!(Letter::parse("7").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, GuessInputError> {
        let mut chars = raw.trim().chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(GuessInputError::NotSingleCharacter);
        };
        Self::from_char(ch).ok_or(GuessInputError::NotAlphabetic)
    }

    /// Build a letter from a character, normalizing case
    ///
    /// Returns `None` for anything outside the ASCII alphabet.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self((ch as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
