//! State of a single hangman round
//!
//! `GameState` knows nothing about players, scores or randomness. It only tracks
//! which letters have been guessed against a fixed secret word.

use super::{Letter, Word};
use std::collections::BTreeSet;

/// Number of gallows drawings, from the empty gallows to the full figure
pub const GALLOWS_STAGES: usize = 7;

/// Incorrect guesses that end a round as a loss
pub const MAX_INCORRECT: usize = GALLOWS_STAGES - 1;

/// Placeholder shown for letters not yet guessed
pub const MASK_CHAR: char = '_';

/// Result of applying one guess to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word `occurrences` times
    Correct { occurrences: usize },
    Incorrect,
    /// The letter was guessed earlier; nothing changed
    AlreadyGuessed,
}

/// One active round: secret word, guessed letters, mistakes and hint usage
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    guessed: BTreeSet<Letter>,
    incorrect: usize,
    hint_issued: bool,
}

impl GameState {
    /// Start a round around an already validated word
    ///
    /// Validation happens when the [`Word`] is built, so a round can never begin
    /// with an empty or non-alphabetic secret.
    #[must_use]
    pub const fn start_round(secret: Word) -> Self {
        Self {
            secret,
            guessed: BTreeSet::new(),
            incorrect: 0,
            hint_issued: false,
        }
    }

    /// Apply a guess
    ///
    /// Repeated letters are reported as [`GuessOutcome::AlreadyGuessed`] and leave
    /// the state untouched, so they never cost an incorrect guess.
    pub fn apply_guess(&mut self, letter: Letter) -> GuessOutcome {
        if !self.guessed.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        match self.secret.occurrences(letter) {
            0 => {
                self.incorrect += 1;
                GuessOutcome::Incorrect
            }
            occurrences => GuessOutcome::Correct { occurrences },
        }
    }

    /// True once every distinct letter of the secret has been guessed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.secret
            .letters()
            .iter()
            .all(|letter| self.guessed.contains(letter))
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.incorrect >= MAX_INCORRECT
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Masked display of the secret, e.g. `C _ T`
    #[must_use]
    pub fn render(&self) -> String {
        self.secret
            .letters()
            .iter()
            .map(|letter| {
                if self.guessed.contains(letter) {
                    letter.as_char()
                } else {
                    MASK_CHAR
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The secret word, for the end-of-round reveal
    #[must_use]
    pub const fn reveal(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Guessed letters in alphabetical order
    pub fn guessed(&self) -> impl Iterator<Item = Letter> + '_ {
        self.guessed.iter().copied()
    }

    /// Letters of the secret not yet guessed, distinct, in order of first appearance
    #[must_use]
    pub fn unguessed_letters(&self) -> Vec<Letter> {
        self.secret
            .distinct_letters()
            .filter(|letter| !self.guessed.contains(letter))
            .collect()
    }

    #[must_use]
    pub const fn incorrect_count(&self) -> usize {
        self.incorrect
    }

    #[must_use]
    pub const fn remaining_incorrect(&self) -> usize {
        MAX_INCORRECT.saturating_sub(self.incorrect)
    }

    #[must_use]
    pub const fn hint_issued(&self) -> bool {
        self.hint_issued
    }

    pub(crate) fn mark_hint_issued(&mut self) {
        self.hint_issued = true;
    }
}
