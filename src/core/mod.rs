//! Core domain types for hangman
//!
//! Letters, secret words and the per-round game state. Nothing here touches
//! players, randomness or the terminal.

mod letter;
mod state;
mod word;

pub use letter::{GuessInputError, Letter};
pub use state::{GALLOWS_STAGES, GameState, GuessOutcome, MASK_CHAR, MAX_INCORRECT};
pub use word::{Word, WordError};
