//! Hints: one unguessed letter and where it sits in the word

use super::random::{RandomSource, choose};
use crate::core::{GameState, Letter};
use std::fmt;

/// A revealed letter with its 1-based positions in the secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub letter: Letter,
    pub positions: Vec<usize>,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The letter '{}' appears at position(s): {:?}",
            self.letter, self.positions
        )
    }
}

/// Pick a random unguessed letter of the secret
///
/// Each distinct unguessed letter is equally likely. The state is only read:
/// the hinted letter still has to be guessed. Returns `None` when every letter
/// has already been guessed.
pub fn offer_hint<R: RandomSource + ?Sized>(state: &GameState, rng: &mut R) -> Option<Hint> {
    let unguessed = state.unguessed_letters();
    let &letter = choose(rng, &unguessed)?;

    let positions = state
        .reveal()
        .positions_of(letter)
        .iter()
        .map(|&i| i + 1)
        .collect();

    Some(Hint { letter, positions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::testing::ScriptedRandom;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn hint_reports_one_based_positions() {
        let state = GameState::start_round(Word::new("BANANA").unwrap());
        // Distinct unguessed letters are B, A, N
        let hint = offer_hint(&state, &mut ScriptedRandom::new([1])).unwrap();
        assert_eq!(hint.letter, letter('A'));
        assert_eq!(hint.positions, vec![2, 4, 6]);
        assert_eq!(
            hint.to_string(),
            "The letter 'A' appears at position(s): [2, 4, 6]"
        );
    }

    #[test]
    fn hint_skips_guessed_letters() {
        let mut state = GameState::start_round(Word::new("CAT").unwrap());
        state.apply_guess(letter('C'));
        state.apply_guess(letter('T'));
        let hint = offer_hint(&state, &mut ScriptedRandom::new([0])).unwrap();
        assert_eq!(hint.letter, letter('A'));
        assert_eq!(hint.positions, vec![2]);
    }

    #[test]
    fn hint_does_not_mutate_state() {
        let state = GameState::start_round(Word::new("CAT").unwrap());
        let before = state.render();
        offer_hint(&state, &mut ScriptedRandom::new([2])).unwrap();
        assert_eq!(state.render(), before);
        assert_eq!(state.guessed().count(), 0);
        assert!(!state.hint_issued());
    }

    #[test]
    fn no_hint_when_everything_is_guessed() {
        let mut state = GameState::start_round(Word::new("AA").unwrap());
        state.apply_guess(letter('A'));
        assert_eq!(offer_hint(&state, &mut ScriptedRandom::new([0])), None);
    }
}
