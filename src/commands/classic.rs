//! Single-player console mode with a replay prompt

use crate::core::Word;
use crate::engine::{
    InputProvider, Presenter, RandomSource, ScoringEngine, SessionController, SessionError,
};
use crate::players::PlayerRegistry;

/// Name recorded for the anonymous classic player
pub const CLASSIC_PLAYER: &str = "Player";

/// Play rounds until the player declines a replay
///
/// # Errors
///
/// Returns [`SessionError::EmptyWordSource`] when `words` is empty, or an I/O
/// error from reading input.
pub fn run_classic<R, I, P>(
    words: &[Word],
    scoring: ScoringEngine,
    rng: R,
    input: I,
    presenter: P,
) -> Result<PlayerRegistry, SessionError>
where
    R: RandomSource,
    I: InputProvider,
    P: Presenter,
{
    let mut registry = PlayerRegistry::new();
    let mut controller =
        SessionController::new(words, &mut registry, scoring, rng, input, presenter)
            .with_turn_leaderboard(false);

    loop {
        match controller.play_round(CLASSIC_PLAYER) {
            Ok(_) => {}
            Err(SessionError::InputClosed) => break,
            Err(e) => return Err(e),
        }

        if !controller
            .input_mut()
            .read_yes_no("\nDo you want to play again? (Y/N)")?
        {
            break;
        }
    }

    drop(controller);
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::{RecordingPresenter, ScriptedInput, ScriptedRandom};

    #[test]
    fn replays_until_declined() {
        let words = vec![Word::new("HI").unwrap()];
        let input = ScriptedInput::new(["H", "I", "y", "I", "H", "no"]);
        let mut presenter = RecordingPresenter::default();

        let registry = run_classic(
            &words,
            ScoringEngine::default(),
            ScriptedRandom::new([0]),
            input,
            &mut presenter,
        )
        .unwrap();

        let player = registry.get(CLASSIC_PLAYER).unwrap();
        assert_eq!((player.games_played, player.wins), (2, 2));
        assert_eq!(presenter.count("board"), 0);
    }

    #[test]
    fn empty_words_fail() {
        let result = run_classic(
            &[],
            ScoringEngine::default(),
            ScriptedRandom::new([0]),
            ScriptedInput::default(),
            RecordingPresenter::default(),
        );
        assert!(matches!(result, Err(SessionError::EmptyWordSource)));
    }
}
