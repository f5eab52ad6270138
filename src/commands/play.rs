//! Multi-player console mode
//!
//! Asks for a player name, plays one round for that player, shows the
//! leaderboard, and repeats until `quit`.

use crate::core::Word;
use crate::engine::{
    InputProvider, LEADERBOARD_TITLE, Presenter, RandomSource, ScoringEngine, SessionController,
    SessionError,
};
use crate::players::PlayerRegistry;

/// Name that ends the game instead of starting a round
pub const QUIT: &str = "quit";

/// Heading for the leaderboard shown on exit
pub const FINAL_TITLE: &str = "Final Scores:";

/// Run the named-player game loop
///
/// Returns the registry so the caller can inspect final standings. End of
/// input is treated like `quit`.
///
/// # Errors
///
/// Returns [`SessionError::EmptyWordSource`] before asking for any name when
/// `words` is empty, or an I/O error from reading input.
pub fn run_play<R, I, P>(
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
    if words.is_empty() {
        return Err(SessionError::EmptyWordSource);
    }

    let mut registry = PlayerRegistry::new();
    let mut controller =
        SessionController::new(words, &mut registry, scoring, rng, input, presenter);

    loop {
        let Some(line) = controller
            .input_mut()
            .read_line("\nEnter player name (or 'quit' to exit)")?
        else {
            break;
        };

        let name = line.trim();
        if name.eq_ignore_ascii_case(QUIT) {
            break;
        }
        if name.is_empty() {
            continue;
        }

        match controller.play_round(name) {
            Ok(_) => {}
            Err(SessionError::InputClosed) => break,
            Err(e) => return Err(e),
        }
        controller.show_leaderboard(LEADERBOARD_TITLE);
    }

    controller.show_leaderboard(FINAL_TITLE);
    drop(controller);
    Ok(registry)
}
