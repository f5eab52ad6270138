//! Formatting utilities for terminal output

use crate::core::{GALLOWS_STAGES, GameState};
use crate::players::Player;

/// Gallows drawings indexed by the number of incorrect guesses
pub const GALLOWS: [&str; GALLOWS_STAGES] = [
    "  +---+\n      |\n      |\n      |\n     ===",
    "  +---+\n  O   |\n      |\n      |\n     ===",
    "  +---+\n  O   |\n  |   |\n      |\n     ===",
    "  +---+\n  O   |\n /|   |\n      |\n     ===",
    "  +---+\n  O   |\n /|\\  |\n      |\n     ===",
    "  +---+\n  O   |\n /|\\  |\n /    |\n     ===",
    "  +---+\n  O   |\n /|\\  |\n / \\  |\n     ===",
];

/// Gallows drawing for a round, clamped to the last stage
#[must_use]
pub fn gallows(state: &GameState) -> &'static str {
    GALLOWS[state.incorrect_count().min(GALLOWS_STAGES - 1)]
}

/// Guessed letters as a space separated list
#[must_use]
pub fn guessed_letters(state: &GameState) -> String {
    state
        .guessed()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Win rate as a percentage with one decimal
#[must_use]
pub fn win_rate_percent(player: &Player) -> String {
    format!("{:.1}%", player.win_rate() * 100.0)
}

/// One leaderboard line, ranks start at 1
#[must_use]
pub fn leaderboard_row(rank: usize, player: &Player) -> String {
    format!(
        "{rank}. {}: {} points (Games: {}, Wins: {}, Win Rate: {}, Hints: {})",
        player.name(),
        player.score,
        player.games_played,
        player.wins,
        win_rate_percent(player),
        player.hints_used
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Word};

    #[test]
    fn gallows_follows_mistakes() {
        let mut state = GameState::start_round(Word::new("A").unwrap());
        assert_eq!(gallows(&state), GALLOWS[0]);
        state.apply_guess(Letter::from_char('z').unwrap());
        assert_eq!(gallows(&state), GALLOWS[1]);
    }

    #[test]
    fn last_stage_is_complete_figure() {
        assert!(GALLOWS[GALLOWS_STAGES - 1].contains("/ \\"));
        assert!(!GALLOWS[0].contains('O'));
    }

    #[test]
    fn guessed_letters_sorted_and_spaced() {
        let mut state = GameState::start_round(Word::new("DOG").unwrap());
        for ch in ['o', 'x', 'b'] {
            state.apply_guess(Letter::from_char(ch).unwrap());
        }
        assert_eq!(guessed_letters(&state), "B O X");
    }

    #[test]
    fn leaderboard_row_layout() {
        let mut player = Player::new("Ann");
        player.score = 40;
        player.record_round(true);
        player.record_round(false);
        player.record_round(false);
        player.hints_used = 1;
        assert_eq!(
            leaderboard_row(1, &player),
            "1. Ann: 40 points (Games: 3, Wins: 1, Win Rate: 33.3%, Hints: 1)"
        );
    }

    #[test]
    fn win_rate_without_games() {
        assert_eq!(win_rate_percent(&Player::new("New")), "0.0%");
    }
}
