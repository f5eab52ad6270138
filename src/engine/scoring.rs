//! Score deltas for guesses and hints

use crate::players::Player;

/// Points for each occurrence of a correctly guessed letter
pub const POINTS_PER_CORRECT: u32 = 10;

/// Points deducted for taking a hint
pub const HINT_PENALTY: u32 = 5;

/// Stateless scoring rules
///
/// Correct guesses earn points per occurrence, so a letter that appears three
/// times is worth three times as much. Scores never go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringEngine {
    pub points_per_correct: u32,
    pub hint_penalty: u32,
}

impl ScoringEngine {
    #[must_use]
    pub const fn new(points_per_correct: u32, hint_penalty: u32) -> Self {
        Self {
            points_per_correct,
            hint_penalty,
        }
    }

    /// Points for a correct guess that revealed `occurrences` letters
    #[must_use]
    pub fn score_for_correct_guess(&self, occurrences: usize) -> u32 {
        u32::try_from(occurrences)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.points_per_correct)
    }

    pub fn award(&self, player: &mut Player, points: u32) {
        player.score = player.score.saturating_add(points);
    }

    /// Charge a player for a hint
    ///
    /// Returns the points actually deducted, which is less than the penalty
    /// when the score was already low.
    pub fn apply_hint_penalty(&self, player: &mut Player) -> u32 {
        let deducted = player.score.min(self.hint_penalty);
        player.score -= deducted;
        player.hints_used += 1;
        deducted
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(POINTS_PER_CORRECT, HINT_PENALTY)
    }
}
