//! One round as a state machine
//!
//! `AwaitingGuess` moves to `Won` or `Lost` and never back. Points and hint
//! penalties are written to the player as the round progresses; the win or
//! loss is left to the caller, which records it in the registry from
//! [`Session::summary`].

use super::hint::{Hint, offer_hint};
use super::random::RandomSource;
use super::scoring::ScoringEngine;
use crate::core::{GameState, GuessOutcome, Letter, MAX_INCORRECT, Word};
use crate::players::Player;
use thiserror::Error;

/// Incorrect guesses after which a hint may be requested
pub const HINT_MIN_INCORRECT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingGuess,
    Won,
    Lost,
}

impl RoundPhase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// What happened on one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub letter: Letter,
    pub outcome: GuessOutcome,
    pub points: u32,
    pub phase: RoundPhase,
}

/// Outcome of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub word: Word,
    pub won: bool,
    pub incorrect: usize,
    pub points_earned: u32,
    pub hint_used: bool,
    pub penalty_paid: u32,
}

/// A hint that was given, and what it cost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintGrant {
    pub hint: Hint,
    pub deducted: u32,
}

/// Guess submitted after the round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the round is already over")]
pub struct RoundFinished;

/// Why a hint was not given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HintRefusal {
    #[error("Hints unlock after {required} incorrect guesses.")]
    NotYetEligible { required: usize },
    #[error("You have already used your hint this round.")]
    AlreadyUsed,
    #[error("No more hints available.")]
    NothingToReveal,
    #[error("The round is already over.")]
    RoundFinished,
}

/// A single round in progress
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    scoring: ScoringEngine,
    phase: RoundPhase,
    points_earned: u32,
    penalty_paid: u32,
}

impl Session {
    #[must_use]
    pub const fn start(word: Word, scoring: ScoringEngine) -> Self {
        Self {
            state: GameState::start_round(word),
            scoring,
            phase: RoundPhase::AwaitingGuess,
            points_earned: 0,
            penalty_paid: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub const fn scoring(&self) -> ScoringEngine {
        self.scoring
    }

    /// Whether a hint could be taken right now
    #[must_use]
    pub fn hint_eligible(&self) -> bool {
        self.check_hint_gate().is_ok()
    }

    fn check_hint_gate(&self) -> Result<(), HintRefusal> {
        if self.phase.is_terminal() {
            return Err(HintRefusal::RoundFinished);
        }
        if self.state.hint_issued() {
            return Err(HintRefusal::AlreadyUsed);
        }
        let incorrect = self.state.incorrect_count();
        if incorrect >= MAX_INCORRECT - 1 || incorrect >= HINT_MIN_INCORRECT {
            Ok(())
        } else {
            Err(HintRefusal::NotYetEligible {
                required: HINT_MIN_INCORRECT.min(MAX_INCORRECT - 1),
            })
        }
    }

    /// Reveal one unguessed letter and charge the player for it
    ///
    /// # Errors
    /// Returns a [`HintRefusal`] if the round is over, a hint was already used,
    /// too few incorrect guesses have been made, or nothing is left to reveal.
    /// A refused hint costs nothing.
    pub fn take_hint<R: RandomSource + ?Sized>(
        &mut self,
        player: &mut Player,
        rng: &mut R,
    ) -> Result<HintGrant, HintRefusal> {
        self.check_hint_gate()?;
        let hint = offer_hint(&self.state, rng).ok_or(HintRefusal::NothingToReveal)?;

        self.state.mark_hint_issued();
        let deducted = self.scoring.apply_hint_penalty(player);
        self.penalty_paid = self.penalty_paid.saturating_add(deducted);

        tracing::debug!(
            player = player.name(),
            letter = %hint.letter,
            deducted,
            "hint given"
        );
        Ok(HintGrant { hint, deducted })
    }

    /// Apply a guess for `player`
    ///
    /// A repeated letter comes back as [`GuessOutcome::AlreadyGuessed`] without
    /// changing anything; callers should ask again.
    ///
    /// # Errors
    /// Returns [`RoundFinished`] once the round is won or lost.
    pub fn guess(&mut self, player: &mut Player, letter: Letter) -> Result<TurnReport, RoundFinished> {
        if self.phase.is_terminal() {
            return Err(RoundFinished);
        }

        let outcome = self.state.apply_guess(letter);
        let points = match outcome {
            GuessOutcome::Correct { occurrences } => {
                let points = self.scoring.score_for_correct_guess(occurrences);
                self.scoring.award(player, points);
                self.points_earned = self.points_earned.saturating_add(points);
                points
            }
            GuessOutcome::Incorrect | GuessOutcome::AlreadyGuessed => 0,
        };

        tracing::debug!(
            player = player.name(),
            %letter,
            ?outcome,
            points,
            incorrect = self.state.incorrect_count(),
            "guess applied"
        );

        if self.state.is_won() {
            self.finish(player, RoundPhase::Won);
        } else if self.state.is_lost() {
            self.finish(player, RoundPhase::Lost);
        }

        Ok(TurnReport {
            letter,
            outcome,
            points,
            phase: self.phase,
        })
    }

    fn finish(&mut self, player: &Player, phase: RoundPhase) {
        let won = phase == RoundPhase::Won;
        self.phase = phase;
        tracing::debug!(
            player = player.name(),
            won,
            word = self.state.reveal().text(),
            points = self.points_earned,
            "round finished"
        );
    }

    /// Summary of the round, once it has finished
    #[must_use]
    pub fn summary(&self) -> Option<RoundSummary> {
        self.phase.is_terminal().then(|| RoundSummary {
            word: self.state.reveal().clone(),
            won: self.phase == RoundPhase::Won,
            incorrect: self.state.incorrect_count(),
            points_earned: self.points_earned,
            hint_used: self.state.hint_issued(),
            penalty_paid: self.penalty_paid,
        })
    }
}
