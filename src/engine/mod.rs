//! Round machinery
//!
//! Scoring, hints, the per-round state machine and the blocking controller
//! that drives it.

pub mod controller;
pub mod hint;
pub mod random;
pub mod scoring;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{
    GuessRejection, InputProvider, LEADERBOARD_TITLE, Presenter, SessionController, SessionError,
    is_affirmative,
};
pub use hint::{Hint, offer_hint};
pub use random::{GameRng, RandomSource, choose};
pub use scoring::{HINT_PENALTY, POINTS_PER_CORRECT, ScoringEngine};
pub use session::{
    HINT_MIN_INCORRECT, HintGrant, HintRefusal, RoundFinished, RoundPhase, RoundSummary, Session,
    TurnReport,
};
