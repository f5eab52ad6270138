//! Terminal output formatting
//!
//! Gallows art, leaderboard rows and the console presenter.

pub mod display;
pub mod formatters;

pub use display::ConsolePresenter;
