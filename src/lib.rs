//! Hangman
//!
//! A terminal hangman game with per-player scores, a one-time hint per round,
//! and a leaderboard that lasts for the whole session.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Letter, Word};
//! use hangman::engine::{RoundPhase, ScoringEngine, Session};
//! use hangman::players::PlayerRegistry;
//!
//! let mut registry = PlayerRegistry::new();
//! let mut session = Session::start(Word::new("CAT").unwrap(), ScoringEngine::default());
//!
//! for ch in ['c', 'a', 't'] {
//!     let player = registry.get_or_create("Ann");
//!     session.guess(player, Letter::from_char(ch).unwrap()).unwrap();
//! }
//!
//! assert_eq!(session.phase(), RoundPhase::Won);
//! assert_eq!(registry.get("Ann").unwrap().score, 30);
//! ```

// Core domain types
pub mod core;

// Scoring, hints and round control
pub mod engine;

// Player records
pub mod players;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
