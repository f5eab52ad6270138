//! Player records and the leaderboard

mod registry;

pub use registry::{Player, PlayerRegistry};
