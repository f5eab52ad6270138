//! Command implementations

pub mod classic;
pub mod console;
pub mod play;
pub mod source;

pub use classic::{CLASSIC_PLAYER, run_classic};
pub use console::LineInput;
pub use play::{FINAL_TITLE, QUIT, run_play};
pub use source::{BUILTIN_NAME, WordListChoice};
