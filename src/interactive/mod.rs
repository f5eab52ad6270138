//! Full-screen terminal interface

mod app;
mod rendering;

pub use app::{App, HINT_KEY, InputMode, Message, MessageStyle, run_tui};
