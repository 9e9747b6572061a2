//! Interactive TUI interface
//!
//! Browse the three result views of a board, one word at a time.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
