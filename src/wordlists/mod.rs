//! Word lists for Word Hunt solving
//!
//! Provides an embedded dictionary and frequency order compiled into the
//! binary, plus loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{FREQUENT, FREQUENT_COUNT, WORDS, WORDS_COUNT};
