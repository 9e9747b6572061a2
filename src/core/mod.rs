//! Core domain types for Word Hunt
//!
//! The board, the dictionary trie, and the occurrence value types. Everything
//! here is pure: no I/O, no rendering, no shared state.

mod board;
mod occurrence;
mod trie;

pub use board::{Board, BoardError, CELLS, Coord, SIZE};
pub use occurrence::{Occurrence, Path, Rank, RankedResult};
pub use trie::{MIN_WORD_LEN, NodeId, Trie};
