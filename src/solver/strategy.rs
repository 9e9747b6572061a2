//! Board search strategies
//!
//! Defines the Search trait and concrete implementations. Every strategy
//! returns the same set of occurrences; only the order and the threading differ.

use super::walker::{find_words, walk_from};
use crate::core::{Board, Coord, Occurrence, Trie};
use rayon::prelude::*;

/// A strategy for enumerating every occurrence on a board
pub trait Search {
    /// Find all (word, path) occurrences of `trie` words on `board`
    ///
    /// Output order is implementation-defined.
    fn search(&self, board: &Board, trie: &Trie) -> Vec<Occurrence>;
}

/// Walk the 16 start cells one after another on the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSearch;

impl Search for SequentialSearch {
    fn search(&self, board: &Board, trie: &Trie) -> Vec<Occurrence> {
        find_words(board, trie)
    }
}

/// Walk the 16 start cells on the rayon pool
///
/// Each start cell fills its own buffer; buffers are concatenated once all
/// walks have finished.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelSearch;

impl Search for ParallelSearch {
    fn search(&self, board: &Board, trie: &Trie) -> Vec<Occurrence> {
        let starts: Vec<Coord> = Coord::all().collect();
        starts
            .par_iter()
            .map(|&start| walk_from(board, trie, start))
            .flatten_iter()
            .collect()
    }
}

/// Enum wrapper for all search strategies
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum SearchType {
    /// Single-threaded walk (default)
    Sequential(SequentialSearch),
    /// One rayon task per start cell
    Parallel(ParallelSearch),
}

impl Default for SearchType {
    fn default() -> Self {
        Self::Sequential(SequentialSearch)
    }
}

impl Search for SearchType {
    fn search(&self, board: &Board, trie: &Trie) -> Vec<Occurrence> {
        match self {
            Self::Sequential(s) => s.search(board, trie),
            Self::Parallel(s) => s.search(board, trie),
        }
    }
}

impl SearchType {
    /// Create strategy from name string
    ///
    /// Supported names: "sequential", "parallel" (alias "rayon").
    /// Defaults to sequential if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "parallel" | "rayon" => Self::Parallel(ParallelSearch),
            _ => Self::Sequential(SequentialSearch),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sequential(_) => "sequential",
            Self::Parallel(_) => "parallel",
        }
    }
}
