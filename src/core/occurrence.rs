//! Occurrences of words on a board
//!
//! An occurrence is one concrete (word, path) finding. The same word traced
//! along two different paths is two occurrences.

use super::board::{Board, Coord};
use std::fmt;

/// Frequency rank: position in a popularity ordering, lower is more common
///
/// Unranked words carry [`Rank::UNRANKED`], which sorts after every concrete rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u32);

impl Rank {
    /// Rank of words absent from the frequency list
    pub const UNRANKED: Self = Self(u32::MAX);

    /// Create a rank from a list position
    ///
    /// Positions beyond `u32::MAX - 1` saturate just below `UNRANKED`.
    #[inline]
    #[must_use]
    pub fn new(position: usize) -> Self {
        Self(u32::try_from(position).map_or(u32::MAX - 1, |p| p.min(u32::MAX - 1)))
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_ranked(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for Rank {
    fn default() -> Self {
        Self::UNRANKED
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ranked() {
            write!(f, "#{}", self.0)
        } else {
            write!(f, "unranked")
        }
    }
}

/// An ordered, self-avoiding sequence of adjacent grid coordinates
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Path(Vec<Coord>);

impl Path {
    #[must_use]
    pub const fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    #[inline]
    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<Coord> {
        self.0.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Coord> {
        self.0.last().copied()
    }

    /// Position of a coordinate along the path, if it is on it
    #[must_use]
    pub fn step_of(&self, coord: Coord) -> Option<usize> {
        self.0.iter().position(|&c| c == coord)
    }

    /// Check the path shape: distinct coordinates, consecutive cells adjacent
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let mut seen: u16 = 0;
        for &coord in &self.0 {
            let bit = 1 << coord.index();
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Row/column pairs, for consumers that want plain integers
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.0.iter().map(|c| (c.row, c.col)).collect()
    }
}

impl From<Vec<Coord>> for Path {
    fn from(coords: Vec<Coord>) -> Self {
        Self(coords)
    }
}

/// A (word, path) finding on a board
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Occurrence {
    pub word: String,
    pub path: Path,
}

impl Occurrence {
    #[must_use]
    pub const fn new(word: String, path: Path) -> Self {
        Self { word, path }
    }

    /// Word length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Check that the path is valid and spells the word on `board`
    #[must_use]
    pub fn is_traced_on(&self, board: &Board) -> bool {
        self.path.len() == self.len()
            && self.path.is_valid()
            && board.spell(self.path.coords()) == self.word
    }
}

/// An occurrence with its resolved frequency rank
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedResult {
    pub occurrence: Occurrence,
    pub rank: Rank,
}

impl RankedResult {
    #[must_use]
    pub const fn new(occurrence: Occurrence, rank: Rank) -> Self {
        Self { occurrence, rank }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.occurrence.word
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.occurrence.path
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.occurrence.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occurrence.is_empty()
    }
}
