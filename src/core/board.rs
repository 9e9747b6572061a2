//! Word Hunt board representation
//!
//! A Board stores the 4×4 grid of lowercase letters, read row-major from a
//! 16-character input string.

use std::fmt;
use thiserror::Error;

/// Side length of the grid
pub const SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELLS: usize = SIZE * SIZE;

/// A grid position as `(row, col)`, each in `0..SIZE`
///
/// Ordering is row-major, which gives paths a stable total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major cell index (0-15)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Step by a signed offset, returning `None` when the result leaves the grid
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// 8-directional adjacency: differ by at most one in each axis, not equal
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let d_row = self.row.abs_diff(other.row);
        let d_col = self.col.abs_diff(other.col);
        d_row <= 1 && d_col <= 1 && (d_row | d_col) != 0
    }

    /// Iterate every cell of the grid in row-major order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELLS).map(|i| Self::new(i / SIZE, i % SIZE))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error type for invalid board input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Please enter exactly 16 letters (got {0})")]
    InvalidLength(usize),
    #[error("Board may only contain letters A-Z, found '{0}'")]
    NonAlphabetic(char),
}

/// An immutable 4×4 Word Hunt grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[u8; SIZE]; SIZE],
}

impl Board {
    /// Create a board from 16 letters, read row-major
    ///
    /// Input is case-insensitive and stored lowercase.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - The input is not exactly 16 characters
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use word_hunt::core::{Board, Coord};
    ///
    /// let board = Board::new("CATXxxxxxxxxxxxx").unwrap();
    /// assert_eq!(board.letter(Coord::new(0, 1)), b'a');
    ///
    /// assert!(Board::new("short").is_err());
    /// assert!(Board::new("abcdefghijklmno1").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, BoardError> {
        let count = text.chars().count();
        if count != CELLS {
            return Err(BoardError::InvalidLength(count));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(BoardError::NonAlphabetic(bad));
        }

        let mut cells = [[0u8; SIZE]; SIZE];
        for (i, byte) in text.bytes().enumerate() {
            cells[i / SIZE][i % SIZE] = byte.to_ascii_lowercase();
        }

        Ok(Self { cells })
    }

    /// Create a board from four row strings of four letters each
    ///
    /// # Errors
    /// Same conditions as [`Board::new`] on the concatenated rows.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        Self::new(&rows.concat())
    }

    /// Letter at a coordinate
    ///
    /// # Panics
    /// Panics if the coordinate is outside the grid
    #[inline]
    #[must_use]
    pub const fn letter(&self, coord: Coord) -> u8 {
        self.cells[coord.row][coord.col]
    }

    /// The grid as rows of bytes
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// Spell the letters along a sequence of coordinates
    #[must_use]
    pub fn spell(&self, coords: &[Coord]) -> String {
        coords.iter().map(|&c| char::from(self.letter(c))).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &byte in row {
                write!(f, "{}", char::from(byte))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_creation_valid() {
        let board = Board::new("abcdefghijklmnop").unwrap();
        assert_eq!(board.letter(Coord::new(0, 0)), b'a');
        assert_eq!(board.letter(Coord::new(0, 3)), b'd');
        assert_eq!(board.letter(Coord::new(1, 0)), b'e');
        assert_eq!(board.letter(Coord::new(3, 3)), b'p');
    }

    #[test]
    fn board_creation_uppercase_normalized() {
        let board = Board::new("ABCDEFGHIJKLMNOP").unwrap();
        assert_eq!(board.to_string(), "abcdefghijklmnop");

        let mixed = Board::new("AbCdEfGhIjKlMnOp").unwrap();
        assert_eq!(board, mixed);
    }

    #[test]
    fn board_creation_invalid_length() {
        assert!(matches!(
            Board::new("abcdefghijklmno"),
            Err(BoardError::InvalidLength(15))
        ));
        assert!(matches!(
            Board::new("abcdefghijklmnopq"),
            Err(BoardError::InvalidLength(17))
        ));
        assert!(matches!(Board::new(""), Err(BoardError::InvalidLength(0))));
    }

    #[test]
    fn board_creation_counts_characters_not_bytes() {
        // 16 characters, 17 bytes
        let err = Board::new("abcdefghijklmnoé").unwrap_err();
        assert_eq!(err, BoardError::NonAlphabetic('é'));
    }

    #[test]
    fn board_creation_invalid_characters() {
        assert_eq!(
            Board::new("abcdefghijklmno1"),
            Err(BoardError::NonAlphabetic('1'))
        );
        assert_eq!(
            Board::new("abcd efghijklmno"),
            Err(BoardError::NonAlphabetic(' '))
        );
    }

    #[test]
    fn board_error_messages() {
        assert_eq!(
            BoardError::InvalidLength(3).to_string(),
            "Please enter exactly 16 letters (got 3)"
        );
    }

    #[test]
    fn board_from_rows() {
        let board = Board::from_rows(&["catx", "xxxx", "xxxx", "xxxx"]).unwrap();
        assert_eq!(board.spell(&[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]), "cat");
    }

    #[test]
    fn coord_adjacency() {
        let center = Coord::new(1, 1);
        let neighbours: Vec<Coord> = Coord::all().filter(|&c| center.is_adjacent(c)).collect();
        assert_eq!(neighbours.len(), 8);
        assert!(!center.is_adjacent(center));
        assert!(!Coord::new(0, 0).is_adjacent(Coord::new(0, 2)));
        assert!(Coord::new(3, 3).is_adjacent(Coord::new(2, 2)));
    }

    #[test]
    fn coord_offset_stays_on_grid() {
        assert_eq!(Coord::new(0, 0).offset(-1, 0), None);
        assert_eq!(Coord::new(3, 3).offset(0, 1), None);
        assert_eq!(Coord::new(2, 2).offset(1, -1), Some(Coord::new(3, 1)));
    }

    #[test]
    fn coord_all_is_row_major() {
        let cells: Vec<Coord> = Coord::all().collect();
        assert_eq!(cells.len(), CELLS);
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[5], Coord::new(1, 1));
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
    }
}
