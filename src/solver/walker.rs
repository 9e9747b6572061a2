//! Trie-guided backtracking walk over the board
//!
//! Starting from one cell, the walk extends the current path into every
//! neighbouring cell whose letter continues a dictionary prefix. A branch is
//! cut as soon as it leaves the grid, revisits a cell, or spells a prefix no
//! dictionary word has.

use crate::core::{Board, CELLS, Coord, MIN_WORD_LEN, NodeId, Occurrence, Path, Trie};

/// Neighbour offsets as `(d_row, d_col)`
///
/// Order only affects the order in which occurrences are emitted.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Mutable state of one walk: the path so far, its letters, and a visited mask
struct Walk<'a> {
    board: &'a Board,
    trie: &'a Trie,
    path: Vec<Coord>,
    word: String,
    visited: u16,
    found: Vec<Occurrence>,
}

impl<'a> Walk<'a> {
    fn new(board: &'a Board, trie: &'a Trie) -> Self {
        Self {
            board,
            trie,
            path: Vec::with_capacity(CELLS),
            word: String::with_capacity(CELLS),
            visited: 0,
            found: Vec::new(),
        }
    }

    /// Try to extend the walk from `node` into `next`
    fn step(&mut self, node: NodeId, next: Coord) {
        let bit = 1u16 << next.index();
        if self.visited & bit != 0 {
            return;
        }

        let letter = self.board.letter(next);
        let Some(child) = self.trie.child(node, letter) else {
            return;
        };

        self.path.push(next);
        self.word.push(char::from(letter));
        self.visited |= bit;

        // Keep walking past a found word: longer words may share this prefix
        if self.trie.is_word(child) && self.path.len() >= MIN_WORD_LEN {
            self.found.push(Occurrence::new(
                self.word.clone(),
                Path::new(self.path.clone()),
            ));
        }

        for (d_row, d_col) in DIRECTIONS {
            if let Some(neighbour) = next.offset(d_row, d_col) {
                self.step(child, neighbour);
            }
        }

        self.visited &= !bit;
        self.word.pop();
        self.path.pop();
    }
}

/// All occurrences whose path starts at `start`
#[must_use]
pub fn walk_from(board: &Board, trie: &Trie, start: Coord) -> Vec<Occurrence> {
    let mut walk = Walk::new(board, trie);
    walk.step(trie.root(), start);
    walk.found
}

/// All occurrences on the board, walking each start cell in row-major order
#[must_use]
pub fn find_words(board: &Board, trie: &Trie) -> Vec<Occurrence> {
    Coord::all()
        .flat_map(|start| walk_from(board, trie, start))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn path(pairs: &[(usize, usize)]) -> Path {
        Path::new(pairs.iter().map(|&(r, c)| Coord::new(r, c)).collect())
    }

    #[test]
    fn no_adjacent_letters_finds_nothing() {
        let board = Board::new("ABCDEFGHIJKLMNOP").unwrap();
        let trie = Trie::from_words(["cat", "dog"]);
        assert!(find_words(&board, &trie).is_empty());
    }

    #[test]
    fn single_horizontal_word() {
        let board = Board::from_rows(&["catx", "xxxx", "xxxx", "xxxx"]).unwrap();
        let trie = Trie::from_words(["cat"]);
        let found = find_words(&board, &trie);
        assert_eq!(found, vec![Occurrence::new("cat".to_string(), path(&[(0, 0), (0, 1), (0, 2)]))]);
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let board = Board::new("abcdefghijklmnop").unwrap();
        let trie = Trie::new();
        assert!(find_words(&board, &trie).is_empty());
    }

    #[test]
    fn walk_continues_past_found_word() {
        let board = Board::from_rows(&["cats", "xxxx", "xxxx", "xxxx"]).unwrap();
        let trie = Trie::from_words(["cat", "cats"]);
        let words: Vec<String> = find_words(&board, &trie).into_iter().map(|o| o.word).collect();
        assert!(words.contains(&"cat".to_string()));
        assert!(words.contains(&"cats".to_string()));
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn diagonal_paths_found() {
        // c . . .
        // . a . .
        // . . t .
        let board = Board::from_rows(&["cxxx", "xaxx", "xxtx", "xxxx"]).unwrap();
        let trie = Trie::from_words(["cat"]);
        let found = find_words(&board, &trie);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, path(&[(0, 0), (1, 1), (2, 2)]));
    }

    #[test]
    fn cells_are_not_reused() {
        // "aaa" needs three distinct 'a' cells; "aba" would need to revisit with one 'a'
        let board = Board::from_rows(&["abxx", "xxxx", "xxxx", "xxxx"]).unwrap();
        let trie = Trie::from_words(["aba", "bab"]);
        assert!(find_words(&board, &trie).is_empty());
    }

    #[test]
    fn distinct_paths_are_distinct_occurrences() {
        // c a t
        // . a .
        let board = Board::from_rows(&["catx", "xaxx", "xxxx", "xxxx"]).unwrap();
        let trie = Trie::from_words(["cat"]);
        let found = find_words(&board, &trie);
        let paths: FxHashSet<Path> = found.iter().map(|o| o.path.clone()).collect();
        assert_eq!(found.len(), 2);
        assert!(paths.contains(&path(&[(0, 0), (0, 1), (0, 2)])));
        assert!(paths.contains(&path(&[(0, 0), (1, 1), (0, 2)])));
    }

    #[test]
    fn walk_emits_each_pair_once() {
        let board = Board::new("seratinolpadcmeu").unwrap();
        let trie = Trie::from_words(["rat", "rate", "tin", "tine", "sea", "seat", "ate", "tea"]);
        let found = find_words(&board, &trie);
        let unique: FxHashSet<&Occurrence> = found.iter().collect();
        assert_eq!(unique.len(), found.len());
    }

    #[test]
    fn every_occurrence_is_traced_on_board() {
        let board = Board::new("seratinolpadcmeu").unwrap();
        let trie = Trie::from_words(crate::wordlists::WORDS);
        let found = find_words(&board, &trie);
        assert!(!found.is_empty());
        for occurrence in &found {
            assert!(occurrence.len() >= MIN_WORD_LEN);
            assert!(occurrence.is_traced_on(&board), "bad path for {}", occurrence.word);
            assert!(trie.contains(&occurrence.word));
        }
    }

    #[test]
    fn walk_from_only_starts_at_start() {
        let board = Board::new("seratinolpadcmeu").unwrap();
        let trie = Trie::from_words(crate::wordlists::WORDS);
        let start = Coord::new(0, 0);
        for occurrence in walk_from(&board, &trie, start) {
            assert_eq!(occurrence.path.first(), Some(start));
        }
    }
}
