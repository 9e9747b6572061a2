//! Main Word Hunt solver interface

use super::curator::{DedupMode, RankTable, Views, curate};
use super::strategy::{Search, SearchType};
use crate::core::{Board, BoardError, Trie};
use log::debug;
use std::time::{Duration, Instant};

/// Tunables for a solver
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverOptions {
    pub search: SearchType,
    pub dedup: DedupMode,
}

impl SolverOptions {
    #[must_use]
    pub const fn new(search: SearchType, dedup: DedupMode) -> Self {
        Self { search, dedup }
    }
}

/// Result of solving one board
#[derive(Debug, Clone)]
pub struct Solution {
    pub views: Views,
    /// Number of distinct occurrences found
    pub count: usize,
    /// Time spent walking and curating (informational)
    pub elapsed: Duration,
}

/// Main Word Hunt solver
///
/// Holds the dictionary trie and rank table, both built once and immutable
/// afterwards, so one solver answers any number of boards.
#[derive(Debug, Clone)]
pub struct Solver {
    trie: Trie,
    ranks: RankTable,
    options: SolverOptions,
}

impl Solver {
    /// Create a solver from a dictionary and an optional frequency order
    ///
    /// # Parameters
    /// - `dictionary`: accepted words (length > 2)
    /// - `frequency_order`: most common first; ranks words by position
    /// - `options`: search strategy and dedup mode
    #[must_use]
    pub fn new<S: AsRef<str>>(
        dictionary: &[S],
        frequency_order: Option<&[S]>,
        options: SolverOptions,
    ) -> Self {
        let trie = Trie::from_words(dictionary);
        let ranks = frequency_order.map_or_else(RankTable::default, |order| {
            RankTable::new(order, dictionary)
        });

        debug!(
            "Built trie: {} words, {} nodes; {} ranked words",
            trie.len(),
            trie.node_count(),
            ranks.len()
        );

        Self {
            trie,
            ranks,
            options,
        }
    }

    /// Find and sort every occurrence on `board`
    ///
    /// # Examples
    /// ```
    /// use word_hunt::core::Board;
    /// use word_hunt::solver::{Solver, SolverOptions};
    ///
    /// let solver = Solver::new(&["cat"], None, SolverOptions::default());
    /// let board = Board::from_rows(&["catx", "xxxx", "xxxx", "xxxx"]).unwrap();
    ///
    /// let solution = solver.solve(&board);
    /// assert_eq!(solution.count, 1);
    /// assert_eq!(solution.views.all_words[0].word(), "cat");
    /// ```
    #[must_use]
    pub fn solve(&self, board: &Board) -> Solution {
        let start = Instant::now();

        let raw = self.options.search.search(board, &self.trie);
        let raw_count = raw.len();
        let views = curate(raw, &self.ranks, self.options.dedup);

        let elapsed = start.elapsed();
        let count = views.len();

        debug!(
            "Solved {board} with {} search: {raw_count} raw, {count} kept in {:.4}s",
            self.options.search.name(),
            elapsed.as_secs_f64()
        );

        Solution {
            views,
            count,
            elapsed,
        }
    }

    /// Parse `text` as a board and solve it
    ///
    /// # Errors
    /// Returns `BoardError` if `text` is not 16 ASCII letters.
    pub fn solve_str(&self, text: &str) -> Result<Solution, BoardError> {
        let board = Board::new(text)?;
        Ok(self.solve(&board))
    }

    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    #[must_use]
    pub const fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    #[must_use]
    pub const fn options(&self) -> SolverOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Path, Rank};
    use crate::solver::ViewKind;
    use crate::solver::strategy::ParallelSearch;
    use crate::wordlists::{FREQUENT, WORDS};

    fn solver(dictionary: &[&str], frequency: Option<&[&str]>) -> Solver {
        Solver::new(dictionary, frequency, SolverOptions::default())
    }

    #[test]
    fn no_adjacent_dictionary_letters() {
        let solver = solver(&["cat", "dog"], None);
        let solution = solver.solve_str("ABCDEFGHIJKLMNOP").unwrap();
        assert_eq!(solution.count, 0);
        for kind in ViewKind::ALL {
            assert!(solution.views.get(kind).is_empty());
        }
    }

    #[test]
    fn single_word_in_every_view_but_five() {
        let solver = solver(&["cat"], None);
        let board = Board::from_rows(&["catx", "xxxx", "xxxx", "xxxx"]).unwrap();
        let solution = solver.solve(&board);

        let expected = Path::new(vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
        for kind in [ViewKind::AllWords, ViewKind::SmallestFirst] {
            let view = solution.views.get(kind);
            assert_eq!(view.len(), 1);
            assert_eq!(view[0].word(), "cat");
            assert_eq!(view[0].path(), &expected);
        }
        assert!(solution.views.five_letter.is_empty());
    }

    #[test]
    fn frequency_rank_orders_results() {
        let solver = solver(&["cat", "cats"], Some(&["cats", "cat"]));
        let board = Board::from_rows(&["cats", "xxxx", "xxxx", "xxxx"]).unwrap();
        let solution = solver.solve(&board);

        assert!(solution.views.five_letter.is_empty());
        let first = &solution.views.all_words[0];
        assert_eq!(first.word(), "cats");
        assert_eq!(first.rank, Rank::new(0));
        assert_eq!(solution.views.all_words[1].rank, Rank::new(1));
        assert_eq!(solution.views.smallest_first[0].word(), "cat");
    }

    #[test]
    fn invalid_board_is_an_error() {
        let solver = solver(&["cat"], None);
        assert_eq!(
            solver.solve_str("abc").unwrap_err(),
            BoardError::InvalidLength(3)
        );
    }

    #[test]
    fn empty_dictionary_is_not_an_error() {
        let solver = solver(&[], None);
        let solution = solver.solve_str("abcdefghijklmnop").unwrap();
        assert_eq!(solution.count, 0);
    }

    #[test]
    fn word_dedup_mode_keeps_one_path_per_word() {
        let board = Board::from_rows(&["catx", "xaxx", "xxxx", "xxxx"]).unwrap();

        let by_path = solver(&["cat"], None).solve(&board);
        assert_eq!(by_path.count, 2);

        let by_word = Solver::new(
            &["cat"],
            None,
            SolverOptions::new(SearchType::default(), DedupMode::Word),
        )
        .solve(&board);
        assert_eq!(by_word.count, 1);
    }

    #[test]
    fn parallel_solver_matches_sequential() {
        let sequential = Solver::new(WORDS, Some(FREQUENT), SolverOptions::default());
        let parallel = Solver::new(
            WORDS,
            Some(FREQUENT),
            SolverOptions::new(SearchType::Parallel(ParallelSearch), DedupMode::Path),
        );
        let board = Board::new("stargatepolecrin").unwrap();
        assert_eq!(sequential.solve(&board).views, parallel.solve(&board).views);
    }

    #[test]
    fn embedded_lists_solve_real_board() {
        let solver = Solver::new(WORDS, Some(FREQUENT), SolverOptions::default());
        let board = Board::new("stargatepolecrin").unwrap();
        let solution = solver.solve(&board);

        assert!(solution.count > 0);
        assert_eq!(solution.count, solution.views.smallest_first.len());
        for result in &solution.views.all_words {
            assert!(result.occurrence.is_traced_on(&board));
        }
        let lengths: Vec<usize> = solution.views.all_words.iter().map(|r| r.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }
}
