//! Board solving command
//!
//! Solves one board and selects the requested view for display.

use crate::core::{Board, BoardError, RankedResult};
use crate::solver::{Solver, ViewKind};
use std::time::Duration;

/// Configuration for solving a board
pub struct SolveConfig {
    pub board: String,
    pub view: ViewKind,
    pub limit: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(board: String) -> Self {
        Self {
            board,
            view: ViewKind::AllWords,
            limit: None,
        }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    pub view: ViewKind,
    /// Entries of the chosen view, truncated to the limit
    pub results: Vec<RankedResult>,
    /// Length of the chosen view before truncation
    pub view_total: usize,
    /// Distinct occurrences on the board
    pub count: usize,
    pub elapsed: Duration,
}

/// Solve a board and keep the requested view
///
/// # Errors
///
/// Returns `BoardError` if the board text is not exactly 16 ASCII letters.
pub fn solve_board(config: SolveConfig, solver: &Solver) -> Result<SolveResult, BoardError> {
    let board = Board::new(&config.board)?;
    let solution = solver.solve(&board);

    let view = solution.views.get(config.view);
    let view_total = view.len();
    let take = config.limit.unwrap_or(view_total);

    Ok(SolveResult {
        results: view.iter().take(take).cloned().collect(),
        board,
        view: config.view,
        view_total,
        count: solution.count,
        elapsed: solution.elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverOptions;
    use crate::wordlists::{FREQUENT, WORDS};

    fn embedded_solver() -> Solver {
        Solver::new(WORDS, Some(FREQUENT), SolverOptions::default())
    }

    #[test]
    fn solve_board_succeeds() {
        let solver = embedded_solver();
        let result = solve_board(SolveConfig::new("stargatepolecrin".to_string()), &solver).unwrap();

        assert!(result.count > 0);
        assert_eq!(result.view, ViewKind::AllWords);
        assert_eq!(result.results.len(), result.view_total);
        assert_eq!(result.view_total, result.count);
    }

    #[test]
    fn solve_respects_limit() {
        let solver = embedded_solver();
        let mut config = SolveConfig::new("stargatepolecrin".to_string());
        config.limit = Some(3);

        let result = solve_board(config, &solver).unwrap();
        assert_eq!(result.results.len(), 3.min(result.view_total));
    }

    #[test]
    fn solve_five_letter_view() {
        let solver = embedded_solver();
        let mut config = SolveConfig::new("stargatepolecrin".to_string());
        config.view = ViewKind::FiveLetter;

        let result = solve_board(config, &solver).unwrap();
        assert!(result.results.iter().all(|r| r.len() == 5));
        assert!(result.view_total <= result.count);
    }

    #[test]
    fn solve_invalid_board_returns_error() {
        let solver = embedded_solver();
        let result = solve_board(SolveConfig::new("tooshort".to_string()), &solver);
        assert!(matches!(result, Err(BoardError::InvalidLength(8))));
    }
}
