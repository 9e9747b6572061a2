//! Word Hunt Solver
//!
//! Finds every dictionary word hidden in a 4×4 letter grid, where a word is a
//! path of 8-directionally adjacent cells that never revisits a cell.
//!
//! # Quick Start
//!
//! ```rust
//! use word_hunt::core::Board;
//! use word_hunt::solver::{Solver, SolverOptions};
//!
//! let dictionary = ["cat", "cats", "act"];
//! let frequency = ["cats", "cat"];
//! let solver = Solver::new(&dictionary, Some(&frequency[..]), SolverOptions::default());
//!
//! let board = Board::new("CATSXXXXXXXXXXXX").unwrap();
//! let solution = solver.solve(&board);
//!
//! for result in &solution.views.all_words {
//!     println!("{} {:?}", result.word(), result.path().to_pairs());
//! }
//! ```

// Core domain types
pub mod core;

// Search engine: walker, strategies, curation
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod log;
