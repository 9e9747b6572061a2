//! Word Hunt search engine
//!
//! The board walker, the search strategies wrapping it, and the curator that
//! turns raw occurrences into sorted views.

pub mod curator;
mod engine;
pub mod strategy;
pub mod walker;

pub use curator::{DedupMode, RankTable, ViewKind, Views};
pub use engine::{Solution, Solver, SolverOptions};
pub use strategy::{ParallelSearch, Search, SearchType, SequentialSearch};
