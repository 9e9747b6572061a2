//! Benchmark command
//!
//! Tests solver performance across many random boards.

use crate::core::{Board, CELLS};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Letters weighted roughly by English frequency, so random boards hold words
const LETTER_POOL: &[u8] =
    b"eeeeeeeeeeeeaaaaaaaaaiiiiiiiiioooooooonnnnnnrrrrrrttttttllllssssuuuuddddgggbbccmmppffhhvvwwyykjxqz";

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub boards: usize,
    /// Fixed seed for a reproducible set of boards
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(boards: usize) -> Self {
        Self {
            boards,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Board with the most occurrences and its count
    pub richest_board: Option<(String, usize)>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Draw a random board from the weighted letter pool
///
/// # Panics
/// Panics only if the letter pool holds a non-letter byte.
pub fn random_board<R: Rng>(rng: &mut R) -> Board {
    let text: String = (0..CELLS)
        .map(|_| char::from(LETTER_POOL[rng.random_range(0..LETTER_POOL.len())]))
        .collect();
    Board::new(&text).expect("pool letters are ASCII lowercase")
}

/// Run the solver on `config.boards` random boards
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark(solver: &Solver, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let pb = if config.show_progress {
        ProgressBar::new(config.boards as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut richest_board: Option<(String, usize)> = None;

    for idx in 0..config.boards {
        let board = random_board(&mut rng);
        let count = solver.solve(&board).count;

        total_words += count;
        min_words = min_words.min(count);
        if count > max_words || richest_board.is_none() {
            max_words = max_words.max(count);
            richest_board = Some((board.to_string(), count));
        }

        if idx % 10 == 0 {
            pb.set_message(format!("Avg: {:.1} words", total_words as f64 / (idx + 1) as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_boards = config.boards;

    BenchmarkResult {
        total_boards,
        total_words,
        average_words: if total_boards > 0 {
            total_words as f64 / total_boards as f64
        } else {
            0.0
        },
        min_words: if total_boards > 0 { min_words } else { 0 },
        max_words,
        richest_board,
        duration,
        boards_per_second: total_boards as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
