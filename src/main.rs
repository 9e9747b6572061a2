//! Word Hunt Solver - CLI
//!
//! Word Hunt solver with TUI and CLI modes: every dictionary word hidden in a
//! 4×4 letter grid, ranked by word frequency.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use word_hunt::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, solve_board},
    log::init_logger,
    output::{print_benchmark_result, print_solve_result},
    solver::{DedupMode, SearchType, Solver, SolverOptions, ViewKind},
    wordlists::{
        FREQUENT, WORDS,
        loader::{frequency_from_slice, load_frequency_file, load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_hunt",
    about = "Word Hunt solver: every dictionary word hidden in a 4x4 letter grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search strategy: sequential (default) or parallel
    #[arg(short, long, global = true, default_value = "sequential")]
    search: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Frequency order: 'embedded' (default), 'none', or path to a file (most common first)
    #[arg(short = 'f', long, global = true, default_value = "embedded")]
    frequency: String,

    /// Keep one path per word instead of every distinct path
    #[arg(long, global = true)]
    distinct_words: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Solve a board given as 16 letters, row by row
    Solve {
        /// The 16 board letters
        board: String,

        /// View to print: all (default), small, five
        #[arg(short, long, default_value = "all")]
        view: String,

        /// Print at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Draw each word's path on the board
        #[arg(short, long)]
        grid: bool,
    },

    /// Benchmark solver performance on random boards
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for a reproducible set of boards
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<String>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("reading dictionary {path}"))?,
    };
    info!("Loaded {} dictionary words ({wordlist_mode})", words.len());
    Ok(words)
}

/// Load the frequency order based on the -f flag
fn load_frequency(frequency_mode: &str) -> Result<Option<Vec<String>>> {
    let order = match frequency_mode {
        "none" => return Ok(None),
        "embedded" => frequency_from_slice(FREQUENT),
        path => {
            load_frequency_file(path).with_context(|| format!("reading frequency list {path}"))?
        }
    };
    info!("Loaded {} frequency entries ({frequency_mode})", order.len());
    Ok(Some(order))
}

fn build_solver(cli: &Cli) -> Result<Solver> {
    let dictionary = load_dictionary(&cli.wordlist)?;
    let frequency = load_frequency(&cli.frequency)?;

    let dedup = if cli.distinct_words {
        DedupMode::Word
    } else {
        DedupMode::Path
    };
    let options = SolverOptions::new(SearchType::from_name(&cli.search), dedup);

    Ok(Solver::new(dictionary.as_slice(), frequency.as_deref(), options))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let solver = build_solver(&cli)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&solver),
        Commands::Solve {
            board,
            view,
            limit,
            grid,
        } => run_solve_command(&solver, board, &view, limit, grid),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&solver, count, seed);
            Ok(())
        }
    }
}

fn run_solve_command(
    solver: &Solver,
    board: String,
    view_name: &str,
    limit: Option<usize>,
    show_grid: bool,
) -> Result<()> {
    let Some(view) = ViewKind::from_name(view_name) else {
        bail!("Unknown view '{view_name}' (expected all, small, or five)");
    };

    let config = SolveConfig { board, view, limit };
    let result = solve_board(config, solver)?;

    print_solve_result(&result, show_grid);
    Ok(())
}

fn run_benchmark_command(solver: &Solver, count: usize, seed: Option<u64>) {
    if let Some(seed) = seed {
        println!("Running benchmark on {count} random boards (seed {seed})...");
    } else {
        println!("Running benchmark on {count} random boards...");
    }

    let mut config = BenchmarkConfig::new(count);
    config.seed = seed;

    let result = run_benchmark(solver, &config);
    print_benchmark_result(&result);
}

fn run_play_command(solver: &Solver) -> Result<()> {
    use word_hunt::interactive::{App, run_tui};

    let app = App::new(solver);
    run_tui(app)
}
