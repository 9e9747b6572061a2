//! Display functions for command results

use super::formatters::{create_progress_bar, format_path, grid_lines};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, show_grid: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Board: {}",
        result.board.to_string().to_uppercase().bright_yellow().bold()
    );
    for line in grid_lines(&result.board, &crate::core::Path::default()) {
        println!("  {line}");
    }
    println!("{}", "─".repeat(60).cyan());

    println!(
        "Found {} words in {:.4} seconds.",
        result.count.to_string().green().bold(),
        result.elapsed.as_secs_f64()
    );

    print_length_distribution(result);

    println!(
        "\n{} ({} of {})",
        result.view.title().bright_cyan().bold(),
        result.results.len(),
        result.view_total
    );

    if result.results.is_empty() {
        println!("  No words.");
        return;
    }

    for (i, entry) in result.results.iter().enumerate() {
        println!(
            "{:>4}. {:<10} len {:<2} {:<10} {}",
            i + 1,
            entry.word().to_uppercase().bright_yellow(),
            entry.len(),
            entry.rank.to_string().bright_black(),
            format_path(entry.path())
        );

        if show_grid {
            for line in grid_lines(&result.board, entry.path()) {
                println!("        {line}");
            }
            println!();
        }
    }
}

fn print_length_distribution(result: &SolveResult) {
    let mut by_length: BTreeMap<usize, usize> = BTreeMap::new();
    for entry in &result.results {
        *by_length.entry(entry.len()).or_insert(0) += 1;
    }

    let max_count = by_length.values().copied().max().unwrap_or(0);
    if max_count == 0 {
        return;
    }

    println!("\n📈 {}", "Lengths:".bright_cyan().bold());
    for (length, count) in by_length.iter().rev() {
        let bar = create_progress_bar(*count as f64, max_count as f64, 30);
        println!("  {length:>2} letters: {} {count:4}", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.total_boards);
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if let Some((board, count)) = &result.richest_board {
        println!(
            "\n✨ Richest board: {} ({count} words)",
            board.to_uppercase().bright_green()
        );
    }
}
