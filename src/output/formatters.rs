//! Formatting utilities for terminal output

use crate::core::{Board, Coord, Path, SIZE};

/// Format a path as `(r, c) → (r, c) → …`
#[must_use]
pub fn format_path(path: &Path) -> String {
    path.coords()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Draw the board as text, marking each path cell with its step number
///
/// Cells on the path read `C1`, `A2`, … (letter then 1-based step); other
/// cells show the letter alone.
#[must_use]
pub fn grid_lines(board: &Board, path: &Path) -> Vec<String> {
    (0..SIZE)
        .map(|row| {
            (0..SIZE)
                .map(|col| {
                    let coord = Coord::new(row, col);
                    let letter = char::from(board.letter(coord)).to_ascii_uppercase();
                    match path.step_of(coord) {
                        Some(step) => format!("{letter}{:<2}", step + 1),
                        None => format!("{letter}  "),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
