//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::tictactoe::Board;

/// Create a progress bar over a number of boards
pub fn create_board_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} boards ({msg})")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board indented under a heading
pub fn print_board(board: &Board) {
    for row in board.to_string().lines() {
        println!("  {row}");
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<(), crate::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
