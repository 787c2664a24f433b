//! Analyze command - Solve every reachable board
//!
//! Enumerates the boards reachable by legal play, tallies the terminal
//! outcomes and solves each non-terminal board twice, with and without
//! pruning, to report how much of the tree pruning skips.

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::warn;

use crate::{
    cli::{
        config::CommonConfig,
        output::{create_board_progress, format_number, print_json, print_kv, print_section},
    },
    search::{Minimax, solve},
    tictactoe::{Board, Outcome, Player, reachable_boards},
};

#[derive(Parser, Debug)]
#[command(about = "Solve every reachable board and compare pruned and unpruned search")]
pub struct AnalyzeArgs {
    /// Show a progress bar while solving
    #[arg(long)]
    pub progress: bool,
}

/// Totals over all reachable boards
#[derive(Debug, Default, Serialize)]
pub struct TreeSummary {
    pub reachable: usize,
    pub in_progress: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub pruned_nodes: u64,
    pub unpruned_nodes: u64,
    pub skipped_successors: u64,
    pub value_mismatches: usize,
}

/// Tally outcomes and search effort over `boards`, calling `tick` after each
pub fn summarize(boards: &[Board], mut tick: impl FnMut()) -> TreeSummary {
    let engine = Minimax::default();
    let mut summary = TreeSummary {
        reachable: boards.len(),
        ..TreeSummary::default()
    };

    for board in boards {
        match board.outcome() {
            Outcome::Win(Player::X) => summary.x_wins += 1,
            Outcome::Win(Player::O) => summary.o_wins += 1,
            Outcome::Draw => summary.draws += 1,
            Outcome::InProgress => {
                summary.in_progress += 1;
                let (value, stats) = engine.value(board);
                let exact = solve(board);
                summary.pruned_nodes += stats.nodes;
                summary.skipped_successors += stats.pruned;
                summary.unpruned_nodes += exact.nodes;
                if value != exact.value {
                    warn!(board = %board.encode(), value, exact = exact.value, "pruned value differs");
                    summary.value_mismatches += 1;
                }
            }
        }
        tick();
    }

    summary
}

pub fn execute(args: AnalyzeArgs, common: CommonConfig) -> Result<()> {
    let boards = reachable_boards();

    let pb = args
        .progress
        .then(|| create_board_progress(boards.len() as u64));
    let summary = summarize(&boards, || {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    });
    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    if common.json {
        print_json(&summary)?;
    } else {
        print_section("Reachable boards");
        print_kv("Reachable", &format_number(summary.reachable as u64));
        print_kv("In progress", &format_number(summary.in_progress as u64));
        print_kv("X wins", &format_number(summary.x_wins as u64));
        print_kv("O wins", &format_number(summary.o_wins as u64));
        print_kv("Draws", &format_number(summary.draws as u64));

        print_section("Search effort over non-terminal boards");
        print_kv("Unpruned nodes", &format_number(summary.unpruned_nodes));
        print_kv("Pruned nodes", &format_number(summary.pruned_nodes));
        print_kv("Skipped", &format_number(summary.skipped_successors));
        if summary.unpruned_nodes > 0 {
            let saved = 1.0 - summary.pruned_nodes as f64 / summary.unpruned_nodes as f64;
            print_kv("Saved", &format!("{:.1}%", saved * 100.0));
        }
    }

    if summary.value_mismatches > 0 {
        bail!(
            "pruned search disagreed with exhaustive search on {} boards",
            summary.value_mismatches
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_small_subtree() {
        let boards = [
            Board::from_string("XOX/XOO/OX.").unwrap(),
            Board::from_string("XXX/OO./...").unwrap(),
            Board::from_string("XOX/XOO/OXX").unwrap(),
        ];
        let mut ticks = 0;
        let summary = summarize(&boards, || ticks += 1);

        assert_eq!(ticks, 3);
        assert_eq!(summary.reachable, 3);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.x_wins, 1);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.unpruned_nodes, 2);
        assert_eq!(summary.pruned_nodes, 2);
        assert_eq!(summary.value_mismatches, 0);
    }
}
