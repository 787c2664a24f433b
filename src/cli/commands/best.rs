//! Best command - Find the optimal move for a board

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::{CommonConfig, search_config},
        output::{format_number, print_board, print_json, print_kv, print_section},
    },
    search::{Minimax, SearchResult, optimal_moves},
    tictactoe::{Board, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a board")]
pub struct BestArgs {
    /// Board in row-major text form, e.g. "XX./OO./X.." ('.' for empty)
    pub board: String,

    /// Evaluate every successor instead of pruning
    #[arg(long)]
    pub no_pruning: bool,
}

#[derive(Debug, Serialize)]
struct BestReport {
    board: String,
    to_move: Option<Player>,
    outcome: Outcome,
    search: Option<SearchResult>,
    optimal_moves: Vec<Move>,
}

pub fn execute(args: BestArgs, common: CommonConfig) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    if !board.is_reachable() {
        tracing::warn!(board = %board.encode(), "board cannot arise from legal play");
    }

    let report = build_report(&board, args.no_pruning)?;

    if common.json {
        print_json(&report)?;
        return Ok(());
    }

    print_section("Best move");
    print_board(&board);
    println!();

    let Some(search) = report.search else {
        print_kv("Outcome", &report.outcome.to_string());
        println!("  (board is terminal, no move to recommend)");
        return Ok(());
    };

    if let Some(player) = report.to_move {
        print_kv("To move", &player.to_string());
    }
    print_kv("Best move", &search.best.to_string());
    print_kv("Value", &describe_value(search.value));
    print_kv(
        "Optimal moves",
        &report
            .optimal_moves
            .iter()
            .map(Move::to_string)
            .collect::<Vec<_>>()
            .join(" "),
    );
    print_kv("Nodes", &format_number(search.stats.nodes));
    print_kv("Pruned", &format_number(search.stats.pruned));

    Ok(())
}

/// Report for a board; terminal boards get an outcome and no move
fn build_report(board: &Board, no_pruning: bool) -> Result<BestReport> {
    if board.is_terminal() {
        return Ok(BestReport {
            board: board.encode(),
            to_move: None,
            outcome: board.outcome(),
            search: None,
            optimal_moves: Vec::new(),
        });
    }

    let engine = Minimax::new(search_config(no_pruning));
    Ok(BestReport {
        board: board.encode(),
        to_move: Some(board.current_player()),
        outcome: board.outcome(),
        search: Some(engine.search(board)?),
        optimal_moves: optimal_moves(board)?,
    })
}

fn describe_value(value: i32) -> String {
    match value {
        1 => "1 (X wins)".to_string(),
        -1 => "-1 (O wins)".to_string(),
        _ => format!("{value} (draw)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_board_reports_no_move() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        let report = build_report(&board, false).unwrap();

        assert_eq!(report.board, "XXXOO....");
        assert_eq!(report.to_move, None);
        assert_eq!(report.outcome, Outcome::Win(Player::X));
        assert!(report.search.is_none());
        assert!(report.optimal_moves.is_empty());
    }

    #[test]
    fn test_drawn_board_reports_no_move() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        let report = build_report(&board, true).unwrap();

        assert_eq!(report.outcome, Outcome::Draw);
        assert!(report.search.is_none());
    }

    #[test]
    fn test_open_board_reports_best_move() {
        let board = Board::from_string("XX./.O./...").unwrap();
        for no_pruning in [false, true] {
            let report = build_report(&board, no_pruning).unwrap();
            let search = report.search.unwrap();

            assert_eq!(report.to_move, Some(Player::O));
            assert_eq!(report.outcome, Outcome::InProgress);
            assert_eq!(search.best, Move::new(0, 2).unwrap());
            assert_eq!(search.value, 0);
            assert_eq!(report.optimal_moves, vec![search.best]);
            assert_eq!(search.stats.pruned == 0, no_pruning);
        }
    }

    #[test]
    fn test_describe_value_names_the_result() {
        assert_eq!(describe_value(1), "1 (X wins)");
        assert_eq!(describe_value(-1), "-1 (O wins)");
        assert_eq!(describe_value(0), "0 (draw)");
    }
}
