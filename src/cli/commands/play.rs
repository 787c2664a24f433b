//! Play command - Optimal self-play from a board

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::CommonConfig,
        output::{print_board, print_json, print_kv, print_section, print_subsection},
    },
    search::play_optimal,
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Play a board out with optimal moves for both sides")]
pub struct PlayArgs {
    /// Starting board in row-major text form (default: empty board)
    pub board: Option<String>,
}

fn start_board(text: Option<&str>) -> Result<Board> {
    match text {
        Some(text) => {
            Board::from_string(text).with_context(|| format!("could not parse board '{text}'"))
        }
        None => Ok(Board::new()),
    }
}

pub fn execute(args: PlayArgs, common: CommonConfig) -> Result<()> {
    let start = start_board(args.board.as_deref())?;
    let game = play_optimal(start)?;

    if common.json {
        print_json(&game)?;
        return Ok(());
    }

    print_section("Optimal self-play");
    print_board(&start);

    let boards = game.boards()?;
    for (ply, board) in game.plies().iter().zip(boards.iter().skip(1)) {
        print_subsection(&format!("{} plays {}", ply.player, ply.mv));
        print_board(board);
    }

    println!();
    print_kv("Plies", &game.plies().len().to_string());
    print_kv("Outcome", &game.outcome().to_string());

    Ok(())
}
