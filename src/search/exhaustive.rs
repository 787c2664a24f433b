//! Plain minimax over the full game tree, without pruning

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Move, Player};

/// Exact value of a board and the size of the tree searched to find it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub value: i32,
    pub nodes: u64,
}

/// Evaluate every line from `board` to the end of the game.
///
/// From the empty board this visits all 549 946 nodes of the game tree.
pub fn solve(board: &Board) -> Solution {
    let mut nodes = 0;
    let value = minimax(board, &mut nodes);
    Solution { value, nodes }
}

fn minimax(board: &Board, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if let Some(utility) = board.outcome().utility() {
        return utility;
    }

    let values = board
        .open_moves()
        .into_iter()
        .map(|mv| minimax(&board.place(mv), nodes));

    let best = match board.current_player() {
        Player::X => values.max(),
        Player::O => values.min(),
    };
    // a non-terminal board always has an empty cell
    best.unwrap_or(0)
}

/// Every legal move that keeps the board's minimax value, in row-major order.
///
/// # Errors
///
/// Returns [`crate::Error::GameOver`] on a terminal board.
pub fn optimal_moves(board: &Board) -> Result<Vec<Move>, crate::Error> {
    if board.is_terminal() {
        return Err(crate::Error::GameOver);
    }

    let scored: Vec<(Move, i32)> = board
        .legal_moves()
        .into_iter()
        .map(|mv| (mv, solve(&board.place(mv)).value))
        .collect();

    let target = match board.current_player() {
        Player::X => scored.iter().map(|&(_, value)| value).max(),
        Player::O => scored.iter().map(|&(_, value)| value).min(),
    };

    Ok(scored
        .into_iter()
        .filter(|&(_, value)| Some(value) == target)
        .map(|(mv, _)| mv)
        .collect())
}
