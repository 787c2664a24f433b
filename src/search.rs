//! Exhaustive game-tree search
//!
//! [`Minimax`] is the engine used to pick moves. It searches every line to a
//! terminal board and skips successors that cannot change a parent's choice.
//! [`exhaustive`] holds the plain unpruned minimax it is checked against.

pub mod exhaustive;
pub mod minimax;
pub mod selfplay;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Move};

pub use exhaustive::{Solution, optimal_moves, solve};
pub use minimax::Minimax;
pub use selfplay::play_optimal;

/// Search settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Skip successors that cannot change the parent's decision
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { pruning: true }
    }
}

/// Counters collected during one top-level search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards evaluated, including terminal leaves and the root
    pub nodes: u64,
    /// Successors skipped by pruning without being evaluated
    pub pruned: u64,
}

/// Result of a top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best: Move,
    /// Minimax value of the board from X's perspective
    pub value: i32,
    pub stats: SearchStats,
}

/// The optimal move for the player to move, using a fresh pruning search.
///
/// Ties between equally good moves go to the first in row-major order.
///
/// # Errors
///
/// Returns [`crate::Error::GameOver`] on a terminal board.
pub fn best_move(board: &Board) -> Result<Move, crate::Error> {
    Minimax::default().search(board).map(|result| result.best)
}
