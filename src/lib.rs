//! Exact tic-tac-toe solver
//!
//! This crate provides:
//! - An immutable 3x3 board model with turn, outcome and utility queries
//! - Move generation producing successor boards
//! - Exhaustive minimax search with pruning to pick the optimal move
//! - An unpruned reference solver, self-play and reachability analysis
//!
//! ```
//! use noughts::{Board, Move, best_move};
//!
//! let board = Board::from_string("XX./.O./...")?;
//! assert_eq!(best_move(&board)?, Move::new(0, 2)?);
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{
    Minimax, SearchConfig, SearchResult, SearchStats, Solution, best_move, optimal_moves,
    play_optimal, solve,
};
pub use tictactoe::{
    Board, Cell, Game, Move, Outcome, Player, Ply, initial_board, reachable_boards,
};
