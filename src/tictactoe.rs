//! Tic-Tac-Toe board model and move generation

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{Board, Cell, Move, Outcome, Player, initial_board};
pub use game::{Game, Ply};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use validation::reachable_boards;
