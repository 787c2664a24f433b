//! Game records: a starting board plus the moves played from it

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Outcome, Player};

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ply {
    pub mv: Move,
    pub player: Player,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    initial: Board,
    plies: Vec<Ply>,
    current: Board,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Create a game continuing from an arbitrary board
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            plies: Vec::new(),
            current: initial,
        }
    }

    /// Play a move for the player to move and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has already ended, or
    /// [`crate::Error::InvalidMove`] if the target cell is occupied.
    pub fn play(&mut self, mv: Move) -> Result<Board, crate::Error> {
        if self.current.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let player = self.current.current_player();
        let next = self.current.apply_move(mv)?;

        self.plies.push(Ply { mv, player });
        self.current = next;
        Ok(next)
    }

    pub fn initial(&self) -> Board {
        self.initial
    }

    pub fn plies(&self) -> &[Ply] {
        &self.plies
    }

    pub fn current_board(&self) -> Board {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        self.current.outcome()
    }

    /// Every board from the initial one to the current one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if a recorded ply targets an
    /// occupied cell.
    pub fn boards(&self) -> Result<Vec<Board>, crate::Error> {
        let mut boards = Vec::with_capacity(self.plies.len() + 1);
        let mut board = self.initial;
        boards.push(board);
        for ply in &self.plies {
            board = board.apply_move(ply.mv)?;
            boards.push(board);
        }
        Ok(boards)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
