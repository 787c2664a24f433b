//! Board representation, derived queries and move application

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::{Error, Result};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, column) coordinate, each in 0..3.
///
/// A move carries no mark; the mark placed is always that of the player to
/// move on the board it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Create a move, validating both coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `row` or `col` is greater than 2.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row < 3 && col < 3 {
            Ok(Move { row, col })
        } else {
            Err(Error::InvalidPosition { row, col })
        }
    }

    /// Move for a row-major cell index; callers guarantee `index < 9`.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < 9);
        Move {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major cell index (0-8)
    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }
}

impl TryFrom<(usize, usize)> for Move {
    type Error = Error;

    fn try_from((row, col): (usize, usize)) -> Result<Self> {
        Move::new(row, col)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of play derived from a board's marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Score from X's perspective, `None` while the game is still running
    pub fn utility(self) -> Option<i32> {
        match self {
            Outcome::Win(Player::X) => Some(1),
            Outcome::Win(Player::O) => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::InProgress => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// A 3x3 grid of cells, stored row-major.
///
/// Boards are immutable values: every move produces a new board. The player
/// to move is not stored but derived from the mark counts, which assumes the
/// counts differ by at most one (always true for boards reached by legal
/// play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

/// The empty board with X to move
pub fn initial_board() -> Board {
    Board::new()
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Build a board from raw cells without validating the mark counts
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Build a board from three rows of cells without validating the mark counts
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            cells[r * 3..r * 3 + 3].copy_from_slice(row);
        }
        Board { cells }
    }

    /// Create a board from its text form.
    ///
    /// The string holds 9 cells in row-major order (`.` empty, `X`, `O`);
    /// whitespace and `/` row separators are ignored.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 cells are given
    /// - Any character is not a valid cell representation
    /// - X does not have the same number of marks as O or exactly one more
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if chars.len() < 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let count = Self::count_pieces(&cells);
        if count.x != count.o && count.x != count.o + 1 {
            return Err(Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(Board { cells })
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell a move targets
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Number of marks X and O have placed, in that order
    pub fn mark_counts(&self) -> (usize, usize) {
        let count = Self::count_pieces(&self.cells);
        (count.x, count.o)
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        9 - Self::count_pieces(&self.cells).empty
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// The player whose turn it is.
    ///
    /// X moves when both sides have the same number of marks, otherwise the
    /// side with fewer marks moves. On a terminal board this still returns
    /// the count-derived player, i.e. whoever would move if play continued;
    /// check [`Board::is_terminal`] first.
    pub fn current_player(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        if count.x > count.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// Every empty cell in row-major order, or nothing once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.open_moves()
    }

    /// Every empty cell in row-major order, whether or not the game is over
    pub(crate) fn open_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Place the current player's mark and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if the target cell is occupied.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, mv: Move) -> Result<Board> {
        if self.get(mv) != Cell::Empty {
            return Err(Error::InvalidMove {
                row: mv.row(),
                col: mv.col(),
            });
        }
        Ok(self.place(mv))
    }

    /// Successor for a move already known to target an empty cell
    pub(crate) fn place(&self, mv: Move) -> Board {
        debug_assert_eq!(self.get(mv), Cell::Empty);
        let mut next = *self;
        next.cells[mv.index()] = self.current_player().to_cell();
        next
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Win if any row, column or diagonal holds three of one mark, draw if
    /// the grid is full otherwise
    pub fn outcome(&self) -> Outcome {
        if let Some(player) = self.winner() {
            Outcome::Win(player)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_over()
    }

    /// Final score from X's perspective: 1 for an X win, -1 for an O win,
    /// 0 for a draw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`] while the game is still in progress.
    pub fn utility(&self) -> Result<i32> {
        self.outcome().utility().ok_or(Error::NotTerminal)
    }

    /// Single-line text form, the inverse of [`Board::from_string`]
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
