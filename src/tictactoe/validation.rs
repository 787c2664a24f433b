//! Reachability checks and enumeration of reachable boards

use std::collections::HashSet;

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check if the board can arise from legal play starting with X
    pub fn is_reachable(&self) -> bool {
        let (x_count, o_count) = self.mark_counts();

        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner moved last
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && x_count != o_count {
            return false;
        }

        // Two lines can only be completed by one move if they share its cell
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all completed lines of a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(self.cells(), player);
        if lines.len() < 2 {
            return true;
        }
        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}

/// Every board reachable from the empty board by legal play.
///
/// Play stops at terminal boards, so no board in the result continues past
/// a win. Boards are returned in discovery order with the empty board first.
pub fn reachable_boards() -> Vec<Board> {
    let root = Board::new();
    let mut seen = HashSet::from([root]);
    let mut boards = vec![root];
    let mut stack = vec![root];

    while let Some(board) = stack.pop() {
        for mv in board.legal_moves() {
            let next = board.place(mv);
            if seen.insert(next) {
                boards.push(next);
                stack.push(next);
            }
        }
    }

    boards
}
