//! Minimax with one-sided pruning
//!
//! `max_value` and `min_value` recurse into each other down to terminal
//! boards. Each call receives the running best of its parent as a bound,
//! available once the parent's first child has completed. A max node stops
//! as soon as its running maximum reaches the bound (its min parent already
//! has something at least as good), a min node as soon as its running
//! minimum falls to it. A cut-off node returns a value its parent discards,
//! so every value that reaches the root is exact.

use tracing::{debug, instrument};

use super::{SearchConfig, SearchResult, SearchStats};
use crate::tictactoe::{Board, Move, Player};

/// Move-selection engine.
///
/// Holds only configuration; every search builds its own context, so one
/// engine can be reused across boards and calls never share state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax {
    config: SearchConfig,
}

/// Per-search bookkeeping
struct Context {
    pruning: bool,
    stats: SearchStats,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Engine that evaluates every successor
    pub fn unpruned() -> Self {
        Self::new(SearchConfig { pruning: false })
    }

    /// Find the optimal move for the player to move.
    ///
    /// Moves are tried in row-major order and a later move replaces the
    /// current choice only if it is strictly better.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] on a terminal board.
    #[instrument(level = "debug", skip(self, board), fields(board = %board.encode(), pruning = self.config.pruning))]
    pub fn search(&self, board: &Board) -> Result<SearchResult, crate::Error> {
        if board.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let player = board.current_player();
        let mut ctx = Context::new(self.config.pruning);
        ctx.stats.nodes += 1;

        let mut best: Option<(Move, i32)> = None;
        for mv in board.open_moves() {
            let child = board.place(mv);
            let bound = best.map(|(_, value)| value);
            let value = match player {
                Player::X => ctx.min_value(&child, bound),
                Player::O => ctx.max_value(&child, bound),
            };

            let improves = match (best, player) {
                (None, _) => true,
                (Some((_, current)), Player::X) => value > current,
                (Some((_, current)), Player::O) => value < current,
            };
            if improves {
                best = Some((mv, value));
            }
        }

        let (best, value) = best.ok_or(crate::Error::GameOver)?;
        debug!(
            best = %best,
            value,
            nodes = ctx.stats.nodes,
            pruned = ctx.stats.pruned,
            "search complete"
        );

        Ok(SearchResult {
            best,
            value,
            stats: ctx.stats,
        })
    }

    /// Minimax value of any board (terminal boards included), together
    /// with the counters of the search that produced it
    pub fn value(&self, board: &Board) -> (i32, SearchStats) {
        let mut ctx = Context::new(self.config.pruning);
        let value = match board.current_player() {
            Player::X => ctx.max_value(board, None),
            Player::O => ctx.min_value(board, None),
        };
        (value, ctx.stats)
    }
}

impl Context {
    fn new(pruning: bool) -> Self {
        Self {
            pruning,
            stats: SearchStats::default(),
        }
    }

    fn max_value(&mut self, board: &Board, bound: Option<i32>) -> i32 {
        self.stats.nodes += 1;
        if let Some(utility) = board.outcome().utility() {
            return utility;
        }

        let moves = board.open_moves();
        let mut best = i32::MIN;
        for (i, &mv) in moves.iter().enumerate() {
            let child_bound = (i > 0).then_some(best);
            best = best.max(self.min_value(&board.place(mv), child_bound));

            if self.pruning && bound.is_some_and(|bound| best >= bound) {
                self.stats.pruned += (moves.len() - i - 1) as u64;
                break;
            }
        }
        best
    }

    fn min_value(&mut self, board: &Board, bound: Option<i32>) -> i32 {
        self.stats.nodes += 1;
        if let Some(utility) = board.outcome().utility() {
            return utility;
        }

        let moves = board.open_moves();
        let mut best = i32::MAX;
        for (i, &mv) in moves.iter().enumerate() {
            let child_bound = (i > 0).then_some(best);
            best = best.min(self.max_value(&board.place(mv), child_bound));

            if self.pruning && bound.is_some_and(|bound| best <= bound) {
                self.stats.pruned += (moves.len() - i - 1) as u64;
                break;
            }
        }
        best
    }
}
