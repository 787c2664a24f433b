//! Optimal play for both sides

use tracing::{debug, instrument};

use super::Minimax;
use crate::tictactoe::{Board, Game};

/// Play `start` out to the end with both sides choosing [`Minimax`] moves.
///
/// # Errors
///
/// Propagates errors from [`Game::play`]; with moves chosen by the search
/// none are expected.
#[instrument(level = "debug", skip(start), fields(start = %start.encode()))]
pub fn play_optimal(start: Board) -> Result<Game, crate::Error> {
    let engine = Minimax::default();
    let mut game = Game::from_board(start);

    while !game.current_board().is_terminal() {
        let result = engine.search(&game.current_board())?;
        debug!(mv = %result.best, value = result.value, "playing");
        game.play(result.best)?;
    }

    debug!(outcome = %game.outcome(), plies = game.plies().len(), "game finished");
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Outcome, Player};

    #[test]
    fn test_empty_board_plays_to_a_draw() {
        let game = play_optimal(Board::new()).unwrap();
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.plies().len(), 9);
        assert_eq!(game.plies()[0].player, Player::X);
    }

    #[test]
    fn test_winning_position_is_converted() {
        // X to move with two open lines
        let start = Board::from_string("X.X/.O./O..").unwrap();
        let game = play_optimal(start).unwrap();
        assert_eq!(game.outcome(), Outcome::Win(Player::X));
        assert_eq!(game.plies().len(), 1);
    }

    #[test]
    fn test_terminal_start_plays_nothing() {
        let start = Board::from_string("XXX/OO./...").unwrap();
        let game = play_optimal(start).unwrap();
        assert!(game.plies().is_empty());
        assert_eq!(game.outcome(), Outcome::Win(Player::X));
    }
}
