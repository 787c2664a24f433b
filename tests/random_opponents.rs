//! The search never loses against an opponent playing random legal moves

use noughts::{Board, Game, Outcome, Player, best_move};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn play_against_random(engine_side: Player, rng: &mut StdRng) -> Game {
    let mut game = Game::new();
    while !game.current_board().is_terminal() {
        let board = game.current_board();
        let mv = if board.current_player() == engine_side {
            best_move(&board).unwrap()
        } else {
            let moves = board.legal_moves();
            moves[rng.random_range(0..moves.len())]
        };
        game.play(mv).unwrap();
    }
    game
}

#[test]
fn engine_as_x_never_loses() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let game = play_against_random(Player::X, &mut rng);
        assert_ne!(game.outcome(), Outcome::Win(Player::O));
    }
}

#[test]
fn engine_as_o_never_loses() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let game = play_against_random(Player::O, &mut rng);
        assert_ne!(game.outcome(), Outcome::Win(Player::X));
    }
}

#[test]
fn engine_wins_most_games_against_random_play() {
    let mut rng = StdRng::seed_from_u64(42);
    let wins = (0..50)
        .map(|_| play_against_random(Player::X, &mut rng))
        .filter(|game| game.outcome() == Outcome::Win(Player::X))
        .count();
    assert!(wins > 25, "only {wins} wins out of 50");
}

#[test]
fn recorded_boards_follow_the_plies() {
    let mut rng = StdRng::seed_from_u64(3);
    let game = play_against_random(Player::O, &mut rng);
    let boards = game.boards().unwrap();

    assert_eq!(boards[0], Board::new());
    assert_eq!(boards.len(), game.plies().len() + 1);
    for (ply, pair) in game.plies().iter().zip(boards.windows(2)) {
        assert_eq!(pair[0].current_player(), ply.player);
        assert_eq!(pair[0].apply_move(ply.mv).unwrap(), pair[1]);
    }
}
