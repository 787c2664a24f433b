//! Search engine properties over the whole reachable state space

use noughts::{
    Board, Cell, Error, Minimax, Move, Outcome, SearchConfig, best_move, optimal_moves,
    play_optimal, reachable_boards, solve,
};

fn non_terminal_boards() -> Vec<Board> {
    reachable_boards()
        .into_iter()
        .filter(|board| !board.is_terminal())
        .collect()
}

#[test]
fn pruning_never_changes_a_value() {
    let pruned = Minimax::default();
    let unpruned = Minimax::new(SearchConfig { pruning: false });

    for board in reachable_boards() {
        let exact = solve(&board);
        let (value, stats) = pruned.value(&board);
        let (full_value, full_stats) = unpruned.value(&board);

        assert_eq!(value, exact.value, "pruned value differs on {}", board.encode());
        assert_eq!(full_value, exact.value);
        assert_eq!(full_stats.nodes, exact.nodes);
        assert!(stats.nodes <= exact.nodes);
    }
}

#[test]
fn best_move_is_legal_and_optimal() {
    for board in non_terminal_boards() {
        let result = Minimax::default().search(&board).unwrap();
        let exact = solve(&board).value;

        assert_eq!(board.get(result.best), Cell::Empty);
        assert_eq!(result.value, exact, "wrong value on {}", board.encode());

        let optimal = optimal_moves(&board).unwrap();
        assert_eq!(
            optimal.first(),
            Some(&result.best),
            "tie not broken to the first optimal move on {}",
            board.encode()
        );
    }
}

#[test]
fn pruning_does_not_change_the_chosen_move() {
    let unpruned = Minimax::new(SearchConfig { pruning: false });
    for board in non_terminal_boards().into_iter().step_by(7) {
        let pruned = Minimax::default().search(&board).unwrap();
        let full = unpruned.search(&board).unwrap();
        assert_eq!(pruned.best, full.best);
        assert_eq!(pruned.value, full.value);
    }
}

#[test]
fn best_move_is_deterministic() {
    let board = Board::from_string("X...O...X").unwrap();
    let first = best_move(&board).unwrap();
    for _ in 0..5 {
        assert_eq!(best_move(&board).unwrap(), first);
    }
}

#[test]
fn terminal_boards_have_no_best_move() {
    for board in reachable_boards().into_iter().filter(Board::is_terminal) {
        assert!(matches!(best_move(&board), Err(Error::GameOver)));
    }
}

#[test]
fn optimal_self_play_from_empty_board_is_a_draw() {
    let game = play_optimal(Board::new()).unwrap();
    assert_eq!(game.outcome(), Outcome::Draw);
    assert!(game.current_board().is_full());
}

#[test]
fn o_blocks_the_open_row() {
    // XX.
    // .O.
    // ...
    let board = Board::from_string("XX./.O./...").unwrap();
    assert_eq!(best_move(&board).unwrap(), Move::new(0, 2).unwrap());
}

#[test]
fn o_completes_its_own_row_before_blocking() {
    // XX.
    // OO.
    // X..
    let board = Board::from_string("XX./OO./X..").unwrap();
    assert_eq!(best_move(&board).unwrap(), Move::new(1, 2).unwrap());
}

#[test]
fn x_completes_the_top_row() {
    // XX.
    // OO.
    // ...
    let board = Board::from_string("XX./OO./...").unwrap();
    assert_eq!(best_move(&board).unwrap(), Move::new(0, 2).unwrap());
}
