//! Property tests for the board and the game loop.
//!
//! Random playouts are driven by generated index lists: each index picks a
//! cell from the current free list, alternating agents.
//!
//! Invariants covered:
//! - Free cells and occupied cells partition the board.
//! - Every accepted move removes exactly one free cell.
//! - Feature vectors have length `2 * size`, a non-negative own half whose
//!   counts never exceed the number of lines, and a non-positive opponent half.
//! - Moves onto occupied cells fail and leave the board untouched.
//! - `is_finished` matches "board full or a full line exists".
//! - `Ready` is reported only for the empty board.

use std::collections::HashSet;

use fiverow::rules::has_full_line;
use fiverow::{play, Board, GameState, LinearAgent, Move, Pos, RandomAgent};
use proptest::prelude::*;

const A: u32 = 1;
const B: u32 = 2;

fn assert_partition(board: &Board) {
    let size = board.size();
    let free: HashSet<Pos> = board.free_list().into_iter().collect();
    let occupied: HashSet<Pos> = board
        .cells_of(A)
        .into_iter()
        .chain(board.cells_of(B))
        .collect();

    assert_eq!(free.len() + occupied.len(), size * size);
    assert!(free.is_disjoint(&occupied));
}

fn assert_feature_shape(board: &Board, agent: u32) {
    let size = board.size();
    let features = board.lines(agent);

    assert_eq!(features.len(), 2 * size);
    assert!(features[..size].iter().all(|&n| n >= 0));
    assert!(features[size..].iter().all(|&n| n <= 0));

    let lines = (2 * size + 2) as i32;
    assert!(features[..size].iter().sum::<i32>() <= lines);
    assert!(features[size..].iter().map(|n| -n).sum::<i32>() <= lines);
}

fn assert_terminal_consistent(board: &Board) {
    let expected = board.free_count() == 0 || has_full_line(board, A) || has_full_line(board, B);
    assert_eq!(board.is_finished(), expected);

    for agent in [A, B] {
        let state = board.game_state(agent);
        assert_eq!(state == GameState::Ready, board.is_board_empty());
        assert_eq!(state.is_terminal(), board.is_finished());
        if state == GameState::Won {
            assert!(has_full_line(board, agent));
        }
    }
}

#[test]
fn full_row_wins_on_empty_board() {
    let mut board = Board::new(5, [A, B]);
    for col in 0..5 {
        board.execute(Move::new(A, Pos::new(0, col))).unwrap();
    }
    assert_eq!(board.lines(A)[0], 1);
    assert!(board.is_finished());
    assert_eq!(board.game_state(A), GameState::Won);
    assert_eq!(board.game_state(B), GameState::Lost);
}

#[test]
fn every_catalogued_line_counts_at_full_length() {
    let catalogue = Board::new(5, [A, B]).line_catalogue().clone();
    for line in &catalogue {
        let mut board = Board::new(5, [A, B]);
        for &pos in line.iter() {
            board.place(pos, B);
        }
        assert!(board.lines(B)[0] >= 1);
        assert!(board.lines(A)[5] <= -1);
        assert_eq!(board.game_state(B), GameState::Won);
    }
}

#[test]
fn good_and_greedy_differ_on_block() {
    let mut board = Board::new(5, [A, B]);
    for col in 0..4 {
        board.place(Pos::new(4, col), B);
    }
    for col in 1..4 {
        board.place(Pos::new(1, col), A);
    }
    let block = Pos::new(4, 4);

    let good = LinearAgent::good(A).best_move(&board).map(|(pos, _)| pos);
    let greedy = LinearAgent::greedy(A).best_move(&board).map(|(pos, _)| pos);

    assert_eq!(good, Some(block));
    assert_ne!(greedy, Some(block));
}

proptest! {
    #[test]
    fn random_playout_respects_board_invariants(
        size in 1usize..8,
        picks in prop::collection::vec(any::<usize>(), 0..64),
    ) {
        let mut board = Board::new(size, [A, B]);
        assert_terminal_consistent(&board);

        for (i, pick) in picks.into_iter().enumerate() {
            let free = board.free_list();
            if free.is_empty() {
                break;
            }
            let agent = if i % 2 == 0 { A } else { B };
            let before = board.free_count();

            board.execute(Move::new(agent, free[pick % free.len()])).unwrap();

            prop_assert_eq!(board.free_count(), before - 1);
            assert_partition(&board);
            assert_feature_shape(&board, A);
            assert_feature_shape(&board, B);
            assert_terminal_consistent(&board);
        }
    }

    #[test]
    fn occupied_cell_is_rejected(
        picks in prop::collection::vec(any::<usize>(), 1..20),
        target in any::<usize>(),
    ) {
        let mut board = Board::new(5, [A, B]);
        for (i, pick) in picks.into_iter().enumerate() {
            let free = board.free_list();
            let agent = if i % 2 == 0 { A } else { B };
            board.execute(Move::new(agent, free[pick % free.len()])).unwrap();
        }

        let occupied: Vec<Pos> = board.cells_of(A).into_iter().chain(board.cells_of(B)).collect();
        let pos = occupied[target % occupied.len()];
        let before = board.clone();

        for agent in [A, B] {
            let err = board.execute(Move::new(agent, pos)).unwrap_err();
            prop_assert_eq!(err.culprit, agent);
            prop_assert_eq!(&*err.board, &before);
            prop_assert_eq!(&board, &before);
        }
    }

    #[test]
    fn random_games_end_in_terminal_state(seed0 in any::<u64>(), seed1 in any::<u64>()) {
        let mut a = RandomAgent::with_seed(A, seed0);
        let mut b = RandomAgent::with_seed(B, seed1);
        let record = play(5, &mut a, &mut b);

        prop_assert!(record.result.is_terminal());
        prop_assert!(record.forfeit.is_none());
        prop_assert!(!record.trace.is_empty() && record.trace.len() <= 25);
        for (i, board) in record.trace.iter().enumerate() {
            prop_assert_eq!(board.stone_count(), i + 1);
        }
    }
}
