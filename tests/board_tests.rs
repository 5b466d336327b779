//! Board tests - grid storage, line extraction, swapping

use tui_tropical::core::{Board, GemBag};
use tui_tropical::types::{GemKind, BOARD_SIZE};

#[test]
fn test_filled_board_is_fully_populated() {
    let mut bag = GemBag::new(3);
    let board = Board::filled_with(|| bag.draw());

    assert_eq!(board.size(), BOARD_SIZE);
    assert_eq!(board.gem_count(), BOARD_SIZE * BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            assert!(board.get(row, col).unwrap().is_some());
        }
    }
}

#[test]
fn test_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(BOARD_SIZE, 0), None);
    assert_eq!(board.get(0, BOARD_SIZE), None);
    assert_eq!(board.get(usize::MAX, usize::MAX), None);
}

#[test]
fn test_set_mutates_type_in_place() {
    let mut board = Board::new();

    assert!(board.set(4, 4, Some(GemKind::Pineapple)));
    assert_eq!(board.get(4, 4), Some(Some(GemKind::Pineapple)));

    // Same cell, new type; position is identity.
    assert!(board.set(4, 4, Some(GemKind::Grape)));
    assert_eq!(board.get(4, 4), Some(Some(GemKind::Grape)));

    let token = board.token(4, 4).unwrap();
    assert_eq!(token.pos(), (4, 4));
}

#[test]
fn test_lines_count_and_order() {
    let mut bag = GemBag::new(8);
    let board = Board::filled_with(|| bag.draw());

    let lines: Vec<_> = board.lines().collect();
    assert_eq!(lines.len(), 2 * BOARD_SIZE);

    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.len(), BOARD_SIZE);
        if i < BOARD_SIZE {
            // Rows first, left to right.
            assert!(line.iter().all(|t| t.row == i));
            assert!(line.iter().enumerate().all(|(j, t)| t.col == j));
        } else {
            // Then columns, top to bottom.
            assert!(line.iter().all(|t| t.col == i - BOARD_SIZE));
            assert!(line.iter().enumerate().all(|(j, t)| t.row == j));
        }
    }
}

#[test]
fn test_lines_are_stable_across_calls() {
    let mut bag = GemBag::new(21);
    let board = Board::filled_with(|| bag.draw());

    let first: Vec<_> = board.lines().collect();
    let second: Vec<_> = board.lines().collect();
    assert_eq!(first, second);
}

#[test]
fn test_double_swap_restores_board() {
    let mut bag = GemBag::new(5);
    let mut board = Board::filled_with(|| bag.draw());
    let before = board.clone();

    for (a, b) in [((0, 0), (0, 1)), ((3, 3), (4, 3)), ((7, 0), (0, 7))] {
        board.swap(a, b);
        board.swap(a, b);
        assert_eq!(board, before);
    }
}

#[test]
fn test_swap_only_moves_types() {
    let mut board = Board::new();
    board.set(2, 2, Some(GemKind::Kiwi));
    board.set(6, 2, Some(GemKind::Coconut));

    board.swap((2, 2), (6, 2));

    // The cells stayed where they were; only the kinds moved.
    assert_eq!(board.token(2, 2).unwrap().kind, Some(GemKind::Coconut));
    assert_eq!(board.token(6, 2).unwrap().kind, Some(GemKind::Kiwi));
    assert_eq!(board.gem_count(), 2);
}
