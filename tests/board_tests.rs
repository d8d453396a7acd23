//! Board tests - placement, absorption and line clearing

use blockfall::core::{Board, Cell, Piece, Point};
use blockfall::types::{Color, Move, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

const S: i32 = 20;

fn cell_at(row: i32, col: i32) -> Cell {
    Cell::square(Point::new(col * S, (row + 1) * S), S, Color::Orange)
}

fn fill_row_except(board: &mut Board, row: i32, hole: Option<i32>) {
    let cells: Vec<Cell> = (0..BOARD_WIDTH as i32)
        .filter(|&col| Some(col) != hole)
        .map(|col| cell_at(row, col))
        .collect();
    board.absorb(&cells);
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(S);
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.rows().len(), 20);
    assert!(board.rows().iter().all(|row| row.iter().all(|&c| !c)));
    assert!(board.locked_cells().is_empty());
    assert!(board.check_invariants());
}

#[test]
fn test_can_place_walls_and_floor() {
    let board = Board::new(S);
    assert!(board.can_place(&[cell_at(0, 0), cell_at(0, 9)]));
    assert!(!board.can_place(&[cell_at(0, -1)]));
    assert!(!board.can_place(&[cell_at(0, 10)]));
    assert!(!board.can_place(&[cell_at(-1, 4)]));
}

#[test]
fn test_can_place_has_no_ceiling() {
    let board = Board::new(S);
    assert!(board.can_place(&[cell_at(20, 4), cell_at(35, 0)]));
}

#[test]
fn test_can_place_rejects_locked_overlap() {
    let mut board = Board::new(S);
    board.absorb(&[cell_at(3, 3)]);
    assert!(!board.can_place(&[cell_at(5, 5), cell_at(3, 3)]));
    assert!(board.can_place(&[cell_at(4, 3)]));
}

#[test]
fn test_can_place_matches_rule_for_every_translation() {
    let mut board = Board::new(S);
    board.absorb(&[cell_at(0, 0), cell_at(2, 5), cell_at(7, 9), cell_at(12, 3)]);

    for kind in ShapeKind::ALL {
        for row in -3..24 {
            for col in -4..14 {
                let piece = Piece::spawn_at(kind, row, col, S);
                let expected = piece.cells().iter().all(|c| {
                    let (r, c) = c.grid_position();
                    (0..BOARD_WIDTH as i32).contains(&c) && r >= 0 && !board.is_occupied(r, c)
                });
                assert_eq!(
                    board.can_place(piece.cells()),
                    expected,
                    "{kind:?} at ({row}, {col})"
                );
            }
        }
    }
}

#[test]
fn test_absorb_marks_matrix_and_list() {
    let mut board = Board::new(S);
    let piece = Piece::spawn_at(ShapeKind::T, 1, 4, S);
    board.absorb(piece.cells());

    assert_eq!(board.locked_cells().len(), 4);
    for cell in piece.cells() {
        let (row, col) = cell.grid_position();
        assert!(board.is_occupied(row, col));
    }
    assert!(board.locked_cells().iter().all(|c| c.color() == Color::Purple));
}

#[test]
fn test_clear_lines_no_full_rows_is_noop() {
    let mut board = Board::new(S);
    fill_row_except(&mut board, 0, Some(3));
    board.absorb(&[cell_at(1, 1), cell_at(4, 8)]);
    let before = board.clone();

    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, before);
    assert_eq!(board.clear_lines(), 0);
}

#[test]
fn test_clear_single_row_shifts_only_rows_above() {
    let mut board = Board::new(S);
    board.absorb(&[cell_at(0, 2), cell_at(1, 0)]);
    fill_row_except(&mut board, 2, None);
    board.absorb(&[cell_at(3, 4), cell_at(7, 9)]);

    assert_eq!(board.clear_lines(), 1);

    assert!(board.is_occupied(0, 2));
    assert!(board.is_occupied(1, 0));
    assert!(board.is_occupied(2, 4));
    assert!(board.is_occupied(6, 9));
    assert!(!board.is_occupied(7, 9));
    assert_eq!(board.locked_cells().len(), 4);
    assert_eq!(board.rows().len(), BOARD_HEIGHT);
    assert!(board.check_invariants());
}

#[test]
fn test_clear_bottom_row_of_nearly_full_board() {
    let mut board = Board::new(S);
    fill_row_except(&mut board, 0, Some(6));
    for row in 1..19 {
        fill_row_except(&mut board, row, None);
    }
    // Row 0 has a hole, rows 1-18 are full.
    board.absorb(&[cell_at(19, 0)]);
    let cleared = board.clear_lines();
    assert_eq!(cleared, 18);

    // Rows 1-18 collapsed; the partial row 0 stayed put and row 19's
    // lone cell fell to row 1.
    assert!(!board.is_occupied(0, 6));
    assert!(board.is_occupied(0, 5));
    assert!(board.is_occupied(1, 0));
    assert!(board.rows()[2..].iter().all(|row| row.iter().all(|&c| !c)));

    board.absorb(&[cell_at(0, 6)]);
    assert_eq!(board.clear_lines(), 1);
    assert!(board.is_occupied(0, 0));
    assert_eq!(board.locked_cells().len(), 1);
    assert!(board.rows()[BOARD_HEIGHT - 1].iter().all(|&c| !c));
}

#[test]
fn test_clear_row_zero_completed_by_last_cell() {
    let mut board = Board::new(S);
    fill_row_except(&mut board, 0, Some(7));
    for row in 1..19 {
        fill_row_except(&mut board, row, Some(row % BOARD_WIDTH as i32));
    }
    let before: Vec<(i32, i32)> = board
        .locked_cells()
        .iter()
        .map(Cell::grid_position)
        .filter(|&(row, _)| row > 0)
        .collect();

    board.absorb(&[cell_at(0, 7)]);
    assert_eq!(board.clear_lines(), 1);

    let mut after: Vec<(i32, i32)> = board
        .locked_cells()
        .iter()
        .map(Cell::grid_position)
        .collect();
    let mut expected: Vec<(i32, i32)> = before.iter().map(|&(r, c)| (r - 1, c)).collect();
    after.sort_unstable();
    expected.sort_unstable();
    assert_eq!(after, expected);
    assert!(board.rows()[19].iter().all(|&c| !c));
    assert!(board.rows()[18].iter().all(|&c| !c));
    assert_eq!(board.rows().len(), 20);
}

#[test]
fn test_clear_multiple_adjacent_rows() {
    let mut board = Board::new(S);
    for row in 0..4 {
        fill_row_except(&mut board, row, None);
    }
    board.absorb(&[cell_at(4, 1), cell_at(5, 2)]);

    assert_eq!(board.clear_lines(), 4);
    assert!(board.is_occupied(0, 1));
    assert!(board.is_occupied(1, 2));
    assert_eq!(board.locked_cells().len(), 2);
}

#[test]
fn test_o_piece_lands_on_floor() {
    let board = Board::new(S);
    let mut piece = Piece::spawn_at(ShapeKind::O, 21, 4, S);
    let mut moves = 0;
    loop {
        let trial = piece.trial(Move::Down);
        if !board.can_place(trial.cells()) {
            break;
        }
        piece.commit(trial);
        moves += 1;
    }
    assert_eq!(moves, 20);
    let mut rows: Vec<i32> = piece.cells().iter().map(|c| c.grid_position().0).collect();
    rows.sort_unstable();
    assert_eq!(rows, vec![0, 0, 1, 1]);
}

#[test]
fn test_reset_empties_everything() {
    let mut board = Board::new(S);
    fill_row_except(&mut board, 0, Some(0));
    board.reset();
    assert_eq!(board, Board::new(S));
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new(S);
    fill_row_except(&mut board, 19, Some(9));
    assert!(!board.is_row_full(19));
    board.absorb(&[cell_at(19, 9)]);
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(20));
}

#[test]
fn test_is_row_empty() {
    let mut board = Board::new(S);
    assert!(board.is_row_empty(19));
    assert_eq!(board.absorb(&[cell_at(19, 4)]), 0);
    assert!(!board.is_row_empty(19));
    assert!(!board.is_row_full(19));
    assert!(board.is_row_empty(18));
    assert!(board.is_row_empty(20));
}
