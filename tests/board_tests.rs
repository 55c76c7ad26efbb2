use gridfall::game::{Board, Cell, PieceType};

fn fill_row(board: &mut Board, y: usize) {
    for x in 0..board.width {
        board.set(x, y, Cell::Filled(PieceType::I));
    }
}

#[test]
fn new_board_is_empty() {
    let board = Board::new(10, 20);
    assert_eq!(board.width, 10);
    assert_eq!(board.height, 20);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn set_and_get_round_trip() {
    let mut board = Board::new(10, 20);
    board.set(5, 10, Cell::Filled(PieceType::T));
    assert_eq!(board.get(5, 10), Cell::Filled(PieceType::T));
    board.set(5, 10, Cell::Empty);
    assert_eq!(board.get(5, 10), Cell::Empty);
}

#[test]
fn clear_single_full_row() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 19);
    board.set(0, 18, Cell::Filled(PieceType::O));

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.width, 10);
    assert_eq!(board.height, 20);
    // the partial row above shifted down onto the floor
    assert_eq!(board.get(0, 19), Cell::Filled(PieceType::O));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn stacked_full_rows_clear_in_one_pass() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 18);
    fill_row(&mut board, 19);
    board.set(3, 17, Cell::Filled(PieceType::S));

    let before = board.filled_count();
    let cleared = board.clear_full_rows();
    assert_eq!(cleared, 2);
    assert_eq!(board.filled_count(), before - cleared * board.width);
    assert_eq!(board.get(3, 19), Cell::Filled(PieceType::S));
}

#[test]
fn clears_full_rows_separated_by_gaps() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 15);
    fill_row(&mut board, 19);
    board.set(7, 17, Cell::Filled(PieceType::Z));

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.filled_count(), 1);
    // dropped one row by the clear below it, untouched by the clear above it
    assert_eq!(board.get(7, 18), Cell::Filled(PieceType::Z));
}

#[test]
fn partial_rows_are_untouched() {
    let mut board = Board::new(10, 20);
    for x in 0..9 {
        board.set(x, 19, Cell::Filled(PieceType::L));
    }
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board.filled_count(), 9);
}
