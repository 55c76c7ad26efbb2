use gridfall::game::{base_matrix, rotate_matrix_cw, Piece, PieceType};

#[test]
fn four_rotations_return_to_original() {
    for kind in PieceType::ALL {
        let base = base_matrix(kind);
        let mut m = base.clone();
        for _ in 0..4 {
            m = rotate_matrix_cw(&m);
        }
        assert_eq!(m, base, "{:?} did not survive four rotations", kind);
    }
}

#[test]
fn rotate_cw_transposes_and_reverses() {
    let m = vec![vec![0, 0, 0, 0], vec![1, 1, 1, 1], vec![0, 0, 0, 0], vec![0, 0, 0, 0]];
    let rotated = rotate_matrix_cw(&m);
    // the horizontal bar in row 1 becomes a vertical bar in column 2
    for (r, row) in rotated.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            assert_eq!(v == 1, c == 2, "unexpected cell at ({}, {})", r, c);
        }
    }
}

#[test]
fn spawn_centers_horizontally() {
    let o = Piece::spawn(PieceType::O, 10);
    assert_eq!(o.x, 4); // (10 - 2) / 2
    let t = Piece::spawn(PieceType::T, 10);
    assert_eq!(t.x, 3); // (10 - 3) / 2
    let i = Piece::spawn(PieceType::I, 35);
    assert_eq!(i.x, 15); // (35 - 4) / 2
}

#[test]
fn spawn_lifts_leading_empty_rows_above_the_top() {
    // I's matrix has an empty first row, so it spawns one row up
    let i = Piece::spawn(PieceType::I, 10);
    assert_eq!(i.y, -1);
    assert!(i.cells().iter().all(|&(_, y)| y == 0));

    // O and T start at row 0
    assert_eq!(Piece::spawn(PieceType::O, 10).y, 0);
    assert_eq!(Piece::spawn(PieceType::T, 10).y, 0);
}

#[test]
fn cell_counts_match_the_catalog() {
    for kind in PieceType::ALL {
        let piece = Piece::spawn(kind, 10);
        let expected = if kind == PieceType::H { 7 } else { 4 };
        assert_eq!(piece.cells().len(), expected, "{:?}", kind);
    }
}

#[test]
fn shifted_moves_the_offset_only() {
    let piece = Piece::spawn(PieceType::L, 10);
    let moved = piece.shifted(-2, 3);
    assert_eq!(moved.x, piece.x - 2);
    assert_eq!(moved.y, piece.y + 3);
    assert_eq!(moved.matrix, piece.matrix);
}
