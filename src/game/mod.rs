pub mod bag;
pub mod board;
pub mod piece;
pub mod state;

pub use bag::Bag;
pub use board::{Board, Cell};
pub use piece::{base_matrix, rotate_matrix_cw, Piece, PieceType};
pub use state::{collides, drop_interval_for, merge, rotated_with_kicks, Game};
