pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod ui;

pub use config::{
    CELL_W, MAX_COLS, MIN_COLS, MIN_DROP_MS, MIN_ROWS, SIDEBAR_W, TICK_BASE_MS,
};
pub use game::{Board, Cell, Game, Piece, PieceType};
pub use input::Action;
