use std::time::Duration;

use rand::thread_rng;

use crate::game::{Bag, Board, Cell, Piece};
use crate::{MIN_DROP_MS, TICK_BASE_MS};

const LINE_SCORES: [u64; 5] = [0, 40, 100, 300, 1200];

/// True when any occupied piece cell falls outside the side walls, reaches the
/// floor, or lands on a filled cell. Rows above the board top (negative y)
/// only collide against the walls.
pub fn collides(board: &Board, piece: &Piece) -> bool {
    for (x, y) in piece.cells() {
        if x < 0 || x >= board.width as i32 || y >= board.height as i32 {
            return true;
        }
        if y >= 0 && board.get(x as usize, y as usize).is_filled() {
            return true;
        }
    }
    false
}

/// Write the piece's type into the board. Cells still above the top edge are
/// discarded silently.
pub fn merge(board: &mut Board, piece: &Piece) {
    for (x, y) in piece.cells() {
        if x >= 0 && y >= 0 {
            let (xu, yu) = (x as usize, y as usize);
            if xu < board.width && yu < board.height {
                board.set(xu, yu, Cell::Filled(piece.kind));
            }
        }
    }
}

/// Rotate clockwise, trying the in-place position first and then each wall
/// kick offset in order. Returns the accepted piece, or None if every
/// candidate collides.
pub fn rotated_with_kicks(piece: &Piece, board: &Board) -> Option<Piece> {
    let rotated = piece.rotated();
    for kick in [0, -1, 1, -2, 2] {
        let candidate = rotated.shifted(kick, 0);
        if !collides(board, &candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Gravity interval for a level: base 800ms shrinking 15% per level, floored
/// at 90ms.
pub fn drop_interval_for(level: u32) -> Duration {
    let ms = (TICK_BASE_MS as f64) * 0.85f64.powi(level as i32 - 1);
    Duration::from_millis((ms as u64).max(MIN_DROP_MS))
}

pub struct Game {
    pub board: Board,
    pub current: Piece,
    pub score: u64,
    pub lines: u64,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
    pub drop_interval: Duration,
    bag: Bag,
}

impl Game {
    pub fn new(cols: usize, rows: usize) -> Self {
        let board = Board::new(cols, rows);
        let mut bag = Bag::new();
        let current = Piece::spawn(bag.next(&mut thread_rng()), cols);
        let mut game = Self {
            board,
            current,
            score: 0,
            lines: 0,
            level: 1,
            paused: false,
            game_over: false,
            drop_interval: drop_interval_for(1),
            bag,
        };
        if collides(&game.board, &game.current) {
            game.game_over = true;
        }
        game
    }

    /// Whether any progress has been made. A terminal resize only rebuilds
    /// the board while this is false; locked cells are never re-flowed.
    pub fn started(&self) -> bool {
        self.score > 0 || self.lines > 0 || self.board.cells.iter().any(|c| c.is_filled())
    }

    /// Sole mutator of the active piece's position. Rejected moves are
    /// silent no-ops.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over {
            return false;
        }
        let next = self.current.shifted(dx, dy);
        if collides(&self.board, &next) {
            return false;
        }
        self.current = next;
        true
    }

    pub fn soft_drop(&mut self) -> bool {
        if self.try_move(0, 1) {
            self.score += 1;
            true
        } else {
            false
        }
    }

    pub fn rotate_cw(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        match rotated_with_kicks(&self.current, &self.board) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        let mut dropped: u64 = 0;
        while self.try_move(0, 1) {
            dropped += 1;
        }
        self.lock_piece();
        self.score += dropped * 2;
    }

    /// One gravity step. On a failed downward move the piece locks
    /// immediately; there is no lock-delay grace period.
    pub fn tick_gravity(&mut self) {
        if self.paused || self.game_over {
            return;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
    }

    pub fn toggle_pause(&mut self) {
        if !self.game_over {
            self.paused = !self.paused;
        }
    }

    /// Reset every counter and respawn. The caller picks the dimensions so a
    /// restart adopts the current terminal size.
    pub fn restart(&mut self, cols: usize, rows: usize) {
        *self = Game::new(cols, rows);
    }

    /// Where the active piece would land under gravity. Render-only.
    pub fn ghost_piece(&self) -> Piece {
        let mut ghost = self.current.clone();
        while !collides(&self.board, &ghost.shifted(0, 1)) {
            ghost.y += 1;
        }
        ghost
    }

    fn lock_piece(&mut self) {
        merge(&mut self.board, &self.current);
        self.clear_lines();
        self.spawn_next();
    }

    fn clear_lines(&mut self) {
        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.score += LINE_SCORES[cleared.min(4)] * self.level as u64;
            self.lines += cleared as u64;
            self.set_level_from_lines();
        }
    }

    fn set_level_from_lines(&mut self) {
        let new_level = (self.lines / 10) as u32 + 1;
        if new_level != self.level {
            self.level = new_level;
            self.drop_interval = drop_interval_for(new_level);
        }
    }

    fn spawn_next(&mut self) {
        let kind = self.bag.next(&mut thread_rng());
        let piece = Piece::spawn(kind, self.board.width);
        if collides(&self.board, &piece) {
            self.game_over = true;
        }
        self.current = piece;
    }
}
