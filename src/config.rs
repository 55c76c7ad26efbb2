// Shared game/UI constants.
pub const CELL_W: usize = 2; // render each block as two characters wide
pub const MIN_COLS: usize = 10;
pub const MAX_COLS: usize = 35;
pub const MIN_ROWS: usize = 15;
pub const SIDEBAR_W: u16 = 24;
pub const TICK_BASE_MS: u64 = 800; // base gravity interval (level 1)
pub const MIN_DROP_MS: u64 = 90;
