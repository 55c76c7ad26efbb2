#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    H,
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceType {
    pub const ALL: [PieceType; 8] = [
        PieceType::H,
        PieceType::I,
        PieceType::J,
        PieceType::L,
        PieceType::O,
        PieceType::S,
        PieceType::T,
        PieceType::Z,
    ];

    pub fn tag(&self) -> char {
        match self {
            PieceType::H => 'H',
            PieceType::I => 'I',
            PieceType::J => 'J',
            PieceType::L => 'L',
            PieceType::O => 'O',
            PieceType::S => 'S',
            PieceType::T => 'T',
            PieceType::Z => 'Z',
        }
    }
}

pub fn base_matrix(kind: PieceType) -> Vec<Vec<u8>> {
    let rows: &[&[u8]] = match kind {
        // extra H-shaped piece, part of the 8-type catalog
        PieceType::H => &[&[1, 0, 1], &[1, 1, 1], &[1, 0, 1]],
        PieceType::I => &[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ],
        PieceType::J => &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
        PieceType::L => &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
        PieceType::O => &[&[1, 1], &[1, 1]],
        PieceType::S => &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
        PieceType::T => &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
        PieceType::Z => &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
    };
    rows.iter().map(|r| r.to_vec()).collect()
}

pub fn rotate_matrix_cw(m: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let rows = m.len();
    let cols = m[0].len();
    let mut res = vec![vec![0u8; rows]; cols];
    for (r, row) in m.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            res[c][rows - 1 - r] = v;
        }
    }
    res
}

/// Index of the first matrix row containing a filled cell.
fn top_offset(matrix: &[Vec<u8>]) -> usize {
    matrix
        .iter()
        .position(|row| row.iter().any(|&v| v != 0))
        .unwrap_or(0)
}

#[derive(Clone, Debug)]
pub struct Piece {
    pub kind: PieceType,
    pub matrix: Vec<Vec<u8>>,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Centered horizontally, shifted up so leading empty matrix rows sit
    /// above row 0.
    pub fn spawn(kind: PieceType, cols: usize) -> Self {
        let matrix = base_matrix(kind);
        let w = matrix[0].len();
        let x = ((cols - w) / 2) as i32;
        let y = -(top_offset(&matrix) as i32);
        Self { kind, matrix, x, y }
    }

    /// Board coordinates of every occupied cell. May include negative rows.
    pub fn cells(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for (dy, row) in self.matrix.iter().enumerate() {
            for (dx, &v) in row.iter().enumerate() {
                if v != 0 {
                    out.push((self.x + dx as i32, self.y + dy as i32));
                }
            }
        }
        out
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut next = self.clone();
        next.x += dx;
        next.y += dy;
        next
    }

    pub fn rotated(&self) -> Self {
        let mut next = self.clone();
        next.matrix = rotate_matrix_cw(&self.matrix);
        next
    }
}
