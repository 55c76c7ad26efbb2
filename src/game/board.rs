use crate::game::PieceType;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Filled(PieceType),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

#[derive(Clone)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Remove every full row, shifting the rows above down and inserting an
    /// empty row at the top. Scans bottom-to-top and re-checks the same index
    /// after a removal, so stacked full rows all clear in one pass.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height as i32 - 1;
        while y >= 0 {
            let row = y as usize;
            let full = (0..self.width).all(|x| self.get(x, row).is_filled());
            if full {
                let start = row * self.width;
                self.cells.drain(start..start + self.width);
                self.cells
                    .splice(0..0, std::iter::repeat(Cell::Empty).take(self.width));
                cleared += 1;
                // stay on the same row; everything above shifted down
            } else {
                y -= 1;
            }
        }
        cleared
    }
}
