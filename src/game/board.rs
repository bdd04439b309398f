use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Dead,
    Alive,
}

/// Integer board coordinate. Signed so that candidate positions computed by
/// the movement engine can go out of bounds before validation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < BOARD_WIDTH as i32 && self.y >= 0 && self.y < BOARD_HEIGHT as i32
    }
}

/// The 10x20 playfield. Rows are stored top to bottom, row-major.
///
/// The falling piece lives in the grid itself as `Alive` cells; everything
/// settled is `Dead`. At most one piece worth of `Alive` cells exists at a
/// time.
#[derive(Clone, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Panics on out-of-bounds coordinates; callers validate with
    /// `Point::in_bounds` first.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y][x] = cell;
    }

    /// All `Alive` cells in row-major scan order (top row first, left to
    /// right). Recomputed on every call; the movement engine relies on this
    /// ordering to pick its rotation pivot.
    pub fn active_cells(&self) -> Vec<Point> {
        let mut active = Vec::with_capacity(4);
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                if self.cells[y][x] == Cell::Alive {
                    active.push(Point::new(x as i32, y as i32));
                }
            }
        }
        active
    }

    /// Freeze the falling piece: every `Alive` cell becomes `Dead`.
    pub fn lock_active(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == Cell::Alive {
                    *cell = Cell::Dead;
                }
            }
        }
    }

    /// A row is full when it has no `Empty` cells.
    pub fn row_full(&self, y: usize) -> bool {
        self.cells[y].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Bottom-most full row, if any. Scanning from the bottom means that
    /// after a collapse the same index is re-examined on the next call,
    /// which is what clears several simultaneously-full rows in sequence.
    pub fn find_full_row(&self) -> Option<usize> {
        (0..BOARD_HEIGHT).rev().find(|&y| self.row_full(y))
    }

    /// Remove row `y`: every row above shifts down one, the top row becomes
    /// empty. Rows below `y` are untouched.
    pub fn collapse_row(&mut self, y: usize) {
        for yy in (1..=y).rev() {
            self.cells[yy] = self.cells[yy - 1];
        }
        self.cells[0] = [Cell::Empty; BOARD_WIDTH];
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}
