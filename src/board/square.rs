//! Board coordinates.

use std::fmt;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell coordinate. Only constructible for in-bounds positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    column: u8,
}

impl Square {
    /// Creates a square, or returns None if either coordinate is off the board.
    pub fn new(row: usize, column: usize) -> Option<Square> {
        if row < BOARD_SIZE && column < BOARD_SIZE {
            Some(Square {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    pub const fn row(self) -> usize {
        self.row as usize
    }

    pub const fn column(self) -> usize {
        self.column as usize
    }

    /// Index into the flat cell array (row-major).
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.column()
    }

    /// Inverse of `index`.
    pub fn from_index(idx: usize) -> Option<Square> {
        Square::new(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// Iterates every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..CELL_COUNT).filter_map(Square::from_index)
    }

    /// Offsets this square by a signed step, staying on the board.
    pub fn offset(self, d_row: i32, d_column: i32) -> Option<Square> {
        let row = self.row() as i32 + d_row;
        let column = self.column() as i32 + d_column;
        if row < 0 || column < 0 {
            return None;
        }
        Square::new(row as usize, column as usize)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
