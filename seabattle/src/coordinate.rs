use std::fmt;

/// Position of a cell on a board. Row is the vertical axis and column the horizontal.
///
/// Coordinates are not checked against any board when constructed; they may be negative or
/// past the edge. [`Board`][crate::board::Board] operations decide what is in bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Vertical position of the cell.
    pub row: isize,
    /// Horizontal position of the cell.
    pub col: isize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Get the coordinate shifted by the given row and column deltas.
    pub fn offset(self, drow: isize, dcol: isize) -> Self {
        Self::new(self.row + drow, self.col + dcol)
    }

    /// Iterate this coordinate and its eight surrounding cells (Chebyshev distance <= 1).
    /// Cells off the board are included; callers filter them.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }

    /// Chebyshev distance between two coordinates.
    pub fn distance(&self, other: &Coordinate) -> isize {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }
}

impl From<(isize, isize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (isize, isize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.row, self.col)
    }
}
