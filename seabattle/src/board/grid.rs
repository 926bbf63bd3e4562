//! Storage for the cell states of a single board.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::coordinate::Coordinate;

/// State of a single cell in a player's grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// Open water that has not been shot.
    Empty,
    /// An undamaged ship segment.
    Ship,
    /// A ship segment that has been shot.
    Hit,
    /// Water that has been shot, or revealed around a destroyed ship.
    Miss,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Square grid of [`Cell`]s, stored row-major.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Width and height of the grid.
    pub(super) size: isize,
    /// Cells that make up this grid.
    cells: Box<[Cell]>,
}

impl Grid {
    pub(super) fn new(size: isize) -> Self {
        let cells = (0..size * size).map(|_| Default::default()).collect();
        Self { size, cells }
    }

    /// Returns true if both axes of `coord` lie in `[0, size)`.
    pub(super) fn contains(&self, coord: &Coordinate) -> bool {
        (0..self.size).contains(&coord.row) && (0..self.size).contains(&coord.col)
    }

    /// Convert a coordinate to an index into `cells`, or `None` if out of bounds.
    fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.row * self.size + coord.col) as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Cell> {
        self.try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Cell> {
        self.try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open_on_both_axes() {
        let grid = Grid::new(6);
        assert!(grid.contains(&Coordinate::new(0, 0)));
        assert!(grid.contains(&Coordinate::new(5, 5)));
        assert!(!grid.contains(&Coordinate::new(6, 0)));
        assert!(!grid.contains(&Coordinate::new(0, 6)));
        assert!(!grid.contains(&Coordinate::new(-1, 3)));
        assert!(!grid.contains(&Coordinate::new(3, -1)));
    }

    #[test]
    fn cells_start_empty_and_are_addressable() {
        let mut grid = Grid::new(6);
        assert_eq!(grid[Coordinate::new(2, 3)], Cell::Empty);
        grid[Coordinate::new(2, 3)] = Cell::Ship;
        assert_eq!(grid.get(Coordinate::new(2, 3)), Some(&Cell::Ship));
        assert_eq!(grid.get(Coordinate::new(3, 2)), Some(&Cell::Empty));
        assert_eq!(grid.get(Coordinate::new(6, 6)), None);
    }
}
