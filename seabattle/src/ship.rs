// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Linear ships and their placement on the grid.
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::coordinate::Coordinate;

/// Direction a ship extends from its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Extends along the column axis.
    Horizontal,
    /// Extends along the row axis.
    Vertical,
}

impl Orientation {
    /// Step taken from one segment to the next as `(drow, dcol)`.
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

impl Distribution<Orientation> for Standard {
    /// Pick either orientation with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight ship of a given length, tracking how many of its segments are undamaged.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Ship {
    /// Construct an undamaged ship. Panics if `length` is 0.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        assert!(length > 0);
        Self {
            origin,
            length,
            orientation,
            remaining: length,
        }
    }

    /// First cell of the ship.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Number of cells the ship occupies.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments that have not been hit yet.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns true once every segment has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.remaining == 0
    }

    /// Get an iterator over the cells of this ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let origin = self.origin;
        let (drow, dcol) = self.orientation.step();
        (0..self.length as isize).map(move |i| origin.offset(drow * i, dcol * i))
    }

    /// Returns true if `target` is one of this ship's cells.
    pub fn is_hit_by(&self, target: &Coordinate) -> bool {
        self.cells().any(|cell| &cell == target)
    }

    /// Record one hit. The board guarantees this is called once per distinct cell; the
    /// count saturates at zero regardless.
    pub fn apply_hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_cells_advance_rows() {
        let ship = Ship::new(Coordinate::new(1, 2), 3, Orientation::Vertical);
        let cells: Vec<_> = ship.cells().collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(1, 2),
                Coordinate::new(2, 2),
                Coordinate::new(3, 2)
            ]
        );
    }

    #[test]
    fn horizontal_cells_advance_columns() {
        let ship = Ship::new(Coordinate::new(0, 4), 3, Orientation::Horizontal);
        let cells: Vec<_> = ship.cells().collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(0, 4),
                Coordinate::new(0, 5),
                Coordinate::new(0, 6)
            ]
        );
        assert!(ship.is_hit_by(&Coordinate::new(0, 6)));
        assert!(!ship.is_hit_by(&Coordinate::new(1, 4)));
    }

    #[test]
    fn hits_count_down_without_underflow() {
        let mut ship = Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal);
        assert_eq!(ship.remaining(), 2);
        ship.apply_hit();
        assert_eq!(ship.remaining(), 1);
        assert!(!ship.is_destroyed());
        ship.apply_hit();
        assert!(ship.is_destroyed());
        ship.apply_hit();
        assert_eq!(ship.remaining(), 0);
    }

    #[test]
    #[should_panic]
    fn zero_length_panics() {
        Ship::new(Coordinate::new(0, 0), 0, Orientation::Vertical);
    }
}
