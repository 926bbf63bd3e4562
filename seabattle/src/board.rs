//! A single player's board: the grid, the fleet, and the record of shots against it.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::{config::BOARD_SIZE, config::FLEET_SIZE, coordinate::Coordinate, ship::Ship};

use self::grid::Grid;
pub use self::{
    errors::{CannotShootReason, OutOfAreaError, PlaceReason, ShotError},
    grid::Cell,
};

mod errors;
mod grid;

/// Result of a successful shot on a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship, but did not destroy it.
    Hit,
    /// The shot hit the last undamaged segment of a ship.
    ShipDestroyed,
}

impl ShotOutcome {
    /// Returns true if a ship was struck. The shooter earns another shot.
    pub fn is_hit(self) -> bool {
        match self {
            ShotOutcome::Miss => false,
            ShotOutcome::Hit | ShotOutcome::ShipDestroyed => true,
        }
    }
}

/// Represents a single player's board, including their ships and their side of the ocean.
///
/// The `blocked` set has two successive uses. While ships are being placed it holds every
/// ship cell plus the one-cell buffer around each ship, so that later ships cannot touch.
/// [`Board::clear_transient`] empties it, after which it holds every cell that has been
/// fired upon (or revealed around a destroyed ship).
#[derive(Debug, Clone)]
pub struct Board {
    /// Cell states.
    grid: Grid,

    /// Cells excluded from placement, then cells already fired upon.
    blocked: HashSet<Coordinate>,

    /// Ships in the order they were placed.
    ships: Vec<Ship>,

    /// Whether ship cells are concealed from [`Board::visible_cell`].
    hidden: bool,

    /// Number of ships with no remaining segments.
    destroyed: usize,
}

impl Board {
    /// Construct an empty, visible board of the standard size.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(BOARD_SIZE),
            blocked: HashSet::new(),
            ships: Vec::new(),
            hidden: false,
            destroyed: 0,
        }
    }

    /// Width and height of the board.
    pub fn size(&self) -> isize {
        self.grid.size
    }

    /// Returns true if `coord` lies outside `[0, size)` on either axis.
    pub fn is_out_of_bounds(&self, coord: &Coordinate) -> bool {
        !self.grid.contains(coord)
    }

    /// Place a ship. Every cell must be on the board and outside the blocked set; if any
    /// is not, the board is left untouched and the ship is returned in the error.
    ///
    /// On success the ship's cells are marked [`Cell::Ship`], and the ship's cells plus
    /// their eight neighbors are added to the blocked set.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), OutOfAreaError> {
        for cell in ship.cells() {
            if self.is_out_of_bounds(&cell) {
                return Err(OutOfAreaError::new(PlaceReason::OutOfBounds, ship));
            }
            if self.blocked.contains(&cell) {
                return Err(OutOfAreaError::new(PlaceReason::Blocked, ship));
            }
        }
        for cell in ship.cells() {
            self.grid[cell] = Cell::Ship;
            self.blocked.insert(cell);
        }
        self.reserve_buffer(&ship, false);
        self.ships.push(ship);
        Ok(())
    }

    /// Empty the blocked set, keeping the grid and ships. Must be called exactly once,
    /// between placing the fleet and the first shot.
    pub fn clear_transient(&mut self) {
        self.blocked.clear();
    }

    /// Fire a shot at this board.
    ///
    /// Fails without changing anything if the target is off the board or was already
    /// fired upon. Otherwise the target is recorded; a hit damages the ship occupying it,
    /// and destroying a ship reveals the water around it as [`Cell::Miss`].
    pub fn fire_at(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(&target) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, target));
        }
        if !self.blocked.insert(target) {
            return Err(ShotError::new(CannotShootReason::AlreadyFired, target));
        }

        let hit = self.ships.iter().position(|ship| ship.is_hit_by(&target));
        let outcome = match hit {
            None => {
                self.grid[target] = Cell::Miss;
                ShotOutcome::Miss
            }
            Some(idx) => {
                self.grid[target] = Cell::Hit;
                let ship = &mut self.ships[idx];
                ship.apply_hit();
                if ship.is_destroyed() {
                    let ship = ship.clone();
                    self.destroyed += 1;
                    self.reserve_buffer(&ship, true);
                    debug!(
                        origin = %ship.origin(),
                        len = ship.len(),
                        destroyed = self.destroyed,
                        "ship destroyed"
                    );
                    ShotOutcome::ShipDestroyed
                } else {
                    ShotOutcome::Hit
                }
            }
        };
        trace!(%target, ?outcome, "shot resolved");
        Ok(outcome)
    }

    /// Add every on-board cell within one step of the ship to the blocked set. When
    /// `reveal` is set, neighbors that are still open water become [`Cell::Miss`].
    fn reserve_buffer(&mut self, ship: &Ship, reveal: bool) {
        for cell in ship.cells() {
            for neighbor in cell.neighborhood() {
                if self.is_out_of_bounds(&neighbor) || !self.blocked.insert(neighbor) {
                    continue;
                }
                if reveal && self.grid[neighbor] == Cell::Empty {
                    self.grid[neighbor] = Cell::Miss;
                }
            }
        }
    }

    /// Number of ships that have been destroyed.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Returns true once the whole fleet has been destroyed.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == FLEET_SIZE
    }

    /// Ships on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns true if the coordinate is in the blocked set.
    pub fn is_blocked(&self, coord: &Coordinate) -> bool {
        self.blocked.contains(coord)
    }

    /// Whether ship cells are concealed.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Conceal or reveal the undamaged ship cells of this board.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Actual state of the cell, regardless of concealment. `None` if out of bounds.
    pub fn cell(&self, coord: &Coordinate) -> Option<Cell> {
        self.grid.get(coord).copied()
    }

    /// State of the cell as it may be shown to the opponent: undamaged ship segments read
    /// as [`Cell::Empty`] while the board is hidden. `None` if out of bounds.
    pub fn visible_cell(&self, coord: &Coordinate) -> Option<Cell> {
        self.cell(coord).map(|cell| match cell {
            Cell::Ship if self.hidden => Cell::Empty,
            other => other,
        })
    }

    /// Get an iterator over the rows of this board. Each row is an iterator over the
    /// visible cells of that row.
    pub fn rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Cell>> {
        let size = self.size();
        (0..size).map(move |row| {
            (0..size).map(move |col| {
                self.visible_cell(&Coordinate::new(row, col))
                    .unwrap_or_default()
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
