//! Errors returned by [`Board`][crate::board::Board] placement and shots.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{coordinate::Coordinate, ship::Ship};

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PlaceReason {
    /// One or more of the ship's cells is off the board.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// One or more of the ship's cells is occupied by or touches another ship.
    #[error("the ship overlaps or touches another ship")]
    Blocked,
}

/// Error returned when a ship cannot be placed. The board is left unchanged.
#[derive(Error)]
#[error("could not place ship: {reason}")]
pub struct OutOfAreaError {
    #[source]
    reason: PlaceReason,
    ship: Ship,
}

impl Debug for OutOfAreaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl OutOfAreaError {
    pub(super) fn new(reason: PlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was rejected.
    pub fn reason(&self) -> PlaceReason {
        self.reason
    }

    /// Get a reference to the ship that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the rejected ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("coordinates are off the board")]
    OutOfBounds,

    /// A shot has already been fired at that cell.
    #[error("that cell was already fired upon")]
    AlreadyFired,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot fire at {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
