//! Engine for a two-player naval battle on a 6x6 grid.
//!
//! Each player owns a [`Board`] holding a fleet of seven straight ships (lengths
//! 3, 2, 2, 1, 1, 1, 1) that may not touch one another, even diagonally. Players take
//! turns firing at the opponent's board through a [`TurnActor`]; a shot that strikes a
//! ship earns another shot, and the first player to destroy the whole enemy fleet wins.
//!
//! [`fleet`] generates random fleets, [`Game`] runs the turn loop, and a [`Reporter`]
//! receives the outcome of every shot for display.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use seabattle::{Automated, Game};
//!
//! let mut rng = StdRng::seed_from_u64(5);
//! let a = Box::new(Automated::new(StdRng::seed_from_u64(6)));
//! let b = Box::new(Automated::new(StdRng::seed_from_u64(7)));
//! let mut game = Game::with_random_fleets(&mut rng, a, b, &mut ());
//! assert!(game.run(&mut ()).is_over());
//! ```

pub mod actor;
pub mod board;
pub mod config;
mod coordinate;
pub mod fleet;
pub mod game;
pub mod ship;

pub use crate::{
    actor::{take_turn, Automated, Manual, TargetSource, TurnActor},
    board::{Board, CannotShootReason, Cell, OutOfAreaError, PlaceReason, ShotError, ShotOutcome},
    coordinate::Coordinate,
    game::{Game, GameState, Reporter, Side, Turn},
    ship::{Orientation, Ship},
};
