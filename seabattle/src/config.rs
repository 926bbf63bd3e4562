//! Fixed parameters of the game: board size and fleet composition.

/// Width and height of every board.
pub const BOARD_SIZE: isize = 6;

/// Ship lengths placed on each board, in placement order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of ships in a fleet. A board is defeated once this many ships are destroyed.
pub const FLEET_SIZE: usize = FLEET.len();

/// Total number of ship segments in a fleet.
pub const FLEET_SEGMENTS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a single board before it is abandoned.
pub const PLACEMENT_BUDGET: usize = 2000;

/// Random placement origins are drawn from `[0, ORIGIN_SPAN)` on both axes. This is one
/// wider than the board; origins that push a ship off the board are rejected by the board.
pub const ORIGIN_SPAN: isize = BOARD_SIZE + 1;
