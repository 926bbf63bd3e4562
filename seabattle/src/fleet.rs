//! Random placement of the standard fleet.
//!
//! Random placement on a small board with a buffer around every ship can paint itself
//! into a corner, leaving no room for a ship that still has to be placed. Each attempt
//! at a board is therefore given a fixed budget of placement tries; a board that runs out
//! is thrown away and generation starts again from an empty board.

use rand::Rng;
use tracing::{debug, trace};

use crate::{
    board::Board,
    config::{FLEET, ORIGIN_SPAN, PLACEMENT_BUDGET},
    coordinate::Coordinate,
    ship::Ship,
};

/// Try to place the standard fleet on a fresh board using at most `budget` placement
/// attempts in total. Returns `None` if the budget runs out before every ship is placed.
///
/// The returned board has already been switched to play mode with
/// [`Board::clear_transient`].
pub fn try_random_board_with_budget<R: Rng + ?Sized>(rng: &mut R, budget: usize) -> Option<Board> {
    let mut board = Board::new();
    let mut attempts = 0;
    for &len in FLEET.iter() {
        loop {
            if attempts >= budget {
                trace!(attempts, placed = board.ships().len(), "placement budget exhausted");
                return None;
            }
            attempts += 1;
            let origin = Coordinate::new(
                rng.gen_range(0, ORIGIN_SPAN),
                rng.gen_range(0, ORIGIN_SPAN),
            );
            match board.place_ship(Ship::new(origin, len, rng.gen())) {
                Ok(()) => break,
                Err(err) => trace!(%err, "placement rejected"),
            }
        }
    }
    board.clear_transient();
    Some(board)
}

/// Try to place the standard fleet within [`PLACEMENT_BUDGET`] attempts.
pub fn try_random_board<R: Rng + ?Sized>(rng: &mut R) -> Option<Board> {
    try_random_board_with_budget(rng, PLACEMENT_BUDGET)
}

/// Generate a board with the standard fleet, restarting from an empty board whenever an
/// attempt runs out of budget. `on_restart` is called with the number of boards abandoned
/// so far each time that happens.
pub fn random_board_reporting<R, F>(rng: &mut R, mut on_restart: F) -> Board
where
    R: Rng + ?Sized,
    F: FnMut(usize),
{
    let mut restarts = 0;
    loop {
        if let Some(board) = try_random_board(rng) {
            return board;
        }
        restarts += 1;
        debug!(restarts, "fleet placement stuck, starting a fresh board");
        on_restart(restarts);
    }
}

/// Generate a board with the standard fleet, restarting as often as needed.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    random_board_reporting(rng, |_| {})
}
