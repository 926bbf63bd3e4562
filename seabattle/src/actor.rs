//! Participants that choose where to fire each turn.

use rand::Rng;
use tracing::trace;

use crate::{
    board::{Board, ShotOutcome},
    config::BOARD_SIZE,
    coordinate::Coordinate,
    game::{Reporter, Side},
};

/// Interface implemented by the different kinds of participant.
pub trait TurnActor {
    /// Choose the next cell to fire at. The choice is not required to be valid; the
    /// enemy board rejects it and this is called again.
    fn next_target(&mut self) -> Coordinate;
}

impl<A: TurnActor + ?Sized> TurnActor for Box<A> {
    fn next_target(&mut self) -> Coordinate {
        (**self).next_target()
    }
}

/// Source of coordinates for a [`Manual`] actor, typically a person at a prompt.
///
/// Implemented for any `FnMut() -> Coordinate`.
pub trait TargetSource {
    /// Obtain a coordinate, blocking as long as necessary. Malformed input should be
    /// handled (and re-requested) by the source itself.
    fn read_target(&mut self) -> Coordinate;
}

impl<F: FnMut() -> Coordinate> TargetSource for F {
    fn read_target(&mut self) -> Coordinate {
        self()
    }
}

/// Actor whose targets come from outside the engine.
pub struct Manual<S> {
    source: S,
}

impl<S: TargetSource> Manual<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: TargetSource> TurnActor for Manual<S> {
    fn next_target(&mut self) -> Coordinate {
        self.source.read_target()
    }
}

/// Actor that fires at uniformly random cells of the board.
pub struct Automated<R> {
    rng: R,
}

impl<R: Rng> Automated<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TurnActor for Automated<R> {
    fn next_target(&mut self) -> Coordinate {
        Coordinate::new(
            self.rng.gen_range(0, BOARD_SIZE),
            self.rng.gen_range(0, BOARD_SIZE),
        )
    }
}

/// Play one shot for `side`: ask the actor for targets until one is accepted by the
/// enemy board. Rejected targets are passed to the reporter and do not end the turn.
pub fn take_turn<A, P>(
    actor: &mut A,
    enemy: &mut Board,
    side: Side,
    reporter: &mut P,
) -> (Coordinate, ShotOutcome)
where
    A: TurnActor + ?Sized,
    P: Reporter + ?Sized,
{
    loop {
        let target = actor.next_target();
        match enemy.fire_at(target) {
            Ok(outcome) => return (target, outcome),
            Err(err) => {
                trace!(?side, %err, "shot rejected");
                reporter.shot_rejected(side, &err);
            }
        }
    }
}
