//! Two-player game: alternating turns, extra shots on hits, and victory detection.
use rand::Rng;
use tracing::info;

use crate::{
    actor::{take_turn, TurnActor},
    board::{Board, ShotError, ShotOutcome},
    coordinate::Coordinate,
    fleet,
};

/// Identifies one of the two players. `A` moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Player to move after this one fired with the given outcome. A hit keeps the turn.
    pub fn after(self, outcome: ShotOutcome) -> Self {
        if outcome.is_hit() {
            self
        } else {
            self.opponent()
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Overall state of a game. Both won states are terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameState {
    InProgress,
    PlayerAWon,
    PlayerBWon,
}

impl GameState {
    /// The winning side, or `None` while the game is in progress.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameState::InProgress => None,
            GameState::PlayerAWon => Some(Side::A),
            GameState::PlayerBWon => Some(Side::B),
        }
    }

    pub fn is_over(self) -> bool {
        self != GameState::InProgress
    }

    fn won_by(side: Side) -> Self {
        match side {
            Side::A => GameState::PlayerAWon,
            Side::B => GameState::PlayerBWon,
        }
    }
}

/// Receives notifications about the progress of a game, for display. All methods
/// default to doing nothing, and `()` is a reporter that ignores everything.
pub trait Reporter {
    /// A board for `side` got stuck during fleet placement and was started over.
    fn fleet_restarted(&mut self, _side: Side, _restarts: usize) {}

    /// The target chosen by `side` was refused; the same side will choose again.
    fn shot_rejected(&mut self, _side: Side, _err: &ShotError) {}

    /// `side` fired at `target` on the opponent's board.
    fn shot_resolved(&mut self, _side: Side, _target: Coordinate, _outcome: ShotOutcome) {}

    /// The game reached a terminal state.
    fn game_over(&mut self, _state: GameState) {}
}

impl Reporter for () {}

/// Record of a single resolved shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Turn {
    /// Player who fired.
    pub side: Side,
    /// Cell that was fired at on the opponent's board.
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// Handles gameplay.
pub struct Game {
    /// Boards indexed by [`Side`]; each holds that side's own fleet.
    boards: [Board; 2],

    /// Actors indexed by [`Side`]; each fires at the other side's board.
    actors: [Box<dyn TurnActor>; 2],

    /// Player who fires next.
    active: Side,

    /// Number of shots resolved so far.
    turns: usize,

    state: GameState,
}

impl Game {
    /// Start a game with prepared boards. Both boards must already be in play mode (see
    /// [`Board::clear_transient`]).
    pub fn new(
        board_a: Board,
        board_b: Board,
        actor_a: Box<dyn TurnActor>,
        actor_b: Box<dyn TurnActor>,
    ) -> Self {
        Self {
            boards: [board_a, board_b],
            actors: [actor_a, actor_b],
            active: Side::A,
            turns: 0,
            state: GameState::InProgress,
        }
    }

    /// Start a game with randomly generated fleets on both sides. Player B's board is
    /// hidden.
    pub fn with_random_fleets<R, P>(
        rng: &mut R,
        actor_a: Box<dyn TurnActor>,
        actor_b: Box<dyn TurnActor>,
        reporter: &mut P,
    ) -> Self
    where
        R: Rng + ?Sized,
        P: Reporter + ?Sized,
    {
        let board_a =
            fleet::random_board_reporting(rng, |n| reporter.fleet_restarted(Side::A, n));
        let mut board_b =
            fleet::random_board_reporting(rng, |n| reporter.fleet_restarted(Side::B, n));
        board_b.set_hidden(true);
        Self::new(board_a, board_b, actor_a, actor_b)
    }

    /// Current state of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Player who fires next.
    pub fn active(&self) -> Side {
        self.active
    }

    /// Number of shots resolved so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Board holding the given side's fleet.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Mutable access to the board holding the given side's fleet.
    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.boards[side.index()]
    }

    /// Play one shot by the active player. Returns `None` without doing anything once
    /// the game is over.
    pub fn step<P: Reporter + ?Sized>(&mut self, reporter: &mut P) -> Option<Turn> {
        if self.state.is_over() {
            return None;
        }
        let side = self.active;
        let actor = &mut self.actors[side.index()];
        let enemy = &mut self.boards[side.opponent().index()];
        let (target, outcome) = take_turn(actor, enemy, side, reporter);
        reporter.shot_resolved(side, target, outcome);

        self.turns += 1;
        self.active = side.after(outcome);

        if self.board(Side::B).is_defeated() {
            self.state = GameState::won_by(Side::A);
        } else if self.board(Side::A).is_defeated() {
            self.state = GameState::won_by(Side::B);
        }
        if self.state.is_over() {
            info!(state = ?self.state, turns = self.turns, "game over");
            reporter.game_over(self.state);
        }
        Some(Turn {
            side,
            target,
            outcome,
        })
    }

    /// Play until one side has won and return the final state.
    pub fn run<P: Reporter + ?Sized>(&mut self, reporter: &mut P) -> GameState {
        while self.step(reporter).is_some() {}
        self.state
    }
}
