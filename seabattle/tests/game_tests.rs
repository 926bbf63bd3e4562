use seabattle::{
    Board, CannotShootReason, Coordinate, Game, GameState, Manual, Orientation, Reporter, Ship,
    ShotError, ShotOutcome, Side, TurnActor,
};

/// Ship cells of the layout built by `fixed_board`.
const FLEET_CELLS: [(isize, isize); 11] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 4),
    (0, 5),
    (2, 0),
    (3, 0),
    (2, 2),
    (2, 4),
    (4, 2),
    (4, 4),
];

/// A full fleet placed by hand, in play mode.
fn fixed_board() -> Board {
    let mut board = Board::new();
    let layout = [
        ((0, 0), 3, Orientation::Horizontal),
        ((0, 4), 2, Orientation::Horizontal),
        ((2, 0), 2, Orientation::Vertical),
        ((2, 2), 1, Orientation::Vertical),
        ((2, 4), 1, Orientation::Vertical),
        ((4, 2), 1, Orientation::Vertical),
        ((4, 4), 1, Orientation::Vertical),
    ];
    for &(origin, len, orientation) in layout.iter() {
        board
            .place_ship(Ship::new(Coordinate::from(origin), len, orientation))
            .unwrap();
    }
    board.clear_transient();
    board
}

fn script(cells: &[(isize, isize)]) -> Box<dyn TurnActor> {
    let mut cells = cells.to_vec().into_iter().map(Coordinate::from);
    Box::new(Manual::new(move || cells.next().expect("script exhausted")))
}

fn silent() -> Box<dyn TurnActor> {
    Box::new(Manual::new(|| -> Coordinate { panic!("this side should not fire") }))
}

#[derive(Default)]
struct Recorder {
    rejected: Vec<(Side, CannotShootReason)>,
    resolved: Vec<(Side, ShotOutcome)>,
    finished: Vec<GameState>,
}

impl Reporter for Recorder {
    fn shot_rejected(&mut self, side: Side, err: &ShotError) {
        self.rejected.push((side, err.reason()));
    }

    fn shot_resolved(&mut self, side: Side, _target: Coordinate, outcome: ShotOutcome) {
        self.resolved.push((side, outcome));
    }

    fn game_over(&mut self, state: GameState) {
        self.finished.push(state);
    }
}

#[test]
fn hits_earn_extra_shots_and_a_miss_passes_the_turn() {
    let a = script(&[(0, 0), (0, 1), (5, 5)]);
    let b = script(&[(5, 5)]);
    let mut game = Game::new(fixed_board(), fixed_board(), a, b);
    let mut recorder = Recorder::default();

    let shooters: Vec<Side> = (0..4)
        .map(|_| game.step(&mut recorder).unwrap().side)
        .collect();
    assert_eq!(shooters, vec![Side::A, Side::A, Side::A, Side::B]);
    assert_eq!(
        recorder.resolved,
        vec![
            (Side::A, ShotOutcome::Hit),
            (Side::A, ShotOutcome::Hit),
            (Side::A, ShotOutcome::Miss),
            (Side::B, ShotOutcome::Miss),
        ]
    );
    assert_eq!(game.active(), Side::A);
    assert_eq!(game.turns(), 4);
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn rejected_targets_are_reported_and_retried_within_the_turn() {
    let a = script(&[(5, 5), (6, 0), (-1, 2), (5, 5), (3, 3)]);
    let b = script(&[(1, 1)]);
    let mut game = Game::new(fixed_board(), fixed_board(), a, b);
    let mut recorder = Recorder::default();

    assert_eq!(game.step(&mut recorder).unwrap().side, Side::A);
    assert_eq!(game.step(&mut recorder).unwrap().side, Side::B);
    let turn = game.step(&mut recorder).unwrap();
    assert_eq!(turn.side, Side::A);
    assert_eq!(turn.target, Coordinate::new(3, 3));
    assert_eq!(turn.outcome, ShotOutcome::Miss);
    assert_eq!(
        recorder.rejected,
        vec![
            (Side::A, CannotShootReason::OutOfBounds),
            (Side::A, CannotShootReason::OutOfBounds),
            (Side::A, CannotShootReason::AlreadyFired),
        ]
    );
    assert_eq!(game.turns(), 3);
}

#[test]
fn destroying_the_whole_fleet_ends_the_game() {
    let mut game = Game::new(fixed_board(), fixed_board(), script(&FLEET_CELLS), silent());
    let mut recorder = Recorder::default();

    let state = game.run(&mut recorder);
    assert_eq!(state, GameState::PlayerAWon);
    assert_eq!(game.turns(), FLEET_CELLS.len());
    assert_eq!(game.board(Side::B).destroyed_count(), 7);
    assert!(game.board(Side::B).is_defeated());
    assert!(!game.board(Side::A).is_defeated());
    assert_eq!(recorder.finished, vec![GameState::PlayerAWon]);
    let destroyed = recorder
        .resolved
        .iter()
        .filter(|(_, outcome)| *outcome == ShotOutcome::ShipDestroyed)
        .count();
    assert_eq!(destroyed, 7);

    // Terminal: nothing else is processed.
    assert!(game.step(&mut recorder).is_none());
    assert_eq!(game.turns(), FLEET_CELLS.len());
    assert_eq!(recorder.finished.len(), 1);
}

#[test]
fn player_b_can_win() {
    let a = script(&[(5, 0)]);
    let b = script(&FLEET_CELLS);
    let mut game = Game::new(fixed_board(), fixed_board(), a, b);

    assert_eq!(game.run(&mut ()), GameState::PlayerBWon);
    assert_eq!(game.state().winner(), Some(Side::B));
    assert_eq!(game.turns(), 1 + FLEET_CELLS.len());
    assert!(game.board(Side::A).is_defeated());
    assert_eq!(game.board(Side::B).destroyed_count(), 0);
}
