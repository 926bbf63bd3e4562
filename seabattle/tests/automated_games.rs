use rand::{rngs::StdRng, SeedableRng};
use seabattle::{Automated, Game, GameState, Reporter, Side, ShotOutcome, Coordinate};

#[derive(Default)]
struct Counter {
    restarts: usize,
    shots: usize,
    finished: Option<GameState>,
}

impl Reporter for Counter {
    fn fleet_restarted(&mut self, _side: Side, _restarts: usize) {
        self.restarts += 1;
    }

    fn shot_resolved(&mut self, _side: Side, _target: Coordinate, _outcome: ShotOutcome) {
        self.shots += 1;
    }

    fn game_over(&mut self, state: GameState) {
        self.finished = Some(state);
    }
}

#[test]
fn automated_games_run_to_completion() {
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = Box::new(Automated::new(StdRng::seed_from_u64(seed + 1000)));
        let b = Box::new(Automated::new(StdRng::seed_from_u64(seed + 2000)));
        let mut counter = Counter::default();
        let mut game = Game::with_random_fleets(&mut rng, a, b, &mut counter);
        assert!(!game.board(Side::A).is_hidden());
        assert!(game.board(Side::B).is_hidden());

        let state = game.run(&mut counter);
        let winner = state.winner().expect("game must finish");
        assert!(game.board(winner.opponent()).is_defeated());
        assert!(!game.board(winner).is_defeated());
        assert_eq!(counter.shots, game.turns());
        assert_eq!(counter.finished, Some(state));
        // Every cell can be fired upon at most once per board.
        assert!(game.turns() <= 2 * 36);
    }
}
