use std::{
    fmt,
    io::{self, BufRead, BufReader, Write},
};

use clap::{value_t, App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;
use tracing_subscriber::EnvFilter;

use seabattle::{
    Automated, Board, CannotShootReason, Cell, Coordinate, Game, GameState, Manual, Reporter,
    ShotError, ShotOutcome, Side, TurnActor,
};

/// Horizontal rule printed between sections of output.
const RULE: &str = "--------------------";

fn main() -> io::Result<()> {
    let matches = App::new("Sea Battle")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Naval battle against the computer on a 6x6 grid.")
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("fix the random seed for a reproducible game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("autoplay")
                .long("autoplay")
                .help("let the computer play both sides"),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("show the computer's ships"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log more detail to stderr; repeat for more"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));
    let mut rng = make_rng(&matches);
    let autoplay = matches.is_present("autoplay");

    greet(autoplay);

    let actor_a: Box<dyn TurnActor> = if autoplay {
        Box::new(Automated::new(StdRng::seed_from_u64(rng.gen())))
    } else {
        let mut input = InputReader::new(BufReader::new(io::stdin()));
        Box::new(Manual::new(move || input.read_target()))
    };
    let mut printer = if autoplay {
        Printer::new(["Computer A", "Computer B"], None)
    } else {
        Printer::new(["You", "Computer"], Some(Side::A))
    };
    let actor_b = Box::new(Automated::new(StdRng::seed_from_u64(rng.gen())));

    let mut game = Game::with_random_fleets(&mut rng, actor_a, actor_b, &mut printer);
    if matches.is_present("reveal") {
        game.board_mut(Side::B).set_hidden(false);
    }
    tracing::info!(autoplay, "game started");

    while !game.state().is_over() {
        println!("{}", RULE);
        println!("{}'s board:", printer.name(Side::A));
        show_board(game.board(Side::A));
        println!("{}", RULE);
        println!("{}'s board:", printer.name(Side::B));
        show_board(game.board(Side::B));
        println!("{}", RULE);
        println!("{} to move!", printer.name(game.active()));
        game.step(&mut printer);
    }

    if let Some(winner) = game.state().winner() {
        println!("{}", RULE);
        let loser = game.board_mut(winner.opponent());
        loser.set_hidden(false);
        show_board(loser);
    }
    Ok(())
}

/// Install a stderr log subscriber. The level grows with each `-v` and can be refined
/// with `RUST_LOG`.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();
}

/// Build the game's random number generator from `--seed`, or from entropy.
fn make_rng(matches: &ArgMatches) -> StdRng {
    if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        println!("Using fixed seed: {}", seed);
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    }
}

/// Print the banner and instructions.
fn greet(autoplay: bool) {
    println!("{}", RULE);
    println!("     Sea Battle");
    println!("{}", RULE);
    if !autoplay {
        println!(" enter coordinates as: row col");
        println!("   row - from 1 to 6, top to bottom");
        println!("   col - from 1 to 6, left to right");
    }
}

/// Prints the progress of the game.
struct Printer {
    /// Display names indexed by side.
    names: [&'static str; 2],
    /// Side controlled from the keyboard, if any.
    human: Option<Side>,
}

impl Printer {
    fn new(names: [&'static str; 2], human: Option<Side>) -> Self {
        Self { names, human }
    }

    fn name(&self, side: Side) -> &'static str {
        match side {
            Side::A => self.names[0],
            Side::B => self.names[1],
        }
    }
}

impl Reporter for Printer {
    fn fleet_restarted(&mut self, side: Side, restarts: usize) {
        tracing::info!(?side, restarts, "fleet placement restarted");
    }

    fn shot_rejected(&mut self, side: Side, err: &ShotError) {
        if Some(side) != self.human {
            return;
        }
        match err.reason() {
            CannotShootReason::OutOfBounds => println!("Those coordinates are off the board!"),
            CannotShootReason::AlreadyFired => println!("You already fired at that cell!"),
        }
    }

    fn shot_resolved(&mut self, side: Side, target: Coordinate, outcome: ShotOutcome) {
        if Some(side) != self.human {
            println!(
                "{} fires at: {} {}",
                self.name(side),
                target.row + 1,
                target.col + 1
            );
        }
        match outcome {
            ShotOutcome::Miss => println!("Miss!"),
            ShotOutcome::Hit => println!("Hit, but not destroyed!"),
            ShotOutcome::ShipDestroyed => println!("Ship destroyed!"),
        }
    }

    fn game_over(&mut self, state: GameState) {
        println!("{}", RULE);
        match (state.winner(), self.human) {
            (Some(winner), Some(human)) if winner == human => println!("You won!"),
            (Some(winner), _) => println!("{} won!", self.name(winner)),
            (None, _) => {}
        }
    }
}

/// Show the board by printing the grid with 1-based row and column labels.
fn show_board(board: &Board) {
    print!(" ");
    for i in 0..board.size() {
        print!(" {}", i + 1);
    }
    println!();
    for (i, row) in board.rows().enumerate() {
        print!("{}", i + 1);
        for cell in row {
            print!(" {}", CellSymbol(cell));
        }
        println!();
    }
}

/// Display helper that prints a single-character symbol for a cell.
struct CellSymbol(Cell);

impl CellSymbol {
    fn symbol(&self) -> &'static str {
        match self.0 {
            Cell::Empty => "~",
            Cell::Ship => "■",
            Cell::Hit => "X",
            Cell::Miss => ".",
        }
    }
}

impl fmt::Display for CellSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Prompt until the player enters a row and column, and convert them from 1-based to
    /// 0-based. Range is not checked here; the board rejects cells that are off the grid.
    fn read_target(&mut self) -> Coordinate {
        /// A row and a column separated by whitespace or a comma.
        static TARGET: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$").unwrap()
        });
        let read = self.read_input("Your move:", |input| {
            let captures = match TARGET.captures(input) {
                Some(captures) => captures,
                None => {
                    println!("Enter two numbers: row col");
                    return None;
                }
            };
            let row = captures["row"].parse::<isize>();
            let col = captures["col"].parse::<isize>();
            match (row, col) {
                (Ok(row), Ok(col)) => Some(Coordinate::new(row - 1, col - 1)),
                _ => {
                    println!("Those numbers are far too large!");
                    None
                }
            }
        });
        match read {
            Ok(coord) => coord,
            Err(err) => {
                eprintln!("failed to read input: {}", err);
                std::process::exit(1);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
