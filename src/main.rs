//! Kalah-Rust: a Mancala (Kalah) engine.
//!
//! ## Usage
//!
//! - `kalah-rust` - Engine plays both sides of a game
//! - `kalah-rust --human player` - Play the player side yourself
//! - `kalah-rust -o` - The opponent moves first
//! - `kalah-rust best --top 3` - Rank the best turns for a position

use std::io;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use kalah_rust::board::{Board, Side};
use kalah_rust::config::{HeuristicCode, Rules, SearchConfig};
use kalah_rust::constants::{DEFAULT_CODE, DEFAULT_DEPTH, SEEDS_PER_PIT};
use kalah_rust::engine::{Engine, new_game};
use kalah_rust::game::{Controller, GameSession};

/// Kalah-Rust: Mancala engine with parallel alpha-beta search
#[derive(Parser)]
#[command(name = "kalah-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    game: GameArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play,
    /// Rank the best turns for a position
    Best {
        /// Side to move
        #[arg(long, value_enum, default_value = "player")]
        side: HumanSide,

        /// Number of ranked turns to print
        #[arg(long, default_value_t = 3)]
        top: usize,

        /// Board as 14 comma-separated cells (index 0 = opponent store)
        #[arg(long, value_delimiter = ',')]
        cells: Option<Vec<u32>>,
    },
}

#[derive(Args)]
struct GameArgs {
    /// Heuristic code for the player side (six 0/1 flags, 000000 = random)
    #[arg(short = 'p', long, default_value = DEFAULT_CODE, global = true)]
    player_code: HeuristicCode,

    /// Heuristic code for the opponent side
    #[arg(short = 'e', long, default_value = DEFAULT_CODE, global = true)]
    opponent_code: HeuristicCode,

    /// Search depth in full turns
    #[arg(short, long, default_value_t = DEFAULT_DEPTH, global = true)]
    depth: usize,

    /// Only capture when the opposite pit holds seeds
    #[arg(long, global = true)]
    capture_requires_opposite: bool,

    /// Seeds per pit at the start
    #[arg(long, default_value_t = SEEDS_PER_PIT, global = true)]
    seeds: u8,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Seed for the random-move fallback
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Let a human choose the moves for this side
    #[arg(long, value_enum, global = true)]
    human: Option<HumanSide>,

    /// The opponent moves first
    #[arg(short = 'o', long, global = true)]
    opponent_starts: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum HumanSide {
    Player,
    Opponent,
}

impl From<HumanSide> for Side {
    fn from(side: HumanSide) -> Self {
        match side {
            HumanSide::Player => Side::Player,
            HumanSide::Opponent => Side::Opponent,
        }
    }
}

impl GameArgs {
    fn rules(&self) -> Rules {
        Rules {
            seeds_per_pit: self.seeds,
            capture_requires_opposite: self.capture_requires_opposite,
        }
    }

    fn engine(&self, top_n: usize) -> Engine {
        let config = SearchConfig {
            depth: self.depth,
            top_n,
            threads: self.threads,
        };
        match self.seed {
            Some(seed) => Engine::with_seed(config, seed),
            None => Engine::new(config),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Play) | None => run_game(&cli.game),
        Some(Commands::Best { side, top, cells }) => run_best(&cli.game, side.into(), top, cells),
    }
}

fn run_game(args: &GameArgs) -> Result<()> {
    let board = new_game(args.player_code, args.opponent_code, args.rules());
    let mut session =
        GameSession::new(board, args.engine(1)).with_opponent_starting(args.opponent_starts);
    if let Some(side) = args.human.map(Side::from) {
        session = session.with_controller(side, Controller::Human);
    }

    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn run_best(args: &GameArgs, side: Side, top: usize, cells: Option<Vec<u32>>) -> Result<()> {
    let board = match cells {
        Some(cells) => Board::from_cells(&cells, args.player_code, args.opponent_code, args.rules())
            .context("invalid --cells")?,
        None => new_game(args.player_code, args.opponent_code, args.rules()),
    };
    print!("{board}");

    let mut engine = args.engine(top);
    for candidate in engine.find_best_move(&board, side)? {
        println!("{} {}", candidate.moves, candidate.score);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_flags_without_subcommand() {
        let cli = Cli::try_parse_from(["kalah-rust", "-o", "--human", "player"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.game.opponent_starts);
        assert!(matches!(cli.game.human, Some(HumanSide::Player)));
    }

    #[test]
    fn test_game_flags_after_play() {
        let cli = Cli::try_parse_from(["kalah-rust", "play", "-o", "--human", "opponent"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Play)));
        assert!(cli.game.opponent_starts);
        assert!(matches!(cli.game.human, Some(HumanSide::Opponent)));

        let cli = Cli::try_parse_from(["kalah-rust", "play"]).unwrap();
        assert!(!cli.game.opponent_starts);
        assert!(cli.game.human.is_none());
    }

    #[test]
    fn test_best_reads_cells() {
        let cli = Cli::try_parse_from([
            "kalah-rust",
            "best",
            "--cells",
            "0,4,4,4,4,4,4,0,4,4,4,4,4,4",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Best { cells, top, .. }) => {
                assert_eq!(cells.map(|c| c.len()), Some(14));
                assert_eq!(top, 3);
            }
            _ => panic!("expected best"),
        }
    }
}
