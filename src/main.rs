//! Sanguine - Main Binary
//!
//! Plays single games or parallel tournaments between AI policies

use clap::{Parser, Subcommand};
use sanguine_rs::{
    core::Player,
    game::{GameLoop, OutputFormat, VerbosityLevel},
    loader::{DeckList, DeckLoader, GameConfig, GameInitializer},
    tournament::{run_and_report, ControllerType, TourneySettings},
    Result,
};
use std::path::{Path, PathBuf};

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

/// Board dimensions shared by both subcommands
#[derive(clap::Args, Debug)]
struct BoardArgs {
    /// JSON file with rows, cols, hand_size and max_hand_size
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Board rows (overrides the config file)
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns, odd and greater than 1 (overrides the config file)
    #[arg(long)]
    cols: Option<usize>,

    /// Cards dealt to each player (overrides the config file)
    #[arg(long)]
    hand_size: Option<usize>,
}

impl BoardArgs {
    fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(hand_size) = self.hand_size {
            config.hand_size = hand_size;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Parser)]
#[command(name = "sanguine")]
#[command(about = "Sanguine - two-player card placement game engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game between two AI policies
    Play {
        /// Deck file shared by both players
        #[arg(value_name = "DECK")]
        deck: PathBuf,

        #[command(flatten)]
        board: BoardArgs,

        /// Red controller type
        #[arg(long, value_enum, default_value = "fill-first")]
        p1: ControllerType,

        /// Blue controller type
        #[arg(long, value_enum, default_value = "max-row")]
        p2: ControllerType,

        /// Seed for random controllers
        #[arg(long)]
        seed: Option<u64>,

        /// Shuffle the deck (with --seed when given) before dealing
        #[arg(long)]
        shuffle: bool,

        /// Stop after this many moves
        #[arg(long, default_value_t = 1000)]
        max_turns: u32,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Log line format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Run many games in parallel and report win rates
    Tourney {
        /// Deck files; each game picks one at random
        #[arg(value_name = "DECKS", required = true)]
        decks: Vec<PathBuf>,

        #[command(flatten)]
        board: BoardArgs,

        /// Number of games to run
        #[arg(long, short = 'g', default_value_t = 100)]
        games: usize,

        /// Red controller type
        #[arg(long, value_enum, default_value = "random")]
        p1: ControllerType,

        /// Blue controller type
        #[arg(long, value_enum, default_value = "random")]
        p2: ControllerType,

        /// Master seed for deck selection, shuffles and random controllers
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Stop each game after this many moves
        #[arg(long, default_value_t = 1000)]
        max_turns: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            deck,
            board,
            p1,
            p2,
            seed,
            shuffle,
            max_turns,
            verbosity,
            format,
        } => run_play(
            &deck,
            &board,
            p1,
            p2,
            seed,
            shuffle,
            max_turns,
            verbosity.into(),
            format,
        )?,
        Commands::Tourney {
            decks,
            board,
            games,
            p1,
            p2,
            seed,
            max_turns,
        } => run_tourney(&decks, &board, games, p1, p2, seed, max_turns)?,
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_play(
    deck_path: &Path,
    board: &BoardArgs,
    p1: ControllerType,
    p2: ControllerType,
    seed: Option<u64>,
    shuffle: bool,
    max_turns: u32,
    verbosity: VerbosityLevel,
    format: OutputFormat,
) -> Result<()> {
    let config = board.resolve()?;
    let deck = DeckLoader::load_from_file(deck_path)?;

    let mut init = GameInitializer::new(config);
    if shuffle {
        let shuffle_seed = seed.unwrap_or_else(rand::random);
        init = init.with_shuffle_seed(shuffle_seed);
    }
    let mut game = init.init_game(&deck)?;
    game.logger.set_output_format(format);
    let banners = verbosity >= VerbosityLevel::Minimal && format == OutputFormat::Text;

    if banners {
        println!("=== Sanguine ===");
        println!("Deck: {} ({} cards)", deck_path.display(), deck.total_cards());
        println!("Red: {p1:?}  Blue: {p2:?}\n");
    }

    let mut red = p1.build(Player::Red, seed);
    let mut blue = p2.build(Player::Blue, seed.map(|s| s.wrapping_add(1)));
    let result = GameLoop::new(&mut game)
        .with_max_turns(max_turns)
        .with_verbosity(verbosity)
        .run_game(&mut *red, &mut *blue)?;

    if banners {
        println!("\n{}", game.board());
        println!("Moves played: {}", result.turns_played);
    }
    Ok(())
}

fn load_decks(paths: &[PathBuf]) -> Result<Vec<(String, DeckList)>> {
    paths
        .iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok((name, DeckLoader::load_from_file(path)?))
        })
        .collect()
}

fn run_tourney(
    deck_paths: &[PathBuf],
    board: &BoardArgs,
    games: usize,
    p1: ControllerType,
    p2: ControllerType,
    seed: u64,
    max_turns: u32,
) -> Result<()> {
    let settings = TourneySettings {
        games,
        red: p1,
        blue: p2,
        seed,
        config: board.resolve()?,
        max_turns,
    };
    let decks = load_decks(deck_paths)?;
    run_and_report(&decks, &settings)?;
    Ok(())
}
