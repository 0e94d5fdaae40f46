//! Tournament mode for running many games in parallel and collecting statistics
//!
//! Every game picks one of the loaded decks, shuffles it with a per-game
//! seed, and plays it out silently. Games run concurrently on rayon's pool
//! and share nothing but the read-only deck list.

use crate::core::Player;
use crate::game::{
    FillFirstController, GameLoop, MaxRowController, PlayerController, RandomController,
    VerbosityLevel,
};
use crate::loader::{DeckList, GameConfig, GameInitializer};
use crate::{Result, SanguineError};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Controller type for tournament and CLI games
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ControllerType {
    FillFirst,
    MaxRow,
    Random,
}

impl ControllerType {
    /// Build a controller of this type for `player`
    ///
    /// `seed` only matters for the random policy.
    pub fn build(self, player: Player, seed: Option<u64>) -> Box<dyn PlayerController> {
        match self {
            ControllerType::FillFirst => Box::new(FillFirstController::new(player)),
            ControllerType::MaxRow => Box::new(MaxRowController::new(player)),
            ControllerType::Random => match seed {
                Some(seed) => Box::new(RandomController::with_seed(player, seed)),
                None => Box::new(RandomController::new(player)),
            },
        }
    }
}

/// Tournament settings
#[derive(Debug, Clone)]
pub struct TourneySettings {
    pub games: usize,
    pub red: ControllerType,
    pub blue: ControllerType,
    pub seed: u64,
    pub config: GameConfig,
    /// Stop each game after this many moves
    pub max_turns: u32,
}

/// Aggregated results of a tournament
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TournamentStats {
    pub red_wins: usize,
    pub blue_wins: usize,
    pub draws: usize,
    pub failed: usize,
    /// Games played per deck name
    pub deck_games: FxHashMap<String, usize>,
    /// Games won (by either colour) per deck name
    pub deck_wins: FxHashMap<String, usize>,
}

impl TournamentStats {
    pub fn games_played(&self) -> usize {
        self.red_wins + self.blue_wins + self.draws
    }

    fn record(&mut self, deck_name: &str, winner: Option<Player>) {
        *self.deck_games.entry(deck_name.to_string()).or_insert(0) += 1;
        match winner {
            Some(Player::Red) => self.red_wins += 1,
            Some(Player::Blue) => self.blue_wins += 1,
            None => self.draws += 1,
        }
        if winner.is_some() {
            *self.deck_wins.entry(deck_name.to_string()).or_insert(0) += 1;
        }
    }

    fn percent(count: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            100.0 * count as f64 / total as f64
        }
    }

    /// Print the colour and per-deck tables
    pub fn print(&self) {
        let total = self.games_played();
        println!("=== Colour Statistics ===");
        println!("Red wins:  {} ({:.1}%)", self.red_wins, Self::percent(self.red_wins, total));
        println!("Blue wins: {} ({:.1}%)", self.blue_wins, Self::percent(self.blue_wins, total));
        println!("Draws:     {} ({:.1}%)", self.draws, Self::percent(self.draws, total));
        if self.failed > 0 {
            println!("Failed:    {}", self.failed);
        }

        println!("\n=== Decisive Games per Deck ===");
        let mut decks: Vec<_> = self.deck_games.iter().collect();
        decks.sort_by_key(|(name, _)| *name);
        for (name, games) in decks {
            let wins = self.deck_wins.get(name).copied().unwrap_or(0);
            println!(
                "  {name}: {wins}/{games} ({:.1}%)",
                Self::percent(wins, *games)
            );
        }
    }
}

/// Play one tournament game; returns the winner
fn play_one(
    settings: &TourneySettings,
    deck: &DeckList,
    game_seed: u64,
) -> Result<Option<Player>> {
    let mut game = GameInitializer::new(settings.config)
        .with_shuffle_seed(game_seed)
        .init_game(deck)?;

    let mut red = settings
        .red
        .build(Player::Red, Some(game_seed.wrapping_add(0x1234_5678_9ABC_DEF0)));
    let mut blue = settings
        .blue
        .build(Player::Blue, Some(game_seed.wrapping_add(0xFEDC_BA98_7654_3210)));

    let result = GameLoop::new(&mut game)
        .with_verbosity(VerbosityLevel::Silent)
        .with_max_turns(settings.max_turns)
        .run_game(&mut *red, &mut *blue)?;
    Ok(result.winner)
}

/// Run `settings.games` games over `decks` in parallel
///
/// `decks` pairs a display name with each parsed deck.
pub fn run_tourney(
    decks: &[(String, DeckList)],
    settings: &TourneySettings,
) -> Result<TournamentStats> {
    if decks.is_empty() {
        return Err(SanguineError::InvalidArgument(
            "tournament requires at least one deck".to_string(),
        ));
    }
    settings.config.validate()?;

    let outcomes: Vec<(usize, Result<Option<Player>>)> = (0..settings.games)
        .into_par_iter()
        .map(|game_idx| {
            // Deterministic deck pick from the master seed and game index
            let mut deck_rng =
                Xoshiro256PlusPlus::seed_from_u64(settings.seed.wrapping_add(game_idx as u64));
            let deck_idx = deck_rng.gen_range(0..decks.len());
            let game_seed = settings
                .seed
                .wrapping_add((game_idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
            (deck_idx, play_one(settings, &decks[deck_idx].1, game_seed))
        })
        .collect();

    let mut stats = TournamentStats::default();
    for (game_idx, (deck_idx, outcome)) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(winner) => stats.record(&decks[deck_idx].0, winner),
            Err(e) => {
                eprintln!("Warning: game {game_idx} failed: {e}");
                stats.failed += 1;
            }
        }
    }
    Ok(stats)
}

/// Run a tournament and print its timing and statistics
pub fn run_and_report(
    decks: &[(String, DeckList)],
    settings: &TourneySettings,
) -> Result<TournamentStats> {
    println!("=== Sanguine - Tournament Mode ===\n");
    for (name, deck) in decks {
        println!("  {name}: {} cards", deck.total_cards());
    }
    println!(
        "\nRunning {} games, seed {}, Red={:?}, Blue={:?}\n",
        settings.games, settings.seed, settings.red, settings.blue
    );

    let start = Instant::now();
    let stats = run_tourney(decks, settings)?;
    let elapsed = start.elapsed();

    println!("=== Tournament Complete ===");
    println!("Total games played: {}", stats.games_played());
    println!("Elapsed time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "Games per second: {:.2}\n",
        stats.games_played() as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    stats.print();
    Ok(stats)
}
