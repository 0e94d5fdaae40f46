//! Random AI controller for testing and baseline gameplay
//!
//! Picks uniformly among the legal plays. Serves as a baseline for the
//! other policies in tournaments.

use crate::core::Player;
use crate::game::controller::{GameStateView, Move, PlayerController};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// A controller that makes random choices
pub struct RandomController {
    player: Player,
    rng: ChaCha12Rng,
}

impl RandomController {
    /// Create a new random controller seeded from the OS
    pub fn new(player: Player) -> Self {
        RandomController {
            player,
            rng: ChaCha12Rng::from_entropy(),
        }
    }

    /// Create a random controller with a seeded RNG (for deterministic testing)
    pub fn with_seed(player: Player, seed: u64) -> Self {
        RandomController {
            player,
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }
}

impl PlayerController for RandomController {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, view: &GameStateView) -> Move {
        let moves = view.legal_moves();
        if moves.is_empty() {
            Move::Pass
        } else {
            moves[self.rng.gen_range(0..moves.len())]
        }
    }
}
