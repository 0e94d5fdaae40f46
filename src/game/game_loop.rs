//! Game loop implementation
//!
//! Drives a game by asking the current player's controller for a move,
//! applying it, and notifying both controllers of the outcome.

/// Macro for conditional logging that avoids allocation when feature is disabled
///
/// When the verbose-logging feature is disabled, this becomes a no-op at
/// compile time, eliminating the per-move format! allocations.
macro_rules! log_if_verbose {
    ($self:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            $self.game.logger.normal(&format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$self;
        }
    };
}

use crate::core::Player;
use crate::game::controller::{GameStateView, PlayerController};
use crate::game::{GameState, TurnEvent};
use crate::{Result, SanguineError};
use serde::{Deserialize, Serialize};

/// Verbosity level for game output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game outcome
    Minimal = 1,
    /// Normal - turns and chosen moves (default)
    #[default]
    Normal = 2,
    /// Verbose - the board after every move
    Verbose = 3,
}

/// Result of running a game to completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Winner of the game (None for a tie or an unfinished game)
    pub winner: Option<Player>,
    /// Moves applied by the loop
    pub turns_played: u32,
    pub end_reason: GameEndReason,
    pub red_score: u64,
    pub blue_score: u64,
}

/// Reason the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    /// Both players passed back to back
    ConsecutivePasses,
    /// Game reached maximum turn limit
    TurnLimit,
}

/// Game loop manager
pub struct GameLoop<'a> {
    /// The game state
    pub game: &'a mut GameState,
    /// Maximum moves before stopping without a winner
    max_turns: u32,
    turns_elapsed: u32,
    /// Verbosity level for output (cached from game.logger)
    pub verbosity: VerbosityLevel,
}

impl<'a> GameLoop<'a> {
    /// Create a new game loop for the given game state
    pub fn new(game: &'a mut GameState) -> Self {
        let verbosity = game.logger.verbosity();
        GameLoop {
            game,
            max_turns: 1000,
            turns_elapsed: 0,
            verbosity,
        }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set verbosity on both the loop and the game's logger, which
    /// controllers reach through `GameStateView`
    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self.game.logger.set_verbosity(verbosity);
        self
    }

    /// Run the game with the given controllers until it ends or hits the turn limit
    pub fn run_game(
        &mut self,
        red: &mut dyn PlayerController,
        blue: &mut dyn PlayerController,
    ) -> Result<GameResult> {
        Self::check_seat(red, Player::Red)?;
        Self::check_seat(blue, Player::Blue)?;

        self.game.logger.verbose(&self.game.board().to_string());

        loop {
            if let Some(result) = self.run_turn_once(red, blue)? {
                self.log_outcome(&result);
                let winner = result.winner;
                red.on_game_end(&GameStateView::new(self.game, Player::Red), winner);
                blue.on_game_end(&GameStateView::new(self.game, Player::Blue), winner);
                return Ok(result);
            }
        }
    }

    /// Apply one move and report whether the game should stop
    ///
    /// Returns `Ok(Some(result))` when the game is over or the turn limit is
    /// reached, `Ok(None)` when play continues.
    pub fn run_turn_once(
        &mut self,
        red: &mut dyn PlayerController,
        blue: &mut dyn PlayerController,
    ) -> Result<Option<GameResult>> {
        if self.game.is_game_over() {
            return Ok(Some(self.result(GameEndReason::ConsecutivePasses)));
        }
        if self.turns_elapsed >= self.max_turns {
            return Ok(Some(self.result(GameEndReason::TurnLimit)));
        }

        let player = self.game.current_player();
        let controller: &mut dyn PlayerController = match player {
            Player::Red => &mut *red,
            Player::Blue => &mut *blue,
        };

        log_if_verbose!(self, "Turn {} ({player})", self.game.turn_number() + 1);
        let mv = controller.choose_move(&GameStateView::new(self.game, player));
        self.game
            .logger
            .controller_choice(controller.name(), &mv.to_string());

        let event = self.game.apply_move(mv)?;
        self.turns_elapsed += 1;
        self.game.logger.board(&self.game.board().to_string());

        match event {
            TurnEvent::TurnSwitched(next) => {
                red.on_turn_changed(&GameStateView::new(self.game, Player::Red), next);
                blue.on_turn_changed(&GameStateView::new(self.game, Player::Blue), next);
                Ok(None)
            }
            TurnEvent::GameOver { .. } => Ok(Some(self.result(GameEndReason::ConsecutivePasses))),
        }
    }

    pub fn turns_elapsed(&self) -> u32 {
        self.turns_elapsed
    }

    fn check_seat(controller: &dyn PlayerController, seat: Player) -> Result<()> {
        if controller.player() != seat {
            return Err(SanguineError::InvalidArgument(format!(
                "{} controller registered for {} but seated as {seat}",
                controller.name(),
                controller.player()
            )));
        }
        Ok(())
    }

    fn result(&self, end_reason: GameEndReason) -> GameResult {
        GameResult {
            winner: self.game.winner(),
            turns_played: self.turns_elapsed,
            end_reason,
            red_score: self.game.total_score(Player::Red),
            blue_score: self.game.total_score(Player::Blue),
        }
    }

    fn log_outcome(&self, result: &GameResult) {
        let logger = &self.game.logger;
        if result.end_reason == GameEndReason::TurnLimit {
            logger.minimal(&format!("Turn limit of {} reached", self.max_turns));
        }
        logger.minimal(&format!(
            "Final score: Red {} - Blue {}",
            result.red_score, result.blue_score
        ));
        match result.winner {
            Some(player) => logger.minimal(&format!("{player} wins")),
            None => logger.minimal("Draw"),
        }
    }
}
