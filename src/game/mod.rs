//! Board, game state and turn structure

pub mod board;
pub mod controller;
pub mod event;
pub mod fill_first_controller;
pub mod game_loop;
pub mod logger;
pub mod max_row_controller;
pub mod random_controller;
pub mod scripted_controller;
pub mod state;

pub use board::Board;
pub use controller::{GameStateView, Move, PlayerController};
pub use event::TurnEvent;
pub use fill_first_controller::FillFirstController;
pub use game_loop::{GameEndReason, GameLoop, GameResult, VerbosityLevel};
pub use logger::{GameLogger, LogEntry, OutputFormat, OutputMode};
pub use max_row_controller::MaxRowController;
pub use random_controller::RandomController;
pub use scripted_controller::ScriptedController;
pub use state::GameState;
