//! Error types for the Sanguine engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SanguineError {
    /// Malformed request: out-of-range index, bad dimensions, bad counts
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed deck description
    #[error("Invalid deck format: {0}")]
    InvalidDeckFormat(String),

    /// Well-formed request that breaks the rules of the game
    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SanguineError {
    /// True for errors caused by malformed input rather than game rules
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SanguineError::InvalidArgument(_) | SanguineError::InvalidDeckFormat(_)
        )
    }

    /// True for errors caused by a move the rules do not allow
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, SanguineError::IllegalState(_))
    }
}

pub type Result<T> = std::result::Result<T, SanguineError>;
