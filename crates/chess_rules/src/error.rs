//! Error types for the rules engine.
//!
//! Ordinary rule violations (`InvalidSelection`, `IllegalMove`, `OutOfBounds`,
//! `GameOver`) are expected during play and are usually collapsed into a
//! `false` or empty result by the boolean wrappers on [`crate::Game`].
//! `NoKingFound` means the board itself is corrupt.

use std::io;

use thiserror::Error;

use crate::state::GameState;
use crate::types::{Color, Square};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("no piece of the side to move on {0}")]
    InvalidSelection(Square),
    #[error("{from}-{to} is not a legal move")]
    IllegalMove { from: Square, to: Square },
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("game is over ({0})")]
    GameOver(GameState),
    #[error("no {0} king on the board")]
    NoKingFound(Color),
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),
}

impl RulesError {
    /// True for errors that signal a broken board invariant rather than a
    /// rejected request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RulesError::NoKingFound(_))
    }
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to access save file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode or decode saved game: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}
