use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::check::in_check;
use crate::error::RulesError;
use crate::legal::has_any_legal_move;
use crate::types::Color;

/// Status of the side about to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    #[default]
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameState {
    /// Checkmate and stalemate end the game.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameState::Playing => "playing",
            GameState::Check => "check",
            GameState::Checkmate => "checkmate",
            GameState::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// Derives the state for `to_move` from the board alone.
pub fn evaluate_state(board: &mut Board, to_move: Color) -> Result<GameState, RulesError> {
    let checked = in_check(board, to_move)?;
    let can_move = has_any_legal_move(board, to_move)?;
    Ok(match (checked, can_move) {
        (true, false) => GameState::Checkmate,
        (true, true) => GameState::Check,
        (false, false) => GameState::Stalemate,
        (false, true) => GameState::Playing,
    })
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
