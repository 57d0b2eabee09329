//! Move records and the saved-game record handed to persistence layers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::NotationStyle;
use crate::error::PersistError;
use crate::state::GameState;
use crate::types::{Color, Piece, PieceKind, Square};

/// One accepted move. Records are appended to the history and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// Kind of the mover before the move, so a promoting pawn is `Pawn`
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub notation: String,
    /// 1-based sequence number
    pub move_number: u32,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Builds `<symbol><from>-<to>[x<captured symbol>]`, e.g. `♘g1-f3` or
/// `♙e4-d5x♟`.
pub fn move_notation(
    mover: &Piece,
    from: Square,
    to: Square,
    captured: Option<&Piece>,
    style: NotationStyle,
) -> String {
    let mut s = String::with_capacity(12);
    s.push(mover.symbol(style));
    s.push_str(&from.to_algebraic());
    s.push('-');
    s.push_str(&to.to_algebraic());
    if let Some(cap) = captured {
        s.push('x');
        s.push(cap.symbol(style));
    }
    s
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPiece {
    pub kind: PieceKind,
    pub color: Color,
}

/// Captured pieces grouped by the color of the piece that was taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub white: Vec<CapturedPiece>,
    pub black: Vec<CapturedPiece>,
}

/// Seconds each side has spent thinking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GameTime {
    pub white: f64,
    pub black: f64,
}

/// Everything an external save collaborator needs to write a game to disk.
///
/// This is an export format; a live game cannot be rebuilt from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub move_history: Vec<MoveRecord>,
    pub current_player: Color,
    pub game_state: GameState,
    pub move_count: u32,
    pub game_time: GameTime,
    pub captured_pieces: CapturedPieces,
}

impl SavedGame {
    pub fn to_json_pretty(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save record to JSON file
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load record from JSON file
    pub fn load(path: &Path) -> Result<Self, PersistError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
