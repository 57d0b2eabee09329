//! The engine a front end talks to: one board, whose turn it is, the move
//! history and captured pieces, and the derived game state.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::board::Board;
use crate::check::attackers_of;
use crate::clock::GameClock;
use crate::config::EngineConfig;
use crate::error::RulesError;
use crate::legal::{AppliedMove, legal_moves};
use crate::record::{CapturedPiece, CapturedPieces, GameTime, MoveRecord, SavedGame, move_notation};
use crate::state::{GameState, evaluate_state};
use crate::types::*;

/// Snapshot returned by [`Game::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameStatus {
    pub active_color: Color,
    pub state: GameState,
    pub move_count: u32,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Color,
    state: GameState,
    history: Vec<MoveRecord>,
    /// Captured kinds, indexed by the color of the piece that was taken
    captured: [Vec<PieceKind>; 2],
    clock: GameClock,
    config: EngineConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: Board::startpos(),
            active: Color::White,
            state: GameState::Playing,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            clock: GameClock::start(),
            config,
        }
    }

    /// Starts from an arbitrary position with `active` to move.
    ///
    /// The state is derived immediately, so a board missing either king is
    /// rejected here.
    pub fn from_board(board: Board, active: Color, config: EngineConfig) -> Result<Self, RulesError> {
        let mut game = Self {
            board,
            active,
            ..Self::with_config(config)
        };
        game.board.king_square(active.other())?;
        game.state = evaluate_state(&mut game.board, active)?;
        Ok(game)
    }

    /// Puts the pieces back in the opening array, clears history and captures
    /// and gives White the move. The config is kept.
    pub fn reset(&mut self) {
        let config = std::mem::take(&mut self.config);
        *self = Self::with_config(config);
        info!("game reset");
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Piece on (row, col); off-board coordinates read as empty.
    pub fn piece_at(&self, row: i32, col: i32) -> Option<Piece> {
        self.board.piece_at_coords(row, col)
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn move_count(&self) -> u32 {
        self.history.len() as u32
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            active_color: self.active,
            state: self.state,
            move_count: self.move_count(),
        }
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move_notation(&self) -> Option<&str> {
        self.history.last().map(|r| r.notation.as_str())
    }

    /// Kinds of `c`'s pieces that have been captured, in capture order.
    pub fn captured_pieces(&self, c: Color) -> &[PieceKind] {
        &self.captured[c.idx()]
    }

    /// (White, Black) material still on the board.
    pub fn material_balance(&self) -> (u32, u32) {
        (
            self.board.material(Color::White),
            self.board.material(Color::Black),
        )
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Squares of the enemy pieces currently giving check to the side to move.
    pub fn checkers(&self) -> Vec<Square> {
        match self.board.king_square(self.active) {
            Ok(ksq) => attackers_of(&self.board, ksq, self.active.other()),
            Err(_) => Vec::new(),
        }
    }

    /// Legal destinations for the piece on `from`, with the reason when there
    /// are none to offer.
    pub fn legal_moves_from(&mut self, from: Square) -> Result<Vec<Square>, RulesError> {
        if self.state.is_terminal() {
            return Err(RulesError::GameOver(self.state));
        }
        match self.board.piece_at(from) {
            Some(pc) if pc.color == self.active => legal_moves(&mut self.board, from),
            _ => Err(RulesError::InvalidSelection(from)),
        }
    }

    /// Legal destinations for the piece on `from`; empty for an empty square,
    /// a piece of the side not to move, or a finished game.
    pub fn selected_legal_moves(&mut self, from: Square) -> Vec<Square> {
        match self.legal_moves_from(from) {
            Ok(moves) => moves,
            Err(e) => {
                if e.is_fatal() {
                    error!(%from, error = %e, "legal move query aborted");
                } else {
                    debug!(%from, reason = %e, "selection rejected");
                }
                Vec::new()
            }
        }
    }

    /// Plays `from`-`to` for the side to move.
    ///
    /// Checks, in order: a piece on `from`, owned by the side to move, and
    /// `to` among its legal destinations. On success the capture is banked,
    /// a pawn reaching the far rank becomes a queen, the turn passes and the
    /// state is recomputed for the new side to move.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, RulesError> {
        if self.state.is_terminal() {
            return Err(RulesError::GameOver(self.state));
        }
        let piece = match self.board.piece_at(from) {
            Some(pc) if pc.color == self.active => pc,
            _ => return Err(RulesError::InvalidSelection(from)),
        };
        if !legal_moves(&mut self.board, from)?.contains(&to) {
            return Err(RulesError::IllegalMove { from, to });
        }

        let style = self.config.notation;
        let next = self.active.other();

        let mut applied = AppliedMove::apply(&mut self.board, piece, to);
        if let Some(moved) = applied.board_mut().piece_mut(to) {
            moved.has_moved = true;
            if moved.kind == PieceKind::Pawn && to.row == moved.color.promotion_row() {
                moved.kind = PieceKind::Queen;
            }
        }
        // A failure here drops `applied` and takes the move back.
        let next_state = evaluate_state(applied.board_mut(), next)?;
        let captured = applied.commit();

        if let Some(cap) = captured {
            self.captured[cap.color.idx()].push(cap.kind);
        }
        let record = MoveRecord {
            from,
            to,
            piece: piece.kind,
            captured: captured.map(|c| c.kind),
            notation: move_notation(&piece, from, to, captured.as_ref(), style),
            move_number: self.move_count() + 1,
        };
        self.history.push(record.clone());
        self.clock.record_move_at(self.active, Instant::now());
        self.active = next;
        self.state = next_state;

        info!(
            number = record.move_number,
            notation = %record.notation,
            "move played"
        );
        if self.state != GameState::Playing {
            info!(side = %self.active, state = %self.state, "game state changed");
        }
        Ok(record)
    }

    /// Boolean form of [`Game::try_move`]: `false` leaves the game untouched.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> bool {
        match self.try_move(from, to) {
            Ok(_) => true,
            Err(e) => {
                if e.is_fatal() {
                    error!(%from, %to, error = %e, "move aborted");
                } else {
                    debug!(%from, %to, reason = %e, "move rejected");
                }
                false
            }
        }
    }

    /// Exportable record of the game so far.
    pub fn snapshot(&self) -> SavedGame {
        let captured_of = |c: Color| -> Vec<CapturedPiece> {
            self.captured[c.idx()]
                .iter()
                .map(|&kind| CapturedPiece { kind, color: c })
                .collect()
        };
        SavedGame {
            move_history: self.history.clone(),
            current_player: self.active,
            game_state: self.state,
            move_count: self.move_count(),
            game_time: GameTime {
                white: self.clock.elapsed(Color::White).as_secs_f64(),
                black: self.clock.elapsed(Color::Black).as_secs_f64(),
            },
            captured_pieces: CapturedPieces {
                white: captured_of(Color::White),
                black: captured_of(Color::Black),
            },
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
