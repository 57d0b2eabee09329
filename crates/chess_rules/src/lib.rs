//! Chess rules engine.
//!
//! Board model, per-piece move generation, check detection, legal-move
//! filtering and checkmate/stalemate detection, behind a single [`Game`]
//! value that any front end (GUI, CLI, network handler) can drive.
//!
//! Castling, en passant and the repetition/fifty-move draws are not part of
//! these rules. Pawns always promote to a queen.
//!
//! ```
//! use chess_rules::{Game, GameState, Square};
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! assert!(game.attempt_move(e2, e4));
//! assert_eq!(game.state(), GameState::Playing);
//! ```

pub mod board;
pub mod check;
pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod record;
pub mod state;
pub mod types;

pub use board::*;
pub use check::*;
pub use clock::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use legal::{all_legal_moves, has_any_legal_move, legal_moves};
pub use movegen::*;
pub use record::*;
pub use state::*;
pub use types::*;
