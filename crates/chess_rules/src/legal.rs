//! Legal-move filtering.
//!
//! Candidates from [`pseudo_legal_moves`] are played on the real board
//! through an [`AppliedMove`] guard, checked for self-check, and taken back
//! when the guard drops. The take-back runs on every exit path, `?` included.

use crate::board::Board;
use crate::check::in_check;
use crate::error::RulesError;
use crate::movegen::pseudo_legal_moves;
use crate::types::{Color, Piece, Square};

/// A move played in place on a board. Dropping it restores both squares
/// exactly as they were unless [`AppliedMove::commit`] was called.
pub(crate) struct AppliedMove<'a> {
    board: &'a mut Board,
    mover: Piece,
    displaced: Option<Piece>,
    to: Square,
    committed: bool,
}

impl<'a> AppliedMove<'a> {
    /// Moves `mover` (which must be on `mover.square`) to `to`.
    pub(crate) fn apply(board: &'a mut Board, mover: Piece, to: Square) -> Self {
        let displaced = board.take(to);
        board.take(mover.square);
        board.place(Piece {
            square: to,
            ..mover
        });
        Self {
            board,
            mover,
            displaced,
            to,
            committed: false,
        }
    }

    pub(crate) fn board(&self) -> &Board {
        self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.board
    }

    pub(crate) fn to(&self) -> Square {
        self.to
    }

    /// Keeps the move on the board and hands back the captured piece.
    pub(crate) fn commit(mut self) -> Option<Piece> {
        self.committed = true;
        self.displaced
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        self.board.set(self.to, self.displaced);
        self.board.set(self.mover.square, Some(self.mover));
    }
}

/// Legal destinations for the piece on `from`, empty if the square is empty.
///
/// The board is mutated while candidates are tested but is structurally
/// identical to its prior state when this returns, on success or error.
pub fn legal_moves(board: &mut Board, from: Square) -> Result<Vec<Square>, RulesError> {
    let Some(piece) = board.piece_at(from) else {
        return Ok(Vec::new());
    };
    let candidates = pseudo_legal_moves(board, &piece);
    let mut legal = Vec::with_capacity(candidates.len());
    for to in candidates {
        let applied = AppliedMove::apply(board, piece, to);
        if !in_check(applied.board(), piece.color)? {
            legal.push(applied.to());
        }
    }
    Ok(legal)
}

/// Whether side `c` has at least one legal move anywhere on the board.
pub fn has_any_legal_move(board: &mut Board, c: Color) -> Result<bool, RulesError> {
    let origins: Vec<Square> = board.pieces_of(c).map(|pc| pc.square).collect();
    for from in origins {
        if !legal_moves(board, from)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Every piece of side `c` that can move, with its legal destinations, in
/// board order.
pub fn all_legal_moves(
    board: &mut Board,
    c: Color,
) -> Result<Vec<(Square, Vec<Square>)>, RulesError> {
    let origins: Vec<Square> = board.pieces_of(c).map(|pc| pc.square).collect();
    let mut out = Vec::new();
    for from in origins {
        let targets = legal_moves(board, from)?;
        if !targets.is_empty() {
            out.push((from, targets));
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "legal_tests.rs"]
mod legal_tests;
