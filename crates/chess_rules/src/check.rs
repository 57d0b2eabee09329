//! Check detection by brute-force enumeration of enemy moves.

use crate::board::Board;
use crate::error::RulesError;
use crate::movegen::pseudo_legal_moves_into;
use crate::types::{Color, Square};

/// Whether `c`'s king is attacked.
///
/// Fails with [`RulesError::NoKingFound`] when `c` has no king on the board.
pub fn in_check(board: &Board, c: Color) -> Result<bool, RulesError> {
    let ksq = board.king_square(c)?;
    Ok(is_square_attacked(board, ksq, c.other()))
}

/// Whether any piece of color `by` has a pseudo-legal move onto `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let mut buf = Vec::with_capacity(28);
    board.pieces_of(by).any(|pc| {
        buf.clear();
        pseudo_legal_moves_into(board, &pc, &mut buf);
        buf.contains(&target)
    })
}

/// Squares of the `by` pieces that currently reach `target`.
pub fn attackers_of(board: &Board, target: Square, by: Color) -> Vec<Square> {
    let mut buf = Vec::with_capacity(28);
    board
        .pieces_of(by)
        .filter(|pc| {
            buf.clear();
            pseudo_legal_moves_into(board, pc, &mut buf);
            buf.contains(&target)
        })
        .map(|pc| pc.square)
        .collect()
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
