use crate::{board::Board, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
// Rook rays first, then bishop rays.
const ROYAL_RAYS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// How a piece kind moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePattern {
    /// Forward pushes plus diagonal captures.
    Pawn,
    /// Fixed jumps, each landing on an empty or enemy square.
    Leaper(&'static [(i8, i8)]),
    /// Rays that run until the edge, a friendly piece, or a capture.
    Slider(&'static [(i8, i8)]),
}

impl PieceKind {
    pub fn pattern(self) -> MovePattern {
        match self {
            PieceKind::Pawn => MovePattern::Pawn,
            PieceKind::Knight => MovePattern::Leaper(&KNIGHT_DELTAS),
            PieceKind::Bishop => MovePattern::Slider(&DIAGONALS),
            PieceKind::Rook => MovePattern::Slider(&ORTHOGONALS),
            PieceKind::Queen => MovePattern::Slider(&ROYAL_RAYS),
            PieceKind::King => MovePattern::Leaper(&KING_DELTAS),
        }
    }
}

/// Every square `piece` could step to, ignoring the safety of its own king.
///
/// The order is fixed by the direction tables above, so repeated calls on
/// the same board return identical vectors.
pub fn pseudo_legal_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    pseudo_legal_moves_into(board, piece, &mut out);
    out
}

/// Appends the pseudo-legal destinations of `piece` to `out`.
pub fn pseudo_legal_moves_into(board: &Board, piece: &Piece, out: &mut Vec<Square>) {
    match piece.kind.pattern() {
        MovePattern::Pawn => gen_pawn(board, piece, out),
        MovePattern::Leaper(deltas) => gen_leaper(board, piece, deltas, out),
        MovePattern::Slider(dirs) => gen_slider(board, piece, dirs, out),
    }
}

fn gen_pawn(board: &Board, pawn: &Piece, out: &mut Vec<Square>) {
    let dir = pawn.color.forward();

    // forward 1
    if let Some(one) = pawn.square.offset(dir, 0)
        && board.piece_at(one).is_none()
    {
        out.push(one);

        // forward 2 from start
        if pawn.square.row == pawn.color.pawn_start_row()
            && let Some(two) = one.offset(dir, 0)
            && board.piece_at(two).is_none()
        {
            out.push(two);
        }
    }

    // captures
    for dc in [-1, 1] {
        if let Some(to) = pawn.square.offset(dir, dc)
            && let Some(target) = board.piece_at(to)
            && target.color != pawn.color
        {
            out.push(to);
        }
    }
}

fn gen_leaper(board: &Board, piece: &Piece, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in deltas {
        if let Some(to) = piece.square.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != piece.color => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, piece: &Piece, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cursor = piece.square.offset(dr, dc);
        while let Some(to) = cursor {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != piece.color => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cursor = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
