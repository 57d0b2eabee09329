use std::fmt;

use crate::config::NotationStyle;
use crate::error::RulesError;
use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional pieces, indexed row-major from a8.
///
/// Every occupied square holds a piece whose `square` field names that same
/// square; the mutators below keep the two in step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        for col in 0..8u8 {
            for color in Color::ALL {
                let pawn_sq = Square {
                    row: color.pawn_start_row(),
                    col,
                };
                b.place(Piece::new(color, PieceKind::Pawn, pawn_sq));

                let back_sq = Square {
                    row: color.back_row(),
                    col,
                };
                b.place(Piece::new(color, BACK_RANK[col as usize], back_sq));
            }
        }
        b
    }

    /// Builds a board from the piece-placement field of a FEN string.
    ///
    /// The first rank listed is rank 8, i.e. row 0. Every piece starts with
    /// `has_moved` cleared.
    pub fn from_placement(placement: &str) -> Result<Self, RulesError> {
        let field = placement.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(RulesError::InvalidPlacement(format!(
                "expected 8 ranks, received {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: u8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as u8;
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or_else(|| {
                        RulesError::InvalidPlacement(format!("invalid piece char '{ch}'"))
                    })?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let square = Square::new(row as u8, col).ok_or_else(|| {
                        RulesError::InvalidPlacement(format!("too many files in rank {}", 8 - row))
                    })?;
                    board.place(Piece::new(color, kind, square));
                    col += 1;
                }
                if col > 8 {
                    return Err(RulesError::InvalidPlacement(format!(
                        "too many files in rank {}",
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(RulesError::InvalidPlacement(format!(
                    "not enough files in rank {}",
                    8 - row
                )));
            }
        }
        Ok(board)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Like [`Board::piece_at`] but accepts any coordinates; off-board reads
    /// are empty.
    pub fn piece_at_coords(&self, row: i32, col: i32) -> Option<Piece> {
        let sq = Square::try_from((row, col)).ok()?;
        self.piece_at(sq)
    }

    pub fn piece_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.squares[sq.index()].as_mut()
    }

    /// Puts `piece` on its own square and returns whatever was there.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        self.squares[piece.square.index()].replace(piece)
    }

    /// Removes and returns the occupant of `sq`.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    pub(crate) fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    pub fn king_square(&self, c: Color) -> Result<Square, RulesError> {
        self.pieces_of(c)
            .find(|pc| pc.kind == PieceKind::King)
            .map(|pc| pc.square)
            .ok_or(RulesError::NoKingFound(c))
    }

    /// All pieces in row-major order, a8 first.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().copied()
    }

    pub fn pieces_of(&self, c: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |pc| pc.color == c)
    }

    pub fn count(&self, c: Color, kind: PieceKind) -> usize {
        self.pieces_of(c).filter(|pc| pc.kind == kind).count()
    }

    /// Sum of piece values for one side, king excluded.
    pub fn material(&self, c: Color) -> u32 {
        self.pieces_of(c).map(|pc| pc.kind.value()).sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{}", 8 - row)?;
            for col in 0..8u8 {
                let ch = self
                    .piece_at(Square { row, col })
                    .map(|pc| pc.symbol(NotationStyle::Letter))
                    .unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
