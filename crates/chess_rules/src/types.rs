use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::NotationStyle;
use crate::error::RulesError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row delta of a pawn step toward the opponent's back rank.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    /// Farthest rank for this side's pawns.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value in pawns. The king is never counted.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Upper-case letter used in diagrams and letter notation.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn symbol(self, color: Color, style: NotationStyle) -> char {
        match style {
            NotationStyle::Letter => match color {
                Color::White => self.letter(),
                Color::Black => self.letter().to_ascii_lowercase(),
            },
            NotationStyle::Figurine => match (color, self) {
                (Color::White, PieceKind::King) => '♔',
                (Color::White, PieceKind::Queen) => '♕',
                (Color::White, PieceKind::Rook) => '♖',
                (Color::White, PieceKind::Bishop) => '♗',
                (Color::White, PieceKind::Knight) => '♘',
                (Color::White, PieceKind::Pawn) => '♙',
                (Color::Black, PieceKind::King) => '♚',
                (Color::Black, PieceKind::Queen) => '♛',
                (Color::Black, PieceKind::Rook) => '♜',
                (Color::Black, PieceKind::Bishop) => '♝',
                (Color::Black, PieceKind::Knight) => '♞',
                (Color::Black, PieceKind::Pawn) => '♟',
            },
        }
    }
}

/// A board coordinate. Row 0 is Black's back rank, row 7 is White's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Square> {
        (row < 8 && col < 8).then_some(Square { row, col })
    }

    /// Neighbouring square at the given delta, if it is still on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        sq(self.row as i8 + dr, self.col as i8 + dc)
    }

    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub fn from_index(idx: usize) -> Option<Square> {
        (idx < 64).then(|| Square {
            row: (idx / 8) as u8,
            col: (idx % 8) as u8,
        })
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    pub fn from_algebraic(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let f = b[0].to_ascii_lowercase();
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square {
            row: b'8' - r,
            col: f - b'a',
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = RulesError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(RulesError::OutOfBounds { row, col })
        }
    }
}

/// Bounds-checked square constructor from signed coordinates.
pub fn sq(row: i8, col: i8) -> Option<Square> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some(Square {
            row: row as u8,
            col: col as u8,
        })
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, square: Square) -> Self {
        Self {
            color,
            kind,
            square,
            has_moved: false,
        }
    }

    pub fn symbol(&self, style: NotationStyle) -> char {
        self.kind.symbol(self.color, style)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
