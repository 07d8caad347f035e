use crate::positions::BOARD_SIZE;
use std::fmt::{self, Display};

// ---------------------------------------------
// Pieces
// ---------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub fn opposite(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Pawn movement direction along the rank axis.
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// The back rank where king and rooks start.
    pub const fn home_rank(self) -> u8 {
        match self {
            Team::White => 0,
            Team::Black => BOARD_SIZE - 1,
        }
    }

    /// The rank a pawn promotes on.
    pub const fn far_rank(self) -> u8 {
        match self {
            Team::White => BOARD_SIZE - 1,
            Team::Black => 0,
        }
    }

    /// The rank pawns start on, from which the double step is allowed.
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Team::White => 1,
            Team::Black => BOARD_SIZE - 2,
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used by the capture heuristic.
    pub const fn value(self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 20,
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board. Promotion swaps `kind` in place; the piece keeps
/// its identity as "the pawn that started the game".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub team: Team,
}

impl Piece {
    pub const fn new(kind: PieceKind, team: Team) -> Piece {
        Piece { kind, team }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PieceKind::*;
        let symbol = match (self.team, self.kind) {
            (Team::White, King) => '\u{2654}',
            (Team::White, Queen) => '\u{2655}',
            (Team::White, Rook) => '\u{2656}',
            (Team::White, Bishop) => '\u{2657}',
            (Team::White, Knight) => '\u{2658}',
            (Team::White, Pawn) => '\u{2659}',
            (Team::Black, King) => '\u{265a}',
            (Team::Black, Queen) => '\u{265b}',
            (Team::Black, Rook) => '\u{265c}',
            (Team::Black, Bishop) => '\u{265d}',
            (Team::Black, Knight) => '\u{265e}',
            (Team::Black, Pawn) => '\u{265f}',
        };
        write!(f, "{}", symbol)
    }
}
