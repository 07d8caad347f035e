use crate::pieces::*;
use crate::positions::*;
use array_init::array_init;
use std::fmt::{self, Display};

// ---------------------------------------------
// Board
// ---------------------------------------------

/// The 8x8 mailbox. One owner for every live piece; at most one piece per
/// square by construction. Captured pieces leave the board entirely (the
/// game state parks them in its dead-piece collections).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; (BOARD_SIZE * BOARD_SIZE) as usize],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: array_init(|_| None),
        }
    }

    /// The standard chess starting position.
    pub fn standard_setup() -> Board {
        use PieceKind::*;
        let mut board = Board::empty();

        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (file, &kind) in back_rank.iter().enumerate() {
            let file = file as u8;
            board.set(Square::new(file, 0), Piece::new(kind, Team::White));
            board.set(Square::new(file, 7), Piece::new(kind, Team::Black));
            board.set(Square::new(file, 1), Piece::new(Pawn, Team::White));
            board.set(Square::new(file, 6), Piece::new(Pawn, Team::Black));
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    pub fn set(&mut self, square: Square, piece: Piece) {
        debug_assert!(
            self.squares[square.index()].is_none(),
            "Square {} is already occupied",
            square
        );
        self.squares[square.index()] = Some(piece);
    }

    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Occupied squares in file-major ascending order (files then ranks).
    /// The AI's tie-breaking depends on this scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all_squares().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied squares belonging to one team, in board-scan order.
    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, p)| p.team == team)
    }

    /// At most one king per team is a board invariant; a missing king can
    /// only mean the caller let the board rot.
    pub fn king_square(&self, team: Team) -> Option<Square> {
        self.iter()
            .find(|(_, p)| p.kind == PieceKind::King && p.team == team)
            .map(|(sq, _)| sq)
    }

    /// Changes the kind of the piece on `square` in place. Promotion is the
    /// only caller.
    pub(crate) fn change_kind(&mut self, square: Square, kind: PieceKind) {
        let slot = &mut self.squares[square.index()];
        debug_assert!(slot.is_some(), "No piece to re-kind at {}", square);
        if let Some(piece) = slot {
            piece.kind = kind;
        }
    }
}

// Displays the board in the usual chessboard orientation, White at the
// bottom:
//
//    a b c d e f g h
//  8 r n b q k b n r 8
//  7 ...
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 'a'..'i' {
            write!(f, " {}", c)?;
        }
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "\n{} ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{} ", piece)?,
                    None => write!(f, "  ")?,
                }
            }
            write!(f, "{} ", rank + 1)?;
        }
        write!(f, "\n ")?;
        for c in 'a'..'i' {
            write!(f, " {}", c)?;
        }
        Ok(())
    }
}
