use crate::boards::*;
use crate::movegen::*;
use crate::pieces::*;
use crate::positions::*;

// ---------------------------------------------
// Check simulation and the legality filter
// ---------------------------------------------
//
// Every simulation runs against a clone of the real board; the live board
// is never touched here.

/// Union of pseudo-legal moves over every piece of `team`. Duplicates are
/// kept; callers only ever membership-test the result.
pub fn attack_union(board: &Board, team: Team) -> Vec<Square> {
    let mut union = Vec::new();
    for (sq, piece) in board.pieces_of(team) {
        union.extend(pseudo_legal_moves(board, sq, piece));
    }
    union
}

/// Check: the team's king square is contained in the union of the
/// opponent's pseudo-legal moves.
pub fn is_in_check(board: &Board, team: Team) -> bool {
    let king = board
        .king_square(team)
        .expect("board invariant broken: side has no king");
    attack_union(board, team.opposite()).contains(&king)
}

/// Drops every candidate that would leave the mover's own king attacked.
/// Each candidate is simulated independently on a cloned board; applying
/// the filter twice returns the same set.
pub fn filter_self_check(
    board: &Board,
    from: Square,
    piece: Piece,
    mut moves: Vec<Square>,
) -> Vec<Square> {
    moves.retain(|&to| !leaves_king_exposed(board, from, piece, to));
    moves
}

fn leaves_king_exposed(board: &Board, from: Square, piece: Piece, to: Square) -> bool {
    let mut sim = board.clone();
    sim.take(to); // capture, if the destination was occupied
    sim.take(from);
    sim.set(to, piece);

    // When the king itself moves, test its simulated square.
    let king = if piece.kind == PieceKind::King {
        to
    } else {
        sim.king_square(piece.team)
            .expect("board invariant broken: side has no king")
    };
    attack_union(&sim, piece.team.opposite()).contains(&king)
}

/// Checkmate: in check, and no piece of `defender` has a single move that
/// survives the filter. Not being in check is never checkmate here --
/// stalemate is deliberately not detected, the caller can only offer a
/// turn skip via `has_any_legal_move`.
pub fn is_checkmate(board: &Board, defender: Team) -> bool {
    if !is_in_check(board, defender) {
        return false;
    }
    for (sq, piece) in board.pieces_of(defender) {
        let moves = pseudo_legal_moves(board, sq, piece);
        if !filter_self_check(board, sq, piece, moves).is_empty() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(Square, PieceKind, Team)]) -> Board {
        let mut board = Board::empty();
        for &(sq, kind, team) in pieces {
            board.set(sq, Piece::new(kind, team));
        }
        board
    }

    #[test]
    fn test_is_in_check() {
        let board = board_with(&[
            (Square::new(4, 0), PieceKind::King, Team::White),
            (Square::new(4, 7), PieceKind::Rook, Team::Black),
            (Square::new(0, 7), PieceKind::King, Team::Black),
        ]);
        assert!(is_in_check(&board, Team::White));
        assert!(!is_in_check(&board, Team::Black));
    }

    #[test]
    fn test_pinned_piece_cannot_leave_the_file() {
        let king = Square::new(4, 0);
        let rook = Square::new(4, 1);
        let board = board_with(&[
            (king, PieceKind::King, Team::White),
            (rook, PieceKind::Rook, Team::White),
            (Square::new(4, 7), PieceKind::Rook, Team::Black),
            (Square::new(0, 7), PieceKind::King, Team::Black),
        ]);
        let piece = Piece::new(PieceKind::Rook, Team::White);
        let legal = filter_self_check(&board, rook, piece, pseudo_legal_moves(&board, rook, piece));

        // Moving along the e-file, up to capturing the pinning rook, is fine.
        for rank in 2..=7 {
            assert!(legal.contains(&Square::new(4, rank)), "missing e{}", rank + 1);
        }
        // Any sideways step exposes the king.
        assert!(!legal.contains(&Square::new(3, 1)));
        assert!(!legal.contains(&Square::new(5, 1)));
        assert_eq!(legal.len(), 6);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let board = Board::standard_setup();
        for (sq, piece) in board.pieces_of(Team::White) {
            let once = filter_self_check(&board, sq, piece, pseudo_legal_moves(&board, sq, piece));
            let twice = filter_self_check(&board, sq, piece, once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_does_not_touch_the_real_board() {
        let board = board_with(&[
            (Square::new(4, 0), PieceKind::King, Team::White),
            (Square::new(3, 3), PieceKind::Queen, Team::White),
            (Square::new(3, 6), PieceKind::Pawn, Team::Black),
            (Square::new(0, 7), PieceKind::King, Team::Black),
        ]);
        let before = board.clone();
        let queen = Piece::new(PieceKind::Queen, Team::White);
        let from = Square::new(3, 3);
        filter_self_check(&board, from, queen, pseudo_legal_moves(&board, from, queen));
        assert!(board == before);
    }

    #[test]
    fn test_back_rank_mate() {
        let board = board_with(&[
            (Square::new(7, 7), PieceKind::King, Team::Black),
            (Square::new(6, 6), PieceKind::Pawn, Team::Black),
            (Square::new(7, 6), PieceKind::Pawn, Team::Black),
            (Square::new(0, 7), PieceKind::Rook, Team::White),
            (Square::new(0, 0), PieceKind::King, Team::White),
        ]);
        assert!(is_checkmate(&board, Team::Black));
        assert!(!is_checkmate(&board, Team::White));
    }

    #[test]
    fn test_check_with_escape_is_not_mate() {
        // Same back rank attack, but the g-pawn is gone so the king can
        // step to g7.
        let board = board_with(&[
            (Square::new(7, 7), PieceKind::King, Team::Black),
            (Square::new(7, 6), PieceKind::Pawn, Team::Black),
            (Square::new(0, 7), PieceKind::Rook, Team::White),
            (Square::new(0, 0), PieceKind::King, Team::White),
        ]);
        assert!(is_in_check(&board, Team::Black));
        assert!(!is_checkmate(&board, Team::Black));
    }

    #[test]
    fn test_block_prevents_mate() {
        // The rook can interpose on the back rank.
        let board = board_with(&[
            (Square::new(7, 7), PieceKind::King, Team::Black),
            (Square::new(6, 6), PieceKind::Pawn, Team::Black),
            (Square::new(7, 6), PieceKind::Pawn, Team::Black),
            (Square::new(4, 5), PieceKind::Rook, Team::Black),
            (Square::new(0, 7), PieceKind::Rook, Team::White),
            (Square::new(0, 0), PieceKind::King, Team::White),
        ]);
        assert!(is_in_check(&board, Team::Black));
        assert!(!is_checkmate(&board, Team::Black));
    }

    #[test]
    fn test_no_legal_moves_without_check_is_not_mate() {
        // Classic stalemate corner: Black to move has nothing, but is not
        // in check. The engine reports "not mate" and nothing else.
        let board = board_with(&[
            (Square::new(7, 7), PieceKind::King, Team::Black),
            (Square::new(5, 6), PieceKind::King, Team::White),
            (Square::new(6, 5), PieceKind::Queen, Team::White),
        ]);
        assert!(!is_in_check(&board, Team::Black));
        assert!(!is_checkmate(&board, Team::Black));
        let king = Piece::new(PieceKind::King, Team::Black);
        let from = Square::new(7, 7);
        let legal = filter_self_check(&board, from, king, pseudo_legal_moves(&board, from, king));
        assert!(legal.is_empty());
    }
}
