use crate::boards::*;
use crate::legality::attack_union;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;

// ---------------------------------------------
// Special move detection
// ---------------------------------------------
//
// History-dependent candidates. `detect` may push extra destinations onto
// the candidate list and reports at most one kind per selection: for a
// pawn, en passant wins over promotion; the commit path re-checks the
// arrival rank before actually suspending the turn on a promotion.

/// Inspects `piece` on `from` and widens `moves` with any history-enabled
/// destination. Candidates added here still have to survive the self-check
/// filter downstream.
pub fn detect(
    board: &Board,
    history: &History,
    from: Square,
    piece: Piece,
    moves: &mut Vec<Square>,
) -> Option<SpecialMove> {
    match piece.kind {
        PieceKind::Pawn => detect_pawn(board, history, from, piece.team, moves),
        PieceKind::King => detect_castling(board, history, from, piece.team, moves),
        _ => None,
    }
}

fn detect_pawn(
    board: &Board,
    history: &History,
    from: Square,
    team: Team,
    moves: &mut Vec<Square>,
) -> Option<SpecialMove> {
    let dir = team.forward();

    // En passant: the immediately preceding move was an enemy pawn double
    // step that ended beside us on our rank.
    if let Some(last) = history.last() {
        let landed = board.piece_at(last.to);
        let was_pawn_double = landed.map_or(false, |p| p.kind == PieceKind::Pawn)
            && last.from.rank().abs_diff(last.to.rank()) == 2;
        if was_pawn_double
            && landed.map_or(false, |p| p.team != team)
            && last.to.rank() == from.rank()
            && last.to.file().abs_diff(from.file()) == 1
        {
            // Capture square is diagonally behind the enemy pawn, in our
            // forward direction.
            if let Some(target) = Square::new(last.to.file(), from.rank()).offset(0, dir) {
                moves.push(target);
                return Some(SpecialMove::EnPassant);
            }
        }
    }

    // Promotion: flagged one rank short of the far rank; arrival is checked
    // again at commit time.
    let next_to_last = match team {
        Team::White => team.far_rank() - 1,
        Team::Black => team.far_rank() + 1,
    };
    if from.rank() == next_to_last {
        return Some(SpecialMove::Promotion);
    }

    None
}

fn detect_castling(
    board: &Board,
    history: &History,
    from: Square,
    team: Team,
    moves: &mut Vec<Square>,
) -> Option<SpecialMove> {
    let home = team.home_rank();
    let king_start = Square::new(4, home);

    // The king must be on its starting square and never have moved. The
    // history scan is the only "has moved" record there is.
    if from != king_start || history.has_moved_from(king_start) {
        return None;
    }

    let enemy_attacks = attack_union(board, team.opposite());
    let rook = Piece::new(PieceKind::Rook, team);
    let mut found = None;

    // Queenside: rook on the a-file corner, b/c/d empty and unattacked.
    let a_corner = Square::new(0, home);
    if !history.has_moved_from(a_corner) && board.piece_at(a_corner) == Some(rook) {
        let path = [Square::new(1, home), Square::new(2, home), Square::new(3, home)];
        if path.iter().all(|sq| board.piece_at(*sq).is_none())
            && path.iter().all(|sq| !enemy_attacks.contains(sq))
        {
            moves.push(Square::new(2, home));
            found = Some(SpecialMove::Castling);
        }
    }

    // Kingside: rook on the h-file corner, f/g empty and unattacked.
    let h_corner = Square::new(7, home);
    if !history.has_moved_from(h_corner) && board.piece_at(h_corner) == Some(rook) {
        let path = [Square::new(5, home), Square::new(6, home)];
        if path.iter().all(|sq| board.piece_at(*sq).is_none())
            && path.iter().all(|sq| !enemy_attacks.contains(sq))
        {
            moves.push(Square::new(6, home));
            found = Some(SpecialMove::Castling);
        }
    }

    found
}
