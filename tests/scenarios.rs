//! Full-game scenarios driven through the public surface only.

use chessmate::{
    Board, ChessError, GameState, Outcome, Piece, PieceKind, SpecialMove, Square, Team,
};

fn sq(file: u8, rank: u8) -> Square {
    Square::new(file, rank)
}

fn play(state: &mut GameState, moves: &[(Square, Square)]) {
    for &(from, to) in moves {
        state
            .commit_move(from, to)
            .unwrap_or_else(|e| panic!("{} -> {} rejected: {}", from, to, e));
    }
}

#[test]
fn scholars_mate_ends_the_game() {
    let mut state = GameState::new();
    play(
        &mut state,
        &[
            (sq(4, 1), sq(4, 3)), // e4
            (sq(4, 6), sq(4, 4)), // e5
            (sq(5, 0), sq(2, 3)), // Bc4
            (sq(1, 7), sq(2, 5)), // Nc6
            (sq(3, 0), sq(7, 4)), // Qh5
            (sq(6, 7), sq(5, 5)), // Nf6
        ],
    );
    assert_eq!(state.outcome(), Outcome::InProgress);

    let outcome = state.commit_move(sq(7, 4), sq(5, 6)).unwrap(); // Qxf7#
    assert_eq!(
        outcome.captured,
        Some(Piece::new(PieceKind::Pawn, Team::Black))
    );
    assert_eq!(outcome.checkmate, Some(Team::White));
    assert_eq!(state.outcome(), Outcome::Checkmate(Team::White));
    assert_eq!(
        state.commit_move(sq(4, 7), sq(5, 6)),
        Err(ChessError::GameOver)
    );
}

#[test]
fn en_passant_removes_the_double_stepped_pawn() {
    let mut state = GameState::new();
    play(
        &mut state,
        &[
            (sq(7, 1), sq(7, 2)), // h3
            (sq(3, 6), sq(3, 4)), // d5
            (sq(7, 2), sq(7, 3)), // h4
            (sq(3, 4), sq(3, 3)), // d4
            (sq(4, 1), sq(4, 3)), // e4, double step beside the black pawn
        ],
    );

    // The capture square shows up as a destination of the d4 pawn.
    let destinations = state.select_piece(sq(3, 3)).unwrap();
    assert!(destinations.contains(&sq(4, 2)));

    let outcome = state.commit_move(sq(3, 3), sq(4, 2)).unwrap();
    assert_eq!(outcome.special, Some(SpecialMove::EnPassant));
    assert_eq!(
        outcome.captured,
        Some(Piece::new(PieceKind::Pawn, Team::White))
    );

    // The victim left its own square, not the capture square.
    assert_eq!(state.board().piece_at(sq(4, 3)), None);
    assert_eq!(
        state.board().piece_at(sq(4, 2)),
        Some(Piece::new(PieceKind::Pawn, Team::Black))
    );
    assert_eq!(
        state.dead_pieces(Team::White),
        &[Piece::new(PieceKind::Pawn, Team::White)]
    );
}

#[test]
fn en_passant_expires_after_one_move() {
    let mut state = GameState::new();
    play(
        &mut state,
        &[
            (sq(7, 1), sq(7, 2)), // h3
            (sq(3, 6), sq(3, 4)), // d5
            (sq(7, 2), sq(7, 3)), // h4
            (sq(3, 4), sq(3, 3)), // d4
            (sq(4, 1), sq(4, 3)), // e4
            (sq(0, 6), sq(0, 5)), // a6, declining the capture
            (sq(7, 3), sq(7, 4)), // h5
        ],
    );
    let destinations = state.select_piece(sq(3, 3)).unwrap();
    assert!(!destinations.contains(&sq(4, 2)));
}

#[test]
fn kingside_castling_relocates_the_rook() {
    let mut state = GameState::new();
    play(
        &mut state,
        &[
            (sq(6, 0), sq(5, 2)), // Nf3
            (sq(0, 6), sq(0, 5)),
            (sq(6, 1), sq(6, 2)), // g3
            (sq(1, 6), sq(1, 5)),
            (sq(5, 0), sq(6, 1)), // Bg2
            (sq(2, 6), sq(2, 5)),
        ],
    );

    let destinations = state.select_piece(sq(4, 0)).unwrap();
    assert!(destinations.contains(&sq(6, 0)));
    // queenside is still blocked by its own pieces
    assert!(!destinations.contains(&sq(2, 0)));

    let outcome = state.commit_move(sq(4, 0), sq(6, 0)).unwrap();
    assert_eq!(outcome.special, Some(SpecialMove::Castling));
    assert_eq!(
        state.board().piece_at(sq(6, 0)),
        Some(Piece::new(PieceKind::King, Team::White))
    );
    assert_eq!(
        state.board().piece_at(sq(5, 0)),
        Some(Piece::new(PieceKind::Rook, Team::White))
    );
    assert_eq!(state.board().piece_at(sq(7, 0)), None);
    assert_eq!(state.board().piece_at(sq(4, 0)), None);
}

#[test]
fn castling_is_gone_once_the_king_has_moved() {
    let mut state = GameState::new();
    play(
        &mut state,
        &[
            (sq(6, 0), sq(5, 2)), // Nf3
            (sq(0, 6), sq(0, 5)),
            (sq(6, 1), sq(6, 2)), // g3
            (sq(1, 6), sq(1, 5)),
            (sq(5, 0), sq(6, 1)), // Bg2
            (sq(2, 6), sq(2, 5)),
            (sq(4, 0), sq(5, 0)), // Kf1
            (sq(3, 6), sq(3, 5)),
            (sq(5, 0), sq(4, 0)), // Ke1, back home
            (sq(4, 6), sq(4, 5)),
        ],
    );
    let destinations = state.select_piece(sq(4, 0)).unwrap();
    assert!(!destinations.contains(&sq(6, 0)));
}

#[test]
fn promotion_pauses_the_game_until_resolved() {
    let mut board = Board::empty();
    board.set(sq(4, 0), Piece::new(PieceKind::King, Team::White));
    board.set(sq(4, 7), Piece::new(PieceKind::King, Team::Black));
    board.set(sq(0, 6), Piece::new(PieceKind::Pawn, Team::White));
    board.set(sq(7, 6), Piece::new(PieceKind::Pawn, Team::Black));
    let mut state = GameState::from_board(board, Team::White);

    let outcome = state.commit_move(sq(0, 6), sq(0, 7)).unwrap();
    assert!(outcome.promotion_pending);
    assert_eq!(state.turn(), Team::White);
    assert_eq!(
        state.commit_move(sq(4, 0), sq(4, 1)),
        Err(ChessError::PromotionPending)
    );

    state.resolve_promotion(PieceKind::Knight).unwrap();
    assert_eq!(
        state.board().piece_at(sq(0, 7)),
        Some(Piece::new(PieceKind::Knight, Team::White))
    );
    assert_eq!(state.turn(), Team::Black);
}

#[test]
fn skipped_turn_can_cost_the_game() {
    // Black is stalemated, passes, and White mates on the spot with the
    // queen step to g7.
    let mut board = Board::empty();
    board.set(sq(7, 7), Piece::new(PieceKind::King, Team::Black));
    board.set(sq(5, 6), Piece::new(PieceKind::King, Team::White));
    board.set(sq(6, 5), Piece::new(PieceKind::Queen, Team::White));
    let mut state = GameState::from_board(board, Team::Black);

    assert!(!state.has_any_legal_move(Team::Black));
    assert_eq!(state.outcome(), Outcome::InProgress);
    state.skip_turn().unwrap();

    let outcome = state.commit_move(sq(6, 5), sq(6, 6)).unwrap();
    assert_eq!(outcome.checkmate, Some(Team::White));
    assert_eq!(state.outcome(), Outcome::Checkmate(Team::White));
}
