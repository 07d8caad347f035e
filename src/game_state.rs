use crate::boards::*;
use crate::chess_errors::*;
use crate::legality;
use crate::movegen;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;
use crate::special;
use std::fmt::{self, Display};
use tracing::{debug, info};

// -------------------------------------
// Turn / game state machine
// -------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Checkmate(Team),
}

/// One-way notifications for presentation collaborators. They accumulate
/// on the game state and are drained with [`GameState::take_events`];
/// nothing in the engine ever waits on them.
///
/// For `SpecialMoveOccurred` the squares are the ones the special effect
/// touched beyond the committed move itself: the victim's square and the
/// capture square for en passant, the rook's relocation for castling, and
/// the promotion square twice for a promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted {
        first_turn: Team,
    },
    MoveApplied {
        record: MoveRecord,
        piece: Piece,
        captured: Option<Piece>,
    },
    SpecialMoveOccurred {
        kind: SpecialMove,
        from: Square,
        to: Square,
    },
    PromotionRequired {
        at: Square,
        team: Team,
    },
    CheckmateReached {
        winner: Team,
    },
    TurnChanged {
        turn: Team,
    },
}

/// What a committed move did, returned to the committing caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub captured: Option<Piece>,
    pub special: Option<SpecialMove>,
    /// The turn is suspended until `resolve_promotion` supplies a kind.
    pub promotion_pending: bool,
    pub checkmate: Option<Team>,
}

/// The single board of record plus everything that travels with it: turn,
/// history, captured pieces, a possibly pending promotion, and the event
/// queue. All mutation goes through `commit_move` / `resolve_promotion` /
/// `skip_turn` / `reset`.
pub struct GameState {
    board: Board,
    turn: Team,
    first_turn: Team,
    history: History,
    dead_whites: Vec<Piece>,
    dead_blacks: Vec<Piece>,
    pending_promotion: Option<Square>,
    outcome: Outcome,
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new() -> GameState {
        GameState::with_first_turn(Team::White)
    }

    /// A fresh standard game where `first_turn` opens play.
    pub fn with_first_turn(first_turn: Team) -> GameState {
        GameState::from_board(Board::standard_setup(), first_turn)
    }

    /// A game from an arbitrary position. Useful for tests and for
    /// embedders that set up studies.
    pub fn from_board(board: Board, turn: Team) -> GameState {
        info!("game started, {} to move", turn);
        GameState {
            board,
            turn,
            first_turn: turn,
            history: History::new(),
            dead_whites: Vec::new(),
            dead_blacks: Vec::new(),
            pending_promotion: None,
            outcome: Outcome::InProgress,
            events: vec![GameEvent::GameStarted { first_turn: turn }],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Team {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Captured pieces of `team`, in capture order.
    pub fn dead_pieces(&self, team: Team) -> &[Piece] {
        match team {
            Team::White => &self.dead_whites,
            Team::Black => &self.dead_blacks,
        }
    }

    /// Drains the accumulated notifications.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

// Queries
impl GameState {
    /// Selection entry point: the legal destinations of the piece on
    /// `square`, provided it belongs to the side to move. Pure query; the
    /// following `commit_move` recomputes, so nothing is cached.
    pub fn select_piece(&self, square: Square) -> ChessResult<Vec<Square>> {
        self.guard_accepting_moves()?;
        let piece = self.selectable_piece(square)?;
        let (legal, _) = self.moves_for_piece(square, piece);
        Ok(legal)
    }

    /// Every (piece square, destination) pair `team` could play right now,
    /// special candidates included, in board-scan order.
    pub fn current_legal_moves_for(&self, team: Team) -> Vec<(Square, Square)> {
        let mut pairs = Vec::new();
        for (sq, piece) in self.board.pieces_of(team) {
            let (legal, _) = self.moves_for_piece(sq, piece);
            pairs.extend(legal.into_iter().map(|to| (sq, to)));
        }
        pairs
    }

    /// Whether `team` has any legal move at all. False without check is
    /// the "no valid movement" condition: the presentation layer offers a
    /// turn skip, the engine does not call it a draw.
    pub fn has_any_legal_move(&self, team: Team) -> bool {
        self.board
            .pieces_of(team)
            .any(|(sq, piece)| !self.moves_for_piece(sq, piece).0.is_empty())
    }

    fn selectable_piece(&self, square: Square) -> ChessResult<Piece> {
        self.board
            .piece_at(square)
            .filter(|p| p.team == self.turn)
            .ok_or(ChessError::InvalidSelection(square))
    }

    /// Generation pipeline for one piece: pseudo-legal moves, widened by
    /// the special detector, then through the self-check filter (special
    /// candidates must survive it too).
    fn moves_for_piece(&self, from: Square, piece: Piece) -> (Vec<Square>, Option<SpecialMove>) {
        let mut moves = movegen::pseudo_legal_moves(&self.board, from, piece);
        let special = special::detect(&self.board, &self.history, from, piece, &mut moves);
        let legal = legality::filter_self_check(&self.board, from, piece, moves);
        (legal, special)
    }

    fn guard_accepting_moves(&self) -> ChessResult<()> {
        if let Outcome::Checkmate(_) = self.outcome {
            return Err(ChessError::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(ChessError::PromotionPending);
        }
        Ok(())
    }
}

// Mutations
impl GameState {
    /// The sole mutator: applies `from -> to` if it is legal for the side
    /// to move. Rejections leave the state untouched; the caller snaps the
    /// piece back and nothing else happens.
    pub fn commit_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        self.guard_accepting_moves()?;
        let piece = self.selectable_piece(from)?;
        let (legal, special) = self.moves_for_piece(from, piece);
        if !legal.contains(&to) {
            return Err(ChessError::IllegalDestination { from, to });
        }

        let mut outcome = MoveOutcome {
            captured: None,
            special: None,
            promotion_pending: false,
            checkmate: None,
        };

        // Capture bookkeeping: the victim leaves the board for the dead
        // collection before the mover arrives.
        let mut king_captured = false;
        if let Some(victim) = self.board.take(to) {
            debug_assert!(victim.team != piece.team);
            king_captured = victim.kind == PieceKind::King;
            self.dead_list_mut(victim.team).push(victim);
            outcome.captured = Some(victim);
        }

        self.board.take(from);
        self.board.set(to, piece);
        let record = MoveRecord::new(from, to);
        self.history.push(record);
        debug!("{} committed {}", piece.team, record);
        self.events.push(GameEvent::MoveApplied {
            record,
            piece,
            captured: outcome.captured,
        });

        // Capturing the king ends the game on the spot, checkmate or not.
        if king_captured {
            self.declare_winner(piece.team);
            outcome.checkmate = Some(piece.team);
            return Ok(outcome);
        }

        match special {
            Some(SpecialMove::EnPassant) => self.resolve_en_passant(to, &mut outcome),
            Some(SpecialMove::Castling) => self.resolve_castling(piece.team, to, &mut outcome),
            Some(SpecialMove::Promotion) => {
                // Flagged at detection one rank short; only an actual
                // arrival on the far rank suspends the turn.
                if to.rank() == piece.team.far_rank() {
                    self.pending_promotion = Some(to);
                    outcome.special = Some(SpecialMove::Promotion);
                    outcome.promotion_pending = true;
                    self.events.push(GameEvent::PromotionRequired {
                        at: to,
                        team: piece.team,
                    });
                    return Ok(outcome);
                }
            }
            None => {}
        }

        self.end_turn(&mut outcome);
        Ok(outcome)
    }

    /// Completes a suspended promotion and finishes the turn. Only valid
    /// while a promotion is pending, and only for the four real choices.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> ChessResult<MoveOutcome> {
        if let Outcome::Checkmate(_) = self.outcome {
            return Err(ChessError::GameOver);
        }
        let at = self
            .pending_promotion
            .ok_or(ChessError::PromotionNotPending)?;
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return Err(ChessError::UnexpectedPromotionResolution(kind));
        }

        self.board.change_kind(at, kind);
        self.pending_promotion = None;
        debug!("pawn on {} promoted to {}", at, kind);
        self.events.push(GameEvent::SpecialMoveOccurred {
            kind: SpecialMove::Promotion,
            from: at,
            to: at,
        });

        let mut outcome = MoveOutcome {
            captured: None,
            special: Some(SpecialMove::Promotion),
            promotion_pending: false,
            checkmate: None,
        };
        self.end_turn(&mut outcome);
        Ok(outcome)
    }

    /// Ends the turn without a move. Only accepted when the side to move
    /// has no legal move at all, the condition under which the presentation
    /// layer offers it.
    pub fn skip_turn(&mut self) -> ChessResult<()> {
        self.guard_accepting_moves()?;
        if self.has_any_legal_move(self.turn) {
            return Err(ChessError::SkipWithMovesAvailable);
        }
        self.turn = self.turn.opposite();
        debug!("turn skipped, {} to move", self.turn);
        self.events.push(GameEvent::TurnChanged { turn: self.turn });
        Ok(())
    }

    /// Reinitializes everything atomically: board, turn, history, dead
    /// collections, pending promotion and outcome all reset together.
    pub fn reset(&mut self) {
        info!("game reset, {} to move", self.first_turn);
        self.board = Board::standard_setup();
        self.turn = self.first_turn;
        self.history.clear();
        self.dead_whites.clear();
        self.dead_blacks.clear();
        self.pending_promotion = None;
        self.outcome = Outcome::InProgress;
        self.events.clear();
        self.events.push(GameEvent::GameStarted {
            first_turn: self.first_turn,
        });
    }

    fn resolve_en_passant(&mut self, to: Square, outcome: &mut MoveOutcome) {
        // The enemy double step is the second-to-last record (the last one
        // is the capture just committed).
        let victim_square = self
            .history
            .second_to_last()
            .expect("en passant with no preceding move")
            .to;
        // Guard as the source does: same file, one rank apart. If the pawn
        // went somewhere else despite the flag, nothing happens.
        if to.file() == victim_square.file() && to.rank().abs_diff(victim_square.rank()) == 1 {
            let victim = self
                .board
                .take(victim_square)
                .expect("en passant victim vanished");
            self.dead_list_mut(victim.team).push(victim);
            outcome.captured = Some(victim);
            outcome.special = Some(SpecialMove::EnPassant);
            self.events.push(GameEvent::SpecialMoveOccurred {
                kind: SpecialMove::EnPassant,
                from: victim_square,
                to,
            });
        }
    }

    fn resolve_castling(&mut self, team: Team, to: Square, outcome: &mut MoveOutcome) {
        // The rook follows the king: a-corner rook to the d-file for a
        // queenside landing on the c-file, h-corner rook to the f-file for
        // a kingside landing on the g-file. Any other destination was a
        // plain king move.
        let rank = to.rank();
        let (corner, rook_to) = match to.file() {
            2 => (Square::new(0, rank), Square::new(3, rank)),
            6 => (Square::new(7, rank), Square::new(5, rank)),
            _ => return,
        };
        let rook = self.board.take(corner).expect("castling rook vanished");
        debug_assert!(rook.kind == PieceKind::Rook && rook.team == team);
        self.board.set(rook_to, rook);
        outcome.special = Some(SpecialMove::Castling);
        self.events.push(GameEvent::SpecialMoveOccurred {
            kind: SpecialMove::Castling,
            from: corner,
            to: rook_to,
        });
    }

    fn end_turn(&mut self, outcome: &mut MoveOutcome) {
        self.turn = self.turn.opposite();
        self.events.push(GameEvent::TurnChanged { turn: self.turn });
        if legality::is_checkmate(&self.board, self.turn) {
            self.declare_winner(self.turn.opposite());
            outcome.checkmate = Some(self.turn.opposite());
        }
    }

    fn declare_winner(&mut self, winner: Team) {
        info!("checkmate, {} wins", winner);
        self.outcome = Outcome::Checkmate(winner);
        self.events.push(GameEvent::CheckmateReached { winner });
    }

    fn dead_list_mut(&mut self, team: Team) -> &mut Vec<Piece> {
        match team {
            Team::White => &mut self.dead_whites,
            Team::Black => &mut self.dead_blacks,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move: {}  Player: {}\n{}",
            self.history.len(),
            self.turn,
            self.board
        )
    }
}
