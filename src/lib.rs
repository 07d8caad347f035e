//! A complete chess rules engine: board state, per-piece move generation,
//! castling, en passant and promotion, check and checkmate detection, and a
//! turn state machine that two [`Agent`]s can drive to a conclusion.
//!
//! The [`GameState`] is the single entry point for play. Agents (or a UI)
//! query it with [`GameState::select_piece`], mutate it with
//! [`GameState::commit_move`], and observe it through the drained
//! [`GameEvent`]s.

pub mod agents;
pub mod boards;
pub mod chess_errors;
pub mod game;
pub mod game_state;
pub mod legality;
pub mod movegen;
pub mod moves;
pub mod pieces;
pub mod positions;
pub mod special;

pub use agents::{GreedyCaptureAgent, HumanAgent, SlowAgent};
pub use boards::Board;
pub use chess_errors::{ChessError, ChessResult};
pub use game::{Agent, Game};
pub use game_state::{GameEvent, GameState, MoveOutcome, Outcome};
pub use moves::{History, MoveRecord, SpecialMove};
pub use pieces::{Piece, PieceKind, Team};
pub use positions::{Square, BOARD_SIZE};
