use crate::pieces::PieceKind;
use crate::positions::Square;
use thiserror::Error;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------

/// Everything a caller can get wrong at the engine boundary. Every variant
/// leaves the game state untouched; there is nothing to recover or retry.
/// Conditions that cannot arise from a well-maintained board (off-board
/// index, missing king) are asserted instead, not represented here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("no piece of the side to move at {0}")]
    InvalidSelection(Square),

    #[error("{to} is not a legal destination for the piece at {from}")]
    IllegalDestination { from: Square, to: Square },

    #[error("no promotion is pending")]
    PromotionNotPending,

    #[error("a pawn cannot be promoted to a {0}")]
    UnexpectedPromotionResolution(PieceKind),

    #[error("a promotion must be resolved before the next move")]
    PromotionPending,

    #[error("the turn cannot be skipped while legal moves exist")]
    SkipWithMovesAvailable,

    #[error("the game is already over")]
    GameOver,

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),
}

pub type ChessResult<T> = std::result::Result<T, ChessError>;
