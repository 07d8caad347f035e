use crate::positions::*;
/// Committed moves and the append-only history they live in.
use std::fmt;

/// One committed half-move. Speculative moves evaluated during check
/// simulation are never recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
}

impl MoveRecord {
    pub fn new(from: Square, to: Square) -> Self {
        MoveRecord { from, to }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// The three moves that mutate the board beyond relocating one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMove {
    EnPassant,
    Castling,
    Promotion,
}

impl fmt::Display for SpecialMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialMove::EnPassant => write!(f, "en passant"),
            SpecialMove::Castling => write!(f, "castling"),
            SpecialMove::Promotion => write!(f, "promotion"),
        }
    }
}

/// Append-only record of committed moves. This is the sole source of truth
/// for castling and en passant eligibility: a king or rook that wanders back
/// to its original square has still "moved", because the first move stays in
/// the history. No per-piece flags exist anywhere in the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History(Vec<MoveRecord>);

impl History {
    pub fn new() -> History {
        History(Vec::new())
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.0.push(record);
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.0.last()
    }

    /// The record before the most recent one. Needed when resolving en
    /// passant, where the victim's double step is the second-to-last entry.
    pub fn second_to_last(&self) -> Option<&MoveRecord> {
        self.0.len().checked_sub(2).map(|i| &self.0[i])
    }

    /// Linear scan: has any committed move ever started from this square?
    pub fn has_moved_from(&self, square: Square) -> bool {
        self.0.iter().any(|r| r.from == square)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.0.iter()
    }

    /// Only ever called as part of a full game reset.
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}
