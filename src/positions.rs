use crate::chess_errors::*;
use std::fmt::{self, Display};
use std::str::FromStr;

// Squares of the 8x8 board, addressed as (file, rank).
//
// Files run a..h (0..7 left to right from White's side), ranks run
// 1..8 (0..7 from White's back rank upwards):
//
//      a  b  c  d  e  f  g  h
//    -------------------------
//  8 | .  .  .  .  .  .  .  . | 8      rank 7
//  .....
//  1 | .  .  .  .  .  .  .  . | 1      rank 0
//    -------------------------
//      a  b  c  d  e  f  g  h
//
// ---------------------------------------------
// Squares
// ---------------------------------------------

pub const BOARD_SIZE: u8 = 8;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Both coordinates must be in 0..8. Off-board input is a caller bug.
    pub fn new(file: u8, rank: u8) -> Square {
        debug_assert!(
            Square::in_board(file as i16, rank as i16),
            "Invalid square: ({}, {})",
            file,
            rank
        );
        Square { file, rank }
    }

    pub const fn file(self) -> u8 {
        self.file
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Checks if a coordinate pair belongs to a legal board square.
    pub const fn in_board(file: i16, rank: i16) -> bool {
        file >= 0 && rank >= 0 && file < BOARD_SIZE as i16 && rank < BOARD_SIZE as i16
    }

    /// The only way to do coordinate arithmetic: stepping off the board
    /// yields None instead of an illegal square.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        let file = self.file as i16 + d_file as i16;
        let rank = self.rank as i16 + d_rank as i16;
        if Square::in_board(file, rank) {
            Some(Square::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Index into a 64-slot array, file-major: a1, a2, ... a8, b1, ...
    pub const fn index(self) -> usize {
        (self.file * BOARD_SIZE + self.rank) as usize
    }

    pub fn from_index(i: usize) -> Square {
        debug_assert!(i < 64, "Invalid square index: {}", i);
        Square::new(i as u8 / BOARD_SIZE, i as u8 % BOARD_SIZE)
    }

    /// Iterates all squares in file-major ascending order (files then
    /// ranks), the board-scan order the rest of the engine relies on.
    pub fn all_squares() -> SquareIterator {
        SquareIterator(0)
    }
}

pub struct SquareIterator(u8);

impl Iterator for SquareIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > 63 {
            None
        } else {
            self.0 += 1;
            Some(Square::from_index(self.0 as usize - 1))
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'][self.file as usize],
            self.rank + 1,
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Error is rather big, so we use a closure to avoid copies
        let err_closure = || ChessError::InvalidSquare(s.to_string());
        let mut chars = s.chars();

        let file_char = chars.next().ok_or_else(err_closure)?;
        let rank_digit = chars
            .next()
            .and_then(|r| r.to_digit(10))
            .ok_or_else(err_closure)?;

        //  Too many characters || coordinates out of range
        if chars.next().is_some()
            || !('a'..='h').contains(&file_char)
            || !(1..=8).contains(&rank_digit)
        {
            return Err(err_closure());
        }

        Ok(Square::new(file_char as u8 - b'a', rank_digit as u8 - 1))
    }
}
