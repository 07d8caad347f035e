use crate::boards::*;
use crate::pieces::*;
use crate::positions::*;
use array_init::array_init;
use lazy_static::lazy_static;

// ---------------------------------------------
// Pseudo-legal move generation
// ---------------------------------------------
//
// Pure function of the current board contents. History-dependent moves
// (castling, en passant) and self-check filtering live elsewhere.

// Offsets are (file, rank) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (2, -1),
    (1, -2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

lazy_static! {
    // Per-square step targets, precomputed once. Off-board offsets are
    // dropped during table construction, so lookups never bounds-check.
    static ref KNIGHT_STEPS: [Vec<Square>; 64] = step_table(&KNIGHT_OFFSETS);
    static ref KING_STEPS: [Vec<Square>; 64] = step_table(&KING_OFFSETS);
}

fn step_table(offsets: &[(i8, i8); 8]) -> [Vec<Square>; 64] {
    array_init(|i| {
        let from = Square::from_index(i);
        offsets
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .collect()
    })
}

/// All squares `piece` could move to from `from` by its movement pattern
/// and board occupancy alone, ignoring check. Never returns an off-board
/// square.
pub fn pseudo_legal_moves(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.team),
        PieceKind::Knight => step_moves(board, &KNIGHT_STEPS[from.index()], piece.team),
        PieceKind::King => step_moves(board, &KING_STEPS[from.index()], piece.team),
        PieceKind::Rook => ray_moves(board, from, piece.team, &ROOK_DIRS),
        PieceKind::Bishop => ray_moves(board, from, piece.team, &BISHOP_DIRS),
        PieceKind::Queen => ray_moves(board, from, piece.team, &QUEEN_DIRS),
    }
}

/// Jumping pieces: a precomputed target is taken if empty or enemy-occupied.
fn step_moves(board: &Board, targets: &[Square], team: Team) -> Vec<Square> {
    targets
        .iter()
        .copied()
        .filter(|&sq| board.piece_at(sq).map_or(true, |p| p.team != team))
        .collect()
}

/// Sliding pieces: walk each ray outward, through empty squares, stopping
/// exclusively on a friend and inclusively on an enemy. The board edge
/// terminates a ray silently.
fn ray_moves(board: &Board, from: Square, team: Team, dirs: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(df, dr) in dirs {
        let mut cur = from;
        while let Some(next) = cur.offset(df, dr) {
            match board.piece_at(next) {
                None => {
                    moves.push(next);
                    cur = next;
                }
                Some(p) => {
                    if p.team != team {
                        moves.push(next);
                    }
                    break;
                }
            }
        }
    }
    moves
}

fn pawn_moves(board: &Board, from: Square, team: Team) -> Vec<Square> {
    let mut moves = Vec::new();
    let dir = team.forward();

    // A pawn on its final rank has nowhere forward to go. (In a committed
    // game it will have promoted, but generation must not step off-board.)
    if from.rank() == team.far_rank() {
        return moves;
    }

    // Straight movement: single step onto an empty square, double step only
    // from the start rank and only if both squares are empty.
    if let Some(one) = from.offset(0, dir) {
        if board.piece_at(one).is_none() {
            moves.push(one);
            if from.rank() == team.pawn_start_rank() {
                if let Some(two) = from.offset(0, 2 * dir) {
                    if board.piece_at(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // Diagonal captures only onto enemy-occupied squares; empty diagonals
    // are never generated here (en passant is detected separately).
    for df in [-1, 1] {
        if let Some(diag) = from.offset(df, dir) {
            if let Some(p) = board.piece_at(diag) {
                if p.team != team {
                    moves.push(diag);
                }
            }
        }
    }

    moves
}
