//! Attack and check detection.
//!
//! Everything here reads a board snapshot and never mutates the caller's
//! board. Attacks are found by looking outward from the target square:
//! - pawn and knight and king by fixed offsets
//! - sliders by walking each ray until the first occupied square

use crate::board::Board;
use crate::error::RulesResult;
use crate::types::*;

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Whether any piece of color `by` attacks (x, y).
pub fn is_square_attacked(board: &Board, by: Color, x: i8, y: i8) -> bool {
    let holds = |f: i8, r: i8, kinds: &[PieceKind]| {
        board
            .get(f, r)
            .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
    };

    // A pawn attacking (x, y) stands one rank behind it in its own direction
    let back = y - by.forward();
    if holds(x - 1, back, &[PieceKind::Pawn]) || holds(x + 1, back, &[PieceKind::Pawn]) {
        return true;
    }

    if KNIGHT_DELTAS
        .iter()
        .any(|(df, dr)| holds(x + df, y + dr, &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_DELTAS
        .iter()
        .any(|(df, dr)| holds(x + df, y + dr, &[PieceKind::King]))
    {
        return true;
    }

    let sliders: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
        (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
        (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
    ];
    for (dirs, kinds) in sliders {
        for (df, dr) in dirs {
            let mut f = x + df;
            let mut r = y + dr;
            while let Some(s) = sq(f, r) {
                if let Some(pc) = board.piece_at(s) {
                    if pc.color == by && kinds.contains(&pc.kind) {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
    }

    false
}

/// Whether the king of color `c` is attacked. Errors if that king is missing.
pub fn is_king_in_check(board: &Board, c: Color) -> RulesResult<bool> {
    let ksq = board.king_sq(c)?;
    Ok(is_square_attacked(board, c.other(), file_of(ksq), rank_of(ksq)))
}

/// Plays `mv` on a scratch copy and reports whether the mover's king is
/// attacked afterwards. The copy is dropped before returning.
pub fn leaves_king_in_check(board: &Board, mv: &Move) -> RulesResult<bool> {
    let mut probe = board.clone();
    probe.apply(mv);
    is_king_in_check(&probe, mv.piece.color)
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
