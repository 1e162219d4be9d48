use tracing::trace;

use crate::attacks::{
    DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, is_square_attacked, leaves_king_in_check,
};
use crate::board::Board;
use crate::error::RulesResult;
use crate::state::PieceStates;
use crate::types::*;

/// Read-only view of everything move generation depends on.
#[derive(Clone, Copy, Debug)]
pub struct MoveContext<'a> {
    pub board: &'a Board,
    pub states: &'a PieceStates,
    /// Pawn that double-stepped on the previous ply, if any.
    pub double_stepped: Option<Piece>,
}

impl<'a> MoveContext<'a> {
    pub fn new(board: &'a Board, states: &'a PieceStates, double_stepped: Option<Piece>) -> Self {
        Self {
            board,
            states,
            double_stepped,
        }
    }

    /// Every candidate move for `piece`, each tagged legal or not.
    ///
    /// A piece that is no longer on the board has no moves.
    pub fn moves_for(&self, piece: Piece) -> RulesResult<Vec<Move>> {
        let Some(from) = self.board.locate(piece) else {
            return Ok(Vec::new());
        };

        let mut out = Vec::with_capacity(32);
        match piece.kind {
            PieceKind::Pawn => self.gen_pawn(piece, from, &mut out),
            PieceKind::Knight => self.gen_steps(piece, from, &KNIGHT_DELTAS, &mut out),
            PieceKind::Bishop => self.gen_slider(piece, from, &DIAGONALS, &mut out),
            PieceKind::Rook => self.gen_slider(piece, from, &ORTHOGONALS, &mut out),
            PieceKind::Queen => {
                self.gen_slider(piece, from, &DIAGONALS, &mut out);
                self.gen_slider(piece, from, &ORTHOGONALS, &mut out);
            }
            PieceKind::King => self.gen_steps(piece, from, &KING_DELTAS, &mut out),
        }

        for mv in out.iter_mut() {
            mv.legal = !leaves_king_in_check(self.board, mv)?;
        }

        // Castles carry their own legality test and skip the probe above
        if piece.kind == PieceKind::King {
            self.gen_castles(piece, from, &mut out);
        }

        trace!(
            piece = ?piece.kind,
            from = %sq_to_coord(from),
            candidates = out.len(),
            legal = out.iter().filter(|m| m.legal).count(),
            "generated moves"
        );
        Ok(out)
    }

    fn gen_pawn(&self, pawn: Piece, from: u8, out: &mut Vec<Move>) {
        let c = pawn.color;
        let f = file_of(from);
        let r = rank_of(from);
        let dir = c.forward();
        let promo_rank = c.other().home_rank();

        // forward 1, then forward 2 for a pawn that never moved
        if let Some(to) = sq(f, r + dir)
            && self.board.piece_at(to).is_none()
        {
            out.push(Move {
                promotes: rank_of(to) == promo_rank,
                ..Move::new(pawn, to)
            });

            if !self.states.has_moved(pawn.id)
                && let Some(to2) = sq(f, r + 2 * dir)
                && self.board.piece_at(to2).is_none()
            {
                out.push(Move {
                    promotes: rank_of(to2) == promo_rank,
                    ..Move::new(pawn, to2)
                });
            }
        }

        // captures + en-passant
        for df in [-1, 1] {
            let Some(to) = sq(f + df, r + dir) else {
                continue;
            };
            let promotes = rank_of(to) == promo_rank;
            match self.board.piece_at(to) {
                Some(target) if target.color != c => out.push(Move {
                    captures: true,
                    promotes,
                    ..Move::new(pawn, to)
                }),
                Some(_) => {}
                None => {
                    // The victim sits beside us, not on the destination
                    if let Some(victim) = self.board.get(f + df, r)
                        && victim.color != c
                        && Some(victim) == self.double_stepped
                    {
                        out.push(Move {
                            captures: true,
                            promotes,
                            other: Some(victim),
                            ..Move::new(pawn, to)
                        });
                    }
                }
            }
        }
    }

    /// Single-step movers (knight, king): any in-bounds square not held by a friend.
    fn gen_steps(&self, piece: Piece, from: u8, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
        let f = file_of(from);
        let r = rank_of(from);
        for (df, dr) in deltas {
            if let Some(to) = sq(f + df, r + dr) {
                match self.board.piece_at(to) {
                    None => out.push(Move::new(piece, to)),
                    Some(pc) if pc.color != piece.color => out.push(Move {
                        captures: true,
                        ..Move::new(piece, to)
                    }),
                    _ => {}
                }
            }
        }
    }

    fn gen_slider(&self, piece: Piece, from: u8, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
        let f0 = file_of(from);
        let r0 = rank_of(from);
        for (df, dr) in dirs {
            let mut f = f0 + df;
            let mut r = r0 + dr;
            while let Some(to) = sq(f, r) {
                match self.board.piece_at(to) {
                    None => out.push(Move::new(piece, to)),
                    Some(pc) if pc.color != piece.color => {
                        out.push(Move {
                            captures: true,
                            ..Move::new(piece, to)
                        });
                        break;
                    }
                    _ => break,
                }
                f += df;
                r += dr;
            }
        }
    }

    /// One castle per rook still holding rights on the king's rank.
    ///
    /// The move is always emitted; `legal` is false when a square between
    /// king and rook is occupied or the king's origin, transit or destination
    /// square is attacked.
    fn gen_castles(&self, king: Piece, from: u8, out: &mut Vec<Move>) {
        if !self.states.can_castle(king.id) {
            return;
        }

        let enemy = king.color.other();
        let kf = file_of(from);
        let kr = rank_of(from);

        for (rsq, rook) in self.board.pieces(king.color) {
            if rook.kind != PieceKind::Rook
                || !self.states.can_castle(rook.id)
                || rank_of(rsq) != kr
            {
                continue;
            }
            let rf = file_of(rsq);
            if (rf - kf).abs() < 3 {
                continue;
            }
            let step: i8 = if rf < kf { -1 } else { 1 };
            let Some(to) = sq(kf + 2 * step, kr) else {
                continue;
            };

            let path_clear = (kf.min(rf) + 1..kf.max(rf)).all(|f| self.board.get(f, kr).is_none());
            let path_safe = (0..=2).all(|i| !is_square_attacked(self.board, enemy, kf + i * step, kr));

            out.push(Move {
                legal: path_clear && path_safe,
                castles: true,
                other: Some(rook),
                ..Move::new(king, to)
            });
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
