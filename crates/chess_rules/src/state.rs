//! Per-piece mutable rule state.
//!
//! Only the game controller writes here. Board copies used for legality
//! testing never see or touch these flags.

use crate::types::{Piece, PieceId, PieceKind, file_of, rank_of};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceState {
    /// Pawns may double-step until they first move.
    Pawn { has_moved: bool },
    /// Kings and rooks; cleared once they move (or, for a king, once checked).
    Castler { can_castle: bool },
    Plain,
}

impl PieceState {
    /// Flags for a piece standing on `sq` before any move was played.
    pub fn initial(piece: Piece, sq: u8) -> Self {
        let home = piece.color.home_rank();
        match piece.kind {
            PieceKind::Pawn => PieceState::Pawn {
                has_moved: rank_of(sq) != home + piece.color.forward(),
            },
            PieceKind::King => PieceState::Castler {
                can_castle: rank_of(sq) == home && file_of(sq) == 4,
            },
            PieceKind::Rook => PieceState::Castler {
                can_castle: rank_of(sq) == home && matches!(file_of(sq), 0 | 7),
            },
            _ => PieceState::Plain,
        }
    }
}

/// Arena of piece states indexed by `PieceId`.
#[derive(Clone, Debug, Default)]
pub struct PieceStates {
    states: Vec<PieceState>,
}

impl PieceStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: PieceId, state: PieceState) {
        let idx = id.0 as usize;
        if self.states.len() <= idx {
            self.states.resize(idx + 1, PieceState::Plain);
        }
        self.states[idx] = state;
    }

    /// Pieces never registered (promoted queens) are `Plain`.
    pub fn get(&self, id: PieceId) -> PieceState {
        self.states
            .get(id.0 as usize)
            .copied()
            .unwrap_or(PieceState::Plain)
    }

    pub fn has_moved(&self, id: PieceId) -> bool {
        match self.get(id) {
            PieceState::Pawn { has_moved } => has_moved,
            _ => true,
        }
    }

    pub fn can_castle(&self, id: PieceId) -> bool {
        matches!(self.get(id), PieceState::Castler { can_castle: true })
    }

    pub fn mark_moved(&mut self, id: PieceId) {
        if let PieceState::Pawn { .. } = self.get(id) {
            self.insert(id, PieceState::Pawn { has_moved: true });
        }
    }

    /// Permanently clears castling rights. No-op for pieces that cannot castle.
    pub fn revoke_castling(&mut self, id: PieceId) {
        if let PieceState::Castler { .. } = self.get(id) {
            self.insert(id, PieceState::Castler { can_castle: false });
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
