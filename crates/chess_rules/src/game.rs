//! Game controller: owns the canonical board and all per-game rule state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::attacks::is_king_in_check;
use crate::board::{Board, Setup};
use crate::config::GameConfig;
use crate::error::RulesResult;
use crate::movegen::MoveContext;
use crate::state::{PieceState, PieceStates};
use crate::types::*;

/// Outcome as seen from the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotOver,
    Draw,
    WhiteWin,
    BlackWin,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::NotOver
    }

    pub fn win_for(c: Color) -> Self {
        match c {
            Color::White => GameStatus::WhiteWin,
            Color::Black => GameStatus::BlackWin,
        }
    }
}

/// One game of chess.
///
/// Move lists are cached per piece and thrown away on every commit. Pieces
/// are identified by id, so the same `Piece` value keeps working across
/// commits for as long as it stays on the board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    states: PieceStates,
    cache: HashMap<PieceId, Vec<Move>>,
    /// Pawn that double-stepped on the last ply (en-passant window)
    double_stepped: Option<Piece>,
    half_moves: u32,
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos())
    }

    /// Starts from a validated board. Rule flags are derived from where each
    /// piece stands (see [`PieceState::initial`]).
    pub fn from_board(board: Board) -> Self {
        let mut states = PieceStates::new();
        for (s, pc) in board.occupied() {
            states.insert(pc.id, PieceState::initial(pc, s));
        }
        Self {
            board,
            states,
            cache: HashMap::new(),
            double_stepped: None,
            half_moves: 0,
            config: GameConfig::default(),
        }
    }

    pub fn from_setup(setup: Setup) -> RulesResult<Self> {
        Ok(Self::from_board(setup.build()?))
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn occupant_at(&self, x: i8, y: i8) -> Option<Piece> {
        self.board.get(x, y)
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn half_move_clock(&self) -> u32 {
        self.half_moves
    }

    /// Pawn that may be captured en-passant on this ply.
    pub fn double_stepped(&self) -> Option<Piece> {
        self.double_stepped
    }

    pub fn can_castle(&self, piece: Piece) -> bool {
        self.states.can_castle(piece.id)
    }

    pub fn is_in_check(&self, c: Color) -> RulesResult<bool> {
        is_king_in_check(&self.board, c)
    }

    /// All candidate moves for `piece`, legal or not.
    ///
    /// Repeated calls between commits return the cached list.
    pub fn moves_for(&mut self, piece: Piece) -> RulesResult<&[Move]> {
        if !self.cache.contains_key(&piece.id) {
            let ctx = MoveContext::new(&self.board, &self.states, self.double_stepped);
            let moves = ctx.moves_for(piece)?;
            self.cache.insert(piece.id, moves);
        }
        Ok(self.cache.get(&piece.id).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Every legal move for the side to move, in board order.
    pub fn legal_moves(&mut self) -> RulesResult<Vec<Move>> {
        let side = self.side_to_move();
        let pieces: Vec<Piece> = self.board.pieces(side).map(|(_, pc)| pc).collect();

        let mut out = Vec::with_capacity(64);
        for pc in pieces {
            out.extend(self.moves_for(pc)?.iter().filter(|m| m.legal).copied());
        }
        Ok(out)
    }

    /// Plays a move obtained from [`Game::moves_for`] and hands the turn over.
    pub fn commit(&mut self, mv: &Move) {
        if !mv.legal {
            warn!(%mv, "committing a move tagged illegal");
        }

        self.cache.clear();
        let prev_rank = self.board.locate(mv.piece).map(rank_of);

        self.board.apply(mv);

        let is_pawn = mv.piece.kind == PieceKind::Pawn;
        self.half_moves = if mv.captures || is_pawn {
            0
        } else {
            self.half_moves + 1
        };

        self.double_stepped = None;
        if is_pawn {
            self.states.mark_moved(mv.piece.id);
            if let Some(r0) = prev_rank
                && (mv.y() - r0).abs() == 2
            {
                self.double_stepped = Some(mv.piece);
            }
        } else if mv.piece.kind.can_castle() {
            self.states.revoke_castling(mv.piece.id);
            if mv.castles
                && let Some(rook) = mv.other
            {
                self.states.revoke_castling(rook.id);
            }
        }

        self.board.switch_turn();
        debug!(
            %mv,
            color = %mv.piece.color,
            half_moves = self.half_moves,
            "committed move"
        );
    }

    /// Decides whether the game has ended for the side to move.
    ///
    /// A king found in check here loses its castling rights for good, even
    /// after the check is resolved.
    pub fn evaluate_game_over(&mut self) -> RulesResult<GameStatus> {
        if self.half_moves >= self.config.draw_half_moves {
            info!(half_moves = self.half_moves, "draw by move limit");
            return Ok(GameStatus::Draw);
        }

        let side = self.side_to_move();
        let in_check = is_king_in_check(&self.board, side)?;
        if in_check {
            let ksq = self.board.king_sq(side)?;
            if let Some(king) = self.board.piece_at(ksq) {
                self.states.revoke_castling(king.id);
            }
        }

        let pieces: Vec<Piece> = self.board.pieces(side).map(|(_, pc)| pc).collect();
        for pc in pieces {
            if self.moves_for(pc)?.iter().any(|m| m.legal) {
                return Ok(GameStatus::NotOver);
            }
        }

        let status = if in_check {
            GameStatus::win_for(side.other())
        } else {
            GameStatus::Draw
        };
        info!(?status, %side, in_check, "no legal moves left");
        Ok(status)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
