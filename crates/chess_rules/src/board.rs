use std::hash::{Hash, Hasher};

use tracing::warn;

use crate::error::{RulesError, RulesResult};
use crate::types::*;

/// 8x8 grid of pieces plus the side to move.
///
/// The board knows nothing about the rules: it places and removes pieces and
/// applies moves it is handed without checking them. Cloning copies the grid
/// while keeping piece identities, so a clone can be used for a throwaway
/// legality probe and still be compared piece-for-piece with the original.
#[derive(Clone, Debug)]
pub struct Board {
    squares: [Option<Piece>; 64],
    white_to_move: bool,
    next_id: u16,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            white_to_move: true,
            next_id: 0,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        for color in [Color::White, Color::Black] {
            let home = color.home_rank();
            let pawns = home + color.forward();
            for (f, &kind) in BACK_RANK.iter().enumerate() {
                b.spawn(f as i8, home, color, kind);
            }
            for f in 0..8 {
                b.spawn(f, pawns, color, PieceKind::Pawn);
            }
        }
        b
    }

    /// Allocates a fresh piece and puts it on (file, rank), replacing any occupant.
    pub(crate) fn spawn(&mut self, file: i8, rank: i8, color: Color, kind: PieceKind) -> Piece {
        let piece = Piece {
            id: PieceId(self.next_id),
            color,
            kind,
        };
        self.next_id += 1;
        if let Some(s) = sq(file, rank) {
            self.squares[s as usize] = Some(piece);
        }
        piece
    }

    /// Occupant of (x, y); off-board coordinates read as empty.
    pub fn get(&self, x: i8, y: i8) -> Option<Piece> {
        sq(x, y).and_then(|s| self.piece_at(s))
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }

    fn clear(&mut self, sq: u8) {
        self.squares[sq as usize] = None;
    }

    fn put(&mut self, sq: u8, pc: Piece) {
        self.squares[sq as usize] = Some(pc);
    }

    /// Square currently holding this exact piece.
    pub fn locate(&self, piece: Piece) -> Option<u8> {
        self.squares
            .iter()
            .position(|s| *s == Some(piece))
            .map(|i| i as u8)
    }

    /// All occupied squares in a1..h8 order.
    pub fn occupied(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|pc| (i as u8, pc)))
    }

    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.occupied().filter(move |(_, pc)| pc.color == c)
    }

    pub fn king_sq(&self, c: Color) -> RulesResult<u8> {
        self.pieces(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(s, _)| s)
            .ok_or(RulesError::KingNotFound(c))
    }

    pub fn is_white_turn(&self) -> bool {
        self.white_to_move
    }

    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub(crate) fn set_side_to_move(&mut self, c: Color) {
        self.white_to_move = c == Color::White;
    }

    pub fn switch_turn(&mut self) {
        self.white_to_move = !self.white_to_move;
    }

    /// Applies a move without validating it. The turn is left unchanged.
    pub fn apply(&mut self, mv: &Move) {
        // En-passant: the victim is not on the destination square
        if mv.captures
            && let Some(victim) = mv.other
            && let Some(vs) = self.locate(victim)
        {
            self.clear(vs);
        }

        let Some(from) = self.locate(mv.piece) else {
            warn!(piece = ?mv.piece, "applying a move for a piece not on the board");
            return;
        };
        self.clear(from);

        if mv.castles {
            let Some(rook) = mv.other else {
                warn!("castle move without a rook partner");
                self.put(mv.to, mv.piece);
                return;
            };
            let Some(rook_from) = self.locate(rook) else {
                warn!(rook = ?rook, "castling rook not on the board");
                self.put(mv.to, mv.piece);
                return;
            };
            // Rook lands on the king's far side, toward where it came from
            let step: i8 = if file_of(rook_from) < file_of(from) { -1 } else { 1 };
            self.clear(rook_from);
            self.put(mv.to, mv.piece);
            if let Some(rook_to) = sq(file_of(mv.to) - step, rank_of(mv.to)) {
                self.put(rook_to, rook);
            }
        } else if mv.promotes {
            let (f, r) = (file_of(mv.to), rank_of(mv.to));
            self.spawn(f, r, mv.piece.color, PieceKind::Queen);
        } else {
            self.put(mv.to, mv.piece);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

// Same physical arrangement: identity-equal pieces on every square.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.white_to_move == other.white_to_move && self.squares == other.squares
    }
}
impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.white_to_move.hash(state);
        self.squares.hash(state);
    }
}

/// Builder for arbitrary positions.
///
/// ```
/// use chess_rules::{Color, PieceKind, Setup};
///
/// let board = Setup::new()
///     .piece(4, 0, Color::White, PieceKind::King)
///     .piece(4, 7, Color::Black, PieceKind::King)
///     .piece(0, 6, Color::White, PieceKind::Pawn)
///     .build()
///     .unwrap();
/// assert_eq!(board.get(0, 6).unwrap().kind, PieceKind::Pawn);
/// ```
#[derive(Clone, Debug)]
pub struct Setup {
    placements: Vec<(i8, i8, Color, PieceKind)>,
    to_move: Color,
}

impl Default for Setup {
    fn default() -> Self {
        Self::new()
    }
}

impl Setup {
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
            to_move: Color::White,
        }
    }

    pub fn piece(mut self, x: i8, y: i8, color: Color, kind: PieceKind) -> Self {
        self.placements.push((x, y, color, kind));
        self
    }

    pub fn to_move(mut self, color: Color) -> Self {
        self.to_move = color;
        self
    }

    /// Validates the placements and lays them out on a fresh board.
    pub fn build(self) -> RulesResult<Board> {
        let mut board = Board::empty();
        for &(x, y, color, kind) in &self.placements {
            let Some(s) = sq(x, y) else {
                return Err(RulesError::OutOfBounds { x, y });
            };
            if board.piece_at(s).is_some() {
                return Err(RulesError::SquareOccupied(sq_to_coord(s)));
            }
            board.spawn(x, y, color, kind);
        }

        for color in [Color::White, Color::Black] {
            let found = board
                .pieces(color)
                .filter(|(_, pc)| pc.kind == PieceKind::King)
                .count();
            if found != 1 {
                return Err(RulesError::KingCount { color, found });
            }
        }

        board.set_side_to_move(self.to_move);
        Ok(board)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
