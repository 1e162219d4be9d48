use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Rank direction pawns of this color advance in.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    /// Rank holding this color's king and rooks at the start.
    pub fn home_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn can_castle(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::King)
    }
}

/// Arena index naming one physical piece for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u16);

/// A piece on the board.
///
/// Equality and hashing go through `id` only: two white pawns are never equal
/// unless they are the same pawn.
#[derive(Clone, Copy, Debug)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceKind,
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A candidate move as produced by the generator.
///
/// `legal` is computed up front; committing a move with `legal == false` is a
/// caller error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub piece: Piece,
    pub to: u8, // 0..63
    pub legal: bool,
    pub captures: bool,
    pub promotes: bool,
    pub castles: bool,
    /// En-passant victim, or the rook partner of a castle.
    pub other: Option<Piece>,
}

impl Move {
    /// Plain displacement, untagged. Used for speculative application.
    pub fn new(piece: Piece, to: u8) -> Self {
        Self {
            piece,
            to,
            legal: false,
            captures: false,
            promotes: false,
            castles: false,
            other: None,
        }
    }

    pub fn x(&self) -> i8 {
        file_of(self.to)
    }
    pub fn y(&self) -> i8 {
        rank_of(self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {}", self.piece.kind, sq_to_coord(self.to))?;
        if self.castles {
            write!(f, " (castle)")?;
        }
        if self.promotes {
            write!(f, " (promote)")?;
        }
        if self.captures {
            write!(f, " (capture)")?;
        }
        Ok(())
    }
}

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

/// Algebraic name of a square, for logs and messages.
pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}
