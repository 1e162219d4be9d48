//! Chess rules core.
//!
//! Enumerates moves for a piece with a precomputed legality bit, applies
//! committed moves, and decides check, checkmate, stalemate and the
//! move-limit draw. Castling rights, the en-passant window and the half-move
//! counter live on [`Game`]; [`Board`] is plain data.

pub mod attacks;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod state;
pub mod types;

pub use attacks::{is_king_in_check, is_square_attacked, leaves_king_in_check};
pub use board::{Board, Setup};
pub use config::GameConfig;
pub use error::{RulesError, RulesResult};
pub use game::{Game, GameStatus};
pub use movegen::MoveContext;
pub use perft::{perft, perft_divide};
pub use state::{PieceState, PieceStates};
pub use types::*;
