//! Error types for the rules core

use crate::types::Color;

/// Errors surfaced by the rules core.
///
/// `KingNotFound` is an invariant violation: the board can no longer be
/// reasoned about and callers should abandon the game.
#[derive(thiserror::Error, Debug)]
pub enum RulesError {
    /// No king of this color is on the board
    #[error("King not found for {0}")]
    KingNotFound(Color),

    /// A setup must hold exactly one king per color
    #[error("Expected exactly one {color} king, found {found}")]
    KingCount { color: Color, found: usize },

    /// Setup coordinate outside the 8x8 grid
    #[error("Square ({x}, {y}) is off the board")]
    OutOfBounds { x: i8, y: i8 },

    /// Two pieces placed on the same square
    #[error("Square {0} is already occupied")]
    SquareOccupied(String),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
