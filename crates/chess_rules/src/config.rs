//! Rule configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RulesResult;

/// Half-moves without a capture or pawn move before the game is drawn.
pub const DEFAULT_DRAW_HALF_MOVES: u32 = 50;

/// Tunable rule parameters for a game.
///
/// ```toml
/// draw_half_moves = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub draw_half_moves: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            draw_half_moves: DEFAULT_DRAW_HALF_MOVES,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> RulesResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> RulesResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
