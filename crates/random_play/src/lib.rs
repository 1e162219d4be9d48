//! Random self-play
//!
//! Plays whole games by picking uniformly among the legal moves of the side
//! to move. Useful for:
//! - Stress testing move generation and game-over detection
//! - Reproducing odd positions from a seed

use std::path::Path;

use chess_rules::{Game, GameConfig, GameStatus, Move, RulesResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};


/// Settings for a batch of self-play games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies after which an unfinished game is abandoned
    pub max_plies: u32,
    /// Seed for the move picker; the whole batch is reproducible from it
    pub seed: u64,
    /// Rule settings shared by every game
    pub rules: GameConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 400,
            seed: 0,
            rules: GameConfig::default(),
        }
    }
}

impl PlayConfig {
    pub fn from_toml_str(s: &str) -> RulesResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> RulesResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Picks a random legal move for whoever is to move.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `None` when the side to move has no legal move.
    pub fn choose(&mut self, game: &mut Game) -> RulesResult<Option<Move>> {
        let moves = game.legal_moves()?;
        Ok(moves.choose(&mut self.rng).copied())
    }
}

/// One finished (or abandoned) game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub index: u32,
    pub status: GameStatus,
    pub plies: u32,
    /// True when `max_plies` ran out before the game ended
    pub truncated: bool,
    pub moves: Vec<String>,
}

/// Plays a single game to completion or until `max_plies`.
pub fn play_game(
    player: &mut RandomPlayer,
    rules: &GameConfig,
    max_plies: u32,
    index: u32,
) -> RulesResult<GameRecord> {
    let mut game = Game::new().with_config(rules.clone());
    let mut moves = Vec::new();

    let status = loop {
        let status = game.evaluate_game_over()?;
        if status.is_over() || moves.len() as u32 >= max_plies {
            break status;
        }
        let Some(mv) = player.choose(&mut game)? else {
            break status;
        };
        game.commit(&mv);
        moves.push(mv.to_string());
    };

    let plies = moves.len() as u32;
    debug!(index, ?status, plies, "game finished");
    Ok(GameRecord {
        index,
        status,
        plies,
        truncated: !status.is_over(),
        moves,
    })
}

/// Plays every game in `config` with one seeded player.
pub fn run(config: &PlayConfig) -> RulesResult<Vec<GameRecord>> {
    let mut player = RandomPlayer::new(config.seed);
    let mut records = Vec::with_capacity(config.games as usize);
    for index in 0..config.games {
        records.push(play_game(
            &mut player,
            &config.rules,
            config.max_plies,
            index,
        )?);
    }
    let summary = Summary::from_records(&records);
    info!(
        games = summary.games,
        white_wins = summary.white_wins,
        black_wins = summary.black_wins,
        draws = summary.draws,
        truncated = summary.truncated,
        "self-play done"
    );
    Ok(records)
}

/// Aggregate results of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub games: u32,
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub truncated: u32,
    pub total_plies: u64,
}

impl Summary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut s = Summary::default();
        for r in records {
            s.games += 1;
            s.total_plies += r.plies as u64;
            match r.status {
                GameStatus::WhiteWin => s.white_wins += 1,
                GameStatus::BlackWin => s.black_wins += 1,
                GameStatus::Draw => s.draws += 1,
                GameStatus::NotOver => s.truncated += 1,
            }
        }
        s
    }
}
