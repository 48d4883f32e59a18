//! Runtime configuration
//!
//! Settings come from three layers, later ones winning:
//! defaults, an optional JSON document, then `GOMOKU_*` environment
//! variables.

use serde::{Deserialize, Serialize};

use crate::board::DEFAULT_BOARD_SIZE;
use crate::engine::Difficulty;
use crate::error::{GameError, Result};
use crate::eval::ScoreTable;

/// Smallest playable board
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board accepted by the service
pub const MAX_BOARD_SIZE: usize = 25;
/// Default cap on concurrent sessions
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

/// Game service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board size for new games when the caller gives none
    pub board_size: usize,
    /// Difficulty for new games when the caller gives none
    pub difficulty: Difficulty,
    /// Maximum number of live sessions
    pub max_sessions: usize,
    /// Seed for opening moves and session ids; entropy when absent
    pub seed: Option<u64>,
    /// Evaluation weights
    pub scores: ScoreTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            difficulty: Difficulty::default(),
            max_sessions: DEFAULT_MAX_SESSIONS,
            seed: None,
            scores: ScoreTable::default(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self> {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// Apply `GOMOKU_*` overrides read through `lookup`, then validate.
    pub fn overlay<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("GOMOKU_BOARD_SIZE") {
            self.board_size = parse_var("GOMOKU_BOARD_SIZE", &v)?;
        }
        if let Some(v) = lookup("GOMOKU_DIFFICULTY") {
            self.difficulty = Difficulty::new(parse_var("GOMOKU_DIFFICULTY", &v)?)?;
        }
        if let Some(v) = lookup("GOMOKU_MAX_SESSIONS") {
            self.max_sessions = parse_var("GOMOKU_MAX_SESSIONS", &v)?;
        }
        if let Some(v) = lookup("GOMOKU_SEED") {
            self.seed = Some(parse_var("GOMOKU_SEED", &v)?);
        }
        self.validate()?;
        Ok(self)
    }

    /// Check ranges and score orderings.
    pub fn validate(&self) -> Result<()> {
        check_board_size(self.board_size)?;
        if self.max_sessions == 0 {
            return Err(GameError::InvalidConfig(
                "max_sessions must be at least 1".to_string(),
            ));
        }
        self.scores.validate()
    }

    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_max_sessions(mut self, max: usize) -> Self {
        self.max_sessions = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_scores(mut self, scores: ScoreTable) -> Self {
        self.scores = scores;
        self
    }
}

/// Reject board sizes outside the supported range.
pub fn check_board_size(size: usize) -> Result<()> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GameError::InvalidBoardSize {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| GameError::InvalidConfig(format!("{key}: cannot parse {value:?}")))
}
