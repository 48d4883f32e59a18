//! Main AI engine integrating the opening heuristic and the search
//!
//! The engine picks a move in two stages:
//!
//! 1. **Opening**: with at most two stones on the board, play the center or
//!    a random empty cell around it without searching
//! 2. **Alpha-Beta**: minimax to the depth set by the difficulty
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty};
//!
//! let mut engine = AIEngine::with_seed(Difficulty::default(), 7);
//! let mut board = Board::default();
//! board.play(7, 7);
//!
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::error::{GameError, Result};
use crate::eval::ScoreTable;
use crate::search::{CandidateLimits, SearchResult, Searcher};

/// Stones on the board up to which the opening heuristic applies
const OPENING_STONES: u32 = 2;

/// Difficulty tier, 1 (easiest) to 5 (hardest).
///
/// Tiers only change the search horizon, never the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a tier.
    pub fn new(level: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(GameError::InvalidDifficulty(level))
        }
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Search depth in plies for this tier.
    #[inline]
    pub fn depth(self) -> u8 {
        match self.0 {
            1 => 2,
            2 => 3,
            3 => 4,
            4 => 6,
            _ => 8,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = GameError;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

/// Which stage of the engine produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Opening heuristic, no search
    Opening,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Nothing to play
    NoMove,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Backed-up search score from the engine's side
    pub score: i32,
    /// Stage that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Option<Pos>, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            search_type: if pos.is_some() {
                SearchType::Opening
            } else {
                SearchType::NoMove
            },
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: if result.best_move.is_some() {
                SearchType::AlphaBeta
            } else {
                SearchType::NoMove
            },
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI engine for Gomoku.
///
/// Plays one color (White unless built with [`AIEngine::for_color`]). The
/// engine keeps no board state between calls; the only state it carries is
/// its configuration and the RNG used for opening moves.
pub struct AIEngine {
    searcher: Searcher,
    difficulty: Difficulty,
    rng: ChaCha8Rng,
}

impl AIEngine {
    /// Engine playing White with the default score table and an entropy-seeded RNG.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::for_color(Stone::White, difficulty, ScoreTable::default(), None)
    }

    /// Engine playing White with a fixed opening seed.
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::for_color(Stone::White, difficulty, ScoreTable::default(), Some(seed))
    }

    /// Engine playing `color` with a custom score table.
    #[must_use]
    pub fn for_color(
        color: Stone,
        difficulty: Difficulty,
        table: ScoreTable,
        seed: Option<u64>,
    ) -> Self {
        debug_assert!(color != Stone::Empty);
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            searcher: Searcher::new(color, table),
            difficulty,
            rng,
        }
    }

    /// Use custom candidate caps for the search.
    #[must_use]
    pub fn with_limits(mut self, limits: CandidateLimits) -> Self {
        self.searcher = self.searcher.with_limits(limits);
        self
    }

    /// Get the best move for the engine's color.
    ///
    /// Returns `None` if the board has no empty cell. The board must not be
    /// terminal.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        if board.stone_count() <= OPENING_STONES {
            let pos = self.get_opening_move(board);
            log::debug!("opening move {:?} for {:?}", pos, self.color());
            return MoveResult::opening(pos, start.elapsed().as_millis() as u64);
        }

        let depth = self.difficulty.depth();
        let result = self.searcher.search(board, depth);
        let time_ms = start.elapsed().as_millis() as u64;

        log::debug!(
            "search depth {} for {:?}: move {:?} score {} nodes {} in {}ms",
            depth,
            self.color(),
            result.best_move,
            result.score,
            result.nodes,
            time_ms
        );

        MoveResult::from_alphabeta(result, time_ms)
    }

    /// Opening heuristic.
    ///
    /// - Empty board: the center
    /// - Otherwise: a random empty cell among the 8 around the center, or a
    ///   random empty cell anywhere if those are all taken
    fn get_opening_move(&mut self, board: &Board) -> Option<Pos> {
        let center = board.center();
        if board.is_board_empty() {
            return Some(center);
        }

        let size = board.size();
        let ring: Vec<Pos> = (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .filter_map(|(dr, dc)| center.offset(dr, dc, 1, size))
            .filter(|p| board.is_valid_move(p.row as usize, p.col as usize))
            .collect();

        if let Some(&pos) = ring.choose(&mut self.rng) {
            return Some(pos);
        }

        board.valid_moves().choose(&mut self.rng).copied()
    }

    /// Change the difficulty tier.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Search depth used for non-opening moves.
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.difficulty.depth()
    }

    /// Color this engine plays.
    #[must_use]
    pub fn color(&self) -> Stone {
        self.searcher.engine()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// Best move for White on `board` at the given difficulty.
///
/// Returns `None` when no empty cell exists. Coordinates are `(row, col)`.
#[must_use]
pub fn best_move(board: &Board, difficulty: Difficulty) -> Option<(usize, usize)> {
    AIEngine::new(difficulty).get_move(board).map(Into::into)
}
