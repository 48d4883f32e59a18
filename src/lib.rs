//! Gomoku AI engine
//!
//! Move selection for free-style Gomoku (five in a row wins, overlines
//! count, no forbidden moves) on an N×N board:
//! - Board state with win and draw detection
//! - Sliding-window pattern evaluation
//! - Threat classification for forced moves
//! - Minimax search with alpha-beta pruning over a ranked candidate list
//! - Difficulty tiers mapped to search depth
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and snapshots
//! - [`rules`]: Win detection
//! - [`eval`]: Pattern scores, threat classification and the static evaluator
//! - [`search`]: Candidate generation and alpha-beta search
//! - [`engine`]: Main AI engine with the opening heuristic
//! - [`session`]: Game sessions for embedding the engine in a service
//! - [`config`]: Service configuration
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Stone};
//!
//! let mut board = Board::default();
//! let mut engine = AIEngine::with_seed(Difficulty::new(1).unwrap(), 42);
//!
//! // Human opens as Black
//! board.play(7, 7);
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&board) {
//!     board.apply_move(pos.row as usize, pos.col as usize, Stone::White);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Move Priority
//!
//! 1. Opening book: center, then a cell next to it
//! 2. Forced cells: wins, fours and open threes for either side
//! 3. Alpha-beta search over the best positional candidates

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, BoardState, GameStatus, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{best_move, AIEngine, Difficulty, MoveResult, SearchType};
pub use error::{GameError, Result};
pub use eval::ScoreTable;
pub use session::{GameService, MemorySessionStore, SessionStore, TurnOutcome};
