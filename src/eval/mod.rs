//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for board positions:
//! - Fixed-length window scoring along each axis
//! - Threat classification for hypothetical stones
//! - The static evaluation used at search leaves
//! - The tunable score table behind all of the above

pub mod heuristic;
pub mod patterns;
pub mod threat;
pub mod window;

pub use heuristic::evaluate;
pub use patterns::{weighted, ScoreTable};
pub use threat::{best_threat, classify, count_immediate_threats, Run, ThreatKind};
pub use window::{evaluate_player, evaluate_player_enhanced, score_window};
