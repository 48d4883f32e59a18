//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation (forced cells first, then positional ranking)
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;

pub use alphabeta::{SearchResult, Searcher};
pub use candidates::{find_critical, generate, CandidateLimits};
