//! Depth-bounded minimax search with alpha-beta pruning
//!
//! The engine is always the maximizing side. Each node asks the candidate
//! generator for a short ranked move list, plays each move on its own board
//! copy and recurses with the roles swapped.
//!
//! # Features
//!
//! - Immediate-win short-circuit at every node, for both sides
//! - Alpha-beta cutoffs (can be disabled to cross-check against plain minimax)
//! - Leaf scores clamped strictly inside the win sentinel, so a forced win
//!   always outranks any static evaluation
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone};
//! use gomoku::eval::ScoreTable;
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::default();
//! board.play(7, 7);
//!
//! let mut searcher = Searcher::new(Stone::White, ScoreTable::default());
//! let result = searcher.search(&board, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, ScoreTable};

use super::candidates::{generate, CandidateLimits};

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Backed-up score of the root, from the engine's side
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Minimax searcher playing for one color.
///
/// Callers must not search a terminal board; the root then simply returns
/// its static score with no move.
#[derive(Debug, Clone)]
pub struct Searcher {
    engine: Stone,
    table: ScoreTable,
    limits: CandidateLimits,
    pruning: bool,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher that maximizes for `engine`.
    #[must_use]
    pub fn new(engine: Stone, table: ScoreTable) -> Self {
        Self {
            engine,
            table,
            limits: CandidateLimits::default(),
            pruning: true,
            nodes: 0,
        }
    }

    /// Use custom candidate caps.
    #[must_use]
    pub fn with_limits(mut self, limits: CandidateLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Enable or disable alpha-beta cutoffs.
    ///
    /// The returned score is the same either way; only the node count changes.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    #[inline]
    pub fn engine(&self) -> Stone {
        self.engine
    }

    #[inline]
    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// Search `depth` plies ahead with the engine to move.
    #[must_use]
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = self.minimax(board, depth, true, -INF, INF);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Recursive minimax with alpha-beta bounds.
    ///
    /// Returns the backed-up score and the move that achieves it at this node.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if depth == 0 || board.is_terminal() {
            return (self.leaf_score(board), None);
        }

        let side = if maximizing {
            self.engine
        } else {
            self.engine.opponent()
        };

        let moves = generate(board, self.engine, &self.table, &self.limits);

        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in moves {
            let mut child = board.clone();
            if !child.apply_move(mov.row as usize, mov.col as usize, side) {
                continue;
            }

            // A move that wins on the spot cannot be improved on
            if child.winner() == Some(side) {
                let score = if maximizing { self.table.win } else { -self.table.win };
                return (score, Some(mov));
            }

            let (score, _) = self.minimax(&child, depth - 1, !maximizing, alpha, beta);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        if best_move.is_none() {
            return (self.leaf_score(board), None);
        }

        (best_score, best_move)
    }

    /// Static evaluation, kept strictly inside the win sentinel.
    #[inline]
    fn leaf_score(&self, board: &Board) -> i32 {
        let bound = self.table.win - 1;
        evaluate(board, self.engine, &self.table).clamp(-bound, bound)
    }
}
