//! Static evaluation for Gomoku board positions
//!
//! Scores a position from the engine's point of view:
//! - Decided games get the fixed terminal score
//! - Line patterns for both sides, with the opponent weighted heavier
//! - Immediate-threat terms, where the opponent's threats cost more than
//!   the engine's own threats earn

use crate::board::{Board, GameStatus, Stone};

use super::patterns::{weighted, ScoreTable};
use super::threat::count_immediate_threats;
use super::window::evaluate_player_enhanced;

/// Evaluate the board for `engine`.
///
/// Positive values favor `engine`, negative values favor its opponent.
/// Returns `±table.terminal` for a won game and 0 for a draw.
#[must_use]
pub fn evaluate(board: &Board, engine: Stone, table: &ScoreTable) -> i32 {
    match board.status() {
        GameStatus::Won(winner) if winner == engine => return table.terminal,
        GameStatus::Won(_) => return -table.terminal,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    let opponent = engine.opponent();

    let my_score = evaluate_player_enhanced(board, engine, &table.windows);
    let opp_score = evaluate_player_enhanced(board, opponent, &table.windows);
    let pattern_score = my_score - weighted(opp_score, table.opponent_weight_pct);

    let defense = count_immediate_threats(board, opponent) as i32 * table.threat_penalty;
    let attack = count_immediate_threats(board, engine) as i32 * table.threat_bonus;

    pattern_score - defense + attack
}
