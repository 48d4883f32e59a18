//! Candidate move generation
//!
//! Keeps the branching factor small by only handing the search a short,
//! ranked list of cells:
//! 1. Empty board: the center
//! 2. Forced cells (wins, fours, threes for either side), best first
//! 3. Otherwise the best-valued cells near existing stones
//! 4. Fallbacks so a non-full board never yields an empty list

use crate::board::{Board, Pos, Stone};
use crate::eval::patterns::{weighted, ScoreTable};
use crate::eval::threat::{best_threat, direction_potential};
use crate::rules::DIRECTIONS;

/// Caps on how many cells each stage may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateLimits {
    /// Forced cells kept when any exist
    pub critical: usize,
    /// Positional cells kept otherwise
    pub positional: usize,
    /// Collected cells kept when none has positive value
    pub fallback_collected: usize,
    /// Arbitrary empty cells kept when nothing was collected
    pub fallback_any: usize,
}

impl Default for CandidateLimits {
    fn default() -> Self {
        Self {
            critical: 5,
            positional: 10,
            fallback_collected: 15,
            fallback_any: 10,
        }
    }
}

/// Ranked candidate moves for a search node.
///
/// Attack and defense are always judged from `engine`'s side, whichever side
/// is to move at the node.
pub fn generate(
    board: &Board,
    engine: Stone,
    table: &ScoreTable,
    limits: &CandidateLimits,
) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let critical = find_critical(board, engine, table);
    if !critical.is_empty() {
        log::trace!("critical cells: {:?}", &critical[..critical.len().min(limits.critical)]);
        return critical
            .into_iter()
            .take(limits.critical)
            .map(|(pos, _)| pos)
            .collect();
    }

    let collected = collect_nearby(board);

    let mut valued: Vec<(Pos, i32)> = collected
        .iter()
        .map(|&pos| (pos, position_value(board, pos, engine, table)))
        .filter(|&(_, value)| value > 0)
        .collect();
    // Stable: equal values keep row-major order
    valued.sort_by(|a, b| b.1.cmp(&a.1));

    if !valued.is_empty() {
        return valued
            .into_iter()
            .take(limits.positional)
            .map(|(pos, _)| pos)
            .collect();
    }

    if !collected.is_empty() {
        return collected.into_iter().take(limits.fallback_collected).collect();
    }

    board.empty_cells().take(limits.fallback_any).collect()
}

/// Cells whose combined attack and defense value clears the threshold,
/// sorted by value (highest first, ties in row-major order).
pub fn find_critical(board: &Board, engine: Stone, table: &ScoreTable) -> Vec<(Pos, i32)> {
    let opponent = engine.opponent();
    let mut critical = Vec::new();

    for pos in board.empty_cells() {
        let attack = best_threat(board, pos, engine).value(&table.attack);
        let defense = best_threat(board, pos, opponent).value(&table.defense);
        let total = attack + weighted(defense, table.defense_weight_pct);

        if total >= table.critical_threshold {
            critical.push((pos, total));
        }
    }

    critical.sort_by(|a, b| b.1.cmp(&a.1));
    critical
}

/// Empty cells next to a stone, plus cells two away that already see at
/// least two stones within that distance. Row-major order.
fn collect_nearby(board: &Board) -> Vec<Pos> {
    board
        .empty_cells()
        .filter(|&pos| count_neighbors(board, pos, 1) > 0 || count_neighbors(board, pos, 2) >= 2)
        .collect()
}

/// Occupied cells within Chebyshev distance `radius` of `pos`.
pub fn count_neighbors(board: &Board, pos: Pos, radius: i32) -> u32 {
    let size = board.size();
    let mut count = 0;
    for dr in -radius..=radius {
        for dc in -radius..=radius {
            if dr == 0 && dc == 0 {
                continue;
            }
            if let Some(p) = pos.offset(dr, dc, 1, size) {
                if !board.is_empty(p) {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Heuristic value of playing `pos`: local density, line potential for both
/// sides, and a mild pull toward the center. Isolated cells are worth 0.
pub fn position_value(board: &Board, pos: Pos, engine: Stone, table: &ScoreTable) -> i32 {
    if !board.is_empty(pos) {
        return 0;
    }

    let adjacent = count_neighbors(board, pos, 1) as i32;
    let outer = count_neighbors(board, pos, 2) as i32 - adjacent;
    if adjacent == 0 && outer == 0 {
        return 0;
    }

    let mut value = adjacent * table.adjacent_bonus + outer * table.outer_bonus;

    let opponent = engine.opponent();
    for &dir in &DIRECTIONS {
        let own = direction_potential(board, pos, dir, engine, &table.potential);
        let block = direction_potential(board, pos, dir, opponent, &table.potential);
        value += weighted(own, table.own_potential_pct);
        value += weighted(block, table.block_potential_pct);
    }

    let center = board.center();
    let dist = i32::from(pos.row.abs_diff(center.row)) + i32::from(pos.col.abs_diff(center.col));
    value += (table.center_bias - dist).max(0);

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[(usize, usize)], white: &[(usize, usize)]) -> Board {
        let mut board = Board::default();
        for &(r, c) in black {
            assert!(board.apply_move(r, c, Stone::Black));
        }
        for &(r, c) in white {
            assert!(board.apply_move(r, c, Stone::White));
        }
        board
    }

    fn candidates(board: &Board) -> Vec<Pos> {
        generate(board, Stone::White, &ScoreTable::default(), &CandidateLimits::default())
    }

    #[test]
    fn test_empty_board_center() {
        assert_eq!(candidates(&Board::default()), vec![Pos::new(7, 7)]);
        assert_eq!(
            generate(&Board::new(9), Stone::White, &ScoreTable::default(), &CandidateLimits::default()),
            vec![Pos::new(4, 4)]
        );
    }

    #[test]
    fn test_single_stone_neighbors() {
        let board = board_with(&[(7, 7)], &[]);
        let moves = candidates(&board);
        assert!(!moves.is_empty());
        assert!(moves.len() <= CandidateLimits::default().positional);
        for pos in &moves {
            assert!(board.is_empty(*pos));
            assert!(pos.chebyshev(Pos::new(7, 7)) <= 2);
        }
    }

    #[test]
    fn test_winning_cell_ranked_first() {
        let board = board_with(&[(0, 0), (0, 2)], &[(5, 3), (5, 4), (5, 5), (5, 6)]);
        let moves = candidates(&board);
        // Both ends win; the left one comes first in row-major order
        assert_eq!(moves[0], Pos::new(5, 2));
        assert_eq!(moves[1], Pos::new(5, 7));
        assert!(moves.len() <= CandidateLimits::default().critical);
    }

    #[test]
    fn test_must_block_open_four() {
        let board = board_with(&[(7, 4), (7, 5), (7, 6), (7, 7)], &[(0, 0)]);
        let moves = candidates(&board);
        assert!(moves.contains(&Pos::new(7, 3)));
        assert!(moves.contains(&Pos::new(7, 8)));
        assert!(moves[..2].iter().all(|p| *p == Pos::new(7, 3) || *p == Pos::new(7, 8)));
    }

    #[test]
    fn test_own_win_beats_blocking() {
        let board = board_with(
            &[(3, 3), (3, 4), (3, 5), (3, 6)],
            &[(9, 3), (9, 4), (9, 5), (9, 6)],
        );
        let critical = find_critical(&board, Stone::White, &ScoreTable::default());
        let (top, _) = critical[0];
        assert_eq!(top.row, 9, "own five should outrank blocking, got {top:?}");
    }

    #[test]
    fn test_closed_four_completion_is_critical() {
        // W B B B [7,7] W: Black filling the gap makes a four with no open end
        let table = ScoreTable::default();
        let board = board_with(&[(7, 4), (7, 5), (7, 6)], &[(7, 3), (7, 8)]);
        let critical = find_critical(&board, Stone::White, &table);
        let value = critical
            .iter()
            .find(|(pos, _)| *pos == Pos::new(7, 7))
            .map(|&(_, value)| value);
        assert_eq!(
            value,
            Some(weighted(table.defense.blocked_four, table.defense_weight_pct))
        );
    }

    #[test]
    fn test_critical_sorted_descending() {
        let board = board_with(&[(7, 5), (7, 6)], &[(4, 4), (4, 5), (4, 6)]);
        let critical = find_critical(&board, Stone::White, &ScoreTable::default());
        assert!(!critical.is_empty());
        for pair in critical.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
            if pair[0].1 == pair[1].1 {
                assert!(pair[0].0 < pair[1].0, "ties must keep row-major order");
            }
        }
    }

    #[test]
    fn test_count_neighbors() {
        let board = board_with(&[(7, 7), (7, 9)], &[(5, 5)]);
        assert_eq!(count_neighbors(&board, Pos::new(7, 8), 1), 2);
        assert_eq!(count_neighbors(&board, Pos::new(6, 6), 1), 2);
        assert_eq!(count_neighbors(&board, Pos::new(0, 0), 2), 0);
    }

    #[test]
    fn test_position_value() {
        let table = ScoreTable::default();
        let board = board_with(&[(7, 7)], &[(7, 8)]);
        assert_eq!(position_value(&board, Pos::new(7, 7), Stone::White, &table), 0);
        assert_eq!(position_value(&board, Pos::new(0, 0), Stone::White, &table), 0);
        let near = position_value(&board, Pos::new(6, 8), Stone::White, &table);
        let far = position_value(&board, Pos::new(5, 10), Stone::White, &table);
        assert!(near > far, "adjacent cell ({near}) should beat outer cell ({far})");
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let mut board = Board::new(5);
        for r in 0..5 {
            for c in 0..5 {
                let stone = if (c / 2 + r) % 2 == 0 { Stone::Black } else { Stone::White };
                board.apply_move(r, c, stone);
            }
        }
        assert!(candidates(&board).is_empty());
    }
}
