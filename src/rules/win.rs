//! Win condition checking
//!
//! A game is won by five or more stones of one color in an unbroken line
//! along any of the four axes. Overlines count.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Length of the unbroken `color` run through `pos` along `(dr, dc)`.
///
/// `pos` itself is counted as `color` whatever it holds, so this also
/// answers "how long would the run be if `color` played here" without
/// touching the board.
#[inline]
pub fn count_consecutive(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let size = board.size();
    let mut count = 1;

    // Positive direction
    let mut k = 1;
    while let Some(p) = pos.offset(dr, dc, k, size) {
        if board.get(p) != color {
            break;
        }
        count += 1;
        k += 1;
    }

    // Negative direction
    k = 1;
    while let Some(p) = pos.offset(-dr, -dc, k, size) {
        if board.get(p) != color {
            break;
        }
        count += 1;
        k += 1;
    }

    count
}

/// Five-in-a-row check through a specific position.
///
/// Only checks the 4 axes through `pos`. No allocation.
#[inline]
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| count_consecutive(board, pos, dr, dc, color) >= 5)
}
