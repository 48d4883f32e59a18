//! Line pattern scoring over fixed-length windows
//!
//! A window is `len` consecutive cells along one axis. It scores only when it
//! holds no opposing stone; off-board cells count as neither stone nor gap,
//! so windows running off the edge rarely score.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::{BasicWindowScores, WindowScores};

/// Longest window the scorer looks at
pub const MAX_WINDOW: usize = 5;

/// Read `len` cells starting `start` steps from `pos` along `(dr, dc)`.
///
/// `None` marks cells beyond the board edge.
#[inline]
fn read_window(
    board: &Board,
    pos: Pos,
    (dr, dc): (i32, i32),
    start: i32,
    len: usize,
) -> [Option<Stone>; MAX_WINDOW] {
    let mut cells = [None; MAX_WINDOW];
    for (k, cell) in cells.iter_mut().enumerate().take(len) {
        *cell = pos
            .offset(dr, dc, start + k as i32, board.size())
            .map(|p| board.get(p));
    }
    cells
}

/// Count `(own stones, empty cells)`, or `None` if an opposing stone is present.
#[inline]
fn tally(cells: &[Option<Stone>], color: Stone) -> Option<(usize, usize)> {
    let mut mine = 0;
    let mut empty = 0;
    for cell in cells {
        match cell {
            Some(s) if *s == color => mine += 1,
            Some(Stone::Empty) => empty += 1,
            Some(_) => return None,
            None => {}
        }
    }
    Some((mine, empty))
}

/// Score one window of 2 to 5 cells for `color`.
pub fn score_window(cells: &[Option<Stone>], color: Stone, table: &WindowScores) -> i32 {
    let Some((mine, empty)) = tally(cells, color) else {
        return 0;
    };

    match (cells.len(), mine, empty) {
        (5, 5, _) => table.five_5,
        (5, 4, 1) => table.five_4,
        (5, 3, 2) => table.five_3,
        (5, 2, 3) => table.five_2,
        (4, 4, _) => table.four_4,
        (4, 3, 1) => table.four_3,
        (4, 2, 2) => table.four_2,
        (3, 3, _) => table.three_3,
        (3, 2, 1) => table.three_2,
        _ => 0,
    }
}

/// Score one five-cell window with the basic table.
pub fn score_basic_window(cells: &[Option<Stone>], color: Stone, table: &BasicWindowScores) -> i32 {
    if cells.len() != MAX_WINDOW {
        return 0;
    }
    let Some((mine, empty)) = tally(cells, color) else {
        return 0;
    };

    match (mine, empty) {
        (5, _) => table.five,
        (4, 1) => table.four,
        (3, 2) => table.three,
        (2, 3) => table.two,
        _ => 0,
    }
}

/// Basic positional score: one forward five-cell window per stone and axis.
pub fn evaluate_player(board: &Board, color: Stone, table: &BasicWindowScores) -> i32 {
    let mut score = 0;
    for pos in board.stones_of(color) {
        for &dir in &DIRECTIONS {
            let cells = read_window(board, pos, dir, 0, MAX_WINDOW);
            score += score_basic_window(&cells, color, table);
        }
    }
    score
}

/// Enhanced positional score.
///
/// For every `color` stone and axis, scores every window of length 2 to 5
/// that contains the stone. Windows holding several stones are counted once
/// per stone, which rewards dense shapes.
pub fn evaluate_player_enhanced(board: &Board, color: Stone, table: &WindowScores) -> i32 {
    let mut score = 0;
    for pos in board.stones_of(color) {
        for &dir in &DIRECTIONS {
            score += evaluate_line(board, pos, dir, color, table);
        }
    }
    score
}

/// All windows through `pos` along one axis.
fn evaluate_line(
    board: &Board,
    pos: Pos,
    dir: (i32, i32),
    color: Stone,
    table: &WindowScores,
) -> i32 {
    let mut score = 0;
    for len in 2..=MAX_WINDOW {
        for start in (1 - len as i32)..=0 {
            let cells = read_window(board, pos, dir, start, len);
            score += score_window(&cells[..len], color, table);
        }
    }
    score
}
