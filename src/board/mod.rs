//! Board representation for Gomoku

use serde::{Deserialize, Serialize};

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, BoardState, GameStatus};

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Largest board a `Pos` can address
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;

/// Cell occupants.
///
/// Black is the human side and always moves first; White is the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Numeric cell code used in board snapshots (0 empty, 1 black, 2 white)
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => 2,
        }
    }

    /// Inverse of [`Stone::code`]
    pub fn from_code(code: u8) -> Option<Stone> {
        match code {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Step `k` cells along `(dr, dc)`, or `None` when that leaves a board of `size`.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, k: i32, size: usize) -> Option<Pos> {
        let r = i32::from(self.row) + dr * k;
        let c = i32::from(self.col) + dc * k;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Chebyshev distance between two cells
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }
}

impl From<Pos> for (usize, usize) {
    fn from(pos: Pos) -> Self {
        (pos.row as usize, pos.col as usize)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
