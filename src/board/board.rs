//! Board structure with turn and game-over tracking

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Pos, Stone, DEFAULT_BOARD_SIZE};
use crate::rules::check_win;

/// Whether the game is still running, and how it ended if not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
    Draw,
}

/// Game board
///
/// Cells only ever go from `Empty` to occupied; nothing is removed except by
/// [`Board::reset`]. `status` is terminal exactly when a five exists or the
/// grid is full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    /// Occupied cell count
    stones: u32,
    current_player: Stone,
    status: GameStatus,
}

/// Serializable view of a board, as handed to embedders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Rows of cell codes (0 empty, 1 black, 2 white)
    pub board: Vec<Vec<u8>>,
    pub current_player: u8,
    pub game_over: bool,
    /// Winner code, 0 while in progress or on a draw
    pub winner: u8,
    pub board_size: usize,
}

impl Board {
    /// Create an empty board of `size` x `size` with Black to move.
    ///
    /// `size` is clamped to `1..=MAX_BOARD_SIZE` so every cell stays
    /// addressable by a [`Pos`].
    pub fn new(size: usize) -> Self {
        let size = size.clamp(1, super::MAX_BOARD_SIZE);
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
            current_player: Stone::Black,
            status: GameStatus::InProgress,
        }
    }

    /// Clear every cell and hand the move back to Black.
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.stones = 0;
        self.current_player = Stone::Black;
        self.status = GameStatus::InProgress;
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index(self.size)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Winning color, if the game was won
    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        match self.status {
            GameStatus::Won(stone) => Some(stone),
            _ => None,
        }
    }

    /// In bounds, empty, and the game is not over.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.contains(row, col)
            && !self.is_terminal()
            && self.is_empty(Pos::new(row as u8, col as u8))
    }

    /// Place `player`'s stone at `(row, col)`.
    ///
    /// Returns `false` and leaves the board untouched when the move is not
    /// valid. Otherwise updates the game status and, if the game goes on,
    /// passes the turn to the other side.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Stone) -> bool {
        if player == Stone::Empty || !self.is_valid_move(row, col) {
            return false;
        }

        let pos = Pos::new(row as u8, col as u8);
        self.cells[pos.to_index(self.size)] = player;
        self.stones += 1;

        if self.check_win(row, col, player) {
            self.status = GameStatus::Won(player);
        } else if self.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.opponent();
        }
        true
    }

    /// Apply a move for the side whose turn it is.
    pub fn play(&mut self, row: usize, col: usize) -> bool {
        self.apply_move(row, col, self.current_player)
    }

    /// Does `(row, col)` sit on a line of five or more `player` stones?
    pub fn check_win(&self, row: usize, col: usize, player: Stone) -> bool {
        self.contains(row, col) && check_win(self, Pos::new(row as u8, col as u8), player)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones as usize == self.cells.len()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.stones
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Center cell (`size / 2` on both axes)
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    /// All empty cells in row-major order
    pub fn valid_moves(&self) -> Vec<Pos> {
        self.empty_cells().collect()
    }

    /// Iterate over empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == Stone::Empty)
            .map(move |(i, _)| Pos::from_index(i, self.size))
    }

    /// Iterate over cells holding `color` in row-major order
    pub fn stones_of(&self, color: Stone) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &s)| s == color)
            .map(move |(i, _)| Pos::from_index(i, self.size))
    }

    /// Serializable snapshot for embedders
    pub fn snapshot(&self) -> BoardState {
        BoardState {
            board: self
                .cells
                .chunks(self.size)
                .map(|row| row.iter().map(|s| s.code()).collect())
                .collect(),
            current_player: self.current_player.code(),
            game_over: self.is_terminal(),
            winner: self.winner().map_or(0, Stone::code),
            board_size: self.size,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:2}", c)?;
        }
        writeln!(f)?;

        for r in 0..self.size {
            write!(f, "{:2} ", r)?;
            for c in 0..self.size {
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Stone::Black => " X",
                    Stone::White => " O",
                    Stone::Empty => " .",
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
