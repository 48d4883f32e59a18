//! Threat classification for a hypothetical stone
//!
//! All probes treat the candidate cell as occupied by the probing color
//! without writing to the board, so a `&Board` can be shared freely while
//! threats are being classified.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::{PotentialScores, ThreatValues};

/// Threat created along one axis by playing a cell, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThreatKind {
    /// Run of two or less
    None,
    /// Three that cannot become an open four
    Three,
    /// Three with both flanks empty and room to become an open four
    OpenThree,
    /// Four with at most one empty end
    BlockedFour,
    /// Four with both ends empty: wins next move
    OpenFour,
    /// Five or more
    Five,
}

impl ThreatKind {
    /// Threats that must be answered (or exploited) right away.
    #[inline]
    pub fn is_immediate(self) -> bool {
        matches!(
            self,
            ThreatKind::OpenThree | ThreatKind::BlockedFour | ThreatKind::OpenFour | ThreatKind::Five
        )
    }

    /// Value of this threat under `values`.
    #[inline]
    pub fn value(self, values: &ThreatValues) -> i32 {
        match self {
            ThreatKind::Five => values.five,
            ThreatKind::OpenFour => values.open_four,
            ThreatKind::BlockedFour => values.blocked_four,
            ThreatKind::OpenThree => values.open_three,
            ThreatKind::Three => values.passive,
            ThreatKind::None => 0,
        }
    }
}

/// Maximal run through a probed cell along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub length: usize,
    /// Farthest run stone in the negative direction
    pub start: Pos,
    /// Farthest run stone in the positive direction
    pub end: Pos,
    /// Empty cells directly beyond `start` and `end` (0-2)
    pub open_ends: u8,
    dir: (i32, i32),
}

impl Run {
    /// Measure the run `color` would have through `pos` along `(dr, dc)`.
    pub fn probe(board: &Board, pos: Pos, (dr, dc): (i32, i32), color: Stone) -> Self {
        let size = board.size();
        let mut start = pos;
        let mut end = pos;
        let mut length = 1;

        while let Some(p) = end.offset(dr, dc, 1, size) {
            if board.get(p) != color {
                break;
            }
            end = p;
            length += 1;
        }
        while let Some(p) = start.offset(-dr, -dc, 1, size) {
            if board.get(p) != color {
                break;
            }
            start = p;
            length += 1;
        }

        let mut run = Self {
            length,
            start,
            end,
            open_ends: 0,
            dir: (dr, dc),
        };
        run.open_ends = u8::from(run.is_open_before(board, 1)) + u8::from(run.is_open_after(board, 1));
        run
    }

    /// Is the cell `k` steps before `start` on the board and empty?
    #[inline]
    pub fn is_open_before(&self, board: &Board, k: i32) -> bool {
        let (dr, dc) = self.dir;
        is_empty_at(board, self.start.offset(-dr, -dc, k, board.size()))
    }

    /// Is the cell `k` steps after `end` on the board and empty?
    #[inline]
    pub fn is_open_after(&self, board: &Board, k: i32) -> bool {
        let (dr, dc) = self.dir;
        is_empty_at(board, self.end.offset(dr, dc, k, board.size()))
    }
}

#[inline]
fn is_empty_at(board: &Board, pos: Option<Pos>) -> bool {
    pos.is_some_and(|p| board.is_empty(p))
}

/// Classify the threat `color` makes along `dir` by playing `pos`.
pub fn classify(board: &Board, pos: Pos, dir: (i32, i32), color: Stone) -> ThreatKind {
    let run = Run::probe(board, pos, dir, color);
    match run.length {
        5.. => ThreatKind::Five,
        4 if run.open_ends == 2 => ThreatKind::OpenFour,
        4 => ThreatKind::BlockedFour,
        3 => {
            // Both flanks empty, plus one more cell beyond either flank so
            // the extended four still has two open ends.
            let flanks = run.open_ends == 2;
            let room = run.is_open_before(board, 2) || run.is_open_after(board, 2);
            if flanks && room {
                ThreatKind::OpenThree
            } else {
                ThreatKind::Three
            }
        }
        _ => ThreatKind::None,
    }
}

/// Most severe threat `color` makes on any axis by playing `pos`.
pub fn best_threat(board: &Board, pos: Pos, color: Stone) -> ThreatKind {
    let mut best = ThreatKind::None;
    for &dir in &DIRECTIONS {
        let kind = classify(board, pos, dir, color);
        if kind == ThreatKind::Five {
            return kind;
        }
        best = best.max(kind);
    }
    best
}

/// Number of (empty cell, axis) pairs where `color` could make an immediate threat.
pub fn count_immediate_threats(board: &Board, color: Stone) -> u32 {
    let mut count = 0;
    for pos in board.empty_cells() {
        for &dir in &DIRECTIONS {
            if classify(board, pos, dir, color).is_immediate() {
                count += 1;
            }
        }
    }
    count
}

/// Line-building potential of `color` playing `pos`, along one axis.
///
/// A side counts as open when at least one end of the resulting run is empty.
pub fn direction_potential(
    board: &Board,
    pos: Pos,
    dir: (i32, i32),
    color: Stone,
    scores: &PotentialScores,
) -> i32 {
    let run = Run::probe(board, pos, dir, color);
    let open = run.open_ends > 0;
    match (run.length, open) {
        (5.., _) => scores.five,
        (4, true) => scores.open_four,
        (4, false) => scores.closed_four,
        (3, true) => scores.open_three,
        (3, false) => scores.closed_three,
        (2, true) => scores.open_two,
        (2, false) => scores.closed_two,
        _ => 0,
    }
}
