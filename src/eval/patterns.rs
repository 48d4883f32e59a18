//! Scoring table for Gomoku evaluation
//!
//! Every tuning constant used by evaluation, threat ranking and candidate
//! ordering lives here so it can be retuned (or loaded from a config file)
//! without touching search code. Fractional weights are integer percentages.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Points for fixed-length windows holding only one side's stones and empties.
///
/// Field names are `<window length>_<stones in window>`; the remaining cells
/// of the window must be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowScores {
    /// Five of five: already won
    pub five_5: i32,
    /// Four stones and one gap in five
    pub five_4: i32,
    pub five_3: i32,
    pub five_2: i32,
    /// Solid four in a four-cell window
    pub four_4: i32,
    /// Three with one gap in four
    pub four_3: i32,
    pub four_2: i32,
    /// Solid three
    pub three_3: i32,
    pub three_2: i32,
}

impl Default for WindowScores {
    fn default() -> Self {
        Self {
            five_5: 10_000,
            five_4: 1_000,
            five_3: 100,
            five_2: 10,
            four_4: 800,
            four_3: 50,
            four_2: 5,
            three_3: 200,
            three_2: 2,
        }
    }
}

/// Points for the basic scorer, which only looks at five-cell windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicWindowScores {
    pub five: i32,
    pub four: i32,
    pub three: i32,
    pub two: i32,
}

impl Default for BasicWindowScores {
    fn default() -> Self {
        Self {
            five: 1_000,
            four: 100,
            three: 10,
            two: 1,
        }
    }
}

/// Value of creating each threat kind at a cell, used to find forced moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatValues {
    pub five: i32,
    pub open_four: i32,
    pub blocked_four: i32,
    pub open_three: i32,
    /// Threes (and fours) that cannot grow into a win
    pub passive: i32,
}

impl ThreatValues {
    /// Values for the engine playing the cell itself
    pub fn attack() -> Self {
        Self {
            five: 100_000,
            open_four: 80_000,
            blocked_four: 15_000,
            open_three: 5_000,
            passive: 1_000,
        }
    }

    /// Values for denying the cell to the opponent
    pub fn defense() -> Self {
        Self {
            five: 50_000,
            open_four: 40_000,
            blocked_four: 8_000,
            open_three: 3_000,
            passive: 500,
        }
    }

    fn is_ordered(&self) -> bool {
        self.five > self.open_four
            && self.open_four > self.blocked_four
            && self.blocked_four > self.open_three
            && self.open_three > self.passive
            && self.passive >= 0
    }
}

/// Directional potential of a hypothetical stone, by run length and openness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PotentialScores {
    pub five: i32,
    pub open_four: i32,
    pub closed_four: i32,
    pub open_three: i32,
    pub closed_three: i32,
    pub open_two: i32,
    pub closed_two: i32,
}

impl Default for PotentialScores {
    fn default() -> Self {
        Self {
            five: 10_000,
            open_four: 1_000,
            closed_four: 500,
            open_three: 200,
            closed_three: 100,
            open_two: 20,
            closed_two: 10,
        }
    }
}

/// Complete scoring configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    /// Search score for a move that wins on the spot
    pub win: i32,
    /// Static evaluation of a decided game
    pub terminal: i32,
    pub windows: WindowScores,
    pub basic_windows: BasicWindowScores,
    pub attack: ThreatValues,
    pub defense: ThreatValues,
    /// Weight of defense value when combined with attack value (percent)
    pub defense_weight_pct: i32,
    /// Minimum combined value for a cell to count as a forced candidate
    pub critical_threshold: i32,
    /// Weight of the opponent's positional score in evaluation (percent)
    pub opponent_weight_pct: i32,
    /// Penalty per immediate threat the opponent could make
    pub threat_penalty: i32,
    /// Bonus per immediate threat the engine could make
    pub threat_bonus: i32,
    pub potential: PotentialScores,
    /// Weight of the engine's own directional potential (percent)
    pub own_potential_pct: i32,
    /// Weight of the opponent's directional potential (percent)
    pub block_potential_pct: i32,
    /// Bonus per occupied adjacent cell
    pub adjacent_bonus: i32,
    /// Bonus per occupied cell at distance two
    pub outer_bonus: i32,
    /// Maximum center bias, reduced by one per unit of Manhattan distance
    pub center_bias: i32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            win: 100_000,
            terminal: 10_000,
            windows: WindowScores::default(),
            basic_windows: BasicWindowScores::default(),
            attack: ThreatValues::attack(),
            defense: ThreatValues::defense(),
            defense_weight_pct: 90,
            critical_threshold: 1_000,
            opponent_weight_pct: 110,
            threat_penalty: 1_500,
            threat_bonus: 1_200,
            potential: PotentialScores::default(),
            own_potential_pct: 200,
            block_potential_pct: 150,
            adjacent_bonus: 20,
            outer_bonus: 5,
            center_bias: 5,
        }
    }
}

/// Apply an integer percentage weight.
#[inline]
pub fn weighted(value: i32, pct: i32) -> i32 {
    value * pct / 100
}

impl ScoreTable {
    /// Check the orderings the search relies on.
    ///
    /// Wins must dominate fours, fours dominate threes, threes dominate twos,
    /// and the per-threat defense penalty must be at least the attack bonus.
    pub fn validate(&self) -> Result<()> {
        let w = &self.windows;
        let b = &self.basic_windows;
        let p = &self.potential;
        let checks = [
            (self.win > self.terminal, "win must exceed terminal"),
            (self.terminal > 0, "terminal must be positive"),
            (
                w.five_5 > w.five_4 && w.five_4 > w.five_3 && w.five_3 > w.five_2 && w.five_2 >= 0,
                "five-cell window scores must decrease with fewer stones",
            ),
            (
                w.four_4 > w.four_3 && w.four_3 > w.four_2 && w.four_2 >= 0,
                "four-cell window scores must decrease with fewer stones",
            ),
            (
                w.three_3 > w.three_2 && w.three_2 >= 0,
                "three-cell window scores must decrease with fewer stones",
            ),
            (
                b.five > b.four && b.four > b.three && b.three > b.two && b.two >= 0,
                "basic window scores must decrease with fewer stones",
            ),
            (self.attack.is_ordered(), "attack values out of order"),
            (self.defense.is_ordered(), "defense values out of order"),
            (
                self.win >= self.attack.five,
                "win must be at least the attack value of a five",
            ),
            (
                self.threat_penalty >= self.threat_bonus && self.threat_bonus >= 0,
                "threat penalty must be at least the threat bonus",
            ),
            (
                self.opponent_weight_pct >= 100,
                "opponent weight must be at least 100 percent",
            ),
            (
                (0..=100).contains(&self.defense_weight_pct),
                "defense weight must be within 0-100 percent",
            ),
            (
                p.five > p.open_four
                    && p.open_four > p.closed_four
                    && p.closed_four > p.open_three
                    && p.open_three > p.closed_three
                    && p.closed_three > p.open_two
                    && p.open_two > p.closed_two,
                "potential scores out of order",
            ),
        ];

        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, reason)) => Err(GameError::InvalidConfig((*reason).to_string())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert_eq!(ScoreTable::default().validate(), Ok(()));
    }

    #[test]
    fn test_threat_hierarchy() {
        let table = ScoreTable::default();
        assert!(table.win > table.attack.open_four);
        assert!(table.attack.open_four > table.attack.open_three);
        assert!(table.defense.open_four > table.defense.open_three);
        // Defense outweighs matching attack in evaluation
        assert!(table.threat_penalty > table.threat_bonus);
    }

    #[test]
    fn test_weighted() {
        assert_eq!(weighted(1_000, 90), 900);
        assert_eq!(weighted(100, 110), 110);
        assert_eq!(weighted(-200, 150), -300);
    }

    #[test]
    fn test_validate_rejects_inverted_threats() {
        let mut table = ScoreTable::default();
        table.attack.open_three = table.attack.open_four + 1;
        assert!(matches!(table.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_weak_defense() {
        let mut table = ScoreTable::default();
        table.threat_penalty = table.threat_bonus - 1;
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let table: ScoreTable = serde_json::from_str(r#"{"threat_penalty": 2000}"#).unwrap();
        assert_eq!(table.threat_penalty, 2_000);
        assert_eq!(table.win, ScoreTable::default().win);
        assert_eq!(table.validate(), Ok(()));
    }
}
