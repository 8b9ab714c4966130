//! Team side and match result derived from `player_slot` and `radiant_win`.

use std::fmt::Display;

use crate::messages;

/// Slots below this value belong to Radiant.
const DIRE_SLOT_START: i64 = 128;

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Side {
    Radiant,
    Dire,
}

impl Side {
    pub fn from_player_slot(slot: i64) -> Self {
        if slot < DIRE_SLOT_START {
            Self::Radiant
        } else {
            Self::Dire
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Radiant => "Radiant",
            Side::Dire => "Dire",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// The player wins when their side is the one `radiant_win` names. Unknown `radiant_win` counts as false.
    pub fn derive(radiant_win: Option<bool>, player_slot: i64) -> Self {
        let radiant_win = radiant_win.unwrap_or(false);
        let on_radiant = Side::from_player_slot(player_slot) == Side::Radiant;
        if radiant_win == on_radiant {
            Self::Win
        } else {
            Self::Loss
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Outcome::Win => messages::WIN,
            Outcome::Loss => messages::LOSS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_boundary() {
        assert_eq!(Side::from_player_slot(0), Side::Radiant);
        assert_eq!(Side::from_player_slot(127), Side::Radiant);
        assert_eq!(Side::from_player_slot(128), Side::Dire);
        assert_eq!(Side::from_player_slot(132), Side::Dire);
    }

    #[test]
    fn test_outcome_matches_slot_and_winner_for_all_combinations() {
        for slot in [0, 4, 127, 128, 130, 255] {
            for radiant_win in [true, false] {
                let expected_win =
                    (radiant_win && slot < 128) || (!radiant_win && slot >= 128);
                let outcome = Outcome::derive(Some(radiant_win), slot);
                assert_eq!(outcome == Outcome::Win, expected_win, "slot={slot} radiant_win={radiant_win}");
            }
        }
    }

    #[test]
    fn test_missing_radiant_win_counts_as_dire_victory() {
        assert_eq!(Outcome::derive(None, 0), Outcome::Loss);
        assert_eq!(Outcome::derive(None, 128), Outcome::Win);
    }

    #[test]
    fn test_display() {
        assert_eq!(Side::Dire.to_string(), "Dire");
        assert_eq!(Outcome::Win.to_string(), "✅ Победа");
        assert_eq!(Outcome::Loss.to_string(), "❌ Поражение");
    }
}
