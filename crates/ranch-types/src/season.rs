//! Season derivation from the day counter.
//!
//! Seasons are never stored; they are computed from the number of
//! completed simulation days. The cycle is
//! Spring -> Summer -> Autumn -> Winter, 20 days each.

use serde::{Deserialize, Serialize};

/// Number of simulation days in one season.
pub const DAYS_PER_SEASON: u64 = 20;

/// A season of the ranch year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// Planting season.
    Spring,
    /// Growing season.
    Summer,
    /// Harvest season.
    Autumn,
    /// The lean season.
    Winter,
}

/// The annual cycle, in order.
const CYCLE: [Season; 4] = [
    Season::Spring,
    Season::Summer,
    Season::Autumn,
    Season::Winter,
];

impl Season {
    /// Derive the season from a zero-based day counter.
    ///
    /// Day 0 through 19 are Spring, 20 through 39 Summer, and so on,
    /// wrapping after Winter.
    pub fn for_day(day: u64) -> Self {
        let index = day
            .checked_div(DAYS_PER_SEASON)
            .and_then(|seasons| seasons.checked_rem(CYCLE.len() as u64))
            .unwrap_or(0);
        match index {
            0 => Self::Spring,
            1 => Self::Summer,
            2 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Return the capitalized display name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }
}

impl core::fmt::Display for Season {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}
