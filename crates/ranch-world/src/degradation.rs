//! The daily degradation pass.
//!
//! Once per in-game day every farm sprouts between one and three weeds
//! and then decays per [`FarmIsland::apply_daily_decay`]. Weed growth is
//! drawn from a seeded `xorshift64` mixed with the day counter and the
//! owner id, so a given `(seed, day, owner)` always sprouts the same
//! number of weeds and simulation runs replay exactly.

use tracing::{debug, info};

use ranch_types::OwnerId;

use crate::farm::FarmIsland;
use crate::registry::FarmRegistry;

/// Fewest weeds that can sprout on a farm overnight.
pub const MIN_DAILY_WEED_GROWTH: u32 = 1;

/// Most weeds that can sprout on a farm overnight.
pub const MAX_DAILY_WEED_GROWTH: u32 = 3;

/// Summary of one daily pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayReport {
    /// The day that just completed (first pass reports day 1).
    pub day: u64,
    /// Farms the pass visited.
    pub farms_aged: usize,
    /// Total weeds sprouted across all farms.
    pub weeds_sprouted: u64,
}

/// Drives the daily decay across a [`FarmRegistry`].
#[derive(Debug, Clone)]
pub struct DegradationSystem {
    /// Seed weed draws are derived from.
    seed: u64,
    /// Completed days since startup.
    day: u64,
}

impl DegradationSystem {
    /// Create a system at day zero with the given seed.
    pub const fn new(seed: u64) -> Self {
        Self { seed, day: 0 }
    }

    /// Completed days since startup.
    pub const fn day(&self) -> u64 {
        self.day
    }

    /// Advance one day: sprout weeds and decay every farm.
    pub fn advance_day(&mut self, registry: &mut FarmRegistry) -> DayReport {
        self.day = self.day.saturating_add(1);

        let mut weeds_sprouted: u64 = 0;
        let mut farms_aged: usize = 0;

        for (owner, farm) in registry.farms_mut() {
            let growth = daily_weed_growth(self.seed, self.day, *owner);
            farm.apply_daily_decay(growth);
            weeds_sprouted = weeds_sprouted.saturating_add(u64::from(growth));
            farms_aged = farms_aged.saturating_add(1);
            debug!(%owner, growth, upkeep = %farm.upkeep(), "farm aged");
        }

        let report = DayReport {
            day: self.day,
            farms_aged,
            weeds_sprouted,
        };
        info!(day = report.day, farms = report.farms_aged, weeds = report.weeds_sprouted,
            "daily degradation pass complete");
        report
    }
}

/// Deterministic weed growth for one farm on one day.
///
/// Always in `MIN_DAILY_WEED_GROWTH..=MAX_DAILY_WEED_GROWTH`.
fn daily_weed_growth(seed: u64, day: u64, owner: OwnerId) -> u32 {
    let (owner_hi, owner_lo) = owner.into_inner().as_u64_pair();
    let random = deterministic_random(seed ^ owner_hi ^ owner_lo, day);

    const SPAN: u64 =
        (MAX_DAILY_WEED_GROWTH as u64).saturating_sub(MIN_DAILY_WEED_GROWTH as u64).saturating_add(1);
    let offset = random.checked_rem(SPAN).unwrap_or(0);
    // offset < span <= 3, so the conversion cannot fail.
    let offset = u32::try_from(offset).unwrap_or(0);
    MIN_DAILY_WEED_GROWTH.saturating_add(offset)
}

/// Mix a seed and a counter into a pseudo-random `u64`.
const fn deterministic_random(seed: u64, counter: u64) -> u64 {
    // The constant 0x517cc1b727220a95 is a well-known mixing constant.
    let mut state = seed.wrapping_add(counter.wrapping_mul(0x517c_c1b7_2722_0a95));

    // xorshift requires non-zero input.
    if state == 0 {
        state = 0xdead_beef_cafe_babe;
    }

    // xorshift64 algorithm
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;

    state
}
