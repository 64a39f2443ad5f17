//! A single farm island.
//!
//! A farm tracks three health gauges (upkeep, crop health, animal health)
//! on a 0..=100 scale, a weed count, and the set of owners trusted to
//! build on it. Gauges are [`Decimal`] so daily fractional decay
//! accumulates exactly; every mutation clamps back into range.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ranch_types::{OwnerId, WorldPoint};

/// The gauge ceiling. New farms start every gauge here.
pub const GAUGE_MAX: Decimal = dec!(100.0);

/// Daily upkeep loss before weed penalties.
const UPKEEP_DAILY_DECAY: Decimal = dec!(1.0);

/// Daily crop and animal health loss before weed penalties.
const HEALTH_DAILY_DECAY: Decimal = dec!(0.5);

/// Extra upkeep loss per weed present during the daily pass.
const UPKEEP_WEED_PENALTY: Decimal = dec!(0.05);

/// Extra crop and animal health loss per weed during the daily pass.
const HEALTH_WEED_PENALTY: Decimal = dec!(0.02);

/// One owner's farm island.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmIsland {
    /// The owner the island was created for.
    owner: OwnerId,
    /// The island's center block in the farm world.
    center: WorldPoint,
    /// Weeds currently growing on the island.
    weed_count: u32,
    /// General upkeep gauge, 0..=100.
    upkeep: Decimal,
    /// Crop health gauge, 0..=100.
    crop_health: Decimal,
    /// Animal health gauge, 0..=100.
    animal_health: Decimal,
    /// Owners permitted to build here besides the owner.
    trusted: BTreeSet<OwnerId>,
}

impl FarmIsland {
    /// Create a fresh island: full gauges, no weeds, nobody trusted.
    pub const fn new(owner: OwnerId, center: WorldPoint) -> Self {
        Self {
            owner,
            center,
            weed_count: 0,
            upkeep: GAUGE_MAX,
            crop_health: GAUGE_MAX,
            animal_health: GAUGE_MAX,
            trusted: BTreeSet::new(),
        }
    }

    /// Rebuild an island from persisted state, clamping gauges into range.
    pub fn from_parts(
        owner: OwnerId,
        center: WorldPoint,
        weed_count: u32,
        upkeep: Decimal,
        crop_health: Decimal,
        animal_health: Decimal,
        trusted: BTreeSet<OwnerId>,
    ) -> Self {
        Self {
            owner,
            center,
            weed_count,
            upkeep: clamp_gauge(upkeep),
            crop_health: clamp_gauge(crop_health),
            animal_health: clamp_gauge(animal_health),
            trusted,
        }
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// The island's owner.
    pub const fn owner(&self) -> OwnerId {
        self.owner
    }

    /// The island's center block.
    pub const fn center(&self) -> &WorldPoint {
        &self.center
    }

    /// Weeds currently on the island.
    pub const fn weed_count(&self) -> u32 {
        self.weed_count
    }

    /// The upkeep gauge.
    pub const fn upkeep(&self) -> Decimal {
        self.upkeep
    }

    /// The crop health gauge.
    pub const fn crop_health(&self) -> Decimal {
        self.crop_health
    }

    /// The animal health gauge.
    pub const fn animal_health(&self) -> Decimal {
        self.animal_health
    }

    /// Owners trusted to build here, not including the owner.
    pub const fn trusted(&self) -> &BTreeSet<OwnerId> {
        &self.trusted
    }

    // -------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------

    /// Set the upkeep gauge, clamped to 0..=100.
    pub fn set_upkeep(&mut self, value: Decimal) {
        self.upkeep = clamp_gauge(value);
    }

    /// Set the crop health gauge, clamped to 0..=100.
    pub fn set_crop_health(&mut self, value: Decimal) {
        self.crop_health = clamp_gauge(value);
    }

    /// Set the animal health gauge, clamped to 0..=100.
    pub fn set_animal_health(&mut self, value: Decimal) {
        self.animal_health = clamp_gauge(value);
    }

    /// Set the weed count directly (used by the persistence layer).
    pub const fn set_weed_count(&mut self, count: u32) {
        self.weed_count = count;
    }

    /// Remove every weed from the island.
    pub const fn clear_weeds(&mut self) {
        self.weed_count = 0;
    }

    /// Whether the given owner may build on this island.
    ///
    /// The owner is always allowed; everyone else needs an explicit grant.
    pub fn is_trusted(&self, candidate: OwnerId) -> bool {
        candidate == self.owner || self.trusted.contains(&candidate)
    }

    /// Grant build access to another owner.
    ///
    /// Trusting the owner themselves is a no-op. Returns whether the set
    /// changed.
    pub fn trust(&mut self, candidate: OwnerId) -> bool {
        if candidate == self.owner {
            return false;
        }
        self.trusted.insert(candidate)
    }

    /// Revoke build access. Returns whether the candidate was trusted.
    pub fn untrust(&mut self, candidate: OwnerId) -> bool {
        self.trusted.remove(&candidate)
    }

    /// Apply one day of decay with the given overnight weed growth.
    ///
    /// Weeds sprout first, then the enlarged weed population drags every
    /// gauge down: upkeep loses `1.0 + weeds * 0.05`, crop and animal
    /// health each lose `0.5 + weeds * 0.02`. Gauges clamp at zero.
    pub fn apply_daily_decay(&mut self, weed_growth: u32) {
        self.weed_count = self.weed_count.saturating_add(weed_growth);
        let weeds = Decimal::from(self.weed_count);

        let upkeep_loss = UPKEEP_DAILY_DECAY
            .checked_add(weeds.checked_mul(UPKEEP_WEED_PENALTY).unwrap_or(Decimal::MAX))
            .unwrap_or(Decimal::MAX);
        let health_loss = HEALTH_DAILY_DECAY
            .checked_add(weeds.checked_mul(HEALTH_WEED_PENALTY).unwrap_or(Decimal::MAX))
            .unwrap_or(Decimal::MAX);

        self.upkeep = clamp_gauge(self.upkeep.checked_sub(upkeep_loss).unwrap_or(Decimal::ZERO));
        self.crop_health =
            clamp_gauge(self.crop_health.checked_sub(health_loss).unwrap_or(Decimal::ZERO));
        self.animal_health =
            clamp_gauge(self.animal_health.checked_sub(health_loss).unwrap_or(Decimal::ZERO));
    }
}

/// Clamp a gauge value into the 0..=100 range.
fn clamp_gauge(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, GAUGE_MAX)
}
