//! Island allocation and the farm registry.
//!
//! Islands are placed along the X axis of the farm world, one per
//! monotonically increasing island index. A consumed index is never
//! reused, so a deleted farm leaves a permanent gap and two farms can
//! never overlap.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

use ranch_economy::{EconomyLedger, InventoryHost};
use ranch_types::{Item, ItemStack, OwnerId, WorldPoint};

use crate::error::WorldError;
use crate::farm::FarmIsland;
use crate::host::WorldEditor;

/// Distance between adjacent island centers along the X axis.
pub const ISLAND_SPACING: f64 = 200.0;

/// Half-width of the square build-protection region around a center.
pub const PROTECTION_RADIUS: f64 = 80.0;

/// Altitude every island center sits at.
pub const ISLAND_ALTITUDE: f64 = 100.0;

/// One-time deposit paid when a farm is created.
pub const SIGNING_BONUS: Decimal = dec!(50.0);

/// Offset from an island center to its teleport arrival point.
const HOME_OFFSET: (f64, f64, f64) = (14.5, -9.0, -14.5);

/// The result of a farm-creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmCreation {
    /// Whether a new farm was built (`false` when one already existed).
    pub created: bool,
    /// The center of the owner's farm, new or pre-existing.
    pub center: WorldPoint,
}

/// Every farm island, keyed by owner, plus the allocation counter.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmRegistry {
    /// Name of the world islands are placed in.
    world: String,
    /// All farms, keyed by owner.
    farms: BTreeMap<OwnerId, FarmIsland>,
    /// The next island index to hand out. Never decremented.
    next_island_index: u64,
}

impl FarmRegistry {
    /// Create an empty registry placing islands in the named world.
    pub fn new(world: impl Into<String>) -> Self {
        Self {
            world: world.into(),
            farms: BTreeMap::new(),
            next_island_index: 0,
        }
    }

    /// Rebuild a registry from persisted state.
    pub fn from_parts(
        world: impl Into<String>,
        farms: BTreeMap<OwnerId, FarmIsland>,
        next_island_index: u64,
    ) -> Self {
        Self {
            world: world.into(),
            farms,
            next_island_index,
        }
    }

    /// The world islands are placed in.
    pub fn world(&self) -> &str {
        &self.world
    }

    /// The next island index that will be consumed.
    pub const fn next_island_index(&self) -> u64 {
        self.next_island_index
    }

    /// Look up an owner's farm.
    pub fn farm(&self, owner: OwnerId) -> Option<&FarmIsland> {
        self.farms.get(&owner)
    }

    /// Look up an owner's farm mutably.
    pub fn farm_mut(&mut self, owner: OwnerId) -> Option<&mut FarmIsland> {
        self.farms.get_mut(&owner)
    }

    /// All farms, keyed by owner.
    pub const fn farms(&self) -> &BTreeMap<OwnerId, FarmIsland> {
        &self.farms
    }

    /// All farms, mutable.
    pub const fn farms_mut(&mut self) -> &mut BTreeMap<OwnerId, FarmIsland> {
        &mut self.farms
    }

    /// Compute the center point for the given island index.
    pub fn island_center(&self, index: u64) -> WorldPoint {
        // Indices stay small in practice; precision loss past 2^53 is
        // accepted because the counter would overflow the map first.
        #[allow(clippy::cast_precision_loss)]
        let x = index as f64 * ISLAND_SPACING;
        WorldPoint::new(self.world.clone(), x, ISLAND_ALTITUDE, 0.0)
    }

    /// The teleport arrival point for a farm.
    ///
    /// Offset from the center so arrivals land on the island surface
    /// rather than inside the pasted structure.
    pub fn home_point(farm: &FarmIsland) -> WorldPoint {
        let (dx, dy, dz) = HOME_OFFSET;
        farm.center().offset(dx, dy, dz)
    }

    /// Create a farm for `owner`, or report the existing one.
    ///
    /// Creation pastes the island schematic at the next free center,
    /// clears vegetation around it, registers the farm, pays the
    /// signing bonus, and grants the farming handbook. If the paste
    /// fails the whole operation aborts: no index is consumed, no farm
    /// is registered, and nothing is paid.
    pub fn create_farm(
        &mut self,
        owner: OwnerId,
        editor: &mut dyn WorldEditor,
        ledger: &mut EconomyLedger,
        inventory: &mut dyn InventoryHost,
        schematic: &Path,
    ) -> Result<FarmCreation, WorldError> {
        if let Some(existing) = self.farms.get(&owner) {
            return Ok(FarmCreation {
                created: false,
                center: existing.center().clone(),
            });
        }

        let index = self.next_island_index;
        let center = self.island_center(index);

        editor.paste_structure(schematic, &center)?;
        editor.clear_vegetation_and_reinforce(&center);

        self.next_island_index = self
            .next_island_index
            .checked_add(1)
            .ok_or(WorldError::IslandIndexOverflow)?;

        self.farms.insert(owner, FarmIsland::new(owner, center.clone()));
        ledger.deposit(owner, SIGNING_BONUS);
        inventory.grant_items(owner, &[ItemStack::one(Item::FarmingHandbook)]);

        info!(%owner, island_index = index, %center, "farm created");
        Ok(FarmCreation {
            created: true,
            center,
        })
    }

    /// Find the farm whose protection region contains `point`, if any.
    ///
    /// Protection is a square of half-width [`PROTECTION_RADIUS`] on the
    /// X/Z plane, full height, in the farm world only.
    pub fn find_farm_at(&self, point: &WorldPoint) -> Option<&FarmIsland> {
        self.farms
            .values()
            .find(|farm| point.within_square(farm.center(), PROTECTION_RADIUS))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use crate::host::RecordingWorldEditor;
    use ranch_economy::MemoryInventory;

    use super::*;

    fn create(
        registry: &mut FarmRegistry,
        owner: OwnerId,
    ) -> (FarmCreation, EconomyLedger, MemoryInventory) {
        let mut editor = RecordingWorldEditor::new();
        let mut ledger = EconomyLedger::new();
        let mut inventory = MemoryInventory::new();
        let creation = registry
            .create_farm(
                owner,
                &mut editor,
                &mut ledger,
                &mut inventory,
                Path::new("island.schem"),
            )
            .unwrap();
        (creation, ledger, inventory)
    }

    #[test]
    fn creation_pays_the_bonus_and_grants_the_handbook() {
        let mut registry = FarmRegistry::new("farms");
        let owner = OwnerId::new();
        let (creation, ledger, inventory) = create(&mut registry, owner);

        assert!(creation.created);
        assert_eq!(creation.center.x, 0.0);
        assert_eq!(creation.center.y, ISLAND_ALTITUDE);
        assert_eq!(ledger.balance(owner), SIGNING_BONUS);
        assert_eq!(inventory.count(owner, Item::FarmingHandbook), 1);
        assert_eq!(registry.next_island_index(), 1);
    }

    #[test]
    fn creation_is_idempotent() {
        let mut registry = FarmRegistry::new("farms");
        let owner = OwnerId::new();
        let (first, _, _) = create(&mut registry, owner);
        let (second, ledger, inventory) = create(&mut registry, owner);

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(second.center, first.center);
        // The second request pays nothing and grants nothing.
        assert_eq!(ledger.balance(owner), Decimal::ZERO);
        assert_eq!(inventory.count(owner, Item::FarmingHandbook), 0);
        assert_eq!(registry.next_island_index(), 1);
    }

    #[test]
    fn islands_are_spaced_along_x() {
        let mut registry = FarmRegistry::new("farms");
        let (a, _, _) = create(&mut registry, OwnerId::new());
        let (b, _, _) = create(&mut registry, OwnerId::new());
        let (c, _, _) = create(&mut registry, OwnerId::new());

        assert_eq!(a.center.x, 0.0);
        assert_eq!(b.center.x, ISLAND_SPACING);
        assert_eq!(c.center.x, 2.0 * ISLAND_SPACING);
        assert_eq!(b.center.z, 0.0);
    }

    #[test]
    fn protection_regions_never_overlap() {
        // Spacing exceeds twice the protection radius, so adjacent
        // squares leave a gap.
        assert!(ISLAND_SPACING > 2.0 * PROTECTION_RADIUS);

        let mut registry = FarmRegistry::new("farms");
        let owner_a = OwnerId::new();
        let owner_b = OwnerId::new();
        create(&mut registry, owner_a);
        create(&mut registry, owner_b);

        let center_b = registry.farm(owner_b).unwrap().center().clone();
        let found = registry.find_farm_at(&center_b).unwrap();
        assert_eq!(found.owner(), owner_b);
    }

    #[test]
    fn failed_paste_aborts_creation() {
        let mut registry = FarmRegistry::new("farms");
        let owner = OwnerId::new();
        let mut editor = RecordingWorldEditor::strict();
        let mut ledger = EconomyLedger::new();
        let mut inventory = MemoryInventory::new();

        let result = registry.create_farm(
            owner,
            &mut editor,
            &mut ledger,
            &mut inventory,
            Path::new("missing/island.schem"),
        );

        assert!(matches!(
            result,
            Err(WorldError::StructureFileMissing { .. })
        ));
        assert!(registry.farm(owner).is_none());
        assert_eq!(registry.next_island_index(), 0);
        assert_eq!(ledger.balance(owner), Decimal::ZERO);
        assert!(editor.cleanups().is_empty());
    }

    #[test]
    fn find_farm_at_respects_bounds_and_world() {
        let mut registry = FarmRegistry::new("farms");
        let owner = OwnerId::new();
        create(&mut registry, owner);

        let inside = WorldPoint::new("farms", PROTECTION_RADIUS, 30.0, -PROTECTION_RADIUS);
        let outside = WorldPoint::new("farms", PROTECTION_RADIUS + 0.5, 30.0, 0.0);
        let other_world = WorldPoint::new("market", 0.0, 100.0, 0.0);

        assert_eq!(registry.find_farm_at(&inside).map(FarmIsland::owner), Some(owner));
        assert!(registry.find_farm_at(&outside).is_none());
        assert!(registry.find_farm_at(&other_world).is_none());
    }

    #[test]
    fn home_point_offsets_the_center() {
        let mut registry = FarmRegistry::new("farms");
        let owner = OwnerId::new();
        create(&mut registry, owner);

        let farm = registry.farm(owner).unwrap();
        let home = FarmRegistry::home_point(farm);
        assert_eq!(home.x, 14.5);
        assert_eq!(home.y, ISLAND_ALTITUDE - 9.0);
        assert_eq!(home.z, -14.5);
        assert_eq!(home.world, "farms");
    }
}
