//! The profession registry.
//!
//! Each owner holds at most one profession. Assignment is an
//! unconditional overwrite and grants the profession's starter kit
//! through the host's inventory collaborator -- every time, including
//! reassignment. That re-grant matches the long-observed behavior of
//! the ranch; see the product notes before adding a guard here.

use std::collections::BTreeMap;

use tracing::info;

use ranch_types::{OwnerId, Profession, StarterKitTable};

use crate::inventory::InventoryHost;

/// Per-owner profession choice with starter-kit grants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessionRegistry {
    /// The current choice per owner. Absence means none chosen yet.
    chosen: BTreeMap<OwnerId, Profession>,
    /// Kit contents granted on assignment.
    kits: StarterKitTable,
}

impl ProfessionRegistry {
    /// Create an empty registry granting from the given kit table.
    pub const fn new(kits: StarterKitTable) -> Self {
        Self {
            chosen: BTreeMap::new(),
            kits,
        }
    }

    /// Rebuild a registry from persisted assignments.
    pub const fn restore(
        chosen: BTreeMap<OwnerId, Profession>,
        kits: StarterKitTable,
    ) -> Self {
        Self { chosen, kits }
    }

    /// Return the owner's current profession, if any.
    pub fn profession(&self, owner: OwnerId) -> Option<Profession> {
        self.chosen.get(&owner).copied()
    }

    /// Assign a profession, overwriting any previous choice, and grant
    /// the starter kit to the owner's inventory.
    pub fn set_profession(
        &mut self,
        owner: OwnerId,
        profession: Profession,
        inventory: &mut dyn InventoryHost,
    ) {
        let previous = self.chosen.insert(owner, profession);
        inventory.grant_items(owner, self.kits.kit(profession));
        info!(%owner, %profession, ?previous, "profession assigned");
    }

    /// Return all current assignments, for the persistence adapter.
    pub const fn assignments(&self) -> &BTreeMap<OwnerId, Profession> {
        &self.chosen
    }

    /// Return the kit table grants are drawn from.
    pub const fn kits(&self) -> &StarterKitTable {
        &self.kits
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ranch_types::Item;

    use crate::inventory::{InventoryHost, MemoryInventory};

    use super::*;

    #[test]
    fn assignment_grants_the_kit() {
        let mut registry = ProfessionRegistry::new(StarterKitTable::standard());
        let mut inventory = MemoryInventory::new();
        let owner = OwnerId::new();

        registry.set_profession(owner, Profession::Farmer, &mut inventory);
        assert_eq!(registry.profession(owner), Some(Profession::Farmer));
        assert_eq!(inventory.count(owner, Item::WheatSeeds), 32);
        assert_eq!(inventory.count(owner, Item::IronHoe), 1);
    }

    #[test]
    fn reassignment_overwrites_and_regrants() {
        let mut registry = ProfessionRegistry::new(StarterKitTable::standard());
        let mut inventory = MemoryInventory::new();
        let owner = OwnerId::new();

        registry.set_profession(owner, Profession::Fisher, &mut inventory);
        registry.set_profession(owner, Profession::Fisher, &mut inventory);

        assert_eq!(registry.profession(owner), Some(Profession::Fisher));
        // Observed behavior: the kit stacks on every assignment.
        assert_eq!(inventory.count(owner, Item::Salmon), 16);
    }

    #[test]
    fn unassigned_owner_has_no_profession() {
        let registry = ProfessionRegistry::new(StarterKitTable::standard());
        assert_eq!(registry.profession(OwnerId::new()), None);
    }
}
