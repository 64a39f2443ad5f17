//! The inventory collaborator boundary.
//!
//! The core never owns item storage -- the host does. [`InventoryHost`]
//! is the narrow interface the core needs: bulk grants (starter kits,
//! the farming handbook, market purchases), removing a single unit
//! (market sales), and counting units. [`MemoryInventory`] is the
//! in-memory reference implementation used by the engine binary and by
//! tests.

use std::collections::BTreeMap;

use ranch_types::{Item, ItemStack, OwnerId};

/// Host-side inventory operations consumed by the core.
pub trait InventoryHost {
    /// Add every stack in `items` to the owner's inventory.
    fn grant_items(&mut self, owner: OwnerId, items: &[ItemStack]);

    /// Remove exactly one unit of `item` from the owner's inventory.
    ///
    /// Returns `false` without mutating if the owner holds none.
    fn remove_one(&mut self, owner: OwnerId, item: Item) -> bool;

    /// Return how many units of `item` the owner holds.
    fn count(&self, owner: OwnerId, item: Item) -> u32;
}

/// An in-memory [`InventoryHost`] backed by nested maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryInventory {
    /// Units held, per owner and item. Absence means zero.
    holdings: BTreeMap<OwnerId, BTreeMap<Item, u32>>,
}

impl MemoryInventory {
    /// Create an empty inventory.
    pub const fn new() -> Self {
        Self {
            holdings: BTreeMap::new(),
        }
    }
}

impl InventoryHost for MemoryInventory {
    fn grant_items(&mut self, owner: OwnerId, items: &[ItemStack]) {
        let slots = self.holdings.entry(owner).or_default();
        for stack in items {
            let held = slots.entry(stack.item).or_insert(0);
            *held = held.saturating_add(stack.quantity);
        }
    }

    fn remove_one(&mut self, owner: OwnerId, item: Item) -> bool {
        let Some(slots) = self.holdings.get_mut(&owner) else {
            return false;
        };
        let Some(held) = slots.get_mut(&item) else {
            return false;
        };
        if *held == 0 {
            return false;
        }
        *held = held.saturating_sub(1);
        if *held == 0 {
            slots.remove(&item);
        }
        true
    }

    fn count(&self, owner: OwnerId, item: Item) -> u32 {
        self.holdings
            .get(&owner)
            .and_then(|slots| slots.get(&item))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_accumulates() {
        let mut inventory = MemoryInventory::new();
        let owner = OwnerId::new();

        inventory.grant_items(owner, &[ItemStack::new(Item::Wheat, 3)]);
        inventory.grant_items(owner, &[ItemStack::new(Item::Wheat, 2)]);
        assert_eq!(inventory.count(owner, Item::Wheat), 5);
    }

    #[test]
    fn remove_one_decrements_to_empty() {
        let mut inventory = MemoryInventory::new();
        let owner = OwnerId::new();
        inventory.grant_items(owner, &[ItemStack::new(Item::Egg, 2)]);

        assert!(inventory.remove_one(owner, Item::Egg));
        assert!(inventory.remove_one(owner, Item::Egg));
        assert!(!inventory.remove_one(owner, Item::Egg));
        assert_eq!(inventory.count(owner, Item::Egg), 0);
    }

    #[test]
    fn remove_from_unknown_owner_fails() {
        let mut inventory = MemoryInventory::new();
        assert!(!inventory.remove_one(OwnerId::new(), Item::Bread));
    }

    #[test]
    fn counts_are_per_owner() {
        let mut inventory = MemoryInventory::new();
        let a = OwnerId::new();
        let b = OwnerId::new();
        inventory.grant_items(a, &[ItemStack::one(Item::Carrot)]);

        assert_eq!(inventory.count(a, Item::Carrot), 1);
        assert_eq!(inventory.count(b, Item::Carrot), 0);
    }
}
