//! Professions and their starter kits.
//!
//! An owner holds zero or one [`Profession`] at a time. Each profession
//! grants a starter kit on assignment. The kits live in a
//! [`StarterKitTable`] keyed by profession rather than on the enum
//! itself, so adding or rebalancing a kit is a data change, not a code
//! change on the type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemStack};

/// The closed set of professions an owner can take up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Profession {
    /// Crop farming: seeds, tilling, harvest.
    Farmer,
    /// Animal husbandry: herding and butchering.
    Rancher,
    /// Fishing the ranch waters.
    Fisher,
    /// Trading at the market.
    Merchant,
}

/// Every profession, in display order.
pub const ALL_PROFESSIONS: [Profession; 4] = [
    Profession::Farmer,
    Profession::Rancher,
    Profession::Fisher,
    Profession::Merchant,
];

impl Profession {
    /// Return the profession's stable snake_case name, as persisted.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Rancher => "rancher",
            Self::Fisher => "fisher",
            Self::Merchant => "merchant",
        }
    }

    /// Return the capitalized display name shown to players.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::Rancher => "Rancher",
            Self::Fisher => "Fisher",
            Self::Merchant => "Merchant",
        }
    }

    /// Parse a profession from its name, case-insensitively.
    ///
    /// Returns `None` for unknown names (the load policy skips those
    /// entries rather than failing the whole document).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "farmer" => Some(Self::Farmer),
            "rancher" => Some(Self::Rancher),
            "fisher" => Some(Self::Fisher),
            "merchant" => Some(Self::Merchant),
            _ => None,
        }
    }
}

impl core::fmt::Display for Profession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Starter-kit contents keyed by profession.
///
/// The standard table reproduces the classic kits; hosts can override
/// individual kits without touching the [`Profession`] type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterKitTable {
    /// Kit contents per profession.
    kits: BTreeMap<Profession, Vec<ItemStack>>,
}

impl StarterKitTable {
    /// Create an empty table (no profession grants anything).
    pub const fn new() -> Self {
        Self {
            kits: BTreeMap::new(),
        }
    }

    /// Build the standard table with the classic four kits.
    pub fn standard() -> Self {
        let mut kits = BTreeMap::new();
        kits.insert(
            Profession::Farmer,
            vec![
                ItemStack::new(Item::WheatSeeds, 32),
                ItemStack::one(Item::IronHoe),
                ItemStack::one(Item::Bucket),
            ],
        );
        kits.insert(
            Profession::Rancher,
            vec![
                ItemStack::new(Item::Wheat, 16),
                ItemStack::new(Item::Lead, 2),
                ItemStack::one(Item::IronSword),
            ],
        );
        kits.insert(
            Profession::Fisher,
            vec![
                ItemStack::one(Item::FishingRod),
                ItemStack::new(Item::Salmon, 8),
                ItemStack::new(Item::CookedCod, 8),
            ],
        );
        kits.insert(
            Profession::Merchant,
            vec![
                ItemStack::new(Item::Emerald, 8),
                ItemStack::new(Item::GoldNugget, 32),
                ItemStack::one(Item::Journal),
            ],
        );
        Self { kits }
    }

    /// Return the kit for the given profession (empty if none defined).
    pub fn kit(&self, profession: Profession) -> &[ItemStack] {
        self.kits.get(&profession).map_or(&[], Vec::as_slice)
    }

    /// Replace the kit for a profession.
    pub fn set_kit(&mut self, profession: Profession, kit: Vec<ItemStack>) {
        self.kits.insert(profession, kit);
    }
}

impl Default for StarterKitTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Profession::parse("Farmer"), Some(Profession::Farmer));
        assert_eq!(Profession::parse("MERCHANT"), Some(Profession::Merchant));
        assert_eq!(Profession::parse("wizard"), None);
    }

    #[test]
    fn parse_roundtrips_as_str() {
        for profession in ALL_PROFESSIONS {
            assert_eq!(Profession::parse(profession.as_str()), Some(profession));
        }
    }

    #[test]
    fn standard_table_covers_every_profession() {
        let table = StarterKitTable::standard();
        for profession in ALL_PROFESSIONS {
            assert!(
                !table.kit(profession).is_empty(),
                "no kit for {profession}"
            );
        }
    }

    #[test]
    fn farmer_kit_contents() {
        let table = StarterKitTable::standard();
        let kit = table.kit(Profession::Farmer);
        assert_eq!(kit.first().map(|s| s.item), Some(Item::WheatSeeds));
        assert_eq!(kit.first().map(|s| s.quantity), Some(32));
        assert_eq!(kit.len(), 3);
    }

    #[test]
    fn empty_table_grants_nothing() {
        let table = StarterKitTable::new();
        assert!(table.kit(Profession::Fisher).is_empty());
    }

    #[test]
    fn set_kit_overrides() {
        let mut table = StarterKitTable::standard();
        table.set_kit(Profession::Fisher, vec![ItemStack::one(Item::Bread)]);
        assert_eq!(table.kit(Profession::Fisher).len(), 1);
    }
}
