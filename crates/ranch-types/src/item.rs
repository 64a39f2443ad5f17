//! Tradeable and grantable goods.
//!
//! [`Item`] is the closed set of goods that can appear in the market
//! catalog, in starter kits, or in grants from the core to the host's
//! inventory collaborator. [`ItemStack`] pairs an item with a quantity.

use serde::{Deserialize, Serialize};

/// A good that can be bought, sold, or granted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    /// Plantable wheat seeds.
    WheatSeeds,
    /// Harvested wheat.
    Wheat,
    /// A carrot (plantable and sellable).
    Carrot,
    /// A potato (plantable and sellable).
    Potato,
    /// A loaf of bread.
    Bread,
    /// A pail of milk.
    Milk,
    /// An egg.
    Egg,
    /// Raw beef.
    Beef,
    /// A cow for the pasture.
    Cow,
    /// A chicken for the coop.
    Chicken,
    /// A sheep for the pasture.
    Sheep,
    /// An iron hoe for tilling.
    IronHoe,
    /// An empty bucket.
    Bucket,
    /// A lead for herding animals.
    Lead,
    /// An iron sword.
    IronSword,
    /// A fishing rod.
    FishingRod,
    /// A salmon.
    Salmon,
    /// Cooked cod.
    CookedCod,
    /// An emerald, the merchant's stock-in-trade.
    Emerald,
    /// A gold nugget.
    GoldNugget,
    /// A blank journal for bookkeeping.
    Journal,
    /// The farming handbook granted with every new farm.
    FarmingHandbook,
}

impl Item {
    /// Return the item's stable snake_case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WheatSeeds => "wheat_seeds",
            Self::Wheat => "wheat",
            Self::Carrot => "carrot",
            Self::Potato => "potato",
            Self::Bread => "bread",
            Self::Milk => "milk",
            Self::Egg => "egg",
            Self::Beef => "beef",
            Self::Cow => "cow",
            Self::Chicken => "chicken",
            Self::Sheep => "sheep",
            Self::IronHoe => "iron_hoe",
            Self::Bucket => "bucket",
            Self::Lead => "lead",
            Self::IronSword => "iron_sword",
            Self::FishingRod => "fishing_rod",
            Self::Salmon => "salmon",
            Self::CookedCod => "cooked_cod",
            Self::Emerald => "emerald",
            Self::GoldNugget => "gold_nugget",
            Self::Journal => "journal",
            Self::FarmingHandbook => "farming_handbook",
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quantity of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// The item being counted.
    pub item: Item,
    /// How many units the stack holds.
    pub quantity: u32,
}

impl ItemStack {
    /// Create a stack of `quantity` units of `item`.
    pub const fn new(item: Item, quantity: u32) -> Self {
        Self { item, quantity }
    }

    /// Create a stack holding a single unit of `item`.
    pub const fn one(item: Item) -> Self {
        Self { item, quantity: 1 }
    }
}
