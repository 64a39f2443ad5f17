//! The market: static price catalog and atomic exchange engine.
//!
//! The catalog is configuration, not runtime state: buy and sell
//! listings are independent maps, and a good may appear in one, both,
//! or neither. The engine's ordering rule bounds crash exposure:
//!
//! - **buy**: currency first -- if the withdrawal fails no goods move;
//! - **sell**: goods first -- if removing the unit fails no RC moves.
//!
//! Either direction can at worst leave a grant without its paired
//! debit after a crash between the two steps, never an over-debit.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info, warn};

use ranch_types::{Item, ItemStack, OwnerId};

use crate::error::MarketError;
use crate::inventory::InventoryHost;
use crate::ledger::EconomyLedger;

/// Static buy/sell price listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketCatalog {
    /// Price an owner pays to receive one unit.
    buy: BTreeMap<Item, Decimal>,
    /// Price an owner receives for giving up one unit.
    sell: BTreeMap<Item, Decimal>,
}

impl MarketCatalog {
    /// Create an empty catalog (nothing tradeable).
    pub const fn new() -> Self {
        Self {
            buy: BTreeMap::new(),
            sell: BTreeMap::new(),
        }
    }

    /// Build the standard vendor catalog.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.list_buy(Item::WheatSeeds, dec!(2.0));
        catalog.list_buy(Item::Carrot, dec!(3.0));
        catalog.list_buy(Item::Potato, dec!(3.0));
        catalog.list_buy(Item::Cow, dec!(50.0));
        catalog.list_buy(Item::Chicken, dec!(20.0));
        catalog.list_buy(Item::Sheep, dec!(30.0));
        catalog.list_buy(Item::Milk, dec!(5.0));
        catalog.list_buy(Item::Bread, dec!(4.0));

        catalog.list_sell(Item::Wheat, dec!(1.0));
        catalog.list_sell(Item::Carrot, dec!(1.5));
        catalog.list_sell(Item::Potato, dec!(1.5));
        catalog.list_sell(Item::Egg, dec!(0.5));
        catalog.list_sell(Item::Beef, dec!(2.0));
        catalog
    }

    /// Add or replace a buy listing.
    pub fn list_buy(&mut self, item: Item, price: Decimal) {
        self.buy.insert(item, price);
    }

    /// Add or replace a sell listing.
    pub fn list_sell(&mut self, item: Item, price: Decimal) {
        self.sell.insert(item, price);
    }

    /// Return the buy price for an item, if listed.
    pub fn buy_price(&self, item: Item) -> Option<Decimal> {
        self.buy.get(&item).copied()
    }

    /// Return the sell price for an item, if listed.
    pub fn sell_price(&self, item: Item) -> Option<Decimal> {
        self.sell.get(&item).copied()
    }

    /// All buy listings, for display.
    pub const fn buy_listings(&self) -> &BTreeMap<Item, Decimal> {
        &self.buy
    }

    /// All sell listings, for display.
    pub const fn sell_listings(&self) -> &BTreeMap<Item, Decimal> {
        &self.sell
    }
}

/// Executes currency-for-goods exchanges against a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketEngine {
    /// The price listings this engine trades against.
    catalog: MarketCatalog,
}

impl MarketEngine {
    /// Create an engine trading against the given catalog.
    pub const fn new(catalog: MarketCatalog) -> Self {
        Self { catalog }
    }

    /// Return the engine's catalog.
    pub const fn catalog(&self) -> &MarketCatalog {
        &self.catalog
    }

    /// Buy one unit of `item` for the owner.
    ///
    /// Withdraws the listed price, then grants the unit. Returns the
    /// price paid.
    ///
    /// # Errors
    ///
    /// [`MarketError::NotForPurchase`] if the item has no buy listing,
    /// [`MarketError::InsufficientFunds`] if the balance does not cover
    /// the price. In both cases nothing is mutated.
    pub fn buy(
        &self,
        ledger: &mut EconomyLedger,
        inventory: &mut dyn InventoryHost,
        owner: OwnerId,
        item: Item,
    ) -> Result<Decimal, MarketError> {
        let price = self
            .catalog
            .buy_price(item)
            .ok_or(MarketError::NotForPurchase { item })?;

        // Currency side first: a failed withdrawal grants nothing.
        if !ledger.withdraw(owner, price) {
            let balance = ledger.balance(owner);
            warn!(%owner, %item, %price, %balance, "purchase refused");
            return Err(MarketError::InsufficientFunds { price, balance });
        }
        inventory.grant_items(owner, &[ItemStack::one(item)]);
        info!(%owner, %item, %price, "purchase");
        Ok(price)
    }

    /// Sell one unit of `item` for the owner.
    ///
    /// Removes the unit, then deposits the listed price. Returns the
    /// price received.
    ///
    /// # Errors
    ///
    /// [`MarketError::NotForSale`] if the item has no sell listing,
    /// [`MarketError::InsufficientInventory`] if the owner holds no
    /// units. In both cases nothing is mutated.
    pub fn sell(
        &self,
        ledger: &mut EconomyLedger,
        inventory: &mut dyn InventoryHost,
        owner: OwnerId,
        item: Item,
    ) -> Result<Decimal, MarketError> {
        let price = self
            .catalog
            .sell_price(item)
            .ok_or(MarketError::NotForSale { item })?;

        // Goods side first: no RC is credited until the unit is gone.
        if !inventory.remove_one(owner, item) {
            warn!(%owner, %item, "sale refused, no stock");
            return Err(MarketError::InsufficientInventory { item });
        }
        ledger.deposit(owner, price);
        info!(%owner, %item, %price, "sale");
        Ok(price)
    }
}
