//! Error types for the `ranch-economy` crate.
//!
//! Market failures are ordinary business outcomes, not process faults:
//! callers receive them through [`Result`] and decide what to surface.

use rust_decimal::Decimal;

use ranch_types::Item;

/// Errors that can occur during a market transaction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarketError {
    /// The item has no buy listing in the catalog.
    #[error("{item} is not listed for purchase")]
    NotForPurchase {
        /// The unlisted item.
        item: Item,
    },

    /// The item has no sell listing in the catalog.
    #[error("{item} is not listed for sale")]
    NotForSale {
        /// The unlisted item.
        item: Item,
    },

    /// The buyer's balance does not cover the price.
    #[error("insufficient funds: need {price} RC, have {balance} RC")]
    InsufficientFunds {
        /// The listed price.
        price: Decimal,
        /// The buyer's balance at the time of the attempt.
        balance: Decimal,
    },

    /// The seller holds no units of the item.
    #[error("no {item} in inventory to sell")]
    InsufficientInventory {
        /// The item the seller tried to part with.
        item: Item,
    },
}
