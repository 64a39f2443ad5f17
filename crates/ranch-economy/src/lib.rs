//! Currency, market, and profession components for the Rooster Ranch core.
//!
//! This crate owns every balance-bearing piece of state:
//!
//! - [`ledger`] -- [`EconomyLedger`], the per-owner RC balance map with
//!   clamped writes and guarded withdrawals.
//! - [`market`] -- [`MarketCatalog`] and [`MarketEngine`], the static
//!   price lists and the atomic currency-for-goods exchange.
//! - [`profession`] -- [`ProfessionRegistry`], the reassignable
//!   profession choice with its starter-kit grant.
//! - [`inventory`] -- the [`InventoryHost`] collaborator trait the host
//!   implements, plus [`MemoryInventory`], an in-memory reference
//!   implementation used by the engine binary and by tests.
//!
//! All business-logic failures are signalled through [`Result`] or
//! `bool` returns; nothing in this crate panics or aborts the process.

pub mod error;
pub mod inventory;
pub mod ledger;
pub mod market;
pub mod profession;

pub use error::MarketError;
pub use inventory::{InventoryHost, MemoryInventory};
pub use ledger::EconomyLedger;
pub use market::{MarketCatalog, MarketEngine};
pub use profession::ProfessionRegistry;
