//! YAML persistence for ranch state.
//!
//! Three documents make up the on-disk state: `economy.yaml` (balances),
//! `farms.yaml` (islands plus the allocation counter), and
//! `professions.yaml` (per-owner profession choices).
//!
//! # Load policy
//!
//! A missing document loads as empty state. A document that fails to
//! parse as a whole is an error, but an individually malformed entry is
//! skipped with a warning so one corrupt record never blocks startup.
//! Saves rewrite each document wholesale.

pub mod document;
pub mod economy;
pub mod error;
pub mod farms;
pub mod professions;

pub use document::{read_document, write_document};
pub use economy::{load_economy, save_economy};
pub use error::StoreError;
pub use farms::{load_farms, save_farms};
pub use professions::{load_professions, save_professions};
