//! Shared type definitions for the Rooster Ranch core.
//!
//! This crate is the single source of truth for the types used across
//! the ranch workspace: owner identifiers, world coordinates, tradeable
//! items, professions with their starter kits, and the season cycle.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for account owners
//! - [`point`] -- Named-world 3-D coordinates with containment checks
//! - [`item`] -- Tradeable/grantable goods and item stacks
//! - [`profession`] -- The closed profession set and the starter-kit table
//! - [`season`] -- Season derivation from the day counter

pub mod ids;
pub mod item;
pub mod point;
pub mod profession;
pub mod season;

// Re-export all public types at crate root for convenience.
pub use ids::OwnerId;
pub use item::{Item, ItemStack};
pub use point::WorldPoint;
pub use profession::{Profession, StarterKitTable};
pub use season::{DAYS_PER_SEASON, Season};
