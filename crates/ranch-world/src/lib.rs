//! Farm islands and the world they live in.
//!
//! This crate owns the spatial side of the ranch: where farm islands are
//! placed, who may build on them, and how they degrade day over day.
//!
//! # Modules
//!
//! - [`error`] -- world-level error types
//! - [`farm`] -- a single farm island and its gauges
//! - [`registry`] -- island allocation, creation, and spatial lookup
//! - [`degradation`] -- the daily weed-growth and decay pass
//! - [`host`] -- the [`WorldEditor`] seam to the hosting world

pub mod degradation;
pub mod error;
pub mod farm;
pub mod host;
pub mod registry;

pub use degradation::{DayReport, DegradationSystem, MAX_DAILY_WEED_GROWTH, MIN_DAILY_WEED_GROWTH};
pub use error::WorldError;
pub use farm::FarmIsland;
pub use host::{RecordingWorldEditor, WorldEditor};
pub use registry::{
    FarmCreation, FarmRegistry, ISLAND_ALTITUDE, ISLAND_SPACING, PROTECTION_RADIUS, SIGNING_BONUS,
};
