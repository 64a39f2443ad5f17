//! Named-world 3-D coordinates.
//!
//! A [`WorldPoint`] pairs a world name with an x/y/z position. Farms are
//! allocated along one axis of a dedicated farm world, and protection
//! checks are axis-aligned squares over x/z within that world -- the y
//! axis never participates in containment.

use serde::{Deserialize, Serialize};

/// A position in a named world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    /// Name of the world this point belongs to.
    pub world: String,
    /// East/west coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// North/south coordinate.
    pub z: f64,
}

impl WorldPoint {
    /// Create a new point in the named world.
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }

    /// Check whether this point is in the same world as `other`.
    pub fn same_world(&self, other: &Self) -> bool {
        self.world == other.world
    }

    /// Return a copy of this point translated by the given deltas.
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            world: self.world.clone(),
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Check whether this point lies inside the axis-aligned square of
    /// the given half-width `radius` centred on `center`, over x/z only.
    ///
    /// Points in a different world are never contained.
    pub fn within_square(&self, center: &Self, radius: f64) -> bool {
        self.same_world(center)
            && (self.x - center.x).abs() <= radius
            && (self.z - center.z).abs() <= radius
    }
}

impl core::fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({:.1}, {:.1}, {:.1})", self.world, self.x, self.y, self.z)
    }
}
