//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Every account in the ranch is keyed by an [`OwnerId`]. The host
//! normally supplies these (they are the platform's stable player
//! identifiers); the `new()` constructor exists for app-side generation
//! in tests and seed data, and uses UUID v7 (time-ordered).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an account owner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct OwnerId(pub Uuid);

impl OwnerId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse an owner identifier from its canonical string form.
    ///
    /// # Errors
    ///
    /// Returns [`uuid::Error`] if the string is not a valid UUID.
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value).map(Self)
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OwnerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<OwnerId> for Uuid {
    fn from(id: OwnerId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_nonzero_and_distinct() {
        let a = OwnerId::new();
        let b = OwnerId::new();
        assert_ne!(a.into_inner(), Uuid::nil());
        assert_ne!(a, b);
    }

    #[test]
    fn parse_roundtrips_display() {
        let id = OwnerId::new();
        let parsed = OwnerId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(OwnerId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let id = OwnerId::new();
        let json = serde_json::to_string(&id).unwrap();
        let restored: OwnerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }
}
