//! World-event hooks.
//!
//! The host calls these when something happens in the world that the
//! ranch has an opinion about: a block being placed or broken, or an
//! owner connecting.

use tracing::debug;

use ranch_types::{OwnerId, WorldPoint};

use crate::context::RanchContext;

/// What a connecting owner still needs to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinStatus {
    /// Whether the owner already has a farm.
    pub has_farm: bool,
    /// Whether the owner still needs to choose a profession.
    pub needs_profession: bool,
}

/// Decide whether `actor` may mutate a block at `point`.
///
/// Ground outside every protection region is unmanaged and free to
/// edit. Inside a region only the owner and their trusted owners may
/// build.
pub fn on_block_mutation_attempt(
    context: &RanchContext,
    point: &WorldPoint,
    actor: OwnerId,
) -> bool {
    let Some(farm) = context.farms.find_farm_at(point) else {
        return true;
    };
    let allowed = farm.is_trusted(actor);
    if !allowed {
        debug!(%actor, owner = %farm.owner(), %point, "block mutation denied");
    }
    allowed
}

/// Report what a freshly connected owner still needs to set up.
pub fn on_account_join(context: &RanchContext, owner: OwnerId) -> JoinStatus {
    JoinStatus {
        has_farm: context.farms.farm(owner).is_some(),
        needs_profession: context.professions.profession(owner).is_none(),
    }
}
