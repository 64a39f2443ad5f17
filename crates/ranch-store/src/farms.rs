//! The farms document: islands plus the allocation counter.
//!
//! A corrupt farm entry is skipped with a warning, but the counter is
//! always honored so skipped entries never cause an index to be reused.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use ranch_types::{OwnerId, WorldPoint};
use ranch_world::{FarmIsland, FarmRegistry};

use crate::document::{read_document, write_document};
use crate::error::StoreError;

/// One farm as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FarmRecord {
    /// World the island sits in.
    world: String,
    /// Center X coordinate.
    x: f64,
    /// Center Y coordinate.
    y: f64,
    /// Center Z coordinate.
    z: f64,
    /// Weeds on the island.
    #[serde(default)]
    weed_count: u32,
    /// Upkeep gauge.
    #[serde(default = "full_gauge")]
    upkeep: Decimal,
    /// Crop health gauge.
    #[serde(default = "full_gauge")]
    crop_health: Decimal,
    /// Animal health gauge.
    #[serde(default = "full_gauge")]
    animal_health: Decimal,
    /// Trusted owner ids.
    #[serde(default)]
    trusted: Vec<String>,
}

fn full_gauge() -> Decimal {
    Decimal::ONE_HUNDRED
}

/// The whole farms document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FarmsDocument {
    /// The next island index to hand out.
    #[serde(default)]
    next_island_index: u64,
    /// Farms keyed by owner id. Values stay raw so one bad entry can be
    /// skipped without failing the document.
    #[serde(default)]
    farms: BTreeMap<String, serde_yml::Value>,
}

/// Load the farm registry from `path`.
///
/// A missing file yields an empty registry for `default_world`.
pub fn load_farms(path: &Path, default_world: &str) -> Result<FarmRegistry, StoreError> {
    let Some(contents) = read_document(path)? else {
        debug!(path = %path.display(), "farms document missing, starting empty");
        return Ok(FarmRegistry::new(default_world));
    };

    let doc: FarmsDocument = serde_yml::from_str(&contents)?;
    let mut farms = BTreeMap::new();
    let mut world = default_world.to_string();

    for (key, value) in doc.farms {
        let Ok(owner) = OwnerId::parse(&key) else {
            warn!(key, "skipping farm entry with invalid owner id");
            continue;
        };
        let record = match serde_yml::from_value::<FarmRecord>(value) {
            Ok(record) => record,
            Err(error) => {
                warn!(key, %error, "skipping malformed farm entry");
                continue;
            }
        };

        let mut trusted = BTreeSet::new();
        for id in &record.trusted {
            match OwnerId::parse(id) {
                Ok(trustee) => {
                    trusted.insert(trustee);
                }
                Err(_) => warn!(key, id, "dropping invalid trusted id"),
            }
        }

        world.clone_from(&record.world);
        let center = WorldPoint::new(record.world, record.x, record.y, record.z);
        farms.insert(
            owner,
            FarmIsland::from_parts(
                owner,
                center,
                record.weed_count,
                record.upkeep,
                record.crop_health,
                record.animal_health,
                trusted,
            ),
        );
    }

    debug!(path = %path.display(), farms = farms.len(),
        next_island_index = doc.next_island_index, "farms document loaded");
    Ok(FarmRegistry::from_parts(world, farms, doc.next_island_index))
}

/// Save the registry to `path`, replacing the document wholesale.
pub fn save_farms(path: &Path, registry: &FarmRegistry) -> Result<(), StoreError> {
    let mut farms = BTreeMap::new();
    for (owner, farm) in registry.farms() {
        let record = FarmRecord {
            world: farm.center().world.clone(),
            x: farm.center().x,
            y: farm.center().y,
            z: farm.center().z,
            weed_count: farm.weed_count(),
            upkeep: farm.upkeep(),
            crop_health: farm.crop_health(),
            animal_health: farm.animal_health(),
            trusted: farm.trusted().iter().map(ToString::to_string).collect(),
        };
        farms.insert(owner.to_string(), serde_yml::to_value(record)?);
    }

    let doc = FarmsDocument {
        next_island_index: registry.next_island_index(),
        farms,
    };
    let contents = serde_yml::to_string(&doc)?;
    write_document(path, &contents)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::path::PathBuf;

    use rust_decimal_macros::dec;

    use ranch_economy::{EconomyLedger, MemoryInventory};
    use ranch_world::RecordingWorldEditor;

    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("ranch-farms-{}.yaml", OwnerId::new()))
    }

    fn registry_with_one_farm(owner: OwnerId) -> FarmRegistry {
        let mut registry = FarmRegistry::new("farms");
        let mut editor = RecordingWorldEditor::new();
        let mut ledger = EconomyLedger::new();
        let mut inventory = MemoryInventory::new();
        registry
            .create_farm(
                owner,
                &mut editor,
                &mut ledger,
                &mut inventory,
                Path::new("island.schem"),
            )
            .unwrap();
        registry
    }

    #[test]
    fn missing_file_loads_empty() {
        let registry = load_farms(&temp_path(), "farms").unwrap();
        assert!(registry.farms().is_empty());
        assert_eq!(registry.next_island_index(), 0);
        assert_eq!(registry.world(), "farms");
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path();
        let owner = OwnerId::new();
        let friend = OwnerId::new();
        let mut registry = registry_with_one_farm(owner);
        {
            let farm = registry.farm_mut(owner).unwrap();
            farm.trust(friend);
            farm.set_upkeep(dec!(73.25));
            farm.apply_daily_decay(0);
        }

        save_farms(&path, &registry).unwrap();
        let loaded = load_farms(&path, "other").unwrap();

        assert_eq!(loaded.next_island_index(), 1);
        assert_eq!(loaded.world(), "farms");
        let farm = loaded.farm(owner).unwrap();
        assert_eq!(farm.center(), registry.farm(owner).unwrap().center());
        assert!(farm.is_trusted(friend));
        assert_eq!(farm.upkeep(), registry.farm(owner).unwrap().upkeep());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn counter_is_honored_even_when_entries_are_skipped() {
        let path = temp_path();
        let contents = "next_island_index: 7\nfarms:\n  not-a-uuid:\n    world: farms\n    x: 0.0\n    y: 100.0\n    z: 0.0\n";
        std::fs::write(&path, contents).unwrap();

        let loaded = load_farms(&path, "farms").unwrap();
        assert!(loaded.farms().is_empty());
        assert_eq!(loaded.next_island_index(), 7);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn gauges_default_when_absent() {
        let path = temp_path();
        let owner = OwnerId::new();
        let contents =
            format!("next_island_index: 1\nfarms:\n  {owner}:\n    world: farms\n    x: 0.0\n    y: 100.0\n    z: 0.0\n");
        std::fs::write(&path, contents).unwrap();

        let loaded = load_farms(&path, "farms").unwrap();
        let farm = loaded.farm(owner).unwrap();
        assert_eq!(farm.upkeep(), Decimal::ONE_HUNDRED);
        assert_eq!(farm.weed_count(), 0);

        std::fs::remove_file(&path).unwrap();
    }
}
