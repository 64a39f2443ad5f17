//! The live state of a running ranch.

use std::path::Path;

use tracing::{info, warn};

use ranch_economy::{
    EconomyLedger, InventoryHost, MarketCatalog, MarketEngine, ProfessionRegistry,
};
use ranch_store::{
    load_economy, load_farms, load_professions, save_economy, save_farms, save_professions,
};
use ranch_types::{OwnerId, StarterKitTable, WorldPoint};
use ranch_world::{
    DayReport, DegradationSystem, FarmCreation, FarmRegistry, WorldEditor, WorldError,
};

use crate::config::RanchConfig;

/// Offset of the market arrival point inside the market world.
const MARKET_SPAWN: (f64, f64, f64) = (16.5, 94.0, -5.5);

/// Everything a running ranch keeps in memory.
///
/// Owns the ledger, farms, professions, market, and the degradation
/// clock. World edits and inventories stay behind traits supplied per
/// call, so the context itself has no host dependencies.
#[derive(Debug)]
pub struct RanchContext {
    /// Owner balances.
    pub ledger: EconomyLedger,
    /// Farm islands and the allocation counter.
    pub farms: FarmRegistry,
    /// Profession choices and starter kits.
    pub professions: ProfessionRegistry,
    /// The market's price list and trading engine.
    pub market: MarketEngine,
    /// The daily decay driver.
    pub degradation: DegradationSystem,
    /// Where visitors arrive in the market world.
    pub market_spawn: WorldPoint,
}

impl RanchContext {
    /// Create a fresh context with empty state from `config`.
    pub fn new(config: &RanchConfig) -> Self {
        let (dx, dy, dz) = MARKET_SPAWN;
        Self {
            ledger: EconomyLedger::new(),
            farms: FarmRegistry::new(config.world.farm_world.clone()),
            professions: ProfessionRegistry::new(StarterKitTable::standard()),
            market: MarketEngine::new(MarketCatalog::standard()),
            degradation: DegradationSystem::new(config.world.seed),
            market_spawn: WorldPoint::new(config.world.market_world.clone(), dx, dy, dz),
        }
    }

    /// Create a context from the state documents named in `config`.
    ///
    /// Each document that fails to load is replaced by empty state with
    /// a warning; a corrupt file never blocks startup.
    pub fn load(config: &RanchConfig) -> Self {
        let mut context = Self::new(config);

        match load_economy(&config.storage.economy_path()) {
            Ok(ledger) => context.ledger = ledger,
            Err(error) => warn!(%error, "economy document unreadable, starting empty"),
        }
        match load_farms(&config.storage.farms_path(), &config.world.farm_world) {
            Ok(farms) => context.farms = farms,
            Err(error) => warn!(%error, "farms document unreadable, starting empty"),
        }
        match load_professions(&config.storage.professions_path(), StarterKitTable::standard()) {
            Ok(professions) => context.professions = professions,
            Err(error) => warn!(%error, "professions document unreadable, starting empty"),
        }

        info!(
            accounts = context.ledger.account_count(),
            farms = context.farms.farms().len(),
            professions = context.professions.assignments().len(),
            "ranch state loaded"
        );
        context
    }

    /// Write all state documents named in `config`.
    ///
    /// Each document is saved independently; a failure is logged and the
    /// remaining documents are still attempted.
    pub fn save(&self, config: &RanchConfig) {
        if let Err(error) = save_economy(&config.storage.economy_path(), &self.ledger) {
            warn!(%error, "failed to save economy document");
        }
        if let Err(error) = save_farms(&config.storage.farms_path(), &self.farms) {
            warn!(%error, "failed to save farms document");
        }
        if let Err(error) =
            save_professions(&config.storage.professions_path(), &self.professions)
        {
            warn!(%error, "failed to save professions document");
        }
        info!("ranch state saved");
    }

    /// Create a farm for `owner`, or report the existing one.
    pub fn create_farm(
        &mut self,
        owner: OwnerId,
        editor: &mut dyn WorldEditor,
        inventory: &mut dyn InventoryHost,
        schematic: &Path,
    ) -> Result<FarmCreation, WorldError> {
        self.farms
            .create_farm(owner, editor, &mut self.ledger, inventory, schematic)
    }

    /// Run one daily degradation pass over every farm.
    pub fn advance_day(&mut self) -> DayReport {
        self.degradation.advance_day(&mut self.farms)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use ranch_economy::MemoryInventory;
    use ranch_types::Profession;
    use ranch_world::{RecordingWorldEditor, SIGNING_BONUS};

    use super::*;

    fn temp_config() -> RanchConfig {
        let mut config = RanchConfig::default();
        config.storage.data_dir =
            std::env::temp_dir().join(format!("ranch-context-{}", OwnerId::new()));
        config
    }

    #[test]
    fn new_context_is_empty() {
        let config = RanchConfig::default();
        let context = RanchContext::new(&config);
        assert_eq!(context.ledger.account_count(), 0);
        assert!(context.farms.farms().is_empty());
        assert_eq!(context.degradation.day(), 0);
        assert_eq!(context.market_spawn.world, "ranch_market");
        assert_eq!(context.market_spawn.y, 94.0);
    }

    #[test]
    fn missing_documents_load_as_empty() {
        let config = temp_config();
        let context = RanchContext::load(&config);
        assert_eq!(context.ledger.account_count(), 0);
        assert!(context.farms.farms().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_all_documents() {
        let config = temp_config();
        let owner = OwnerId::new();
        let mut context = RanchContext::new(&config);
        let mut editor = RecordingWorldEditor::new();
        let mut inventory = MemoryInventory::new();

        context
            .create_farm(
                owner,
                &mut editor,
                &mut inventory,
                Path::new("island.schem"),
            )
            .unwrap();
        context
            .professions
            .set_profession(owner, Profession::Farmer, &mut inventory);
        context.ledger.deposit(owner, dec!(10));
        context.save(&config);

        let loaded = RanchContext::load(&config);
        assert!(loaded.farms.farm(owner).is_some());
        assert_eq!(loaded.professions.profession(owner), Some(Profession::Farmer));
        assert_eq!(
            loaded.ledger.balance(owner),
            SIGNING_BONUS.checked_add(dec!(10)).unwrap()
        );

        std::fs::remove_dir_all(&config.storage.data_dir).unwrap();
    }

    #[test]
    fn advance_day_ticks_the_clock() {
        let config = RanchConfig::default();
        let mut context = RanchContext::new(&config);
        let report = context.advance_day();
        assert_eq!(report.day, 1);
        assert_eq!(context.degradation.day(), 1);
    }
}
