//! The economy document: owner balances.
//!
//! Stored as a flat map of owner id to balance. Unparseable entries are
//! skipped with a warning.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use ranch_economy::EconomyLedger;
use ranch_types::OwnerId;

use crate::document::{read_document, write_document};
use crate::error::StoreError;

/// Load the economy ledger from `path`. Missing file means empty ledger.
pub fn load_economy(path: &Path) -> Result<EconomyLedger, StoreError> {
    let Some(contents) = read_document(path)? else {
        debug!(path = %path.display(), "economy document missing, starting empty");
        return Ok(EconomyLedger::new());
    };

    let raw: BTreeMap<String, serde_yml::Value> = serde_yml::from_str(&contents)?;
    let mut balances = BTreeMap::new();
    for (key, value) in raw {
        let Ok(owner) = OwnerId::parse(&key) else {
            warn!(key, "skipping economy entry with invalid owner id");
            continue;
        };
        match serde_yml::from_value::<Decimal>(value) {
            Ok(balance) => {
                balances.insert(owner, balance);
            }
            Err(error) => {
                warn!(key, %error, "skipping economy entry with invalid balance");
            }
        }
    }

    debug!(path = %path.display(), accounts = balances.len(), "economy document loaded");
    Ok(EconomyLedger::restore(balances))
}

/// Save the ledger to `path`, replacing the document wholesale.
pub fn save_economy(path: &Path, ledger: &EconomyLedger) -> Result<(), StoreError> {
    let doc: BTreeMap<String, Decimal> = ledger
        .balances()
        .iter()
        .map(|(owner, balance)| (owner.to_string(), *balance))
        .collect();
    let contents = serde_yml::to_string(&doc)?;
    write_document(path, &contents)
}
