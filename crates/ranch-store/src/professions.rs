//! The professions document: owner id to profession name.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use ranch_economy::ProfessionRegistry;
use ranch_types::{OwnerId, Profession, StarterKitTable};

use crate::document::{read_document, write_document};
use crate::error::StoreError;

/// Load profession assignments from `path`.
///
/// A missing file yields an empty registry over the given kit table.
pub fn load_professions(
    path: &Path,
    kits: StarterKitTable,
) -> Result<ProfessionRegistry, StoreError> {
    let Some(contents) = read_document(path)? else {
        debug!(path = %path.display(), "professions document missing, starting empty");
        return Ok(ProfessionRegistry::new(kits));
    };

    let raw: BTreeMap<String, String> = serde_yml::from_str(&contents)?;
    let mut chosen = BTreeMap::new();
    for (key, name) in raw {
        let Ok(owner) = OwnerId::parse(&key) else {
            warn!(key, "skipping profession entry with invalid owner id");
            continue;
        };
        let Some(profession) = Profession::parse(&name) else {
            warn!(key, name, "skipping unknown profession");
            continue;
        };
        chosen.insert(owner, profession);
    }

    debug!(path = %path.display(), assignments = chosen.len(), "professions document loaded");
    Ok(ProfessionRegistry::restore(chosen, kits))
}

/// Save assignments to `path`, replacing the document wholesale.
pub fn save_professions(path: &Path, registry: &ProfessionRegistry) -> Result<(), StoreError> {
    let doc: BTreeMap<String, &str> = registry
        .assignments()
        .iter()
        .map(|(owner, profession)| (owner.to_string(), profession.as_str()))
        .collect();
    let contents = serde_yml::to_string(&doc)?;
    write_document(path, &contents)
}
