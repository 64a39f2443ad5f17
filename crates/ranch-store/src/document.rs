//! Raw document I/O shared by the typed stores.

use std::path::Path;

use crate::error::StoreError;

/// Read a document's text, or `None` if the file does not exist.
pub fn read_document(path: &Path) -> Result<Option<String>, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(StoreError::from(error)),
    }
}

/// Write a document wholesale, creating parent directories as needed.
pub fn write_document(path: &Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}
