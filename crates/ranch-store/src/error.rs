//! Persistence error types.

use thiserror::Error;

/// Errors raised while reading or writing state documents.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read or write a document on disk.
    #[error("failed to access state file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A document's YAML could not be parsed or serialized.
    #[error("failed to process state YAML: {source}")]
    Yaml {
        /// The underlying YAML error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for StoreError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}
