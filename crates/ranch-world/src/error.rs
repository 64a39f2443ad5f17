//! World-level error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while placing structures or allocating islands.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The structure file to paste does not exist on disk.
    #[error("structure file not found: {path}")]
    StructureFileMissing {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The structure file exists but is not a format the editor accepts.
    #[error("unrecognized structure format: {path}")]
    UnknownStructureFormat {
        /// The offending file.
        path: PathBuf,
    },

    /// The named world is not available to the host.
    #[error("world not available: {world}")]
    WorldUnavailable {
        /// The world that could not be resolved.
        world: String,
    },

    /// The island index counter cannot be advanced any further.
    #[error("island index counter exhausted")]
    IslandIndexOverflow,
}
