//! The seam between the ranch and the hosting world.
//!
//! The registry never touches blocks directly; it drives a
//! [`WorldEditor`] supplied by the host. Tests and the engine binary use
//! [`RecordingWorldEditor`], which validates structure files and records
//! the edits it was asked to perform.

use std::path::{Path, PathBuf};

use tracing::info;

use ranch_types::WorldPoint;

use crate::error::WorldError;

/// World mutation operations the ranch needs from its host.
pub trait WorldEditor {
    /// Paste the structure file at `path` centered on `at`.
    fn paste_structure(&mut self, path: &Path, at: &WorldPoint) -> Result<(), WorldError>;

    /// Remove loose vegetation around `at` and reinforce the terrain
    /// under the pasted structure.
    fn clear_vegetation_and_reinforce(&mut self, at: &WorldPoint);
}

/// Structure file extensions the recording editor accepts.
const STRUCTURE_EXTENSIONS: [&str; 2] = ["schem", "schematic"];

/// A [`WorldEditor`] that records requested edits instead of performing
/// them.
///
/// In strict mode it validates that the structure file exists and has a
/// recognized extension, so placement failures surface the same way they
/// would against a real world.
#[derive(Debug, Default)]
pub struct RecordingWorldEditor {
    /// Paste requests in the order they were made.
    pastes: Vec<(PathBuf, WorldPoint)>,
    /// Cleanup requests in the order they were made.
    cleanups: Vec<WorldPoint>,
    /// Whether to validate structure files against the filesystem.
    strict: bool,
}

impl RecordingWorldEditor {
    /// Create a permissive editor that accepts every paste.
    pub const fn new() -> Self {
        Self {
            pastes: Vec::new(),
            cleanups: Vec::new(),
            strict: false,
        }
    }

    /// Create an editor that checks structure files before accepting a
    /// paste.
    pub const fn strict() -> Self {
        Self {
            pastes: Vec::new(),
            cleanups: Vec::new(),
            strict: true,
        }
    }

    /// Paste requests recorded so far.
    pub fn pastes(&self) -> &[(PathBuf, WorldPoint)] {
        &self.pastes
    }

    /// Cleanup requests recorded so far.
    pub fn cleanups(&self) -> &[WorldPoint] {
        &self.cleanups
    }
}

impl WorldEditor for RecordingWorldEditor {
    fn paste_structure(&mut self, path: &Path, at: &WorldPoint) -> Result<(), WorldError> {
        if self.strict {
            if !path.is_file() {
                return Err(WorldError::StructureFileMissing {
                    path: path.to_path_buf(),
                });
            }
            let recognized = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| STRUCTURE_EXTENSIONS.contains(&ext));
            if !recognized {
                return Err(WorldError::UnknownStructureFormat {
                    path: path.to_path_buf(),
                });
            }
        }
        info!(path = %path.display(), %at, "structure paste recorded");
        self.pastes.push((path.to_path_buf(), at.clone()));
        Ok(())
    }

    fn clear_vegetation_and_reinforce(&mut self, at: &WorldPoint) {
        self.cleanups.push(at.clone());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn permissive_editor_accepts_any_path() {
        let mut editor = RecordingWorldEditor::new();
        let at = WorldPoint::new("farms", 0.0, 100.0, 0.0);
        editor
            .paste_structure(Path::new("missing/island.schem"), &at)
            .unwrap();
        assert_eq!(editor.pastes().len(), 1);
    }

    #[test]
    fn strict_editor_rejects_missing_files() {
        let mut editor = RecordingWorldEditor::strict();
        let at = WorldPoint::new("farms", 0.0, 100.0, 0.0);
        let result = editor.paste_structure(Path::new("missing/island.schem"), &at);
        assert!(matches!(
            result,
            Err(WorldError::StructureFileMissing { .. })
        ));
        assert!(editor.pastes().is_empty());
    }

    #[test]
    fn strict_editor_rejects_unknown_extensions() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("ranch-structure-{}.txt", ranch_types::OwnerId::new()));
        std::fs::write(&path, b"not a structure").unwrap();

        let mut editor = RecordingWorldEditor::strict();
        let at = WorldPoint::new("farms", 0.0, 100.0, 0.0);
        let result = editor.paste_structure(&path, &at);
        assert!(matches!(
            result,
            Err(WorldError::UnknownStructureFormat { .. })
        ));

        std::fs::remove_file(&path).unwrap();
    }
}
