use std::path::{Path, PathBuf};

use sta_convert_shared_kernel::ModificationTime;

/// The derived artifact corresponding to a [`SourceEntry`](super::SourceEntry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactEntry {
    pub path: PathBuf,
    /// [`ModificationTime::absent`] when the artifact has not been produced yet.
    pub modified: ModificationTime,
}

impl ArtifactEntry {
    pub fn new(path: impl Into<PathBuf>, modified: Option<ModificationTime>) -> Self {
        Self { path: path.into(), modified: ModificationTime::from(modified) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        !self.modified.is_absent()
    }
}
