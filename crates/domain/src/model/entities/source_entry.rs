use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use sta_convert_shared_kernel::ModificationTime;

/// A source document eligible for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub path: PathBuf,
    /// File name with the source suffix removed.
    pub base_name: OsString,
    pub modified: ModificationTime,
}

impl SourceEntry {
    pub fn new(path: impl Into<PathBuf>, base_name: impl Into<OsString>, modified: ModificationTime) -> Self {
        Self { path: path.into(), base_name: base_name.into(), modified }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
