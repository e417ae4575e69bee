// crates/ports/src/filesystem.rs
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use sta_convert_shared_kernel::{ModificationTime, Result};

/// DTO describing one entry directly inside a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntryDto {
    pub path: PathBuf,
    /// Final path component, kept as the platform encodes it.
    pub name: OsString,
    pub is_dir: bool,
}

/// Port for the filesystem queries the batch converter needs.
pub trait FileSystem: Send + Sync {
    /// List the entries directly inside `dir`, in the order the platform yields them.
    fn list_dir(&self, dir: &Path) -> Result<Vec<DirEntryDto>>;

    /// Modification time of `path`, or `None` when it does not exist.
    fn modified(&self, path: &Path) -> Result<Option<ModificationTime>>;
}
