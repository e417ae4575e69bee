// crates/infra/src/persistence/file_reader.rs
use std::{fs, path::Path};

use sta_convert_shared_kernel::{InfraResult, InfrastructureError};

/// Whole-file reads with the path attached to any failure.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        fs::read(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }
}
