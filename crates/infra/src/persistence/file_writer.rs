// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use sta_convert_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing artifacts.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file in the same directory and a rename.
    ///
    /// The temp file is removed again if anything fails before the rename.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        let tmp = temp_sibling(path);
        let result = write_synced(&tmp, data).and_then(|()| fs::rename(&tmp, path));
        if let Err(source) = result {
            let _ = fs::remove_file(&tmp);
            return Err(InfrastructureError::FileWrite { path: path.to_path_buf(), source });
        }

        // Make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Ok(dir) = File::open(parent) {
                    let _ = dir.sync_all();
                }
            }
        }

        Ok(())
    }
}

// PID + nanos keeps concurrent writers apart without a retry loop.
fn temp_sibling(path: &Path) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let name = format!(".{}.{}.tmp", std::process::id(), nanos);
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(data)?;
    w.flush()?;
    let _ = w.get_ref().sync_all();
    Ok(())
}
