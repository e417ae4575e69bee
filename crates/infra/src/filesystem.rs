// crates/infra/src/filesystem.rs
use std::{fs, io, path::Path};

use sta_convert_ports::filesystem::{DirEntryDto, FileSystem};
use sta_convert_shared_kernel::{InfrastructureError, ModificationTime, Result, StaConvertError};
use tracing::trace;

/// Filesystem adapter implementing the `FileSystem` port with `std::fs`.
#[derive(Debug, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn list_dir(&self, dir: &Path) -> Result<Vec<DirEntryDto>> {
        let read_dir = fs::read_dir(dir).map_err(|source| fs_error("read_dir", dir, source))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| fs_error("read_dir", dir, source))?;
            let path = entry.path();
            // Follows symlinks so a link to a regular file is treated like the file.
            let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
            let name = entry.file_name();
            trace!(path = %path.display(), is_dir, "listed");
            entries.push(DirEntryDto { path, name, is_dir });
        }
        Ok(entries)
    }

    fn modified(&self, path: &Path) -> Result<Option<ModificationTime>> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(fs_error("stat", path, source)),
        };
        let mtime = metadata.modified().map_err(|source| fs_error("stat", path, source))?;
        Ok(Some(ModificationTime::from(mtime)))
    }
}

fn fs_error(operation: &str, path: &Path, source: io::Error) -> StaConvertError {
    InfrastructureError::FileSystemOperation { operation: operation.to_string(), path: path.to_path_buf(), source }
        .into()
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use filetime::FileTime;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn lists_files_and_flags_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("sub.json")).unwrap();

        let mut entries = StdFileSystem::new().list_dir(dir.path()).expect("list");
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.json");
        assert_eq!(entries[0].path, dir.path().join("a.json"));
        assert!(!entries[0].is_dir);
        assert!(entries[1].is_dir);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn listing_preserves_non_utf8_names() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = tempdir().unwrap();
        let name = OsStr::from_bytes(b"m\xff.json");
        fs::write(dir.path().join(name), "{}").unwrap();

        let entries = StdFileSystem::new().list_dir(dir.path()).expect("list");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name.as_bytes(), b"m\xff.json");
    }

    #[test]
    fn listing_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let err = StdFileSystem::new().list_dir(&dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("read_dir"));
    }

    #[test]
    fn modified_reports_mtime_or_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.json");
        fs::write(&path, "{}").unwrap();
        let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        filetime::set_file_mtime(&path, FileTime::from_system_time(when)).unwrap();

        let adapter = StdFileSystem::new();
        assert_eq!(adapter.modified(&path).unwrap(), Some(ModificationTime::from(when)));
        assert_eq!(adapter.modified(&dir.path().join("a.sta")).unwrap(), None);
    }
}
