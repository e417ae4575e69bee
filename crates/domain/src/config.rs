use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use sta_convert_shared_kernel::{DomainError, DomainResult};

pub const DEFAULT_SOURCE_SUFFIX: &str = ".json";
pub const DEFAULT_ARTIFACT_SUFFIX: &str = ".sta";

/// Naming convention linking a source file to its artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionLayout {
    source_suffix: String,
    artifact_suffix: String,
}

impl Default for ConversionLayout {
    fn default() -> Self {
        Self {
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            artifact_suffix: DEFAULT_ARTIFACT_SUFFIX.to_string(),
        }
    }
}

impl ConversionLayout {
    /// Build a layout, rejecting suffixes that could not round-trip.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSuffix`] for an empty suffix or one without a
    /// leading dot, and [`DomainError::InvalidConfiguration`] when both suffixes are equal.
    pub fn new(source_suffix: impl Into<String>, artifact_suffix: impl Into<String>) -> DomainResult<Self> {
        let source_suffix = source_suffix.into();
        let artifact_suffix = artifact_suffix.into();
        validate_suffix(&source_suffix)?;
        validate_suffix(&artifact_suffix)?;
        if source_suffix == artifact_suffix {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("source and artifact suffix are both '{source_suffix}'"),
            });
        }
        Ok(Self { source_suffix, artifact_suffix })
    }

    pub fn source_suffix(&self) -> &str {
        &self.source_suffix
    }

    pub fn artifact_suffix(&self) -> &str {
        &self.artifact_suffix
    }

    /// Returns the base name when `file_name` carries the source suffix.
    /// Matching is case-sensitive and works on names that are not UTF-8.
    pub fn base_name<'a>(&self, file_name: &'a OsStr) -> Option<&'a OsStr> {
        let stem = file_name.as_encoded_bytes().strip_suffix(self.source_suffix.as_bytes())?;
        // SAFETY: `stem` ends right before the suffix, a non-empty UTF-8 string,
        // so it is split on a boundary `from_encoded_bytes_unchecked` accepts.
        Some(unsafe { OsStr::from_encoded_bytes_unchecked(stem) })
    }

    pub fn artifact_path(&self, output_dir: &Path, base_name: &OsStr) -> PathBuf {
        let mut file_name = OsString::from(base_name);
        file_name.push(&self.artifact_suffix);
        output_dir.join(file_name)
    }
}

fn validate_suffix(suffix: &str) -> DomainResult<()> {
    if suffix.len() < 2 || !suffix.starts_with('.') {
        return Err(DomainError::InvalidSuffix {
            suffix: suffix.to_string(),
            reason: "must start with '.' followed by at least one character".into(),
        });
    }
    if suffix.contains(['/', '\\']) {
        return Err(DomainError::InvalidSuffix {
            suffix: suffix.to_string(),
            reason: "must not contain path separators".into(),
        });
    }
    Ok(())
}

/// What to do when converting one file fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Stop the whole batch on the first failing file.
    #[default]
    Abort,
    /// Record the failure and carry on with the remaining files.
    Continue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_maps_json_to_sta() {
        let layout = ConversionLayout::default();
        let base = layout.base_name(OsStr::new("model.json")).expect("json suffix");
        assert_eq!(base, "model");
        assert_eq!(layout.artifact_path(Path::new("out"), base), Path::new("out").join("model.sta"));
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        let layout = ConversionLayout::default();
        assert_eq!(layout.base_name(OsStr::new("model.JSON")), None);
        assert_eq!(layout.base_name(OsStr::new("model.json.bak")), None);
        assert_eq!(layout.base_name(OsStr::new("archive.tar.json")), Some(OsStr::new("archive.tar")));
        assert_eq!(layout.base_name(OsStr::new(".json")), Some(OsStr::new("")));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_keep_their_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let layout = ConversionLayout::default();
        let first = OsStr::from_bytes(b"m\xff.json");
        let second = OsStr::from_bytes(b"m\xfe.json");

        let base = layout.base_name(first).expect("json suffix");
        assert_eq!(base.as_bytes(), b"m\xff");
        let artifact = layout.artifact_path(Path::new("out"), base);
        assert_eq!(artifact.file_name().unwrap().as_bytes(), b"m\xff.sta");

        let other = layout.artifact_path(Path::new("out"), layout.base_name(second).unwrap());
        assert_ne!(artifact, other);
    }

    #[test]
    fn rejects_invalid_suffixes() {
        assert!(matches!(ConversionLayout::new("json", ".sta"), Err(DomainError::InvalidSuffix { .. })));
        assert!(matches!(ConversionLayout::new(".", ".sta"), Err(DomainError::InvalidSuffix { .. })));
        assert!(matches!(ConversionLayout::new(".json", ".a/b"), Err(DomainError::InvalidSuffix { .. })));
        assert!(matches!(
            ConversionLayout::new(".json", ".json"),
            Err(DomainError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn policy_defaults_to_abort() {
        assert_eq!(FailurePolicy::default(), FailurePolicy::Abort);
    }
}
