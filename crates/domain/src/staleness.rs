//! Freshness rule deciding whether a source must be re-encoded.

use sta_convert_shared_kernel::ModificationTime;

use crate::model::{ArtifactEntry, SourceEntry};

/// Outcome of comparing a source with its artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionDecision {
    Convert,
    Keep,
}

/// A source is stale when its artifact is strictly older.
///
/// Equal timestamps count as current.
#[inline]
pub fn is_stale(source_time: ModificationTime, artifact_time: ModificationTime) -> bool {
    artifact_time < source_time
}

impl ConversionDecision {
    pub fn between(source: &SourceEntry, artifact: &ArtifactEntry) -> Self {
        if is_stale(source.modified, artifact.modified) { Self::Convert } else { Self::Keep }
    }
}
