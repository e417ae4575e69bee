#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;
pub mod options;
pub mod staleness;

pub use config::{ConversionLayout, FailurePolicy};
pub use model::{ArtifactEntry, RunSummary, SourceEntry};
pub use options::BinaryMode;
pub use staleness::{ConversionDecision, is_stale};
