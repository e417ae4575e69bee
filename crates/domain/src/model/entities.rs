pub mod artifact_entry;
pub mod source_entry;

pub use artifact_entry::ArtifactEntry;
pub use source_entry::SourceEntry;
