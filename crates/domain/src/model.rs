pub mod entities;
pub mod value_objects;

pub use entities::{ArtifactEntry, SourceEntry};
pub use value_objects::RunSummary;
