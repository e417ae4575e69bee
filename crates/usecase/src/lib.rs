//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`orchestrator`]: Incremental batch conversion of a source directory
//! - [`viewer`]: Decoding and printing a single artifact
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod viewer;

pub use dto::{BatchReport, ConversionPlan, FileFailure};
pub use orchestrator::BatchConvert;
pub use viewer::ViewArtifact;
