//! Incremental JSON to STA conversion.
//!
//! The library half of the `json2sta` and `viewsta` binaries: argument
//! parsing, logging bootstrap and the wiring of infrastructure adapters into
//! the use cases.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod logging;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
