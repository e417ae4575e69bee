//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Directory listing and modification times
//! - [`codec`]: Encoding sources into artifacts and decoding them back
//! - [`progress`]: Per-file progress and the final run summary
//! - [`printer`]: Rendering a decoded document for humans
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod codec;
pub mod filesystem;
pub mod printer;
pub mod progress;
