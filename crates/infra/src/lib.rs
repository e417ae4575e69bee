// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod codec;
pub mod filesystem;
pub mod persistence;
pub mod presentation;
