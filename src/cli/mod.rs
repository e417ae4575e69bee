// src/cli/mod.rs
pub mod args;
pub mod settings;

pub use args::{ConvertArgs, Verbosity, ViewArgs};
pub use settings::{BatchSettings, ViewSettings};
