// crates/shared-kernel/src/value_objects/mod.rs
pub mod modification_time;

pub use modification_time::ModificationTime;
