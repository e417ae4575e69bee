// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, CodecError, CodecResult, DomainError, DomainResult, ErrorContext, InfraResult,
    InfrastructureError, PresentationError, Result, StaConvertError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::ModificationTime;
