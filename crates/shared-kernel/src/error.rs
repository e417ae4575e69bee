// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum StaConvertError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<StaConvertError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, StaConvertError>;

impl StaConvertError {
    /// Walks through `Context` wrappers and returns the innermost error.
    pub fn root(&self) -> &StaConvertError {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid suffix '{suffix}': {reason}")]
    InvalidSuffix { suffix: String, reason: String },

    #[error("Unknown binary mode {0}")]
    UnknownBinaryMode(u8),
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to list source directory '{path}': {reason}")]
    SourceListingFailed {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<Box<StaConvertError>>,
    },

    #[error("Failed to convert '{path}'")]
    ConversionFailed {
        path: PathBuf,
        #[source]
        source: Box<StaConvertError>,
    },

    #[error("Failed to report progress: {reason}")]
    ReportingFailed { reason: String },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Errors raised while encoding or decoding STA documents.
///
/// `location` is a document path such as `<>.layers[2].name`.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("While reading {location}: unexpected end of stream")]
    UnexpectedEof { location: String },

    #[error("Not an STA artifact: expected magic 0x{expected:08x}, found 0x{found:08x}")]
    BadMagic { expected: u32, found: u32 },

    #[error("While reading {location}: unknown type code {code}")]
    UnknownTypeCode { location: String, code: u8 },

    #[error("While reading {location}: negative length {length}")]
    NegativeLength { location: String, length: i32 },

    #[error("While reading {location}: nesting exceeds {limit} levels")]
    TooDeep { location: String, limit: usize },

    #[error("While reading {location}: string is not valid UTF-8")]
    InvalidUtf8 { location: String },

    #[error("While writing {location}: integer {value} does not fit in 32 bits")]
    IntegerOutOfRange { location: String, value: String },

    #[error("While writing {location}: {len} items exceed the 32-bit length limit")]
    LengthOverflow { location: String, len: usize },

    #[error("While writing {location}: not supported command: {command}")]
    UnsupportedCommand { location: String, command: String },

    #[error("While writing {location}: command format error, should be @{command}@...")]
    MalformedCommand { location: String, command: String },

    #[error("While writing {location}: {path} is not a valid file")]
    InvalidEmbeddedFile { location: String, path: PathBuf },

    #[error("While writing {location}: invalid base64 payload: {details}")]
    InvalidBase64 { location: String, details: String },
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Usage: {usage}")]
    Usage { usage: String },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for StaConvertError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StaConvertError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<StaConvertError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| StaConvertError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| StaConvertError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_unwraps_nested_context() {
        let err: Result<()> = Err(DomainError::UnknownBinaryMode(9).into());
        let err = err.context("decoding").context("viewing").unwrap_err();
        assert!(matches!(err.root(), StaConvertError::Domain(DomainError::UnknownBinaryMode(9))));
    }

    #[test]
    fn codec_error_names_location() {
        let err = CodecError::UnexpectedEof { location: "<>.a[1]".into() };
        assert_eq!(err.to_string(), "While reading <>.a[1]: unexpected end of stream");
    }
}
