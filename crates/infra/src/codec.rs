// crates/infra/src/codec.rs
//! STA binary codec.
//!
//! An artifact is a little-endian `i32` magic (`0x19910929`) followed by one
//! tagged value; see [`value::TypeCode`] for the tags.

pub mod commands;
mod location;
pub mod reader;
pub mod value;
pub mod writer;

use std::path::Path;

use sta_convert_domain::BinaryMode;
use sta_convert_ports::codec::Codec;
use sta_convert_shared_kernel::{ErrorContext, InfrastructureError, Result};
use tracing::debug;

pub use commands::CommandContext;
pub use value::{STA_MAGIC, StaValue};

use crate::persistence::{FileReader, FileWriter};

/// `Codec` adapter converting JSON sources into STA artifacts.
#[derive(Debug, Default)]
pub struct StaCodec;

impl StaCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for StaCodec {
    fn encode(&self, source: &Path, artifact: &Path) -> Result<()> {
        let text = FileReader::read_to_end(source)?;
        let json: serde_json::Value = serde_json::from_slice(&text)
            .map_err(InfrastructureError::from)
            .with_context(|| format!("parsing '{}'", source.display()))?;

        let document = commands::from_json(&json, &CommandContext::for_source(source))
            .with_context(|| format!("encoding '{}'", source.display()))?;
        let bytes = writer::encode_document(&document)?;

        FileWriter::atomic_write(artifact, &bytes)?;
        debug!(artifact = %artifact.display(), bytes = bytes.len(), "wrote artifact");
        Ok(())
    }

    fn decode(&self, artifact: &Path, mode: BinaryMode) -> Result<serde_json::Value> {
        let bytes = FileReader::read_to_end(artifact)?;
        let document = reader::decode_document(&bytes)?;
        Ok(document.into_json(mode))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use sta_convert_shared_kernel::{CodecError, StaConvertError};

    use super::*;

    #[test]
    fn encode_then_decode_preserves_structure() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("model.json");
        let artifact = dir.path().join("model.sta");
        fs::write(&source, r#"{"name": "net", "shape": [1, 3, 224, 224], "mean": 0.5, "blob": "@base64@AQID"}"#)
            .unwrap();

        let codec = StaCodec::new();
        codec.encode(&source, &artifact).expect("encode");
        let decoded = codec.decode(&artifact, BinaryMode::Placeholder).expect("decode");

        assert_eq!(
            decoded,
            json!({"blob": "@binary@3", "mean": 0.5, "name": "net", "shape": [1, 3, 224, 224]})
        );
        assert_eq!(&fs::read(&artifact).unwrap()[..4], &STA_MAGIC.to_le_bytes());
    }

    #[test]
    fn malformed_json_leaves_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bad.json");
        let artifact = dir.path().join("bad.sta");
        fs::write(&source, "{ not json").unwrap();

        let err = StaCodec::new().encode(&source, &artifact).unwrap_err();

        assert!(err.to_string().contains("parsing"));
        assert!(!artifact.exists());
    }

    #[test]
    fn decoding_a_json_file_is_a_codec_error() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("fake.sta");
        fs::write(&artifact, "{}").unwrap();

        let err = StaCodec::new().decode(&artifact, BinaryMode::default()).unwrap_err();

        assert!(matches!(err.root(), StaConvertError::Codec(CodecError::BadMagic { .. })));
    }

    #[test]
    fn decoding_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StaCodec::new().decode(&dir.path().join("none.sta"), BinaryMode::default()).unwrap_err();
        assert!(matches!(err, StaConvertError::Infrastructure(InfrastructureError::FileRead { .. })));
    }
}
