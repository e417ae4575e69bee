// crates/ports/src/codec.rs
use std::path::Path;

use sta_convert_domain::BinaryMode;
use sta_convert_shared_kernel::Result;

/// Port for the document codec.
///
/// `encode` writes the artifact for one source document; `decode` reads an
/// artifact back into a structured object.
pub trait Codec: Send + Sync {
    fn encode(&self, source: &Path, artifact: &Path) -> Result<()>;
    fn decode(&self, artifact: &Path, mode: BinaryMode) -> Result<serde_json::Value>;
}
