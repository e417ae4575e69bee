use std::path::Path;

use sta_convert_domain::BinaryMode;
use sta_convert_ports::{codec::Codec, printer::StructuredPrinter};
use sta_convert_shared_kernel::{ErrorContext, Result};
use tracing::debug;

/// Decode one artifact and hand it to a printer.
pub struct ViewArtifact<'a> {
    codec: &'a dyn Codec,
    printer: &'a dyn StructuredPrinter,
}

impl<'a> ViewArtifact<'a> {
    pub fn new(codec: &'a dyn Codec, printer: &'a dyn StructuredPrinter) -> Self {
        Self { codec, printer }
    }

    /// # Errors
    ///
    /// Decode errors propagate before anything is printed.
    pub fn run(&self, artifact: &Path, mode: BinaryMode) -> Result<()> {
        debug!(artifact = %artifact.display(), %mode, "decoding artifact");
        let document = self
            .codec
            .decode(artifact, mode)
            .with_context(|| format!("cannot decode '{}'", artifact.display()))?;
        self.printer.print(&document)
    }
}
