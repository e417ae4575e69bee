// crates/infra/src/presentation/json_printer.rs
use std::{
    io::{self, Write},
    sync::Mutex,
};

use sta_convert_ports::printer::StructuredPrinter;
use sta_convert_shared_kernel::{ApplicationError, Result};

/// Prints documents as JSON indented by two spaces.
pub struct JsonPrinter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonPrinter {
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out: Mutex::new(out) }
    }
}

impl StructuredPrinter for JsonPrinter {
    fn print(&self, document: &serde_json::Value) -> Result<()> {
        // Render fully before touching the output so a failure never leaves half a document.
        let mut text = serde_json::to_string_pretty(document)?;
        text.push('\n');
        let mut out = self
            .out
            .lock()
            .map_err(|_| ApplicationError::ReportingFailed { reason: "output lock poisoned".into() })?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
