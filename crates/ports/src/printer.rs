// crates/ports/src/printer.rs
use sta_convert_shared_kernel::Result;

pub trait StructuredPrinter: Send + Sync {
    fn print(&self, document: &serde_json::Value) -> Result<()>;
}
