// crates/ports/src/progress.rs
use std::path::Path;

use sta_convert_domain::RunSummary;
use sta_convert_shared_kernel::{Result, StaConvertError};

pub trait ProgressSink: Send + Sync {
    fn on_convert(&self, source: &Path) -> Result<()>;
    fn on_keep(&self, source: &Path) -> Result<()>;
    fn on_failure(&self, source: &Path, error: &StaConvertError) -> Result<()>;
    fn on_summary(&self, summary: &RunSummary, failed: usize) -> Result<()>;
}
