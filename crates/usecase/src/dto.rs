use std::path::PathBuf;

use sta_convert_domain::{ConversionLayout, FailurePolicy, RunSummary};
use sta_convert_shared_kernel::StaConvertError;

/// Input of one batch run.
#[derive(Debug, Clone)]
pub struct ConversionPlan {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub layout: ConversionLayout,
    pub policy: FailurePolicy,
}

impl ConversionPlan {
    /// Plan writing artifacts next to their sources with the default layout.
    pub fn in_place(input_dir: impl Into<PathBuf>) -> Self {
        let input_dir = input_dir.into();
        Self {
            output_dir: input_dir.clone(),
            input_dir,
            layout: ConversionLayout::default(),
            policy: FailurePolicy::default(),
        }
    }
}

/// A file whose conversion failed under [`FailurePolicy::Continue`].
#[derive(Debug)]
pub struct FileFailure {
    pub source: PathBuf,
    pub error: StaConvertError,
}

/// Outcome of a completed batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub summary: RunSummary,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
