// src/cli/settings.rs
use std::path::PathBuf;

use sta_convert_domain::{BinaryMode, ConversionLayout, FailurePolicy};
use sta_convert_shared_kernel::{PresentationError, StaConvertError};
use sta_convert_usecase::ConversionPlan;

use super::args::{ConvertArgs, ViewArgs};

pub const CONVERT_USAGE: &str = "json2sta input_dir [output_dir]";
pub const VIEW_USAGE: &str = "viewsta filename.sta";

/// Validated configuration of a batch run.
#[derive(Debug, Clone)]
pub struct BatchSettings {
    pub plan: ConversionPlan,
}

impl TryFrom<ConvertArgs> for BatchSettings {
    type Error = StaConvertError;

    fn try_from(args: ConvertArgs) -> Result<Self, Self::Error> {
        let input_dir = args.input_dir.ok_or_else(|| usage(CONVERT_USAGE))?;
        let output_dir = args.output_dir.unwrap_or_else(|| input_dir.clone());
        let layout = ConversionLayout::new(args.source_suffix, args.artifact_suffix)?;
        let policy = if args.keep_going { FailurePolicy::Continue } else { FailurePolicy::Abort };

        Ok(Self { plan: ConversionPlan { input_dir, output_dir, layout, policy } })
    }
}

/// Validated configuration of one viewer invocation.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub artifact: PathBuf,
    pub mode: BinaryMode,
}

impl TryFrom<ViewArgs> for ViewSettings {
    type Error = StaConvertError;

    fn try_from(args: ViewArgs) -> Result<Self, Self::Error> {
        let artifact = args.filename.ok_or_else(|| usage(VIEW_USAGE))?;
        let mode = BinaryMode::try_from(args.binary_mode)?;
        Ok(Self { artifact, mode })
    }
}

fn usage(line: &str) -> StaConvertError {
    PresentationError::Usage { usage: line.to_string() }.into()
}
