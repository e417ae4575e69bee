// src/app.rs
use std::{ffi::OsString, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use sta_convert_infra::{
    codec::StaCodec,
    filesystem::StdFileSystem,
    presentation::{ConsoleReporter, JsonPrinter},
};
use sta_convert_ports::{printer::StructuredPrinter, progress::ProgressSink};
use sta_convert_shared_kernel::{PresentationError, StaConvertError};
use sta_convert_usecase::{BatchConvert, ViewArtifact};
use tracing::info;

use crate::{
    cli::{BatchSettings, ConvertArgs, ViewArgs, ViewSettings},
    logging,
};

/// How a run that did not fail outright ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Clean,
    /// Completed under `--keep-going` with at least one failed file.
    PartialFailure,
}

impl RunOutcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Clean => ExitCode::SUCCESS,
            Self::PartialFailure => ExitCode::from(2),
        }
    }
}

/// Entry point of `json2sta`.
pub fn convert_main<I, T>(argv: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match ConvertArgs::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => return clap_exit(&err),
    };
    logging::init(args.verbosity);

    let settings = match BatchSettings::try_from(args) {
        Ok(settings) => settings,
        Err(err) => return settings_exit(err),
    };
    match run_batch(&settings, &ConsoleReporter::stdout()) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => fatal_exit(&err),
    }
}

/// Entry point of `viewsta`.
pub fn view_main<I, T>(argv: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match ViewArgs::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => return clap_exit(&err),
    };
    logging::init(args.verbosity);

    let settings = match ViewSettings::try_from(args) {
        Ok(settings) => settings,
        Err(err) => return settings_exit(err),
    };
    match run_view(&settings, &JsonPrinter::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fatal_exit(&err),
    }
}

/// Convert every stale source of the planned directory.
///
/// # Errors
///
/// Listing failures and, under the default policy, the first per-file
/// failure.
pub fn run_batch(settings: &BatchSettings, progress: &dyn ProgressSink) -> Result<RunOutcome> {
    let filesystem = StdFileSystem::new();
    let codec = StaCodec::new();
    let plan = &settings.plan;

    let report = BatchConvert::new(&filesystem, &codec, progress)
        .run(plan)
        .with_context(|| format!("batch conversion of '{}' failed", plan.input_dir.display()))?;

    if report.is_clean() {
        Ok(RunOutcome::Clean)
    } else {
        info!(failed = report.failures.len(), "run completed with failures");
        Ok(RunOutcome::PartialFailure)
    }
}

/// Decode one artifact and print it.
///
/// # Errors
///
/// Read and decode failures, or a failed write to the printer.
pub fn run_view(settings: &ViewSettings, printer: &dyn StructuredPrinter) -> Result<()> {
    let codec = StaCodec::new();
    ViewArtifact::new(&codec, printer).run(&settings.artifact, settings.mode)?;
    Ok(())
}

fn clap_exit(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn settings_exit(err: StaConvertError) -> ExitCode {
    match err {
        StaConvertError::Presentation(usage @ PresentationError::Usage { .. }) => println!("{usage}"),
        other => eprintln!("Error: {other}"),
    }
    ExitCode::FAILURE
}

fn fatal_exit(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {}", render_chain(err));
    ExitCode::FAILURE
}

/// Join the error chain, skipping causes already spelled out by an outer message.
fn render_chain(err: &anyhow::Error) -> String {
    let mut message = err.to_string();
    for cause in err.chain().skip(1) {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn partial_failure_exits_with_two() {
        assert_eq!(RunOutcome::Clean.exit_code(), ExitCode::SUCCESS);
        assert_eq!(RunOutcome::PartialFailure.exit_code(), ExitCode::from(2));
    }

    #[test]
    fn render_chain_skips_repeated_causes() {
        let inner = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = anyhow::Error::new(inner).context("reading 'a.json'").context("batch failed");
        assert_eq!(render_chain(&err), "batch failed: reading 'a.json': gone");

        let sta: StaConvertError = PresentationError::Usage { usage: "x".into() }.into();
        let err = anyhow::Error::new(sta);
        assert_eq!(render_chain(&err), "Presentation error: Usage: x");
    }
}
