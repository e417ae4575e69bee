use std::{
    ffi::OsStr,
    io,
    path::{Path, PathBuf},
};

use sta_convert_domain::{ArtifactEntry, ConversionDecision, FailurePolicy, SourceEntry};
use sta_convert_ports::{codec::Codec, filesystem::FileSystem, progress::ProgressSink};
use sta_convert_shared_kernel::{ApplicationError, InfrastructureError, Result, StaConvertError};
use tracing::{debug, info, warn};

use crate::dto::{BatchReport, ConversionPlan, FileFailure};

/// One-pass incremental conversion of every eligible file in a directory.
pub struct BatchConvert<'a> {
    filesystem: &'a dyn FileSystem,
    codec: &'a dyn Codec,
    progress: &'a dyn ProgressSink,
}

impl<'a> BatchConvert<'a> {
    pub fn new(filesystem: &'a dyn FileSystem, codec: &'a dyn Codec, progress: &'a dyn ProgressSink) -> Self {
        Self { filesystem, codec, progress }
    }

    /// Convert every stale source listed directly in `plan.input_dir`.
    ///
    /// # Errors
    ///
    /// Listing the input directory is always fatal. A per-file failure is fatal under
    /// [`FailurePolicy::Abort`]; in that case no summary is reported.
    pub fn run(&self, plan: &ConversionPlan) -> Result<BatchReport> {
        let entries = self.filesystem.list_dir(&plan.input_dir).map_err(|err| {
            ApplicationError::SourceListingFailed {
                path: plan.input_dir.clone(),
                reason: err.to_string(),
                source: Some(Box::new(err)),
            }
        })?;

        let mut report = BatchReport::default();
        for entry in entries {
            if entry.is_dir {
                continue;
            }
            let Some(base_name) = plan.layout.base_name(&entry.name) else {
                continue;
            };

            let (source, artifact, decision) = match self.compare(plan, &entry.path, base_name) {
                Ok(compared) => compared,
                Err(err) => {
                    self.fail(plan, &mut report, entry.path, err)?;
                    continue;
                }
            };

            // progress errors are fatal under every policy
            match decision {
                ConversionDecision::Convert => {
                    self.progress.on_convert(source.path())?;
                    if let Err(err) = self.codec.encode(source.path(), artifact.path()) {
                        self.fail(plan, &mut report, entry.path, err)?;
                        continue;
                    }
                    info!(source = %source.path().display(), artifact = %artifact.path().display(), "converted");
                }
                ConversionDecision::Keep => self.progress.on_keep(source.path())?,
            }
            report.summary.record(decision);
        }

        info!(
            total = report.summary.total(),
            converted = report.summary.converted,
            kept = report.summary.kept,
            failed = report.failures.len(),
            "batch finished"
        );
        self.progress.on_summary(&report.summary, report.failures.len())?;
        Ok(report)
    }

    fn compare(
        &self,
        plan: &ConversionPlan,
        source_path: &Path,
        base_name: &OsStr,
    ) -> Result<(SourceEntry, ArtifactEntry, ConversionDecision)> {
        let source_time = self.filesystem.modified(source_path)?.ok_or_else(|| vanished(source_path))?;
        let source = SourceEntry::new(source_path, base_name, source_time);

        let artifact_path = plan.layout.artifact_path(&plan.output_dir, base_name);
        let artifact_time = self.filesystem.modified(&artifact_path)?;
        let artifact = ArtifactEntry::new(artifact_path, artifact_time);

        let decision = ConversionDecision::between(&source, &artifact);
        debug!(
            source = %source.path().display(),
            source_time = %source.modified,
            artifact_exists = artifact.exists(),
            artifact_time = %artifact.modified,
            ?decision,
            "compared timestamps"
        );
        Ok((source, artifact, decision))
    }

    /// Abort the run or record the failure, depending on the plan's policy.
    fn fail(&self, plan: &ConversionPlan, report: &mut BatchReport, source: PathBuf, err: StaConvertError) -> Result<()> {
        match plan.policy {
            FailurePolicy::Abort => Err(ApplicationError::ConversionFailed { path: source, source: Box::new(err) }.into()),
            FailurePolicy::Continue => {
                warn!(source = %source.display(), error = %err, "conversion failed, continuing");
                self.progress.on_failure(&source, &err)?;
                report.failures.push(FileFailure { source, error: err });
                Ok(())
            }
        }
    }
}

fn vanished(path: &Path) -> StaConvertError {
    InfrastructureError::FileSystemOperation {
        operation: "stat".into(),
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::NotFound, "source disappeared after listing"),
    }
    .into()
}
