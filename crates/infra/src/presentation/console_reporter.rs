// crates/infra/src/presentation/console_reporter.rs
use std::{
    io::{self, Write},
    path::Path,
    sync::Mutex,
};

use sta_convert_domain::RunSummary;
use sta_convert_ports::progress::ProgressSink;
use sta_convert_shared_kernel::{ApplicationError, Result, StaConvertError};

/// Writes one progress line per file and the final summary.
pub struct ConsoleReporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out: Mutex::new(out) }
    }

    fn line(&self, text: std::fmt::Arguments<'_>) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ApplicationError::ReportingFailed { reason: "output lock poisoned".into() })?;
        out.write_fmt(text)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

impl ProgressSink for ConsoleReporter {
    fn on_convert(&self, source: &Path) -> Result<()> {
        self.line(format_args!("Converting {}", source.display()))
    }

    fn on_keep(&self, source: &Path) -> Result<()> {
        self.line(format_args!("Keeping {}", source.display()))
    }

    fn on_failure(&self, source: &Path, error: &StaConvertError) -> Result<()> {
        self.line(format_args!("Failed {}: {error}", source.display()))
    }

    fn on_summary(&self, summary: &RunSummary, failed: usize) -> Result<()> {
        self.line(format_args!("{summary}"))?;
        if failed > 0 {
            self.line(format_args!("Failed: {failed}"))?;
        }
        let mut out = self
            .out
            .lock()
            .map_err(|_| ApplicationError::ReportingFailed { reason: "output lock poisoned".into() })?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sta_convert_shared_kernel::CodecError;

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn writes_progress_contract_lines() {
        let buf = SharedBuf::default();
        let reporter = ConsoleReporter::new(Box::new(buf.clone()));

        reporter.on_convert(Path::new("in/a.json")).unwrap();
        reporter.on_keep(Path::new("in/b.json")).unwrap();
        reporter.on_summary(&RunSummary { converted: 1, kept: 1 }, 0).unwrap();

        assert_eq!(buf.text(), "Converting in/a.json\nKeeping in/b.json\nTotal: 2. Modified: 1, kept: 1\n");
    }

    #[test]
    fn failures_get_their_own_lines() {
        let buf = SharedBuf::default();
        let reporter = ConsoleReporter::new(Box::new(buf.clone()));
        let error = StaConvertError::from(CodecError::UnexpectedEof { location: "<>".into() });

        reporter.on_failure(Path::new("in/c.json"), &error).unwrap();
        reporter.on_summary(&RunSummary::default(), 1).unwrap();

        let text = buf.text();
        assert!(text.starts_with("Failed in/c.json: Codec error: While reading <>"));
        assert!(text.ends_with("Total: 0. Modified: 0, kept: 0\nFailed: 1\n"));
    }
}
