use std::fmt;

use serde::Serialize;

use crate::staleness::ConversionDecision;

/// Aggregate counters for one batch run.
///
/// The total is derived, so `total() == converted + kept` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub converted: usize,
    pub kept: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.converted + self.kept
    }

    pub fn record(&mut self, decision: ConversionDecision) {
        match decision {
            ConversionDecision::Convert => self.converted += 1,
            ConversionDecision::Keep => self.kept += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total: {}. Modified: {}, kept: {}", self.total(), self.converted, self.kept)
    }
}
