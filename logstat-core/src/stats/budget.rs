use crate::error::PipelineError;
use crate::stats::types::PipelineTotals;

pub const DEFAULT_ERROR_THRESHOLD: f64 = 0.05;

/// Maximum tolerated fraction of malformed lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBudget {
    threshold: f64,
}

impl Default for ErrorBudget {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_THRESHOLD)
    }
}

impl ErrorBudget {
    /// `threshold` is a fraction in `[0, 1]`; config validation enforces the
    /// range before a budget is built from user input.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Decide whether a fully consumed source may be reported on.
    pub fn check(&self, totals: &PipelineTotals) -> Result<(), PipelineError> {
        let total = totals.total_records;
        let malformed = totals.malformed_count;

        if should_abort(malformed, total, self.threshold)? {
            return Err(PipelineError::ParseQuality {
                ratio: malformed_ratio(malformed, total),
                malformed,
                total,
                threshold: self.threshold,
            });
        }

        if totals.well_formed() == 0 {
            return Err(PipelineError::NoData { total });
        }

        Ok(())
    }
}

/// `true` when `malformed / total` is strictly above `threshold`.
pub fn should_abort(malformed: u64, total: u64, threshold: f64) -> Result<bool, PipelineError> {
    if total == 0 {
        return Err(PipelineError::NoData { total });
    }

    Ok(malformed_ratio(malformed, total) > threshold)
}

pub fn malformed_ratio(malformed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    malformed as f64 / total as f64
}
