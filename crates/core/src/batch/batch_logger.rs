use std::path::Path;

use crate::shared::region::SpotRegion;

use super::batch_error::ProcessError;
use super::batch_report::BatchReport;

/// Cross-cutting logger for batch events.
///
/// Decouples the use cases from the output mechanism so the CLI and tests
/// can observe a run without changing the orchestration code.
pub trait BatchLogger: Send {
    /// An image was darkened and written to `output`.
    fn saved(&mut self, input: &Path, output: &Path, region: &SpotRegion);

    /// One attempt failed; another will follow.
    fn attempt_failed(&mut self, input: &Path, attempt: u32, max_attempts: u32, error: &ProcessError);

    /// All attempts failed; the image is skipped.
    fn failed(&mut self, input: &Path, attempts: u32, error: &ProcessError);

    /// Emit an end-of-batch summary. Default: no-op.
    fn summary(&self, _report: &BatchReport) {}
}

/// Silent logger that discards all events.
pub struct NullBatchLogger;

impl BatchLogger for NullBatchLogger {
    fn saved(&mut self, _input: &Path, _output: &Path, _region: &SpotRegion) {}
    fn attempt_failed(&mut self, _input: &Path, _attempt: u32, _max: u32, _error: &ProcessError) {}
    fn failed(&mut self, _input: &Path, _attempts: u32, _error: &ProcessError) {}
}

/// Console logger on top of the `log` facade.
///
/// Successes are reported as `Saved: <path>`, retries at warn level and
/// exhausted images at error level.
pub struct LogBatchLogger;

impl LogBatchLogger {
    pub fn summary_string(report: &BatchReport) -> String {
        format!(
            "Batch finished: {} saved, {} failed ({} total)",
            report.saved.len(),
            report.failed.len(),
            report.total()
        )
    }
}

impl BatchLogger for LogBatchLogger {
    fn saved(&mut self, input: &Path, output: &Path, region: &SpotRegion) {
        log::debug!(
            "{}: spot at ({}, {}) radius {} strength {}",
            input.display(),
            region.center_x,
            region.center_y,
            region.radius,
            region.strength
        );
        log::info!("Saved: {}", output.display());
    }

    fn attempt_failed(&mut self, input: &Path, attempt: u32, max_attempts: u32, error: &ProcessError) {
        log::warn!(
            "Attempt {attempt}/{max_attempts} for {} failed while {:?}: {error}",
            input.display(),
            error.state()
        );
    }

    fn failed(&mut self, input: &Path, attempts: u32, error: &ProcessError) {
        log::error!(
            "Failed to process {} after {attempts} attempts: {error}",
            input.display()
        );
    }

    fn summary(&self, report: &BatchReport) {
        log::info!("{}", Self::summary_string(report));
    }
}
