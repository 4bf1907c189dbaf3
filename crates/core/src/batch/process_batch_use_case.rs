use std::fs;
use std::path::Path;

use super::batch_error::BatchError;
use super::batch_logger::BatchLogger;
use super::batch_report::BatchReport;
use super::path_list::read_path_list;
use super::process_image_use_case::{ImageOutcome, ProcessImageUseCase};

/// Batch pipeline: read list → create output dir → process each image in order.
///
/// Only an unreadable list or an uncreatable output directory aborts the
/// run; per-image failures end up in the returned [`BatchReport`].
pub struct ProcessBatchUseCase {
    image: ProcessImageUseCase,
    logger: Box<dyn BatchLogger>,
}

impl ProcessBatchUseCase {
    pub fn new(image: ProcessImageUseCase, logger: Box<dyn BatchLogger>) -> Self {
        Self { image, logger }
    }

    pub fn execute(&mut self, list_path: &Path, output_dir: &Path) -> Result<BatchReport, BatchError> {
        let inputs = read_path_list(list_path)?;
        fs::create_dir_all(output_dir).map_err(|source| BatchError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;
        log::info!(
            "Processing {} images from {} into {}",
            inputs.len(),
            list_path.display(),
            output_dir.display()
        );

        let mut report = BatchReport::default();
        for input in &inputs {
            match self.image.execute(input, output_dir, self.logger.as_mut()) {
                ImageOutcome::Saved { output, .. } => report.saved.push(output),
                ImageOutcome::Failed { .. } => report.failed.push(input.clone()),
            }
        }

        self.logger.summary(&report);
        Ok(report)
    }
}
