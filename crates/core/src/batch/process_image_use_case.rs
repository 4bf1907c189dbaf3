use std::path::{Path, PathBuf};

use crate::darkening::domain::frame_darkener::FrameDarkener;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::frame::Frame;
use crate::shared::region::SpotRegion;

use super::batch_error::ProcessError;
use super::batch_logger::BatchLogger;
use super::image_state::ImageState;

/// Result of processing one image.
#[derive(Debug)]
pub enum ImageOutcome {
    Saved {
        output: PathBuf,
        region: SpotRegion,
        attempts: u32,
    },
    Failed {
        attempts: u32,
        error: ProcessError,
    },
}

impl ImageOutcome {
    pub fn state(&self) -> ImageState {
        match self {
            Self::Saved { .. } => ImageState::Done,
            Self::Failed { .. } => ImageState::Failed,
        }
    }

    pub fn attempts(&self) -> u32 {
        match self {
            Self::Saved { attempts, .. } | Self::Failed { attempts, .. } => *attempts,
        }
    }
}

/// Work carried between the states of a single attempt.
enum Stage {
    Loading,
    Transforming(Frame),
    Saving(Frame, SpotRegion),
}

/// Single-image pipeline: load → darken → save, retried as a whole.
///
/// Every attempt decodes the input again, so a failed attempt never
/// leaves a half-darkened buffer behind for the next one.
pub struct ProcessImageUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    darkener: Box<dyn FrameDarkener>,
    max_retries: u32,
}

impl ProcessImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        darkener: Box<dyn FrameDarkener>,
        max_retries: u32,
    ) -> Self {
        Self {
            reader,
            writer,
            darkener,
            max_retries: max_retries.max(1),
        }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Processes `input` into `output_dir`, retrying up to `max_retries`
    /// attempts. Errors are reported through `logger`, never returned.
    pub fn execute(
        &mut self,
        input: &Path,
        output_dir: &Path,
        logger: &mut dyn BatchLogger,
    ) -> ImageOutcome {
        let mut attempt = 0;
        loop {
            attempt += 1;
            log::trace!("{}: {:?} (attempt {attempt})", input.display(), ImageState::Pending);

            match self.attempt(input, output_dir) {
                Ok((output, region)) => {
                    logger.saved(input, &output, &region);
                    return ImageOutcome::Saved {
                        output,
                        region,
                        attempts: attempt,
                    };
                }
                Err(error) if attempt < self.max_retries => {
                    logger.attempt_failed(input, attempt, self.max_retries, &error);
                }
                Err(error) => {
                    logger.failed(input, attempt, &error);
                    return ImageOutcome::Failed {
                        attempts: attempt,
                        error,
                    };
                }
            }
        }
    }

    fn attempt(
        &mut self,
        input: &Path,
        output_dir: &Path,
    ) -> Result<(PathBuf, SpotRegion), ProcessError> {
        let mut stage = Stage::Loading;
        loop {
            stage = match stage {
                Stage::Loading => {
                    let frame = self.reader.read(input).map_err(|source| ProcessError::Load {
                        path: input.to_path_buf(),
                        source,
                    })?;
                    Stage::Transforming(frame)
                }
                Stage::Transforming(mut frame) => {
                    let region = self.darkener.darken(&mut frame)?;
                    Stage::Saving(frame, region)
                }
                Stage::Saving(frame, region) => {
                    let output = self.save(input, output_dir, &frame)?;
                    return Ok((output, region));
                }
            };
        }
    }

    fn save(&self, input: &Path, output_dir: &Path, frame: &Frame) -> Result<PathBuf, ProcessError> {
        let file_name = input.file_name().ok_or_else(|| ProcessError::Save {
            path: input.to_path_buf(),
            source: "input path has no file name".into(),
        })?;
        let output = output_dir.join(file_name);
        self.writer
            .write(&output, frame)
            .map_err(|source| ProcessError::Save {
                path: output.clone(),
                source,
            })?;
        Ok(output)
    }
}
