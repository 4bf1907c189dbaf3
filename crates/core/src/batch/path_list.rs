use std::fs;
use std::path::{Path, PathBuf};

use super::batch_error::BatchError;

/// Reads a newline-separated list of image paths.
pub fn read_path_list(list_path: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let contents = fs::read_to_string(list_path).map_err(|source| BatchError::ListFile {
        path: list_path.to_path_buf(),
        source,
    })?;
    Ok(parse_path_list(&contents))
}

/// One path per non-blank line, with surrounding whitespace trimmed.
pub fn parse_path_list(contents: &str) -> Vec<PathBuf> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
