use std::path::PathBuf;

use crate::shared::constants::DEFAULT_MAX_RETRIES;

/// Inputs of one batch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Text file listing one image path per line.
    pub input_list_path: PathBuf,
    /// Directory receiving the darkened images; created if absent.
    pub output_dir: PathBuf,
    /// Attempts per image, counting the first one.
    pub max_retries: u32,
}

impl BatchConfig {
    pub fn new(input_list_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_list_path: input_list_path.into(),
            output_dir: output_dir.into(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_retries() {
        let config = BatchConfig::new("list.txt", "out");
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.input_list_path, PathBuf::from("list.txt"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_with_max_retries() {
        let config = BatchConfig::new("list.txt", "out").with_max_retries(2);
        assert_eq!(config.max_retries, 2);
    }
}
