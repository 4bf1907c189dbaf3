use std::path::PathBuf;

/// Outcome of a batch run: written outputs and inputs that exhausted their attempts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.saved.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}
