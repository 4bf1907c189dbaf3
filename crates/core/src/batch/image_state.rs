/// Lifecycle of one image within a batch.
///
/// `Pending -> Loading -> Transforming -> Saving -> Done`, with any failure
/// returning to `Pending` until the attempts run out, then `Failed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageState {
    Pending,
    Loading,
    Transforming,
    Saving,
    Done,
    Failed,
}

impl ImageState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}
