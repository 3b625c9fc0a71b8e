/// Load lifecycle for one browsing session.
///
/// `Failed` is terminal: it transitions back to `Loading` only through a
/// full session reload, never a scoped retry of the fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Human-readable message describing why the load failed.
    Failed(String),
}

impl LoadStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
