use std::time::Duration;

/// Timing and sizing constants for the browse pipeline.
///
/// The extension delays simulate a round trip even though the data is
/// already local; they pace the interface rather than guard anything.
/// All of these are configuration, not invariants: callers may shorten
/// or zero them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pacing {
    /// Quiet interval before a raw search input becomes the applied term.
    pub debounce: Duration,
    /// Delay before a requested batch extension lands.
    pub batch_delay: Duration,
    /// Delay before a load-everything extension lands.
    pub load_all_delay: Duration,
    /// Fixed increment by which the display window grows.
    pub batch_size: usize,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            batch_delay: Duration::from_millis(500),
            load_all_delay: Duration::from_millis(1000),
            batch_size: 20,
        }
    }
}

impl Pacing {
    /// Zero-delay pacing for scripted commands and tests: the next tick
    /// settles any pending debounce or extension.
    pub fn immediate() -> Self {
        Self {
            debounce: Duration::ZERO,
            batch_delay: Duration::ZERO,
            load_all_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}
