use std::time::{Duration, Instant};

/// Kind of extension currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extension {
    NextBatch,
    Remainder,
}

/// Growing prefix of the filtered view.
///
/// `loaded` is monotonically non-decreasing for a given filtered view and
/// resets to the initial batch on `reset`. At most one extension is in
/// flight; requests made while one is pending are ignored (no queueing,
/// no cancellation). Extensions land when `tick` observes their deadline.
#[derive(Debug)]
pub struct PageWindow {
    loaded: usize,
    total: usize,
    batch_size: usize,
    pending: Option<(Extension, Instant)>,
}

impl PageWindow {
    pub fn new(total: usize, batch_size: usize) -> Self {
        Self {
            loaded: batch_size.min(total),
            total,
            batch_size,
            pending: None,
        }
    }

    /// The filtered view changed identity: shrink back to the initial
    /// batch and drop any in-flight extension.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.loaded = self.batch_size.min(total);
        self.pending = None;
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.loaded < self.total
    }

    pub fn is_extending(&self) -> bool {
        self.pending.is_some()
    }

    /// Request one more batch. Returns false when ignored (an extension is
    /// already in flight, or the window already covers the view).
    pub fn request_more(&mut self, now: Instant, delay: Duration) -> bool {
        if self.pending.is_some() || !self.has_more() {
            return false;
        }
        self.pending = Some((Extension::NextBatch, now + delay));
        true
    }

    /// Request the entire remainder, under the same single-flight guard.
    pub fn request_all(&mut self, now: Instant, delay: Duration) -> bool {
        if self.pending.is_some() || !self.has_more() {
            return false;
        }
        self.pending = Some((Extension::Remainder, now + delay));
        true
    }

    /// Land a pending extension whose deadline has passed. Returns true
    /// when the window grew.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some((extension, ready_at)) = self.pending else {
            return false;
        };
        if now < ready_at {
            return false;
        }
        self.pending = None;
        match extension {
            Extension::NextBatch => {
                self.loaded = (self.loaded + self.batch_size).min(self.total);
            }
            Extension::Remainder => {
                self.loaded = self.total;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_initial_window_clamps_to_total() {
        assert_eq!(PageWindow::new(5, 20).loaded(), 5);
        assert_eq!(PageWindow::new(50, 20).loaded(), 20);
    }

    #[test]
    fn test_more_lands_after_delay() {
        let now = Instant::now();
        let mut window = PageWindow::new(25, 20);
        assert!(window.request_more(now, DELAY));
        assert!(window.is_extending());

        // Not yet due.
        assert!(!window.tick(now));
        assert_eq!(window.loaded(), 20);

        assert!(window.tick(now + DELAY));
        assert_eq!(window.loaded(), 25);
        assert!(!window.has_more());
        assert!(!window.is_extending());
    }

    #[test]
    fn test_request_while_in_flight_is_ignored() {
        let now = Instant::now();
        let mut window = PageWindow::new(100, 20);
        assert!(window.request_more(now, DELAY));
        assert!(!window.request_more(now, DELAY));
        assert!(!window.request_all(now, DELAY));

        window.tick(now + DELAY);
        assert_eq!(window.loaded(), 40);
    }

    #[test]
    fn test_request_all_takes_everything() {
        let now = Instant::now();
        let mut window = PageWindow::new(100, 20);
        assert!(window.request_all(now, DELAY));
        window.tick(now + DELAY);
        assert_eq!(window.loaded(), 100);
        assert!(!window.has_more());
    }

    #[test]
    fn test_reset_cancels_pending() {
        let now = Instant::now();
        let mut window = PageWindow::new(100, 20);
        window.request_more(now, DELAY);
        window.reset(3);
        assert!(!window.is_extending());
        assert_eq!(window.loaded(), 3);
        assert!(!window.tick(now + DELAY));
        assert_eq!(window.loaded(), 3);
    }

    #[test]
    fn test_exhausted_window_ignores_requests() {
        let now = Instant::now();
        let mut window = PageWindow::new(10, 20);
        assert!(!window.request_more(now, DELAY));
        assert!(!window.request_all(now, DELAY));
    }
}
