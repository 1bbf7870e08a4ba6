//! Wall-clock budget for anytime construction.

use std::time::{Duration, Instant};

/// Monotonic time budget started at construction.
///
/// Checked cooperatively once per loop iteration, so a caller may overrun
/// the limit by up to one iteration.
#[derive(Debug, Clone, Copy)]
pub struct Budget {
    start: Instant,
    limit: Duration,
}

impl Budget {
    /// Starts the clock now.
    pub fn start(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// A budget that never runs out.
    pub fn unbounded() -> Self {
        Self::start(Duration::MAX)
    }

    /// Returns `true` once the elapsed time has reached the limit.
    ///
    /// A zero limit is exhausted immediately.
    #[inline]
    pub fn exhausted(&self) -> bool {
        self.start.elapsed() >= self.limit
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}
