//! Fixed-interval tick scheduling
//!
//! Hosts feed wall-clock frame time in; whole simulation ticks come out. The
//! simulation itself never looks at a clock.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;

/// Accumulates frame time and releases it as fixed ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps.max(1);
        self
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add elapsed frame time and return how many ticks to run now.
    ///
    /// At most `max_substeps` ticks are released per call; any backlog past
    /// that is dropped to prevent a spiral of death after a long stall.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.interval && ticks < self.max_substeps {
            self.accumulator -= self.interval;
            ticks += 1;
        }

        if self.accumulator >= self.interval {
            log::debug!(
                "Dropping {:?} of simulation backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        ticks
    }
}
