//! Elapsed-time measurement for solver budgets and log fields.
//!
//! `std::time::Instant` panics on `wasm32-unknown-unknown`, which has no
//! clock in `std`. There a [`Stopwatch`] never reads the clock and
//! [`Stopwatch::elapsed`] is always `None`; callers fall back to their
//! iteration caps.

use std::time::Duration;

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
use std::time::Instant;

/// Started on creation; read as often as needed.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    started: Instant,
}

impl Stopwatch {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
            started: Instant::now(),
        }
    }

    /// Time since [`Stopwatch::start`], or `None` without a clock.
    pub fn elapsed(&self) -> Option<Duration> {
        #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
        {
            Some(self.started.elapsed())
        }
        #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
        {
            None
        }
    }

    /// Elapsed microseconds for log fields.
    pub fn elapsed_us(&self) -> Option<u64> {
        self.elapsed()
            .map(|d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
    }

    /// Whether more than `budget` has passed. Always `false` without a clock.
    pub fn exceeded(&self, budget: Duration) -> bool {
        self.elapsed().map_or(false, |e| e > budget)
    }
}
