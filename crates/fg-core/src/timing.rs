//! Lightweight timing for solves.
//!
//! Timings are always measured; they are reported through `tracing` at
//! debug level, or at info level when the `FG_TIMING` environment variable
//! is set.

use std::time::{Duration, Instant};

/// Check if timing reports should be promoted to info level.
pub fn is_enabled() -> bool {
    std::env::var("FG_TIMING").is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// Stop the timer and return the elapsed time.
    pub fn stop(self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and log the result, tagged with the problem size.
    pub fn stop_and_log(self, vertices: usize) -> Duration {
        let label = self.label;
        let elapsed = self.stop();
        let elapsed_ns = elapsed.as_nanos() as u64;
        if is_enabled() {
            tracing::info!(label, vertices, elapsed_ns, "timing");
        } else {
            tracing::debug!(label, vertices, elapsed_ns, "timing");
        }
        elapsed
    }
}
