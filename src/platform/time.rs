//! Millisecond clock

use std::time::{Duration, Instant};

/// Monotonic millisecond time source
pub trait Clock {
    /// Milliseconds since some fixed origin; never decreases
    fn now_ms(&self) -> u64;

    /// Yield for roughly `ms` milliseconds
    fn wait_ms(&mut self, ms: u64);
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn wait_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}
