use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::domain::ports::Clock;

/// Simulation clock that only moves when the tick loop advances it, so replays are
/// deterministic.
#[derive(Debug, Default)]
pub struct SteppedClock {
    now_millis: AtomicU64,
}

#[cfg(test)]
impl SteppedClock {
    pub(crate) fn starting_at(millis: u64) -> Self {
        Self {
            now_millis: AtomicU64::new(millis),
        }
    }
}

impl Clock for SteppedClock {
    fn now_millis(&self) -> u64 {
        self.now_millis.load(Ordering::Relaxed)
    }

    fn advance(&self, dt: Duration) {
        self.now_millis
            .fetch_add(dt.as_millis() as u64, Ordering::Relaxed);
    }
}
