use std::time::Duration;

/// How long and how often to wait for an asynchronous job.
///
/// A `multiplier` of 1.0 polls at a fixed interval; larger values back off
/// exponentially up to `max_interval`. Polling always stops at `max_wait`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollPolicy {
    pub initial_interval: Duration,
    pub max_interval: Duration,
    pub multiplier: f64,
    pub max_wait: Duration,
}

impl PollPolicy {
    pub fn fixed(interval: Duration, max_wait: Duration) -> Self {
        Self {
            initial_interval: interval,
            max_interval: interval,
            multiplier: 1.0,
            max_wait,
        }
    }

    pub fn exponential(
        initial_interval: Duration,
        multiplier: f64,
        max_interval: Duration,
        max_wait: Duration,
    ) -> Self {
        Self {
            initial_interval,
            max_interval,
            multiplier,
            max_wait,
        }
    }

    /// Never panics: an overflowing or non-finite product saturates at the cap.
    pub fn next_interval(&self, current: Duration) -> Duration {
        let cap = self.max_interval.max(self.initial_interval);
        let grown = Duration::try_from_secs_f64(current.as_secs_f64() * self.multiplier.max(1.0))
            .unwrap_or(cap);
        grown.min(cap)
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::fixed(Duration::from_secs(5), Duration::from_secs(15 * 60))
    }
}
