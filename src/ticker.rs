use std::time::{Duration, Instant};

/// Default event poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

/// Countdown cadence
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Get event poll duration
pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}

/// The single periodic one-second schedule driving the countdown.
///
/// `start` and `stop` are idempotent: starting an active ticker keeps its
/// existing schedule, stopping an inactive one does nothing.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedule the first tick one period from `now`. Returns false if the
    /// ticker was already active.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now + self.period);
        true
    }

    /// Cancel the schedule. Returns false if nothing was scheduled.
    pub fn stop(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    /// Number of ticks that fell due up to `now`, advancing the schedule
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_due else {
            return 0;
        };

        let mut count = 0;
        while now >= next {
            count += 1;
            next += self.period;
        }
        self.next_due = Some(next);
        count
    }
}
