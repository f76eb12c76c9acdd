use std::time::{Duration, Instant};

/// Fixed-period tick source driven by caller-supplied instants.
///
/// Ticks are counted from the origin, so late polls catch up instead of
/// drifting.
#[derive(Debug, Clone)]
pub struct Ticker {
    origin: Instant,
    period: Duration,
    emitted: u64,
}

impl Ticker {
    pub fn start(origin: Instant, period: Duration) -> Self {
        let period = if period.is_zero() {
            Duration::from_millis(16)
        } else {
            period
        };
        Self {
            origin,
            period,
            emitted: 0,
        }
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Number of ticks that became due since the previous call.
    pub fn due(&mut self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.origin).as_nanos();
        let total = (elapsed / self.period.as_nanos()) as u64;
        let due = total.saturating_sub(self.emitted);
        self.emitted = self.emitted.max(total);
        due
    }

    /// Time left until the next tick becomes due.
    pub fn until_next(&self, now: Instant) -> Duration {
        let ticks = u32::try_from(self.emitted + 1).unwrap_or(u32::MAX);
        let next = self.origin + self.period.saturating_mul(ticks);
        next.saturating_duration_since(now)
    }
}
