//! Fixed-rate tick pacing.

use std::time::{Duration, Instant};

/// Deadline tracker for a fixed tick interval.
///
/// Deadlines advance by exactly one interval per tick so pacing does not
/// drift. After a stall longer than one interval the schedule restarts from
/// the current time instead of firing a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct Pacer {
    interval: Duration,
    next: Instant,
}

impl Pacer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    /// Time left until the next deadline (zero when already due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Move to the following deadline.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
    }

    /// Sleep until the next deadline, then schedule the one after it.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }
}
