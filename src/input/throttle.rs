//! Rate limit for drag notifications.
//!
//! Measured on event timestamps rather than wall-clock reads so a replayed
//! gesture throttles the same way it did live.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval: Duration,
    last_emit: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_emit: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether enough time has passed since the last recorded emission.
    pub fn ready(&self, now: Instant) -> bool {
        match self.last_emit {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.last_emit = Some(now);
    }

    /// Check and record in one step.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        let ready = self.ready(now);
        if ready {
            self.mark(now);
        }
        ready
    }

    pub fn reset(&mut self) {
        self.last_emit = None;
    }
}
