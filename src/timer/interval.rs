// Timer - Pausable interval timer over a Clock

use crate::timer::IntervalTimer;
use crate::timer::clock::{Clock, MonotonicClock};
use std::time::Duration;

/// Stock interval timer
///
/// Elapsed time is the accumulated time of all finished running spans plus
/// the span currently running, if any.
#[derive(Debug, Clone)]
pub struct Timer<C: Clock = MonotonicClock> {
    clock: C,
    interval: Duration,

    /// Elapsed time folded in by `stop()`
    accumulated: Duration,

    /// Clock reading at which the current running span began
    running_since: Option<Duration>,
}

impl<C: Clock> Timer<C> {
    /// Create a stopped timer with a zero interval
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            interval: Duration::ZERO,
            accumulated: Duration::ZERO,
            running_since: None,
        }
    }

    /// Get the underlying clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn running_span(&self) -> Duration {
        match self.running_since {
            Some(since) => self.clock.now().saturating_sub(since),
            None => Duration::ZERO,
        }
    }
}

impl Default for Timer<MonotonicClock> {
    fn default() -> Self {
        Self::new(MonotonicClock::new())
    }
}

impl<C: Clock> IntervalTimer for Timer<C> {
    fn start(&mut self) {
        self.accumulated = Duration::ZERO;
        self.running_since = Some(self.clock.now());
    }

    fn stop(&mut self) {
        if self.running_since.is_some() {
            self.accumulated += self.running_span();
            self.running_since = None;
        }
    }

    fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(self.clock.now());
        }
    }

    fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        if self.running_since.is_some() {
            self.running_since = Some(self.clock.now());
        }
    }

    fn elapsed(&self) -> Duration {
        self.accumulated + self.running_span()
    }

    fn expired(&self) -> bool {
        self.is_active() && self.elapsed() >= self.interval
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    fn is_active(&self) -> bool {
        self.running_since.is_some()
    }
}
