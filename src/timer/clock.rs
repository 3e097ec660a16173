// Clock sources for interval timers

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Monotonic time source
///
/// `now()` is measured from an arbitrary fixed origin and never decreases.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock monotonic time (std::time::Instant)
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Explicitly advanced clock
///
/// Clones share the same time, so a host (or a test) can keep one handle and
/// hand another to a timer.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward, saturating at the largest representable time
    pub fn advance(&self, delta: Duration) {
        let delta = to_nanos(delta);
        // The closure always returns Some, so the update cannot fail
        let _ = self
            .nanos
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |nanos| {
                Some(nanos.saturating_add(delta))
            });
    }

    /// Jump to an absolute time; ignored if it would move time backwards
    pub fn set(&self, now: Duration) {
        self.nanos.fetch_max(to_nanos(now), Ordering::Relaxed);
    }
}

fn to_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Relaxed))
    }
}

/// Clock driven by an audio callback's frame count
///
/// The audio thread calls `advance()` once per buffer; timers reading this
/// clock see time in whole samples.
#[derive(Debug, Clone)]
pub struct SampleClock {
    /// Current sample position (incremented by the audio callback)
    sample_position: Arc<AtomicU64>,
    /// Sample rate (for sample/time conversions)
    sample_rate: f64,
}

impl SampleClock {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_position: Arc::new(AtomicU64::new(0)),
            sample_rate,
        }
    }

    /// Get current sample position
    pub fn current_sample(&self) -> u64 {
        self.sample_position.load(Ordering::Relaxed)
    }

    /// Advance sample position (called from audio callback)
    pub fn advance(&self, frames: usize) {
        self.sample_position
            .fetch_add(frames as u64, Ordering::Relaxed);
    }

    /// Convert a sample count to a duration at this clock's rate
    pub fn samples_to_duration(&self, samples: u64) -> Duration {
        let nanos = (samples as f64 * 1_000_000_000.0 / self.sample_rate).round();
        Duration::from_nanos(nanos as u64)
    }

    /// Convert a duration to a whole number of samples at this clock's rate
    pub fn duration_to_samples(&self, duration: Duration) -> u64 {
        (duration.as_secs_f64() * self.sample_rate) as u64
    }

    /// Get sample rate
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

impl Clock for SampleClock {
    fn now(&self) -> Duration {
        self.samples_to_duration(self.current_sample())
    }
}
