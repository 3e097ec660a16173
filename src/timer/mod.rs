// Timer module - Interval timing for sequenced events
//
// The sequencer never reads a clock directly. It drives an IntervalTimer,
// which measures elapsed time for the current event against a Clock.
//
// Architecture:
// - Clock trait: monotonic time source (wall clock, manual, audio samples)
// - IntervalTimer trait: start/stop/resume/reset plus expiry against an interval
// - Timer: the stock IntervalTimer, generic over its Clock

pub mod clock;
pub mod interval;

use std::time::Duration;

pub use clock::{Clock, ManualClock, MonotonicClock, SampleClock};
pub use interval::Timer;

/// Pausable stopwatch with an expiry interval
///
/// Implementors must keep `elapsed()` monotonic non-decreasing between
/// `start()`/`reset()` calls, including across `stop()`/`resume()` pairs.
pub trait IntervalTimer {
    /// Zero the elapsed time and start running
    fn start(&mut self);

    /// Pause, preserving elapsed time
    fn stop(&mut self);

    /// Continue running from the paused elapsed time (no-op while running)
    fn resume(&mut self);

    /// Zero the elapsed time without changing the running state
    fn reset(&mut self);

    /// Time accumulated since the last start/reset
    fn elapsed(&self) -> Duration;

    /// Check if the timer is running and its interval has elapsed
    fn expired(&self) -> bool;

    /// Get the expiry interval
    fn interval(&self) -> Duration;

    /// Set the expiry interval
    fn set_interval(&mut self, interval: Duration);

    /// Check if the timer is running
    fn is_active(&self) -> bool;
}
