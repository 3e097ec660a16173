// Types for sequence definitions

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default host polling period in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10;

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

/// One event in a sequence definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventConfig {
    /// Event name, also the key used to look up its command
    pub name: String,
    /// Event duration in milliseconds
    pub duration_ms: u64,
}

impl EventConfig {
    pub fn new(name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            duration_ms,
        }
    }

    /// Get the event duration
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// A complete sequence definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Sequence name
    pub name: String,
    /// Restart from the first event after the last one
    #[serde(default)]
    pub wrap: bool,
    /// Host polling period in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Events in execution order
    pub events: Vec<EventConfig>,
}

impl SequenceConfig {
    pub fn new(name: impl Into<String>, events: Vec<EventConfig>) -> Self {
        Self {
            name: name.into(),
            wrap: false,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            events,
        }
    }

    /// Get the host polling period
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Sum of all event durations (one pass through the sequence)
    ///
    /// Saturates at `Duration::MAX` for absurdly long definitions.
    pub fn total_duration(&self) -> Duration {
        self.events
            .iter()
            .map(EventConfig::duration)
            .fold(Duration::ZERO, Duration::saturating_add)
    }

    /// Time needed for `cycles` full passes, or `None` if it overflows
    pub fn run_limit(&self, cycles: u32) -> Option<Duration> {
        self.total_duration().checked_mul(cycles)
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new(
            "Traffic Light",
            vec![
                EventConfig::new("Red", 3000),
                EventConfig::new("Green", 2500),
                EventConfig::new("Amber", 500),
            ],
        )
    }
}
