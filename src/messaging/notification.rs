// Event notifications forwarded from observers to the host

use crate::sequencer::{Event, EventState};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Owned copy of one observer call, safe to move across threads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventNotification {
    pub name: String,
    pub duration: Duration,
    pub phase: EventState,
    pub timestamp_ms: u64, // Unix timestamp in milliseconds
}

impl EventNotification {
    /// Capture an observer call with the current timestamp
    pub fn new(event: &Event, phase: EventState) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        Self {
            name: event.name().to_string(),
            duration: event.duration(),
            phase,
            timestamp_ms,
        }
    }

    /// Check if this notification marks the beginning of an event
    pub fn is_begin(&self) -> bool {
        self.phase == EventState::Begin
    }
}

impl std::fmt::Display for EventNotification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({:?})", self.phase, self.name, self.duration)
    }
}
