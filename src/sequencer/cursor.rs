// Event cursor - Position within a borrowed event table
// Supports circular stepping (manual navigation) and linear stepping (timer-driven)

use crate::sequencer::error::{SequencerError, SequencerResult};
use crate::sequencer::event::Event;

/// Outcome of moving the cursor one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to a neighbouring slot
    Moved,
    /// Crossed the table boundary and wrapped to the other end
    Wrapped,
    /// Reached the end without wrapping; cursor stays on the last slot
    Completed,
}

/// Cursor over a non-empty, externally owned event table
///
/// The position is always in `[0, len)`. Construction rejects an empty table,
/// so `current()` and `index()` are defined for every cursor that exists.
#[derive(Debug, Clone, Copy)]
pub struct EventCursor<'a> {
    events: &'a [Event],
    position: usize,
}

impl<'a> EventCursor<'a> {
    /// Create a cursor on the first slot of `events`
    pub fn new(events: &'a [Event]) -> SequencerResult<Self> {
        if events.is_empty() {
            return Err(SequencerError::EmptyTable);
        }

        Ok(Self {
            events,
            position: 0,
        })
    }

    /// Get the whole event table
    pub fn events(&self) -> &'a [Event] {
        self.events
    }

    /// Get the event under the cursor
    pub fn current(&self) -> &'a Event {
        &self.events[self.position]
    }

    /// Zero-based slot of the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    /// One-based position of the cursor, for display
    pub fn index(&self) -> usize {
        self.position + 1
    }

    /// Number of events in the table (always at least 1)
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Check if the cursor is on the last slot
    pub fn is_last(&self) -> bool {
        self.position + 1 == self.events.len()
    }

    /// Move back to the first slot
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Step forward, wrapping to the first slot after the last one
    pub fn advance_circular(&mut self) -> Advance {
        if self.is_last() {
            self.position = 0;
            Advance::Wrapped
        } else {
            self.position += 1;
            Advance::Moved
        }
    }

    /// Step forward; past the last slot either wrap (if `wrap`) or clamp and complete
    pub fn advance_linear(&mut self, wrap: bool) -> Advance {
        if !self.is_last() {
            self.position += 1;
            Advance::Moved
        } else if wrap {
            self.position = 0;
            Advance::Wrapped
        } else {
            Advance::Completed
        }
    }

    /// Step backward, wrapping to the last slot before the first one
    pub fn retreat_circular(&mut self) -> Advance {
        if self.position == 0 {
            self.position = self.events.len() - 1;
            Advance::Wrapped
        } else {
            self.position -= 1;
            Advance::Moved
        }
    }
}
