// Event - One named, timed action in a sequence
// An event carries a display name, a duration and an optional command to run when it begins

use std::fmt;
use std::time::Duration;

/// Executable action attached to an event
///
/// The sequencer invokes `execute()` synchronously when the event begins and
/// never inspects the result. A command that blocks delays the sequence by
/// exactly as long as it blocks.
///
/// Any `Fn()` closure is a command:
/// ```
/// use event_sequencer::sequencer::Event;
/// use std::time::Duration;
///
/// let event = Event::new("Flash", Duration::from_millis(250))
///     .with_command(|| println!("flash!"));
/// assert!(event.has_command());
/// ```
pub trait Command {
    /// Run the action
    fn execute(&self);
}

impl<F> Command for F
where
    F: Fn(),
{
    fn execute(&self) {
        self()
    }
}

/// Phase of an event reported to the observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EventState {
    /// The event has just become current
    Begin,
    /// The event's active window is over
    End,
}

impl fmt::Display for EventState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventState::Begin => write!(f, "Begin"),
            EventState::End => write!(f, "End"),
        }
    }
}

/// A timed action in the event table
///
/// Events are immutable once built. The table they live in is owned by the
/// caller and lent to the sequencer for its whole lifetime.
pub struct Event {
    /// Human-readable name
    name: String,

    /// How long the event stays current once it begins
    duration: Duration,

    /// Optional command executed at the beginning of the event
    command: Option<Box<dyn Command>>,
}

impl Event {
    /// Create an event without a command
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
            command: None,
        }
    }

    /// Attach the command executed when this event begins
    pub fn with_command(mut self, command: impl Command + 'static) -> Self {
        self.command = Some(Box::new(command));
        self
    }

    /// Attach an already boxed command (or none)
    pub fn with_boxed_command(mut self, command: Option<Box<dyn Command>>) -> Self {
        self.command = command;
        self
    }

    /// Get the event name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the event duration
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Check whether a command is attached
    pub fn has_command(&self) -> bool {
        self.command.is_some()
    }

    /// Run the attached command, if any
    pub fn execute(&self) {
        if let Some(command) = &self.command {
            command.execute();
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("duration", &self.duration)
            .field("has_command", &self.has_command())
            .finish()
    }
}
