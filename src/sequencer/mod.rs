// Sequencer module
// Chronological execution of a fixed table of timed events

pub mod cursor;
pub mod engine;
pub mod error;
pub mod event;

pub use cursor::{Advance, EventCursor};
pub use engine::{Observer, Sequencer, SequencerStatus};
pub use error::{SequencerError, SequencerResult};
pub use event::{Command, Event, EventState};
