// Event Sequencer - Library exports for the demo runner, tests and benchmarks

pub mod clocking;
pub mod config;
pub mod messaging;
pub mod sequencer;
pub mod timer;

// Re-export commonly used types for convenience
pub use clocking::{ClockScheduler, Clockable};
pub use config::{ConfigError, EventConfig, SequenceConfig, load_config};
pub use messaging::{EventNotification, forwarding_observer, notification_channel};
pub use sequencer::{
    Command, Event, EventState, Sequencer, SequencerError, SequencerResult, SequencerStatus,
};
pub use timer::{Clock, IntervalTimer, ManualClock, MonotonicClock, SampleClock, Timer};
