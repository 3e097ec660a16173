// Sequencer - Chronological event sequencer
// Runs a fixed table of timed events in order, notifying an observer as each one begins and ends

use crate::clocking::Clockable;
use crate::sequencer::cursor::{Advance, EventCursor};
use crate::sequencer::error::{SequencerError, SequencerResult};
use crate::sequencer::event::{Event, EventState};
use crate::timer::{IntervalTimer, Timer};
use log::{debug, trace};
use std::time::Duration;

/// Observer called synchronously at the beginning and end of each event
///
/// Observers must not call back into the sequencer that invoked them.
pub type Observer<'a> = Box<dyn FnMut(&Event, EventState) + 'a>;

/// Sequencer status, derived from the timer and the completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerStatus {
    /// Not running: never started, paused, or reset
    #[default]
    Idle,
    /// Timer running, `tick()` advances through events
    Active,
    /// Ran past the last event with wrap disabled
    Done,
}

impl SequencerStatus {
    /// Check if the sequencer is running
    pub fn is_active(&self) -> bool {
        matches!(self, SequencerStatus::Active)
    }
}

/// What `resume()` does when called from Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResumePoint {
    /// Nothing has run yet; resume starts from slot 0
    NeverStarted,
    /// Paused inside the sequence; resume continues the current event
    MidSequence,
    /// Reset while idle; resume starts from slot 0
    Rewound,
}

/// Chronological event sequencer
///
/// The event table is borrowed for the sequencer's whole lifetime and is
/// never copied or resized. Only `set_events()` can swap it, and only while
/// the sequencer is not active.
///
/// The sequencer is driven by calling `tick()` (or `Clockable::clock()`)
/// from a host loop. Every transition happens inside one of the control
/// calls; nothing runs in the background.
///
/// # Example
/// ```
/// use event_sequencer::sequencer::{Event, Sequencer, SequencerStatus};
/// use event_sequencer::timer::{ManualClock, Timer};
/// use std::time::Duration;
///
/// let events = [
///     Event::new("Red", Duration::from_secs(3)),
///     Event::new("Green", Duration::from_secs(2)),
/// ];
/// let clock = ManualClock::new();
/// let mut sequencer =
///     Sequencer::with_timer(&events, Timer::new(clock.clone()), |_, _| {}, false).unwrap();
///
/// sequencer.start();
/// clock.advance(Duration::from_secs(3));
/// sequencer.tick();
/// assert_eq!(sequencer.event().name(), "Green");
///
/// clock.advance(Duration::from_secs(2));
/// sequencer.tick();
/// assert_eq!(sequencer.status(), SequencerStatus::Done);
/// ```
pub struct Sequencer<'a, T: IntervalTimer = Timer> {
    cursor: EventCursor<'a>,
    timer: T,
    observer: Option<Observer<'a>>,

    /// Timer-driven advancement past the last event restarts at the first
    wrap: bool,

    /// Ran to completion without wrap
    done: bool,

    /// Current event was selected by navigation while idle and still owes its Begin
    pending_begin: bool,

    resume_point: ResumePoint,
}

impl<'a> Sequencer<'a> {
    /// Create a sequencer timed by the wall clock
    ///
    /// # Errors
    /// Returns `SequencerError::EmptyTable` if `events` is empty.
    pub fn new(
        events: &'a [Event],
        observer: impl FnMut(&Event, EventState) + 'a,
        wrap: bool,
    ) -> SequencerResult<Self> {
        Self::with_timer(events, Timer::default(), observer, wrap)
    }
}

impl<'a, T: IntervalTimer> Sequencer<'a, T> {
    /// Create a sequencer driven by the given timer
    ///
    /// # Errors
    /// Returns `SequencerError::EmptyTable` if `events` is empty.
    pub fn with_timer(
        events: &'a [Event],
        timer: T,
        observer: impl FnMut(&Event, EventState) + 'a,
        wrap: bool,
    ) -> SequencerResult<Self> {
        let cursor = EventCursor::new(events)?;
        let mut timer = timer;
        timer.stop();
        timer.reset();
        timer.set_interval(cursor.current().duration());

        Ok(Self {
            cursor,
            timer,
            observer: Some(Box::new(observer)),
            wrap,
            done: false,
            pending_begin: false,
            resume_point: ResumePoint::NeverStarted,
        })
    }

    /// Get the event table
    pub fn events(&self) -> &'a [Event] {
        self.cursor.events()
    }

    /// Replace the event table
    ///
    /// Only allowed while Idle. The sequencer is left idle at slot 0, and
    /// `resume()` behaves like `start()`.
    ///
    /// # Errors
    /// - `SequencerError::SequencerActive` if the sequencer is running
    /// - `SequencerError::SequencerDone` if the sequence has completed
    /// - `SequencerError::EmptyTable` if `events` is empty
    pub fn set_events(&mut self, events: &'a [Event]) -> SequencerResult<()> {
        match self.status() {
            SequencerStatus::Active => return Err(SequencerError::SequencerActive),
            SequencerStatus::Done => return Err(SequencerError::SequencerDone),
            SequencerStatus::Idle => {}
        }
        let cursor = EventCursor::new(events)?;

        self.cursor = cursor;
        self.pending_begin = false;
        self.resume_point = ResumePoint::Rewound;
        self.timer.reset();
        self.timer.set_interval(self.cursor.current().duration());

        debug!("Sequencer: event table replaced ({} events)", events.len());
        Ok(())
    }

    /// Replace the observer
    pub fn set_observer(&mut self, observer: impl FnMut(&Event, EventState) + 'a) {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the observer; events still run their commands
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Start the sequence from the first event
    ///
    /// No-op while active.
    pub fn start(&mut self) {
        if self.status().is_active() {
            return;
        }

        self.rewind();
        self.open_current();
        self.timer.start();
        self.resume_point = ResumePoint::MidSequence;

        debug!("Sequencer: started at '{}'", self.cursor.current().name());
    }

    /// Pause the sequence, keeping the current event and its elapsed time
    ///
    /// The current event stays open; no End is reported.
    pub fn stop(&mut self) {
        if self.status().is_active() {
            self.timer.stop();
            debug!(
                "Sequencer: stopped at '{}' after {:?}",
                self.cursor.current().name(),
                self.timer.elapsed()
            );
        }
    }

    /// Rewind to the first event
    ///
    /// While active, the first event begins again immediately (no End is
    /// reported for the interrupted one). Otherwise the sequencer stays idle
    /// and the next `resume()` behaves like `start()`.
    pub fn reset(&mut self) {
        self.rewind();

        if self.status().is_active() {
            self.open_current();
            self.timer.reset();
        } else {
            self.resume_point = ResumePoint::Rewound;
            self.pending_begin = false;
            self.timer.reset();
            self.timer.set_interval(self.cursor.current().duration());
        }

        debug!("Sequencer: reset");
    }

    /// Continue after `stop()`
    ///
    /// Only acts from Idle. After a reset (or before the first start) this is
    /// `start()`. After navigation the newly selected event begins with a
    /// fresh timer. Otherwise the paused event continues where it left off.
    pub fn resume(&mut self) {
        if self.status() != SequencerStatus::Idle {
            return;
        }

        match self.resume_point {
            ResumePoint::NeverStarted | ResumePoint::Rewound => self.start(),
            ResumePoint::MidSequence => {
                if self.pending_begin {
                    self.open_current();
                    self.timer.reset();
                }
                self.timer.resume();
                debug!("Sequencer: resumed at '{}'", self.cursor.current().name());
            }
        }
    }

    /// Select the next event, wrapping past the last one regardless of wrap mode
    pub fn next(&mut self) {
        self.navigate(|cursor| cursor.advance_circular());
    }

    /// Select the previous event, wrapping before the first one regardless of wrap mode
    pub fn prev(&mut self) {
        self.navigate(|cursor| cursor.retreat_circular());
    }

    /// Set whether timer-driven advancement repeats the sequence
    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Get the wrap-around mode
    pub fn wrap(&self) -> bool {
        self.wrap
    }

    /// Get the current status
    pub fn status(&self) -> SequencerStatus {
        if self.timer.is_active() {
            SequencerStatus::Active
        } else if self.done {
            SequencerStatus::Done
        } else {
            SequencerStatus::Idle
        }
    }

    /// Get the current event
    pub fn event(&self) -> &'a Event {
        self.cursor.current()
    }

    /// Time elapsed in the current event
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    /// One-based position of the current event
    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    /// Check if navigation left a Begin notification waiting for `resume()`
    pub fn is_begin_pending(&self) -> bool {
        self.pending_begin
    }

    /// Get the timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Step the sequence
    ///
    /// When the current event's duration has elapsed, it ends and the next
    /// event begins, or, at the end of a non-wrapping sequence, the
    /// sequencer stops in `Done`. At most one event ends per call.
    pub fn tick(&mut self) {
        if !self.status().is_active() || !self.timer.expired() {
            return;
        }

        self.end_current();

        match self.cursor.advance_linear(self.wrap) {
            Advance::Completed => {
                self.timer.stop();
                self.done = true;
                debug!("Sequencer: sequence complete");
            }
            advance => {
                if advance == Advance::Wrapped {
                    trace!("Sequencer: wrapped to first event");
                }
                self.open_current();
                self.timer.reset();
            }
        }
    }

    /// Move the cursor and reconfigure for the newly selected event
    fn navigate(&mut self, step: impl FnOnce(&mut EventCursor<'a>) -> Advance) {
        step(&mut self.cursor);

        self.timer.set_interval(self.cursor.current().duration());
        self.timer.reset();
        self.resume_point = ResumePoint::MidSequence;

        if self.status().is_active() {
            self.open_current();
        } else {
            self.pending_begin = true;
        }

        trace!(
            "Sequencer: navigated to {} '{}'",
            self.cursor.index(),
            self.cursor.current().name()
        );
    }

    fn rewind(&mut self) {
        self.cursor.rewind();
        self.done = false;
    }

    /// Begin the current event: configure the timer, run its command, notify
    fn open_current(&mut self) {
        let event = self.cursor.current();
        self.timer.set_interval(event.duration());
        event.execute();
        self.pending_begin = false;

        trace!("Sequencer: begin {} '{}'", self.cursor.index(), event.name());
        self.notify(event, EventState::Begin);
    }

    /// Report the current event's End; only an expiry in `tick()` ends an event
    fn end_current(&mut self) {
        let event = self.cursor.current();

        trace!("Sequencer: end {} '{}'", self.cursor.index(), event.name());
        self.notify(event, EventState::End);
    }

    fn notify(&mut self, event: &Event, state: EventState) {
        if let Some(observer) = self.observer.as_mut() {
            observer(event, state);
        }
    }
}

impl<T: IntervalTimer> Clockable for Sequencer<'_, T> {
    fn clock(&mut self) {
        self.tick();
    }
}
