// ClockScheduler - Cooperative host loop for clockable components

use crate::clocking::Clockable;
use log::{debug, trace};
use std::thread;
use std::time::{Duration, Instant};

/// Default polling period between scheduling passes
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(10);

/// Calls `clock()` on every registered component, pass after pass
///
/// Components are clocked in registration order. The scheduler sleeps for
/// its period between passes, so component timing resolution is bounded by
/// the period plus the time spent inside `clock()` calls.
pub struct ClockScheduler<'a> {
    components: Vec<Box<dyn Clockable + 'a>>,
    period: Duration,
    passes: u64,
}

impl<'a> ClockScheduler<'a> {
    /// Create a scheduler with the default period
    pub fn new() -> Self {
        Self::with_period(DEFAULT_PERIOD)
    }

    /// Create a scheduler with a custom polling period
    pub fn with_period(period: Duration) -> Self {
        Self {
            components: Vec::new(),
            period,
            passes: 0,
        }
    }

    /// Add a component to the end of the clocking order
    pub fn register(&mut self, component: impl Clockable + 'a) {
        self.components.push(Box::new(component));
        debug!(
            "ClockScheduler: registered component #{}",
            self.components.len()
        );
    }

    /// Run one scheduling pass
    pub fn clock_all(&mut self) {
        for component in self.components.iter_mut() {
            component.clock();
        }
        self.passes += 1;
        trace!("ClockScheduler: pass {}", self.passes);
    }

    /// Run passes until `done` returns true, sleeping one period between passes
    ///
    /// `done` is checked after each pass. Returns the number of passes run.
    pub fn run_until(&mut self, mut done: impl FnMut() -> bool) -> u64 {
        let first = self.passes;
        loop {
            self.clock_all();
            if done() {
                break;
            }
            thread::sleep(self.period);
        }

        let run = self.passes - first;
        debug!("ClockScheduler: stopped after {} passes", run);
        run
    }

    /// Run passes for (at least) the given wall-clock duration
    pub fn run_for(&mut self, duration: Duration) -> u64 {
        let deadline = Instant::now() + duration;
        self.run_until(|| Instant::now() >= deadline)
    }

    /// Get the polling period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Set the polling period
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// Total passes run since creation
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if no components are registered
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for ClockScheduler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Probe<'a> {
        name: &'static str,
        trace: &'a RefCell<Vec<&'static str>>,
    }

    impl Clockable for Probe<'_> {
        fn clock(&mut self) {
            self.trace.borrow_mut().push(self.name);
        }
    }

    #[test]
    fn test_scheduler_creation() {
        let scheduler = ClockScheduler::new();
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.passes(), 0);
        assert_eq!(scheduler.period(), DEFAULT_PERIOD);
    }

    #[test]
    fn test_clock_all_in_registration_order() {
        let trace = RefCell::new(Vec::new());
        let mut scheduler = ClockScheduler::new();
        scheduler.register(Probe {
            name: "first",
            trace: &trace,
        });
        scheduler.register(Probe {
            name: "second",
            trace: &trace,
        });

        scheduler.clock_all();
        scheduler.clock_all();

        assert_eq!(scheduler.len(), 2);
        assert_eq!(scheduler.passes(), 2);
        assert_eq!(*trace.borrow(), vec!["first", "second", "first", "second"]);
    }

    #[test]
    fn test_run_until_checks_after_each_pass() {
        let trace = RefCell::new(Vec::new());
        let mut scheduler = ClockScheduler::with_period(Duration::ZERO);
        scheduler.register(Probe {
            name: "probe",
            trace: &trace,
        });

        let checks = Cell::new(0);
        let passes = scheduler.run_until(|| {
            checks.set(checks.get() + 1);
            checks.get() == 3
        });

        assert_eq!(passes, 3);
        assert_eq!(trace.borrow().len(), 3);
    }

    #[test]
    fn test_run_for_runs_at_least_once() {
        let mut scheduler = ClockScheduler::with_period(Duration::from_millis(1));
        let shared = Rc::new(Cell::new(0u32));

        struct Tick(Rc<Cell<u32>>);
        impl Clockable for Tick {
            fn clock(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        scheduler.register(Tick(Rc::clone(&shared)));
        let passes = scheduler.run_for(Duration::from_millis(5));

        assert!(passes >= 1);
        assert_eq!(shared.get() as u64, passes);
    }
}
