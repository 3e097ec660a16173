// Clocking - Host-driven stepping of periodic components
//
// Components expose a single `clock()` step. A host loop (ClockScheduler, or
// any loop of the caller's own) calls it on every scheduling pass.

pub mod scheduler;

use std::cell::RefCell;
use std::rc::Rc;

pub use scheduler::ClockScheduler;

/// Component stepped by a host scheduling loop
///
/// `clock()` must return promptly; it is called once per pass and must not
/// block waiting for time to pass.
pub trait Clockable {
    fn clock(&mut self);
}

impl<C: Clockable + ?Sized> Clockable for &mut C {
    fn clock(&mut self) {
        (**self).clock();
    }
}

impl<C: Clockable + ?Sized> Clockable for Box<C> {
    fn clock(&mut self) {
        (**self).clock();
    }
}

/// Shared handle, so the host can keep inspecting a component it registered
impl<C: Clockable + ?Sized> Clockable for Rc<RefCell<C>> {
    fn clock(&mut self) {
        self.borrow_mut().clock();
    }
}
