//! Interrupt-safe home for a [`Controller`].
//!
//! Interrupt vectors are free functions with no arguments, so the controller
//! has to live in a `static`. [`SharedController`] is that static: empty until
//! [`init`](SharedController::init), then reachable from any handler through
//! [`with`](SharedController::with), which runs the closure inside a critical
//! section.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::button::ButtonInputs;
use crate::controller::Controller;
use crate::output::IndicatorOutputs;
use crate::serial::SerialPort;

/// A [`Controller`] slot guarded by a critical section.
pub struct SharedController<O, S, B>
where
    O: IndicatorOutputs,
    S: SerialPort,
    B: ButtonInputs,
{
    slot: Mutex<RefCell<Option<Controller<O, S, B>>>>,
}

impl<O, S, B> SharedController<O, S, B>
where
    O: IndicatorOutputs,
    S: SerialPort,
    B: ButtonInputs,
{
    /// Creates an empty slot. Usable in `static` initializers.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(None)),
        }
    }

    /// Publishes the controller, returning any previous one.
    ///
    /// Call before unmasking the interrupts that use it.
    pub fn init(&self, controller: Controller<O, S, B>) -> Option<Controller<O, S, B>> {
        critical_section::with(|cs| self.slot.borrow_ref_mut(cs).replace(controller))
    }

    /// Runs `f` with exclusive access to the controller.
    ///
    /// Returns `None` without calling `f` if the slot has not been
    /// initialized, e.g. an interrupt that fires before setup finishes.
    pub fn with<R>(&self, f: impl FnOnce(&mut Controller<O, S, B>) -> R) -> Option<R> {
        critical_section::with(|cs| self.slot.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Removes and returns the controller.
    pub fn take(&self) -> Option<Controller<O, S, B>> {
        critical_section::with(|cs| self.slot.borrow_ref_mut(cs).take())
    }

    /// `true` once [`init`](Self::init) has run.
    pub fn is_initialized(&self) -> bool {
        critical_section::with(|cs| self.slot.borrow_ref(cs).is_some())
    }
}

impl<O, S, B> Default for SharedController<O, S, B>
where
    O: IndicatorOutputs,
    S: SerialPort,
    B: ButtonInputs,
{
    fn default() -> Self {
        Self::new()
    }
}
