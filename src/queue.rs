//! Bounded command queue for platforms where producers can truly overlap.
//!
//! Any number of producers (interrupts, threads) [`post`](CommandQueue::post)
//! commands; a single consumer applies them in order through
//! [`Controller::drain`](crate::Controller::drain). Each call takes a short
//! critical section, so a queue can live in a `static`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::command::Command;

/// The queue was full; the rejected command is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull(pub Command);

impl core::fmt::Display for QueueFull {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "command queue full, dropped {:?}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueueFull {}

/// FIFO of pending commands with room for `N` entries.
pub struct CommandQueue<const N: usize> {
    inner: Mutex<RefCell<Deque<Command, N>>>,
}

impl<const N: usize> CommandQueue<N> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Appends a command.
    pub fn post(&self, command: Command) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            self.inner
                .borrow_ref_mut(cs)
                .push_back(command)
                .map_err(QueueFull)
        })
    }

    /// Removes the oldest command.
    pub fn take(&self) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).pop_front())
    }

    /// Number of queued commands.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow_ref(cs).len())
    }

    /// `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of queued commands.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for CommandQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
