//! Host-side tracking of the indicator from its serial replies.
//!
//! A host opens the port, sends [`StateMonitor::QUERY`] to learn the starting
//! state, then feeds every byte it reads to [`StateMonitor::feed`]. Replies
//! arrive for serial commands and for button presses alike, so the monitor
//! sees every change no matter which side caused it.

use crate::command::Command;
use crate::state::{IndicatorState, InvalidStateId};

/// Follows the indicator state through the reply byte stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateMonitor {
    current: Option<IndicatorState>,
    changes: u32,
}

impl StateMonitor {
    /// Byte to send to ask the indicator for its current state.
    pub const QUERY: u8 = Command::Current.as_byte();

    /// Creates a monitor that has not seen any reply yet.
    pub const fn new() -> Self {
        Self {
            current: None,
            changes: 0,
        }
    }

    /// Consumes one reply byte.
    ///
    /// # Returns
    /// * `Ok(Some(state))` - First reply, or the state changed
    /// * `Ok(None)` - Same state as before (a `C` query or a repeated reply)
    /// * `Err` - Not a state id; the tracked state is kept
    pub fn feed(&mut self, byte: u8) -> Result<Option<IndicatorState>, InvalidStateId> {
        let state = IndicatorState::try_from(byte).inspect_err(|err| {
            warn!("monitor ignoring reply: {}", err);
        })?;

        if self.current == Some(state) {
            return Ok(None);
        }
        self.current = Some(state);
        self.changes += 1;
        Ok(Some(state))
    }

    /// Last known state, `None` until the first reply.
    pub fn current(&self) -> Option<IndicatorState> {
        self.current
    }

    /// Number of changes reported so far, including the first reply.
    pub fn changes(&self) -> u32 {
        self.changes
    }
}
