//! Indicator state machine.
//!
//! Provides [`Indicator`], which owns the current [`IndicatorState`] together
//! with the output hardware and keeps the two in step on every transition.

use crate::command::Command;
use crate::output::{self, IndicatorOutputs};
use crate::state::IndicatorState;

/// Owns the indicator state and the outputs that display it.
///
/// The state only changes through [`advance`](Self::advance) and
/// [`retreat`](Self::retreat), and both drive the outputs before returning,
/// so the physical pattern never lags the logical state.
pub struct Indicator<O: IndicatorOutputs> {
    outputs: O,
    state: IndicatorState,
}

impl<O: IndicatorOutputs> Indicator<O> {
    /// Creates an indicator in `BothOff` and drives the outputs to match.
    pub fn new(mut outputs: O) -> Self {
        output::apply(&mut outputs, IndicatorState::BothOff);

        Self {
            outputs,
            state: IndicatorState::BothOff,
        }
    }

    /// Moves to the next state in the cycle and returns it.
    pub fn advance(&mut self) -> IndicatorState {
        self.transition(self.state.next())
    }

    /// Moves to the previous state in the cycle and returns it.
    pub fn retreat(&mut self) -> IndicatorState {
        self.transition(self.state.prev())
    }

    /// Returns the current state. No side effects.
    #[inline]
    pub fn current(&self) -> IndicatorState {
        self.state
    }

    /// Runs a decoded command and returns the resulting state.
    pub fn execute(&mut self, command: Command) -> IndicatorState {
        match command {
            Command::Next => self.advance(),
            Command::Previous => self.retreat(),
            Command::Current => self.current(),
        }
    }

    /// Returns a reference to the outputs.
    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Consumes the indicator and returns the outputs.
    pub fn release(self) -> O {
        self.outputs
    }

    fn transition(&mut self, new_state: IndicatorState) -> IndicatorState {
        output::apply(&mut self.outputs, new_state);
        trace!("indicator {} -> {}", self.state, new_state);
        self.state = new_state;
        new_state
    }
}
