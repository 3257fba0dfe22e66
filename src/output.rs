//! Output driver: maps an [`IndicatorState`] onto the two indicator lines.
//!
//! The state machine never touches hardware bits directly. Everything it
//! knows about the physical pattern goes through [`apply`], and everything the
//! hardware needs to provide is the [`IndicatorOutputs`] trait.

use embedded_hal::digital::{OutputPin, PinState};

use crate::state::IndicatorState;

/// One of the two indicator output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputLine {
    /// Lit in `FirstOnly` and `BothOn`.
    A,
    /// Lit in `SecondOnly` and `BothOn`.
    B,
}

/// Trait for abstracting the indicator output hardware.
///
/// Implement this for your board (GPIO, port registers, shift register, etc.)
/// to let the state machine drive it.
pub trait IndicatorOutputs {
    /// Drives `line` active or inactive.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn set_output(&mut self, line: OutputLine, active: bool);
}

/// Drives both outputs to the pattern for `state`.
///
/// Pure function of `state`: re-applying the same state leaves the outputs
/// unchanged. No other lines are touched.
pub fn apply<O: IndicatorOutputs + ?Sized>(outputs: &mut O, state: IndicatorState) {
    let (a, b) = state.outputs();
    outputs.set_output(OutputLine::A, a);
    outputs.set_output(OutputLine::B, b);
}

/// Electrical level that lights an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Line high means lit.
    #[default]
    ActiveHigh,
    /// Line low means lit (LED wired to the supply rail).
    ActiveLow,
}

impl Polarity {
    fn level(self, active: bool) -> PinState {
        PinState::from(active != (self == Polarity::ActiveLow))
    }
}

/// [`IndicatorOutputs`] over a pair of `embedded-hal` output pins.
pub struct PinOutputs<A, B>
where
    A: OutputPin,
    B: OutputPin,
{
    a: A,
    b: B,
    polarity: Polarity,
}

impl<A, B> PinOutputs<A, B>
where
    A: OutputPin,
    B: OutputPin,
{
    /// Creates an active-high output pair.
    pub fn new(a: A, b: B) -> Self {
        Self::with_polarity(a, b, Polarity::ActiveHigh)
    }

    /// Creates an output pair with explicit polarity.
    pub fn with_polarity(a: A, b: B, polarity: Polarity) -> Self {
        Self { a, b, polarity }
    }

    /// Returns the underlying pins.
    pub fn release(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B> IndicatorOutputs for PinOutputs<A, B>
where
    A: OutputPin,
    B: OutputPin,
{
    fn set_output(&mut self, line: OutputLine, active: bool) {
        let level = self.polarity.level(active);
        let result = match line {
            OutputLine::A => self.a.set_state(level).is_ok(),
            OutputLine::B => self.b.set_state(level).is_ok(),
        };
        if !result {
            warn!("failed to drive output {}", line);
        }
    }
}
