//! Button event handler.
//!
//! Runs from the pin-change interrupt shared by both buttons. Each button is
//! active-low with a pull-up, so a low level after settling means pressed.

use embedded_hal::digital::InputPin;
use heapless::Vec;

use crate::indicator::Indicator;
use crate::output::IndicatorOutputs;
use crate::serial::{SerialPort, wait_tx_ready};
use crate::state::IndicatorState;
use crate::types::{HandlerConfig, HandlerError};

/// One of the two physical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Button A. Steps the indicator backward.
    Retreat,
    /// Button B. Steps the indicator forward.
    Advance,
}

impl Button {
    /// Buttons in service order. A coincident double press is applied
    /// `Retreat` first.
    pub const SERVICE_ORDER: [Button; 2] = [Button::Retreat, Button::Advance];
}

/// Trait for abstracting the button pins and their interrupt flags.
pub trait ButtonInputs {
    /// Returns the electrical level of the button's pin (`true` = high).
    fn read_pin_level(&mut self, button: Button) -> bool;

    /// Returns `true` if the button's interrupt flag is set.
    fn pin_interrupt_pending(&mut self, button: Button) -> bool;

    /// Clears the button's interrupt flag.
    fn clear_pin_interrupt(&mut self, button: Button);
}

/// Pending/clear access to the buttons' interrupt flags.
///
/// `embedded-hal` has no notion of edge-interrupt flags, so [`PinButtons`]
/// takes them from an implementation of this trait (EXTI, port IFG register,
/// etc.).
pub trait InterruptFlags {
    /// Returns `true` if the button's flag is set.
    fn is_pending(&mut self, button: Button) -> bool;

    /// Clears the button's flag.
    fn clear(&mut self, button: Button);
}

/// [`ButtonInputs`] over two `embedded-hal` input pins plus an
/// [`InterruptFlags`] source.
pub struct PinButtons<R, A, F>
where
    R: InputPin,
    A: InputPin,
    F: InterruptFlags,
{
    retreat: R,
    advance: A,
    flags: F,
}

impl<R, A, F> PinButtons<R, A, F>
where
    R: InputPin,
    A: InputPin,
    F: InterruptFlags,
{
    /// Creates the adapter. Pins are expected to be pull-up inputs.
    pub fn new(retreat: R, advance: A, flags: F) -> Self {
        Self {
            retreat,
            advance,
            flags,
        }
    }

    /// Returns the pins and flag source.
    pub fn release(self) -> (R, A, F) {
        (self.retreat, self.advance, self.flags)
    }
}

impl<R, A, F> ButtonInputs for PinButtons<R, A, F>
where
    R: InputPin,
    A: InputPin,
    F: InterruptFlags,
{
    fn read_pin_level(&mut self, button: Button) -> bool {
        let level = match button {
            Button::Retreat => self.retreat.is_high().ok(),
            Button::Advance => self.advance.is_high().ok(),
        };
        // An unreadable pin counts as released.
        level.unwrap_or_else(|| {
            warn!("failed to read {}", button);
            true
        })
    }

    fn pin_interrupt_pending(&mut self, button: Button) -> bool {
        self.flags.is_pending(button)
    }

    fn clear_pin_interrupt(&mut self, button: Button) {
        self.flags.clear(button);
    }
}

/// A press that was acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPress {
    /// Which button.
    pub button: Button,
    /// State after the transition.
    pub state: IndicatorState,
    /// Whether the state id was written to the transmitter.
    pub transmitted: bool,
}

/// Summary of one button interrupt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonReport {
    presses: Vec<ButtonPress, 2>,
    timeout: Option<HandlerError>,
}

impl ButtonReport {
    /// Presses acted on, in service order.
    pub fn presses(&self) -> &[ButtonPress] {
        &self.presses
    }

    /// `true` if no button was pressed.
    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    /// The first transmit timeout hit while replying, if any.
    ///
    /// Later timeouts in the same interrupt show up only as presses with
    /// `transmitted == false`.
    pub fn timeout(&self) -> Option<HandlerError> {
        self.timeout
    }

    /// State after the last press, if any.
    pub fn final_state(&self) -> Option<IndicatorState> {
        self.presses.last().map(|press| press.state)
    }

    fn record(&mut self, press: ButtonPress) {
        // One entry per button at most.
        let _ = self.presses.push(press);
    }
}

/// Spins for `spins` iterations to let a bouncing contact settle.
#[inline]
pub fn settle(spins: u32) {
    for _ in 0..spins {
        core::hint::spin_loop();
    }
}

/// Services one button interrupt.
///
/// Spins for `config.debounce_spins`, then checks both buttons in
/// [`Button::SERVICE_ORDER`]. For each pending flag the flag is cleared and
/// the pin sampled; a low level runs the button's transition and writes the
/// new state id to the transmitter.
///
/// Unless `config.wait_tx_ready` is set, the reply is written without
/// checking that the transmitter is free. With it set, a timeout still
/// applies the transition but skips that reply and is recorded in the report.
pub fn handle_button_irq<O, B, S>(
    indicator: &mut Indicator<O>,
    buttons: &mut B,
    port: &mut S,
    config: &HandlerConfig,
) -> ButtonReport
where
    O: IndicatorOutputs,
    B: ButtonInputs + ?Sized,
    S: SerialPort + ?Sized,
{
    handle_button_irq_with(indicator, buttons, port, config, settle)
}

/// Same as [`handle_button_irq`] with a caller-supplied settling delay.
///
/// `delay` is called once with `config.debounce_spins`, before any flag or
/// pin is read.
pub fn handle_button_irq_with<O, B, S, D>(
    indicator: &mut Indicator<O>,
    buttons: &mut B,
    port: &mut S,
    config: &HandlerConfig,
    delay: D,
) -> ButtonReport
where
    O: IndicatorOutputs,
    B: ButtonInputs + ?Sized,
    S: SerialPort + ?Sized,
    D: FnOnce(u32),
{
    delay(config.debounce_spins);

    let mut report = ButtonReport::default();

    for button in Button::SERVICE_ORDER {
        if !buttons.pin_interrupt_pending(button) {
            continue;
        }
        buttons.clear_pin_interrupt(button);

        if buttons.read_pin_level(button) {
            trace!("{} released", button);
            continue;
        }

        let state = match button {
            Button::Retreat => indicator.retreat(),
            Button::Advance => indicator.advance(),
        };

        let transmitted = if config.wait_tx_ready {
            match wait_tx_ready(port, config.tx_ready_polls) {
                Ok(()) => true,
                Err(err) => {
                    warn!("{} reply dropped: {}", button, err);
                    report.timeout.get_or_insert(err);
                    false
                }
            }
        } else {
            true
        };

        if transmitted {
            port.write_tx_byte(state.id());
        }
        debug!("button {} -> {}", button, state);

        report.record(ButtonPress {
            button,
            state,
            transmitted,
        });
    }

    report
}
