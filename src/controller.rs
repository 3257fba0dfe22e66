//! The owned context both interrupt handlers run against.

use crate::button::{ButtonInputs, ButtonReport, handle_button_irq};
use crate::command::Command;
use crate::indicator::Indicator;
use crate::output::IndicatorOutputs;
use crate::queue::CommandQueue;
use crate::serial::{SerialPort, handle_serial_rx, wait_tx_ready};
use crate::state::IndicatorState;
use crate::types::{HandlerConfig, HandlerError};

/// Everything the interrupt handlers touch, in one value.
///
/// The indicator state is the only thing either handler mutates. Taking
/// `&mut self` in each entry point makes "one handler at a time" a property
/// the compiler checks instead of an assumption about interrupt priorities.
///
/// # Type Parameters
/// * `O` - Indicator output implementation
/// * `S` - Serial port implementation
/// * `B` - Button input implementation
pub struct Controller<O, S, B>
where
    O: IndicatorOutputs,
    S: SerialPort,
    B: ButtonInputs,
{
    indicator: Indicator<O>,
    serial: S,
    buttons: B,
    config: HandlerConfig,
}

impl<O, S, B> Controller<O, S, B>
where
    O: IndicatorOutputs,
    S: SerialPort,
    B: ButtonInputs,
{
    /// Creates a controller with the default [`HandlerConfig`].
    pub fn new(outputs: O, serial: S, buttons: B) -> Self {
        Self::with_config(outputs, serial, buttons, HandlerConfig::default())
    }

    /// Creates a controller with an explicit configuration.
    ///
    /// The indicator starts in `BothOff` with the outputs driven to match.
    pub fn with_config(outputs: O, serial: S, buttons: B, config: HandlerConfig) -> Self {
        Self {
            indicator: Indicator::new(outputs),
            serial,
            buttons,
            config,
        }
    }

    /// Entry point for the serial receive interrupt.
    pub fn on_serial_rx(&mut self) -> Result<Option<IndicatorState>, HandlerError> {
        handle_serial_rx(&mut self.indicator, &mut self.serial, &self.config)
    }

    /// Entry point for the button pin-change interrupt.
    pub fn on_button_irq(&mut self) -> ButtonReport {
        handle_button_irq(
            &mut self.indicator,
            &mut self.buttons,
            &mut self.serial,
            &self.config,
        )
    }

    /// Applies every queued command in order, replying to each like the serial
    /// handler does.
    ///
    /// The transmitter is checked before each command is taken. On a timeout
    /// the pending command stays at the front of the queue and the state is
    /// left alone, so a later drain picks up where this one stopped.
    ///
    /// # Returns
    /// Number of commands applied.
    pub fn drain<const N: usize>(
        &mut self,
        queue: &CommandQueue<N>,
    ) -> Result<usize, HandlerError> {
        let mut applied = 0;
        while !queue.is_empty() {
            if let Err(err) = wait_tx_ready(&mut self.serial, self.config.tx_ready_polls) {
                warn!("drain stalled with {} queued: {}", queue.len(), err);
                return Err(err);
            }
            let Some(command) = queue.take() else {
                break;
            };
            let state = self.indicator.execute(command);
            self.serial.write_tx_byte(state.id());
            applied += 1;
        }
        Ok(applied)
    }

    /// Runs a command directly, without touching the serial port.
    pub fn execute(&mut self, command: Command) -> IndicatorState {
        self.indicator.execute(command)
    }

    /// Returns the current indicator state.
    pub fn state(&self) -> IndicatorState {
        self.indicator.current()
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Returns a reference to the indicator.
    pub fn indicator(&self) -> &Indicator<O> {
        &self.indicator
    }

    /// Returns a reference to the serial port.
    pub fn serial(&self) -> &S {
        &self.serial
    }

    /// Returns a reference to the button inputs.
    pub fn buttons(&self) -> &B {
        &self.buttons
    }

    /// Returns a mutable reference to the button inputs.
    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    /// Returns a mutable reference to the serial port.
    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }

    /// Consumes the controller and returns its parts.
    pub fn release(self) -> (O, S, B) {
        (self.indicator.release(), self.serial, self.buttons)
    }
}
