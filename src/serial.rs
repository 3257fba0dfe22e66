//! Serial command handler.
//!
//! Runs from the receive interrupt: one byte in, at most one byte out.

use crate::command::Command;
use crate::indicator::Indicator;
use crate::output::IndicatorOutputs;
use crate::state::IndicatorState;
use crate::types::{HandlerConfig, HandlerError};

/// Trait for abstracting the serial peripheral.
///
/// Implementations are expected to be thin register accessors. Baud rate,
/// pin muxing and interrupt enables are configured elsewhere.
pub trait SerialPort {
    /// Reads the receive register. Clears the receive-pending condition.
    fn read_rx_byte(&mut self) -> u8;

    /// Returns `true` when the transmit register can accept a byte.
    fn tx_ready(&mut self) -> bool;

    /// Writes the transmit register.
    fn write_tx_byte(&mut self, byte: u8);
}

/// Polls `tx_ready` up to `max_polls` times.
///
/// Returns as soon as the transmitter is ready, or
/// [`HandlerError::TransmitTimeout`] when the budget runs out.
pub fn wait_tx_ready<S: SerialPort + ?Sized>(
    port: &mut S,
    max_polls: u32,
) -> Result<(), HandlerError> {
    for _ in 0..max_polls {
        if port.tx_ready() {
            return Ok(());
        }
        core::hint::spin_loop();
    }
    Err(HandlerError::TransmitTimeout { polls: max_polls })
}

/// Services one receive interrupt.
///
/// Waits for the transmitter, reads one byte and, if it is a command, runs it
/// and transmits the resulting state id.
///
/// The received byte is always read so the peripheral stops signalling, even
/// when the transmitter timed out; in that case the byte is discarded and the
/// state is left alone.
///
/// # Returns
/// * `Ok(Some(state))` - Command executed, `state` transmitted
/// * `Ok(None)` - Byte was not a command; nothing changed, nothing sent
/// * `Err` - Transmitter never became ready
pub fn handle_serial_rx<O, S>(
    indicator: &mut Indicator<O>,
    port: &mut S,
    config: &HandlerConfig,
) -> Result<Option<IndicatorState>, HandlerError>
where
    O: IndicatorOutputs,
    S: SerialPort + ?Sized,
{
    let ready = wait_tx_ready(port, config.tx_ready_polls);
    let byte = port.read_rx_byte();

    if let Err(err) = ready {
        warn!("dropping byte {:#x}: {}", byte, err);
        return Err(err);
    }

    let Some(command) = Command::from_byte(byte) else {
        trace!("ignoring byte {:#x}", byte);
        return Ok(None);
    };

    let state = indicator.execute(command);
    port.write_tx_byte(state.id());
    debug!("serial {} -> {}", command, state);

    Ok(Some(state))
}
