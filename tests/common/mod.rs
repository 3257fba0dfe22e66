//! Shared test infrastructure for duo-indicator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use duo_indicator::{
    Button, ButtonInputs, Controller, HandlerConfig, IndicatorOutputs, OutputLine, SerialPort,
};
use heapless::{Deque, Vec};

// ============================================================================
// Mock Outputs
// ============================================================================

/// Mock outputs that record every line change
pub struct MockOutputs {
    a: bool,
    b: bool,
    history: Vec<(OutputLine, bool), 64>,
}

impl MockOutputs {
    pub fn new() -> Self {
        Self {
            a: false,
            b: false,
            history: Vec::new(),
        }
    }

    /// Current `(a, b)` levels
    pub fn pattern(&self) -> (bool, bool) {
        (self.a, self.b)
    }

    pub fn history(&self) -> &[(OutputLine, bool)] {
        &self.history
    }

    pub fn write_count(&self) -> usize {
        self.history.len()
    }
}

impl IndicatorOutputs for MockOutputs {
    fn set_output(&mut self, line: OutputLine, active: bool) {
        match line {
            OutputLine::A => self.a = active,
            OutputLine::B => self.b = active,
        }
        let _ = self.history.push((line, active));
    }
}

// ============================================================================
// Mock Serial Port
// ============================================================================

/// Mock UART with a receive FIFO, a transmit log and a busy transmitter model
///
/// After each write the transmitter reports not-ready for `shift_polls` polls,
/// standing in for the byte being shifted out. Writing while not ready counts
/// as a collision.
pub struct MockSerial {
    rx: Deque<u8, 32>,
    tx: Vec<u8, 64>,
    busy_polls: u32,
    shift_polls: u32,
    collisions: u32,
    polls: u32,
    stuck: bool,
}

impl MockSerial {
    pub fn new() -> Self {
        Self {
            rx: Deque::new(),
            tx: Vec::new(),
            busy_polls: 0,
            shift_polls: 0,
            collisions: 0,
            polls: 0,
            stuck: false,
        }
    }

    /// Transmitter stays busy for `polls` polls after every write
    pub fn with_shift_polls(mut self, polls: u32) -> Self {
        self.shift_polls = polls;
        self
    }

    /// Transmitter never becomes ready
    pub fn stuck() -> Self {
        let mut serial = Self::new();
        serial.stuck = true;
        serial
    }

    /// Queue a byte as if it had arrived on the wire
    pub fn receive(&mut self, byte: u8) {
        self.rx.push_back(byte).unwrap();
    }

    /// Make the transmitter busy for the next `polls` polls
    pub fn set_busy(&mut self, polls: u32) {
        self.busy_polls = polls;
    }

    pub fn transmitted(&self) -> &[u8] {
        &self.tx
    }

    pub fn collisions(&self) -> u32 {
        self.collisions
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }

    pub fn pending_rx(&self) -> usize {
        self.rx.len()
    }
}

impl SerialPort for MockSerial {
    fn read_rx_byte(&mut self) -> u8 {
        self.rx.pop_front().unwrap_or(0)
    }

    fn tx_ready(&mut self) -> bool {
        self.polls += 1;
        if self.stuck {
            return false;
        }
        if self.busy_polls > 0 {
            self.busy_polls -= 1;
            false
        } else {
            true
        }
    }

    fn write_tx_byte(&mut self, byte: u8) {
        if self.stuck || self.busy_polls > 0 {
            self.collisions += 1;
        }
        let _ = self.tx.push(byte);
        self.busy_polls = self.shift_polls;
    }
}

// ============================================================================
// Mock Buttons
// ============================================================================

/// Mock button pins with settable interrupt flags and levels (active-low)
pub struct MockButtons {
    pending: [bool; 2],
    level_high: [bool; 2],
    clears: Vec<Button, 16>,
}

fn index(button: Button) -> usize {
    match button {
        Button::Retreat => 0,
        Button::Advance => 1,
    }
}

impl MockButtons {
    pub fn new() -> Self {
        Self {
            pending: [false; 2],
            level_high: [true; 2],
            clears: Vec::new(),
        }
    }

    /// Flag an edge and hold the pin low (pressed)
    pub fn press(&mut self, button: Button) {
        self.pending[index(button)] = true;
        self.level_high[index(button)] = false;
    }

    /// Flag an edge and leave the pin high (released)
    pub fn release(&mut self, button: Button) {
        self.pending[index(button)] = true;
        self.level_high[index(button)] = true;
    }

    pub fn is_pending(&self, button: Button) -> bool {
        self.pending[index(button)]
    }

    pub fn clears(&self) -> &[Button] {
        &self.clears
    }
}

impl ButtonInputs for MockButtons {
    fn read_pin_level(&mut self, button: Button) -> bool {
        self.level_high[index(button)]
    }

    fn pin_interrupt_pending(&mut self, button: Button) -> bool {
        self.pending[index(button)]
    }

    fn clear_pin_interrupt(&mut self, button: Button) {
        self.pending[index(button)] = false;
        let _ = self.clears.push(button);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestController = Controller<MockOutputs, MockSerial, MockButtons>;

/// Config with no debounce spin, for fast tests
pub fn test_config() -> HandlerConfig {
    HandlerConfig::new()
        .with_debounce_spins(0)
        .with_tx_ready_polls(16)
}

pub fn test_controller() -> TestController {
    Controller::with_config(
        MockOutputs::new(),
        MockSerial::new(),
        MockButtons::new(),
        test_config(),
    )
}

/// Feed one byte through the serial entry point
pub fn send(controller: &mut TestController, byte: u8) {
    controller.serial_mut().receive(byte);
    let _ = controller.on_serial_rx();
}
