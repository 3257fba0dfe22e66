//! Handler configuration and error types.

/// Default number of `tx_ready` polls before giving up on the transmitter.
pub const DEFAULT_TX_READY_POLLS: u32 = 100_000;

/// Default number of spin iterations used to let a button settle.
pub const DEFAULT_DEBOUNCE_SPINS: u32 = 10_000;

/// Tuning for the interrupt handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandlerConfig {
    /// Maximum `tx_ready` polls before reporting [`HandlerError::TransmitTimeout`].
    pub tx_ready_polls: u32,

    /// Spin iterations spent before sampling the buttons. Not time-calibrated.
    pub debounce_spins: u32,

    /// Whether the button handler waits for transmit-ready before replying.
    ///
    /// Off by default: button replies are written straight to the transmit
    /// register, which can clobber a byte still being shifted out.
    pub wait_tx_ready: bool,
}

impl HandlerConfig {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            tx_ready_polls: DEFAULT_TX_READY_POLLS,
            debounce_spins: DEFAULT_DEBOUNCE_SPINS,
            wait_tx_ready: false,
        }
    }

    /// Sets the transmit-ready poll budget.
    pub const fn with_tx_ready_polls(mut self, polls: u32) -> Self {
        self.tx_ready_polls = polls;
        self
    }

    /// Sets the debounce spin count.
    pub const fn with_debounce_spins(mut self, spins: u32) -> Self {
        self.debounce_spins = spins;
        self
    }

    /// Makes the button handler wait for transmit-ready before replying.
    pub const fn with_button_tx_wait(mut self, wait: bool) -> Self {
        self.wait_tx_ready = wait;
        self
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors surfaced by the interrupt handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandlerError {
    /// The transmitter never reported ready within the poll budget.
    TransmitTimeout {
        /// Number of polls performed.
        polls: u32,
    },
}

impl core::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HandlerError::TransmitTimeout { polls } => {
                write!(f, "transmitter not ready after {} polls", polls)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HandlerError {}
