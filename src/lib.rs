#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`IndicatorState`**: The four states `BothOff`, `FirstOnly`, `SecondOnly`, `BothOn` (ids 0-3)
//! - **`Indicator`**: State machine that owns the current state and the outputs
//! - **`IndicatorOutputs`**: Trait to implement for your output hardware (`PinOutputs` covers `embedded-hal` pins)
//! - **`SerialPort`**: Trait to implement for your serial peripheral
//! - **`ButtonInputs`**: Trait to implement for your button pins and interrupt flags (`PinButtons` covers `embedded-hal` pins)
//! - **`Controller`**: Owned context with one entry point per interrupt
//! - **`SharedController`**: Critical-section guarded slot for using a `Controller` from interrupt vectors
//! - **`CommandQueue`**: Bounded multi-producer queue drained by one consumer
//! - **`StateMonitor`**: Host-side tracker that follows the state through the reply bytes

#[macro_use]
mod fmt;

pub mod state;
pub mod output;
pub mod command;
pub mod types;
pub mod indicator;
pub mod serial;
pub mod button;
pub mod queue;
pub mod controller;
pub mod shared;
pub mod monitor;

pub use state::{IndicatorState, InvalidStateId};
pub use output::{IndicatorOutputs, OutputLine, PinOutputs, Polarity};
pub use command::{Command, UnknownCommand};
pub use types::{DEFAULT_DEBOUNCE_SPINS, DEFAULT_TX_READY_POLLS, HandlerConfig, HandlerError};
pub use indicator::Indicator;
pub use serial::{SerialPort, handle_serial_rx};
pub use button::{
    Button, ButtonInputs, ButtonPress, ButtonReport, InterruptFlags, PinButtons,
    handle_button_irq, handle_button_irq_with,
};
pub use queue::{CommandQueue, QueueFull};
pub use controller::Controller;
pub use shared::SharedController;
pub use monitor::StateMonitor;
