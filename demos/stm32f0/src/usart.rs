use duo_indicator::SerialPort;
use stm32f0xx_hal::pac;

/// ISR: read data register not empty
const ISR_RXNE: u32 = 1 << 5;
/// ISR: transmit data register empty
const ISR_TXE: u32 = 1 << 7;
/// CR1: RXNE interrupt enable
const CR1_RXNEIE: u32 = 1 << 5;

/// Register-level access to USART2 after `stm32f0xx-hal` has configured it
///
/// The HAL `Serial` only offers blocking/`nb` reads and writes, while the
/// indicator needs to poll TXE separately from writing TDR.
pub struct Usart2Port {
    _private: (),
}

impl Usart2Port {
    /// Takes over USART2 and enables the receive interrupt.
    ///
    /// The peripheral must already be clocked and configured (baud rate, pins),
    /// and the HAL `Serial` handle that did so must not be used afterwards.
    pub fn new() -> Self {
        let usart = unsafe { &*pac::USART2::ptr() };
        usart
            .cr1
            .modify(|r, w| unsafe { w.bits(r.bits() | CR1_RXNEIE) });

        Self { _private: () }
    }

    /// `true` if a received byte is waiting.
    pub fn rx_pending(&self) -> bool {
        let usart = unsafe { &*pac::USART2::ptr() };
        usart.isr.read().bits() & ISR_RXNE != 0
    }
}

impl SerialPort for Usart2Port {
    fn read_rx_byte(&mut self) -> u8 {
        let usart = unsafe { &*pac::USART2::ptr() };
        usart.rdr.read().bits() as u8
    }

    fn tx_ready(&mut self) -> bool {
        let usart = unsafe { &*pac::USART2::ptr() };
        usart.isr.read().bits() & ISR_TXE != 0
    }

    fn write_tx_byte(&mut self, byte: u8) {
        let usart = unsafe { &*pac::USART2::ptr() };
        usart.tdr.write(|w| unsafe { w.bits(byte as u32) });
    }
}
