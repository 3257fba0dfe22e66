#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::{interrupt, Interrupt};

use duo_indicator::{Controller, SharedController};
use stm32f0_demos::usart::Usart2Port;

mod hardware_setup;

use hardware_setup::{Buttons, Leds};

/// NVIC priority of the serial interrupt (upper two bits are implemented)
const SERIAL_PRIORITY: u8 = 0x40;
/// NVIC priority of the button interrupt, below serial
const BUTTON_PRIORITY: u8 = 0x80;

static CONTROLLER: SharedController<Leds, Usart2Port, Buttons> = SharedController::new();

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Duo Indicator ===");

    let hw = hardware_setup::init_hardware();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    CONTROLLER.init(Controller::new(hw.leds, hw.serial, hw.buttons));
    rprintln!("Controller ready: send 'N', 'P' or 'C'");

    unsafe {
        cp.NVIC.set_priority(Interrupt::USART2, SERIAL_PRIORITY);
        cp.NVIC.set_priority(Interrupt::EXTI4_15, BUTTON_PRIORITY);
        cortex_m::peripheral::NVIC::unmask(Interrupt::USART2);
        cortex_m::peripheral::NVIC::unmask(Interrupt::EXTI4_15);
    }

    // Only interrupts do work from here on.
    cp.SCB.set_sleeponexit();
    loop {
        cortex_m::asm::wfi();
    }
}

#[interrupt]
fn USART2() {
    CONTROLLER.with(|controller| {
        if !controller.serial().rx_pending() {
            return;
        }
        match controller.on_serial_rx() {
            Ok(Some(state)) => rprintln!("serial -> {}", state),
            Ok(None) => {}
            Err(e) => rprintln!("serial error: {}", e),
        }
    });
}

#[interrupt]
fn EXTI4_15() {
    CONTROLLER.with(|controller| {
        let report = controller.on_button_irq();
        if let Some(state) = report.final_state() {
            rprintln!("button -> {}", state);
        }
    });
}
