use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{gpioa, gpiob, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
    serial::Serial,
};

use stm32f0_demos::buttons::ExtiButtons;
use stm32f0_demos::leds::LedPair;
use stm32f0_demos::usart::Usart2Port;

/// Baud rate of the command channel (ST-LINK virtual COM port)
const BAUD_RATE: u32 = 9_600;

/// Indicator LEDs: PA5 (onboard LD2) and PA6
pub type Leds = LedPair<gpioa::PA5<Output<PushPull>>, gpioa::PA6<Output<PushPull>>>;

/// Buttons: PB4 retreats, PB5 advances
pub type Buttons = ExtiButtons<gpiob::PB4<Input<PullUp>>, gpiob::PB5<Input<PullUp>>>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub leds: Leds,
    pub buttons: Buttons,
    pub serial: Usart2Port,
}

/// Initialize all hardware peripherals
///
/// This function handles all one-time bring-up:
/// - System clock configuration
/// - GPIO for LEDs and buttons
/// - USART2 at 9600 baud with the receive interrupt enabled
/// - EXTI lines 4 and 5 on both edges
///
/// NVIC unmasking is left to the caller so it can happen after the
/// controller has been published.
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    rprintln!("System clock configured: {} Hz", rcc.clocks.sysclk().0);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);

    let (led_a, led_b, retreat, advance, tx, rx) = cortex_m::interrupt::free(|cs| {
        (
            gpioa.pa5.into_push_pull_output(cs),
            gpioa.pa6.into_push_pull_output(cs),
            gpiob.pb4.into_pull_up_input(cs),
            gpiob.pb5.into_pull_up_input(cs),
            gpioa.pa2.into_alternate_af1(cs),
            gpioa.pa3.into_alternate_af1(cs),
        )
    });

    let leds = LedPair::new(led_a, led_b);
    rprintln!("LEDs configured on PA5, PA6");

    // The HAL handle is only needed for configuration; the port takes the
    // registers over from here.
    let _serial = Serial::usart2(dp.USART2, (tx, rx), BAUD_RATE.bps(), &mut rcc);
    let serial = Usart2Port::new();
    rprintln!("USART2 configured at {} baud", BAUD_RATE);

    let buttons = ExtiButtons::new(retreat, advance, &dp.SYSCFG, &dp.EXTI);
    rprintln!("Buttons configured on PB4 (retreat), PB5 (advance)");

    HardwareContext {
        leds,
        buttons,
        serial,
    }
}
