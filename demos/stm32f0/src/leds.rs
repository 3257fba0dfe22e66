use duo_indicator::{IndicatorOutputs, OutputLine};
use embedded_hal::digital::v2::OutputPin;

/// Indicator outputs on two push-pull GPIO pins (active-high)
///
/// `embedded-hal` 0.2 pins from `stm32f0xx-hal`. GPIO writes on this part
/// cannot fail, so errors are ignored.
pub struct LedPair<A, B>
where
    A: OutputPin,
    B: OutputPin,
{
    led_a: A,
    led_b: B,
}

impl<A, B> LedPair<A, B>
where
    A: OutputPin,
    B: OutputPin,
{
    pub fn new(led_a: A, led_b: B) -> Self {
        Self { led_a, led_b }
    }
}

impl<A, B> IndicatorOutputs for LedPair<A, B>
where
    A: OutputPin,
    B: OutputPin,
{
    fn set_output(&mut self, line: OutputLine, active: bool) {
        let _ = match (line, active) {
            (OutputLine::A, true) => self.led_a.set_high().map_err(|_| ()),
            (OutputLine::A, false) => self.led_a.set_low().map_err(|_| ()),
            (OutputLine::B, true) => self.led_b.set_high().map_err(|_| ()),
            (OutputLine::B, false) => self.led_b.set_low().map_err(|_| ()),
        };
    }
}
