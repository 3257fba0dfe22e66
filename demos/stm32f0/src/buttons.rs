use duo_indicator::{Button, ButtonInputs};
use embedded_hal::digital::v2::InputPin;
use stm32f0xx_hal::pac;

/// EXTI line of the retreat button (PB4)
pub const RETREAT_LINE: u8 = 4;
/// EXTI line of the advance button (PB5)
pub const ADVANCE_LINE: u8 = 5;

const RCC_APB2ENR_SYSCFGEN: u32 = 1 << 0;
/// EXTICR2 selector for port B on lines 4 and 5
const EXTICR2_PB4_PB5: u32 = 0x11;

fn line_mask(button: Button) -> u32 {
    match button {
        Button::Retreat => 1 << RETREAT_LINE,
        Button::Advance => 1 << ADVANCE_LINE,
    }
}

/// Two active-low buttons on EXTI lines 4 and 5 (shared `EXTI4_15` vector)
pub struct ExtiButtons<R, A>
where
    R: InputPin,
    A: InputPin,
{
    retreat: R,
    advance: A,
}

impl<R, A> ExtiButtons<R, A>
where
    R: InputPin,
    A: InputPin,
{
    /// Routes PB4/PB5 to EXTI lines 4/5, triggering on both edges.
    ///
    /// Pins must already be pull-up inputs.
    pub fn new(retreat: R, advance: A, syscfg: &pac::SYSCFG, exti: &pac::EXTI) -> Self {
        let mask = (1 << RETREAT_LINE) | (1 << ADVANCE_LINE);

        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr
            .modify(|r, w| unsafe { w.bits(r.bits() | RCC_APB2ENR_SYSCFGEN) });

        syscfg
            .exticr2
            .modify(|r, w| unsafe { w.bits((r.bits() & !0xFF) | EXTICR2_PB4_PB5) });
        exti.rtsr.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
        exti.ftsr.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
        exti.pr.write(|w| unsafe { w.bits(mask) });
        exti.imr.modify(|r, w| unsafe { w.bits(r.bits() | mask) });

        Self { retreat, advance }
    }
}

impl<R, A> ButtonInputs for ExtiButtons<R, A>
where
    R: InputPin,
    A: InputPin,
{
    fn read_pin_level(&mut self, button: Button) -> bool {
        let level = match button {
            Button::Retreat => self.retreat.is_high().ok(),
            Button::Advance => self.advance.is_high().ok(),
        };
        // Unreadable pin reads as released.
        level.unwrap_or(true)
    }

    fn pin_interrupt_pending(&mut self, button: Button) -> bool {
        let exti = unsafe { &*pac::EXTI::ptr() };
        exti.pr.read().bits() & line_mask(button) != 0
    }

    fn clear_pin_interrupt(&mut self, button: Button) {
        // PR is write-one-to-clear.
        let exti = unsafe { &*pac::EXTI::ptr() };
        exti.pr.write(|w| unsafe { w.bits(line_mask(button)) });
    }
}
