#![no_std]

pub mod leds;
pub mod usart;
pub mod buttons;
