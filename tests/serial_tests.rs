//! Integration tests for the serial command handler

mod common;
use common::*;

use duo_indicator::{
    HandlerConfig, HandlerError, Indicator, IndicatorState, handle_serial_rx,
};

#[test]
fn next_from_zero_replies_one() {
    let mut controller = test_controller();
    controller.serial_mut().receive(b'N');

    let result = controller.on_serial_rx();

    assert_eq!(result, Ok(Some(IndicatorState::FirstOnly)));
    assert_eq!(controller.serial().transmitted(), &[1]);
}

#[test]
fn previous_from_zero_wraps_to_three() {
    let mut controller = test_controller();
    controller.serial_mut().receive(b'P');

    let result = controller.on_serial_rx();

    assert_eq!(result, Ok(Some(IndicatorState::BothOn)));
    assert_eq!(controller.serial().transmitted(), &[3]);
}

#[test]
fn current_reports_without_changing_state() {
    let mut controller = test_controller();

    for expected in 0..4u8 {
        send(&mut controller, b'C');
        assert_eq!(controller.serial().transmitted().last(), Some(&expected));
        assert_eq!(controller.state().id(), expected);
        send(&mut controller, b'N');
    }
}

#[test]
fn unknown_byte_is_silently_dropped() {
    let mut controller = test_controller();
    send(&mut controller, b'N');
    let writes = controller.indicator().outputs().write_count();

    controller.serial_mut().receive(b'X');
    let result = controller.on_serial_rx();

    assert_eq!(result, Ok(None));
    assert_eq!(controller.state(), IndicatorState::FirstOnly);
    assert_eq!(controller.serial().transmitted(), &[1]);
    assert_eq!(controller.indicator().outputs().write_count(), writes);
    assert_eq!(controller.serial().pending_rx(), 0);
}

#[test]
fn replies_are_raw_ids_not_ascii() {
    let mut controller = test_controller();
    send(&mut controller, b'N');
    send(&mut controller, b'N');

    assert_eq!(controller.serial().transmitted(), &[0x01, 0x02]);
}

#[test]
fn waits_for_busy_transmitter_before_replying() {
    let mut serial = MockSerial::new();
    serial.set_busy(5);
    serial.receive(b'N');
    let mut indicator = Indicator::new(MockOutputs::new());
    let config = HandlerConfig::new().with_tx_ready_polls(10);

    let result = handle_serial_rx(&mut indicator, &mut serial, &config);

    assert_eq!(result, Ok(Some(IndicatorState::FirstOnly)));
    assert_eq!(serial.transmitted(), &[1]);
    assert_eq!(serial.collisions(), 0);
    assert_eq!(serial.polls(), 6);
}

#[test]
fn back_to_back_commands_never_collide() {
    let mut controller = duo_indicator::Controller::with_config(
        MockOutputs::new(),
        MockSerial::new().with_shift_polls(3),
        MockButtons::new(),
        test_config(),
    );

    for byte in *b"NNPC" {
        send(&mut controller, byte);
    }

    assert_eq!(controller.serial().transmitted(), &[1, 2, 1, 1]);
    assert_eq!(controller.serial().collisions(), 0);
}

#[test]
fn stuck_transmitter_times_out_instead_of_hanging() {
    let mut serial = MockSerial::stuck();
    serial.receive(b'N');
    let mut indicator = Indicator::new(MockOutputs::new());
    let config = HandlerConfig::new().with_tx_ready_polls(50);

    let result = handle_serial_rx(&mut indicator, &mut serial, &config);

    assert_eq!(result, Err(HandlerError::TransmitTimeout { polls: 50 }));
    assert_eq!(serial.polls(), 50);
    // Byte consumed so the receive interrupt clears, but not acted on.
    assert_eq!(serial.pending_rx(), 0);
    assert_eq!(indicator.current(), IndicatorState::BothOff);
    assert!(serial.transmitted().is_empty());
}

#[test]
fn zero_poll_budget_always_times_out() {
    let mut serial = MockSerial::new();
    serial.receive(b'C');
    let mut indicator = Indicator::new(MockOutputs::new());
    let config = HandlerConfig::new().with_tx_ready_polls(0);

    let result = handle_serial_rx(&mut indicator, &mut serial, &config);

    assert!(matches!(result, Err(HandlerError::TransmitTimeout { .. })));
}
