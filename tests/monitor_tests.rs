//! Integration tests for StateMonitor fed from a controller's replies

mod common;
use common::*;

use duo_indicator::{Button, IndicatorState, InvalidStateId, StateMonitor};

/// Feed every reply byte to the monitor, collecting the reported changes
fn follow(monitor: &mut StateMonitor, replies: &[u8]) -> Vec<IndicatorState> {
    replies
        .iter()
        .filter_map(|&byte| monitor.feed(byte).ok().flatten())
        .collect()
}

#[test]
fn monitor_tracks_serial_and_button_changes() {
    let mut controller = test_controller();
    let mut monitor = StateMonitor::new();

    send(&mut controller, StateMonitor::QUERY);
    send(&mut controller, b'N');
    send(&mut controller, b'C');
    controller.buttons_mut().press(Button::Advance);
    controller.on_button_irq();
    controller.buttons_mut().press(Button::Retreat);
    controller.on_button_irq();

    let changes = follow(&mut monitor, controller.serial().transmitted());

    assert_eq!(
        changes,
        vec![
            IndicatorState::BothOff,
            IndicatorState::FirstOnly,
            IndicatorState::SecondOnly,
            IndicatorState::FirstOnly,
        ]
    );
    assert_eq!(monitor.current(), Some(controller.state()));
    assert_eq!(monitor.changes(), 4);
}

#[test]
fn monitor_agrees_with_controller_after_wraparound() {
    let mut controller = test_controller();
    let mut monitor = StateMonitor::new();

    for _ in 0..5 {
        send(&mut controller, b'P');
    }
    follow(&mut monitor, controller.serial().transmitted());

    assert_eq!(monitor.current(), Some(IndicatorState::BothOn));
    assert_eq!(monitor.current(), Some(controller.state()));
}

#[test]
fn line_noise_does_not_move_monitor() {
    let mut monitor = StateMonitor::new();

    assert_eq!(monitor.feed(b'N'), Err(InvalidStateId(b'N')));
    assert_eq!(monitor.current(), None);
    assert_eq!(monitor.feed(0xFF), Err(InvalidStateId(0xFF)));
    assert_eq!(monitor.changes(), 0);
}
