//! Integration tests for input tracking through the collector

use panel_runtime::app::input::{
    InputCollector, InputState, MOUSE_BUTTON_COUNT, MouseButton, RawInputEvent, SharedInputState,
    keys,
};
use panel_runtime::app::{GameViewConfig, InputConfig};
use winit::dpi::PhysicalPosition;
use winit::event::{MouseScrollDelta, TouchPhase};

fn collector(reset_wheel_each_frame: bool) -> InputCollector {
    InputCollector::new(
        &InputConfig {
            wheel_line_delta: 120.0,
            reset_wheel_each_frame,
        },
        &GameViewConfig {
            width: 320.0,
            height: 240.0,
        },
    )
}

#[test]
fn test_keyboard_sequence() {
    let mut collector = collector(false);

    collector.record(RawInputEvent::KeyDown(keys::LEFT));
    collector.record(RawInputEvent::KeyDown(keys::SHIFT));
    collector.record(RawInputEvent::KeyUp(keys::LEFT));

    let state = collector.state();
    assert!(state.is_key_pressed(keys::SHIFT));
    assert!(!state.is_key_pressed(keys::LEFT));
    assert_eq!(state.last_pressed_key(), keys::SHIFT);
    assert!(state.any_key_pressed());

    collector.record(RawInputEvent::KeyUp(keys::SHIFT));
    assert!(!collector.state().any_key_pressed());
    assert_eq!(collector.state().last_pressed_key(), keys::SHIFT);
}

#[test]
fn test_unknown_keys_read_as_released() {
    let state = InputState::new();
    assert!(!state.is_key_pressed(0));
    assert!(!state.is_key_pressed(u32::MAX));
    assert_eq!(state.last_pressed_key(), 0);
}

#[test]
fn test_pointer_in_game_view_coordinates() {
    let mut collector = collector(false);
    collector.set_view_size(640.0, 480.0);

    let [x, y] = collector.to_game_view(PhysicalPosition::new(320.0, 120.0));
    collector.record(RawInputEvent::PointerMove { x, y });

    assert_eq!(collector.state().pointer_x(), 160.0);
    assert_eq!(collector.state().pointer_y(), 60.0);
}

#[test]
fn test_mouse_buttons_and_pointer_leave() {
    let mut collector = collector(false);

    for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
        collector.record(RawInputEvent::ButtonDown(button.code()));
    }
    collector.record(RawInputEvent::ButtonDown(MOUSE_BUTTON_COUNT));
    collector.record(RawInputEvent::Wheel(240.0));
    collector.record(RawInputEvent::KeyDown(keys::ENTER));

    assert!(collector.state().is_button_pressed(MouseButton::Middle.code()));
    assert!(!collector.state().is_button_pressed(MOUSE_BUTTON_COUNT));

    collector.record(RawInputEvent::PointerLeave);
    let state = collector.state();
    assert!(!state.is_button_pressed(MouseButton::Left.code()));
    assert!(!state.is_button_pressed(MouseButton::Right.code()));
    // Only the left and right buttons are released on leave
    assert!(state.is_button_pressed(MouseButton::Middle.code()));
    assert_eq!(state.wheel_delta(), 0.0);
    assert!(state.is_key_pressed(keys::ENTER));
}

#[test]
fn test_wheel_consumption_per_frame() {
    let mut persistent = collector(false);
    let mut resetting = collector(true);

    for collector in [&mut persistent, &mut resetting] {
        let delta = collector.wheel_delta_from(MouseScrollDelta::LineDelta(0.0, -1.0));
        collector.record(RawInputEvent::Wheel(delta));
        assert_eq!(collector.frame().current.wheel_delta(), -120.0);
        collector.advance_frame();
    }

    assert_eq!(persistent.state().wheel_delta(), -120.0);
    assert_eq!(persistent.state_mut().consume_wheel_delta(), -120.0);
    assert_eq!(persistent.state().wheel_delta(), 0.0);

    assert_eq!(resetting.state().wheel_delta(), 0.0);
}

#[test]
fn test_frame_edges_over_several_frames() {
    let mut collector = collector(false);

    collector.record(RawInputEvent::ButtonDown(0));
    assert!(collector.frame().button_just_pressed(0));
    collector.advance_frame();

    assert!(!collector.frame().button_just_pressed(0));
    collector.record(RawInputEvent::ButtonUp(0));
    assert!(collector.frame().button_just_released(0));
    collector.advance_frame();

    collector.record(RawInputEvent::PointerMove { x: 10.0, y: -4.0 });
    assert_eq!(collector.frame().pointer_delta(), [10.0, -4.0]);
}

#[test]
fn test_touch_drives_left_button() {
    let mut collector = collector(false);
    collector.set_view_size(320.0, 240.0);

    collector.handle_touch(1, TouchPhase::Started, PhysicalPosition::new(30.0, 40.0));
    let frame = collector.frame();
    assert!(frame.button_just_pressed(MouseButton::Left.code()));
    assert_eq!(frame.current.pointer_position(), [30.0, 40.0]);
    collector.advance_frame();

    collector.handle_touch(1, TouchPhase::Cancelled, PhysicalPosition::new(30.0, 40.0));
    assert!(collector.frame().button_just_released(MouseButton::Left.code()));
}

#[test]
fn test_shared_state_snapshot_matches_collector() {
    let shared = SharedInputState::new();
    let mut collector = collector(false);

    for event in [
        RawInputEvent::KeyDown(keys::A),
        RawInputEvent::PointerMove { x: 3.0, y: 4.0 },
        RawInputEvent::ButtonDown(2),
        RawInputEvent::Wheel(120.0),
    ] {
        shared.record(event);
        collector.record(event);
    }

    assert_eq!(&shared.snapshot(), collector.state());
}
