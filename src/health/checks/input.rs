//! Input tracking health check

use crate::app::input::{InputFrame, InputState, RawInputEvent, keys};
use crate::health::check::{CheckResult, SystemCheck};

/// Replays a short event sequence through [`InputState`] and verifies the queries
pub struct InputCheck;

impl InputCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InputCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for InputCheck {
    fn name(&self) -> &'static str {
        "Input"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates key, button, pointer and wheel tracking")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failures = 0;
        let mut verify = |ok: bool, what: &str| {
            if ok {
                details.push(format!("  ✓ {}", what));
            } else {
                details.push(format!("  ✗ {}", what));
                failures += 1;
            }
        };

        let previous = InputState::new();
        let mut state = InputState::new();
        verify(!state.any_key_pressed(), "No keys pressed initially");

        state.apply(RawInputEvent::KeyDown(keys::SPACE));
        state.apply(RawInputEvent::KeyDown(keys::A));
        state.apply(RawInputEvent::KeyUp(keys::A));
        verify(
            state.is_key_pressed(keys::SPACE) && !state.is_key_pressed(keys::A),
            "Key down/up tracked",
        );
        verify(
            state.last_pressed_key() == keys::A,
            "Last pressed key survives release",
        );

        state.apply(RawInputEvent::PointerMove { x: 12.0, y: 34.0 });
        state.apply(RawInputEvent::ButtonDown(0));
        state.apply(RawInputEvent::ButtonDown(99));
        verify(
            state.pointer_position() == [12.0, 34.0] && state.is_button_pressed(0),
            "Pointer position and left button tracked",
        );
        verify(
            !state.is_button_pressed(99),
            "Out-of-range button ignored",
        );

        state.apply(RawInputEvent::Wheel(-120.0));
        verify(state.wheel_delta() == -120.0, "Wheel delta recorded");

        let frame = InputFrame::new(state.clone(), previous);
        verify(
            frame.key_just_pressed(keys::SPACE) && frame.button_just_pressed(0),
            "Frame edges detected",
        );

        state.apply(RawInputEvent::PointerLeave);
        verify(
            !state.is_button_pressed(0) && state.wheel_delta() == 0.0,
            "Pointer leave clears buttons and wheel",
        );
        verify(
            state.is_key_pressed(keys::SPACE),
            "Pointer leave keeps keyboard state",
        );

        let details_str = details.join("\n");
        if failures > 0 {
            CheckResult::fail(format!("{} input expectations failed", failures))
                .with_details(details_str)
        } else {
            CheckResult::pass("Input state tracking operational").with_details(details_str)
        }
    }
}
