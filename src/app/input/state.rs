//! Raw input state

use std::collections::HashMap;

use super::events::{KeyCode, RawInputEvent};

/// Number of tracked mouse buttons (left, right, middle, back, forward)
pub const MOUSE_BUTTON_COUNT: usize = 5;

/// Keyboard, mouse button, pointer and wheel state.
///
/// Mutated by the event source, read once per frame by game logic. Unknown
/// codes never error: they simply report "not pressed".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// Every key code ever seen, with its current pressed flag
    pressed_keys: HashMap<KeyCode, bool>,
    last_pressed_key: KeyCode,
    mouse_buttons: [bool; MOUSE_BUTTON_COUNT],
    mouse_x: f32,
    mouse_y: f32,
    /// Last wheel delta; persists until the next wheel or leave event
    wheel_delta: f32,
}

impl InputState {
    /// Creates a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a raw event to the state
    pub fn apply(&mut self, event: RawInputEvent) {
        match event {
            RawInputEvent::KeyDown(code) => self.record_key_down(code),
            RawInputEvent::KeyUp(code) => self.record_key_up(code),
            RawInputEvent::PointerMove { x, y } => self.record_pointer_move(x, y),
            RawInputEvent::ButtonDown(code) => self.record_button_down(code),
            RawInputEvent::ButtonUp(code) => self.record_button_up(code),
            RawInputEvent::PointerLeave => self.reset_pointer_leave_state(),
            RawInputEvent::Wheel(delta) => self.record_wheel(delta),
        }
    }

    pub fn record_key_down(&mut self, code: KeyCode) {
        self.pressed_keys.insert(code, true);
        self.last_pressed_key = code;
    }

    pub fn record_key_up(&mut self, code: KeyCode) {
        self.pressed_keys.insert(code, false);
    }

    pub fn is_key_pressed(&self, code: KeyCode) -> bool {
        self.pressed_keys.get(&code).copied().unwrap_or(false)
    }

    /// Code of the most recent key press (0 before any press)
    pub fn last_pressed_key(&self) -> KeyCode {
        self.last_pressed_key
    }

    /// True if at least one key is currently down.
    ///
    /// Scans every key code seen so far.
    pub fn any_key_pressed(&self) -> bool {
        self.pressed_keys.values().any(|pressed| *pressed)
    }

    /// Codes of all keys currently down, in no particular order
    pub fn pressed_key_codes(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.pressed_keys
            .iter()
            .filter(|(_, pressed)| **pressed)
            .map(|(code, _)| *code)
    }

    pub fn record_pointer_move(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    pub fn pointer_x(&self) -> f32 {
        self.mouse_x
    }

    pub fn pointer_y(&self) -> f32 {
        self.mouse_y
    }

    pub fn pointer_position(&self) -> [f32; 2] {
        [self.mouse_x, self.mouse_y]
    }

    /// Out-of-range codes are ignored
    pub fn record_button_down(&mut self, code: usize) {
        if let Some(pressed) = self.mouse_buttons.get_mut(code) {
            *pressed = true;
        }
    }

    pub fn record_button_up(&mut self, code: usize) {
        if let Some(pressed) = self.mouse_buttons.get_mut(code) {
            *pressed = false;
        }
    }

    pub fn is_button_pressed(&self, code: usize) -> bool {
        self.mouse_buttons.get(code).copied().unwrap_or(false)
    }

    pub fn record_wheel(&mut self, delta: f32) {
        self.wheel_delta = delta;
    }

    /// Last wheel delta. Not reset between frames; see [`Self::consume_wheel_delta`].
    pub fn wheel_delta(&self) -> f32 {
        self.wheel_delta
    }

    /// Returns the wheel delta and resets it to zero, for edge-triggered use
    pub fn consume_wheel_delta(&mut self) -> f32 {
        std::mem::take(&mut self.wheel_delta)
    }

    /// Releases the left and right buttons and clears the wheel
    pub fn reset_pointer_leave_state(&mut self) {
        self.record_button_up(0);
        self.record_button_up(1);
        self.wheel_delta = 0.0;
    }
}
