//! Per-frame snapshots with edge detection

use super::events::KeyCode;
use super::state::InputState;

/// The input state of this frame next to the one of the previous frame.
///
/// Pressed flags alone cannot tell a fresh press from a held key; comparing
/// two snapshots can.
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    pub current: InputState,
    pub previous: InputState,
}

impl InputFrame {
    pub fn new(current: InputState, previous: InputState) -> Self {
        Self { current, previous }
    }

    pub fn key_just_pressed(&self, code: KeyCode) -> bool {
        self.current.is_key_pressed(code) && !self.previous.is_key_pressed(code)
    }

    pub fn key_just_released(&self, code: KeyCode) -> bool {
        !self.current.is_key_pressed(code) && self.previous.is_key_pressed(code)
    }

    pub fn button_just_pressed(&self, code: usize) -> bool {
        self.current.is_button_pressed(code) && !self.previous.is_button_pressed(code)
    }

    pub fn button_just_released(&self, code: usize) -> bool {
        !self.current.is_button_pressed(code) && self.previous.is_button_pressed(code)
    }

    /// Pointer movement since the previous frame
    pub fn pointer_delta(&self) -> [f32; 2] {
        [
            self.current.pointer_x() - self.previous.pointer_x(),
            self.current.pointer_y() - self.previous.pointer_y(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_edges() {
        let previous = InputState::new();
        let mut current = previous.clone();
        current.record_key_down(32);

        let frame = InputFrame::new(current.clone(), previous);
        assert!(frame.key_just_pressed(32));
        assert!(!frame.key_just_released(32));

        // Held across two frames: no longer an edge.
        let held = InputFrame::new(current.clone(), current.clone());
        assert!(!held.key_just_pressed(32));

        let mut released = current.clone();
        released.record_key_up(32);
        let frame = InputFrame::new(released, current);
        assert!(frame.key_just_released(32));
    }

    #[test]
    fn test_button_edges_and_pointer_delta() {
        let mut previous = InputState::new();
        previous.record_pointer_move(10.0, 10.0);
        let mut current = previous.clone();
        current.record_button_down(0);
        current.record_pointer_move(14.0, 7.0);

        let frame = InputFrame::new(current, previous);
        assert!(frame.button_just_pressed(0));
        assert!(!frame.button_just_released(0));
        assert_eq!(frame.pointer_delta(), [4.0, -3.0]);
    }
}
