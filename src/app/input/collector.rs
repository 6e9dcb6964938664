//! Raw input collection from winit events

use tracing::trace;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::events::{MouseButton, RawInputEvent, dom_key_code};
use super::frame::InputFrame;
use super::state::InputState;
use crate::app::config::{GameViewConfig, InputConfig};

/// Collects raw input from winit events and maintains InputState
pub struct InputCollector {
    state: InputState,
    previous: InputState,
    /// Logical game-view resolution pointer positions are mapped into
    game_size: [f32; 2],
    /// Current surface size in physical pixels
    view_size: [f32; 2],
    wheel_line_delta: f32,
    reset_wheel_each_frame: bool,
    /// Touch id currently emulating the left button
    primary_touch: Option<u64>,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new(input: &InputConfig, game: &GameViewConfig) -> Self {
        Self {
            state: InputState::new(),
            previous: InputState::new(),
            game_size: [game.width, game.height],
            view_size: [game.width, game.height],
            wheel_line_delta: input.wheel_line_delta,
            reset_wheel_each_frame: input.reset_wheel_each_frame,
            primary_touch: None,
        }
    }

    /// Update the surface size used to scale pointer positions
    pub fn set_view_size(&mut self, width: f32, height: f32) {
        self.view_size = [width, height];
    }

    /// Maps a surface position (physical pixels) into the logical game view
    pub fn to_game_view(&self, position: PhysicalPosition<f64>) -> [f32; 2] {
        let scale = |game: f32, view: f32| if view > 0.0 { game / view } else { 1.0 };
        [
            position.x as f32 * scale(self.game_size[0], self.view_size[0]),
            position.y as f32 * scale(self.game_size[1], self.view_size[1]),
        ]
    }

    /// Converts a scroll delta to wheel units (positive = away from the user)
    pub fn wheel_delta_from(&self, delta: MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => y * self.wheel_line_delta,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        }
    }

    /// Applies a raw event to the tracked state
    pub fn record(&mut self, event: RawInputEvent) {
        self.state.apply(event);
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    trace!(key = ?event.physical_key, "Ignoring unidentified key");
                    return;
                };
                let Some(code) = dom_key_code(key) else {
                    trace!(?key, "Ignoring unmapped key");
                    return;
                };
                match event.state {
                    ElementState::Pressed => self.record(RawInputEvent::KeyDown(code)),
                    ElementState::Released => self.record(RawInputEvent::KeyUp(code)),
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let [x, y] = self.to_game_view(*position);
                self.record(RawInputEvent::PointerMove { x, y });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = MouseButton::from_winit(*button) else {
                    trace!(?button, "Ignoring untracked mouse button");
                    return;
                };
                match state {
                    ElementState::Pressed => self.record(RawInputEvent::ButtonDown(button.code())),
                    ElementState::Released => self.record(RawInputEvent::ButtonUp(button.code())),
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = self.wheel_delta_from(*delta);
                self.record(RawInputEvent::Wheel(delta));
            }

            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => {
                self.record(RawInputEvent::PointerLeave);
            }

            WindowEvent::Touch(touch) => {
                self.handle_touch(touch.id, touch.phase, touch.location);
            }

            WindowEvent::Resized(size) => {
                self.set_view_size(size.width as f32, size.height as f32);
            }

            _ => {}
        }
    }

    /// Emulates the left mouse button with the first active touch
    pub fn handle_touch(&mut self, id: u64, phase: TouchPhase, location: PhysicalPosition<f64>) {
        if phase == TouchPhase::Started && self.primary_touch.is_none() {
            self.primary_touch = Some(id);
        }
        if self.primary_touch != Some(id) {
            return;
        }

        let [x, y] = self.to_game_view(location);
        self.record(RawInputEvent::PointerMove { x, y });

        match phase {
            TouchPhase::Started => self.record(RawInputEvent::ButtonDown(0)),
            TouchPhase::Moved => {}
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.record(RawInputEvent::ButtonUp(0));
                self.primary_touch = None;
            }
        }
    }

    /// Snapshot for this frame, paired with the previous frame's snapshot
    pub fn frame(&self) -> InputFrame {
        InputFrame::new(self.state.clone(), self.previous.clone())
    }

    /// Advance to next frame
    ///
    /// Call after game logic has read the frame.
    pub fn advance_frame(&mut self) {
        if self.reset_wheel_each_frame {
            self.state.consume_wheel_delta();
        }
        self.previous = self.state.clone();
    }

    /// Get current input state
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Clone current state for processing
    pub fn snapshot(&self) -> InputState {
        self.state.clone()
    }

    /// Borrow state mutably
    pub fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new(&InputConfig::default(), &GameViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collector(reset_wheel: bool) -> InputCollector {
        InputCollector::new(
            &InputConfig {
                wheel_line_delta: 120.0,
                reset_wheel_each_frame: reset_wheel,
            },
            &GameViewConfig {
                width: 800.0,
                height: 600.0,
            },
        )
    }

    #[test]
    fn test_pointer_scaled_into_game_view() {
        let mut collector = collector(false);
        collector.set_view_size(1600.0, 1200.0);
        assert_eq!(
            collector.to_game_view(PhysicalPosition::new(400.0, 300.0)),
            [200.0, 150.0]
        );

        collector.set_view_size(0.0, 0.0);
        assert_eq!(
            collector.to_game_view(PhysicalPosition::new(10.0, 20.0)),
            [10.0, 20.0]
        );
    }

    #[test]
    fn test_wheel_conversion() {
        let collector = collector(false);
        assert_eq!(
            collector.wheel_delta_from(MouseScrollDelta::LineDelta(0.0, 1.0)),
            120.0
        );
        assert_eq!(
            collector.wheel_delta_from(MouseScrollDelta::LineDelta(0.0, -2.0)),
            -240.0
        );
        assert_eq!(
            collector.wheel_delta_from(MouseScrollDelta::PixelDelta(PhysicalPosition::new(
                0.0, 36.0
            ))),
            36.0
        );
    }

    #[test]
    fn test_wheel_persists_by_default() {
        let mut collector = collector(false);
        collector.record(RawInputEvent::Wheel(120.0));
        collector.advance_frame();
        collector.advance_frame();
        assert_eq!(collector.state().wheel_delta(), 120.0);
    }

    #[test]
    fn test_wheel_reset_each_frame_when_configured() {
        let mut collector = collector(true);
        collector.record(RawInputEvent::Wheel(120.0));
        assert_eq!(collector.frame().current.wheel_delta(), 120.0);
        collector.advance_frame();
        assert_eq!(collector.state().wheel_delta(), 0.0);
    }

    #[test]
    fn test_frame_edges_across_advance() {
        let mut collector = collector(false);
        collector.record(RawInputEvent::KeyDown(65));
        assert!(collector.frame().key_just_pressed(65));

        collector.advance_frame();
        let frame = collector.frame();
        assert!(frame.current.is_key_pressed(65));
        assert!(!frame.key_just_pressed(65));
    }

    #[test]
    fn test_touch_emulates_left_button() {
        let mut collector = collector(false);
        collector.set_view_size(800.0, 600.0);

        collector.handle_touch(7, TouchPhase::Started, PhysicalPosition::new(50.0, 60.0));
        assert!(collector.state().is_button_pressed(0));
        assert_eq!(collector.state().pointer_position(), [50.0, 60.0]);

        // A second finger is ignored while the first is down.
        collector.handle_touch(8, TouchPhase::Started, PhysicalPosition::new(500.0, 500.0));
        assert_eq!(collector.state().pointer_position(), [50.0, 60.0]);

        collector.handle_touch(7, TouchPhase::Moved, PhysicalPosition::new(70.0, 80.0));
        assert_eq!(collector.state().pointer_position(), [70.0, 80.0]);

        collector.handle_touch(7, TouchPhase::Ended, PhysicalPosition::new(72.0, 81.0));
        assert!(!collector.state().is_button_pressed(0));

        collector.handle_touch(8, TouchPhase::Moved, PhysicalPosition::new(1.0, 2.0));
        assert_eq!(collector.state().pointer_position(), [72.0, 81.0]);
    }
}
