//! Input handling system
//!
//! Tracks keyboard, mouse button, pointer and wheel state for the game loop:
//! - Collects raw input from winit events
//! - Maps keys to integer (DOM) key codes and pointer positions into the
//!   logical game view
//! - Answers "is this code pressed" queries and the "any key" scan
//! - Pairs frame snapshots for just-pressed / just-released edges
//!
//! # Architecture
//!
//! ```text
//! Raw Input (winit) → InputCollector → RawInputEvent → InputState
//!                                                          ↓
//!                                                     InputFrame
//!                                                 (current + previous)
//!                                                          ↓
//!                                                     game logic
//! ```
//!
//! # Usage
//!
//! ```ignore
//! // In window_event()
//! collector.handle_window_event(&event);
//!
//! // Each frame, before simulation update
//! let frame = collector.frame();
//! if frame.current.is_key_pressed(keys::SPACE) { /* ... */ }
//! collector.advance_frame();
//! ```

mod collector;
mod events;
mod frame;
mod shared;
mod state;

// Re-export public API
pub use collector::InputCollector;
pub use events::{KeyCode, MouseButton, RawInputEvent, dom_key_code, keys};
pub use frame::InputFrame;
pub use shared::SharedInputState;
pub use state::{InputState, MOUSE_BUTTON_COUNT};
