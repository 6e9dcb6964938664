//! Application module
//!
//! Handles windowing, user input, and the demo runner.

pub mod config;
pub mod input;
mod runner;
mod window;

pub use config::{GameViewConfig, InputConfig, PanelDemoConfig, RuntimeConfig, WindowConfig};
pub use runner::{App, TracingBatch};
pub use window::{surface_size, window_attributes_from_config};
