//! Panel Runtime
//!
//! Input-state tracking and nine-slice panel sprites for a game runtime,
//! built with Rust and winit.

/// Application - windowing, configuration, and input handling
pub mod app;

/// Build-time information (git SHA, branch, timestamp, etc.)
pub mod build_info;

/// Health checks for configuration, input, and layout
pub mod health;

/// Nine-slice panel sprites
pub mod panel;
