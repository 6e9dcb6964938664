//! Built-in health checks

pub mod build_info;
pub mod config;
pub mod input;
pub mod panel_layout;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use input::InputCheck;
pub use panel_layout::PanelLayoutCheck;
