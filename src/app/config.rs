//! Runtime configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::panel::PanelSpriteData;

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width
    pub width: f64,
    /// Window height
    pub height: f64,
    /// Whether the window should be fullscreen
    pub fullscreen: bool,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// Whether the window should be decorated (has title bar, borders, etc.)
    pub decorated: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Panel Runtime".to_string(),
            width: 800.0,
            height: 600.0,
            fullscreen: false,
            resizable: true,
            decorated: true,
        }
    }
}

/// Logical resolution of the game view; pointer positions are reported in it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameViewConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for GameViewConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Input tracking options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Wheel delta reported for one line (notch) of scrolling
    pub wheel_line_delta: f32,
    /// Zero the wheel delta after every frame instead of keeping the last value
    pub reset_wheel_each_frame: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            wheel_line_delta: 120.0,
            reset_wheel_each_frame: false,
        }
    }
}

/// Panel shown by the demo runner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelDemoConfig {
    /// Directory the texture is read from
    pub texture_dir: String,
    pub texture: String,
    /// Size assumed when the texture file cannot be read
    pub fallback_texture_width: u32,
    pub fallback_texture_height: u32,
    /// Gap between the panel and the window edges
    pub inset: f32,
    pub top_margin: f32,
    pub right_margin: f32,
    pub bottom_margin: f32,
    pub left_margin: f32,
}

impl Default for PanelDemoConfig {
    fn default() -> Self {
        Self {
            texture_dir: "assets".to_string(),
            texture: "panel.png".to_string(),
            fallback_texture_width: 48,
            fallback_texture_height: 48,
            inset: 32.0,
            top_margin: 12.0,
            right_margin: 12.0,
            bottom_margin: 12.0,
            left_margin: 12.0,
        }
    }
}

impl PanelDemoConfig {
    /// Object data for a panel of the given size
    pub fn sprite_data(&self, width: f32, height: f32) -> PanelSpriteData {
        PanelSpriteData {
            texture: self.texture.clone(),
            width,
            height,
            top_margin: self.top_margin,
            right_margin: self.right_margin,
            bottom_margin: self.bottom_margin,
            left_margin: self.left_margin,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub game: GameViewConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub panel: PanelDemoConfig,
}

impl RuntimeConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/{profile}.toml (profile-specific configuration)
    /// 2. Environment variables with prefix APP_ (e.g., APP_WINDOW__WIDTH=1920)
    ///
    /// Config files are searched for in:
    /// 1. Next to the executable (target/debug/config or target/release/config)
    /// 2. In the current directory (./config)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from(Self::find_config_dir().as_deref(), profile)
    }

    /// Loads a profile from an explicit config directory
    pub fn load_from(config_dir: Option<&Path>, profile: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Add profile-specific configuration
        if let Some(dir) = config_dir {
            let profile_path = dir.join(profile);
            builder = builder.add_source(File::from(profile_path.as_path()).required(false));
        } else {
            builder =
                builder.add_source(File::with_name(&format!("config/{}", profile)).required(false));
        }

        // Use __ as separator for nested fields (e.g., APP_WINDOW__WIDTH)
        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.set_override("profile", profile)?.build()?;

        config.try_deserialize()
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::load("release").unwrap_or_else(|_| Self {
            profile: "release".to_string(),
            window: WindowConfig::default(),
            game: GameViewConfig::default(),
            input: InputConfig::default(),
            panel: PanelDemoConfig::default(),
        })
    }
}
