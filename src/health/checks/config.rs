//! Configuration health check

use crate::app::RuntimeConfig;
use crate::health::check::{CheckResult, SystemCheck};
use crate::panel::Margins;

/// Loads each profile and validates the values the runtime depends on
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Checks the shipped profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// Problems with a loaded profile that would break the runtime
fn problems(config: &RuntimeConfig) -> Vec<String> {
    let mut problems = Vec::new();

    if config.game.width <= 0.0 || config.game.height <= 0.0 {
        problems.push(format!(
            "game view {}x{} must be positive",
            config.game.width, config.game.height
        ));
    }
    if !(config.input.wheel_line_delta.is_finite() && config.input.wheel_line_delta > 0.0) {
        problems.push(format!(
            "wheel_line_delta {} must be positive",
            config.input.wheel_line_delta
        ));
    }

    let panel = &config.panel;
    let margins = Margins::new(
        panel.top_margin,
        panel.right_margin,
        panel.bottom_margin,
        panel.left_margin,
    );
    if let Some(side) = margins.first_invalid_side() {
        problems.push(format!("panel {side} margin must be finite and non-negative"));
    }

    problems
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates profile loading and runtime settings")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failed = false;

        for profile in &self.profiles {
            match RuntimeConfig::load(profile) {
                Ok(config) => {
                    let problems = problems(&config);
                    if problems.is_empty() {
                        details.push(format!(
                            "  ✓ Profile '{}': game view {}x{}, texture '{}'",
                            profile, config.game.width, config.game.height, config.panel.texture
                        ));
                    } else {
                        failed = true;
                        details.push(format!(
                            "  ✗ Profile '{}': {}",
                            profile,
                            problems.join("; ")
                        ));
                    }
                }
                Err(e) => {
                    failed = true;
                    details.push(format!("  ✗ Profile '{}': failed to load - {}", profile, e));
                }
            }
        }

        // APP_PROFILE may name a profile that does not exist; that is only a warning
        let env_warning = match RuntimeConfig::load_from_env() {
            Ok(config) => {
                details.push(format!("  ✓ Environment profile '{}'", config.profile));
                false
            }
            Err(e) => {
                details.push(format!("  ⚠ Environment config: {}", e));
                true
            }
        };

        let details = details.join("\n");
        if failed {
            CheckResult::fail("One or more config profiles are invalid").with_details(details)
        } else if env_warning {
            CheckResult::warn("Config loaded with warnings").with_details(details)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details)
        }
    }
}
