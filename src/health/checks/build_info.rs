//! Build metadata health check

use crate::build_info;
use crate::health::check::{CheckResult, SystemCheck};

/// Optimization levels cargo can report
const OPT_LEVELS: [&str; 6] = ["0", "1", "2", "3", "s", "z"];

/// Verifies the vergen metadata compiled into the binary
#[derive(Default)]
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates build metadata (git, rustc, target)")
    }

    fn check(&self) -> CheckResult {
        let details = build_info::detailed_info()
            .lines()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n");

        if !OPT_LEVELS.contains(&build_info::CARGO_OPT_LEVEL) {
            return CheckResult::fail(format!(
                "Unexpected opt level '{}'",
                build_info::CARGO_OPT_LEVEL
            ))
            .with_details(details);
        }

        // Builds from a source tarball carry no git metadata
        if build_info::GIT_SHA.is_none() {
            return CheckResult::warn("Git state unknown").with_details(details);
        }

        CheckResult::pass(build_info::version_string()).with_details(details)
    }
}
