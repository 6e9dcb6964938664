//! Health check system for validating application initialization and status
//!
//! Runs self-contained checks against configuration, build metadata, input
//! tracking and panel layout. `panel-demo --health` prints the report and
//! exits with [`HealthCheckReport::exit_code`].
//!
//! # Example
//!
//! ```no_run
//! use panel_runtime::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(PanelLayoutCheck::new())
//!     .run();
//!
//! if report.is_healthy() {
//!     println!("All systems operational!");
//! }
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{CheckEntry, HealthCheckReport, HealthCheckRunner};

/// Runs all default health checks and returns a report
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::BuildInfoCheck::new())
        .add_check(checks::InputCheck::new())
        .add_check(checks::PanelLayoutCheck::new())
        .run()
}
