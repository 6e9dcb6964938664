//! Runs a list of checks and tallies the results

use std::time::Instant;

use tracing::{debug, warn};

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// A finished check, in run order
#[derive(Debug)]
pub struct CheckEntry {
    pub name: String,
    pub description: Option<&'static str>,
    pub result: CheckResult,
}

/// Results from running a check suite
#[derive(Debug, Default)]
pub struct HealthCheckReport {
    pub results: Vec<CheckEntry>,
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl HealthCheckReport {
    /// No check failed
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Worst status in the report (Pass when empty)
    pub fn status(&self) -> CheckStatus {
        self.results
            .iter()
            .map(|entry| entry.result.status)
            .max()
            .unwrap_or(CheckStatus::Pass)
    }

    /// 0 = all pass, 1 = any fail, 2 = any warn (but no fail)
    pub fn exit_code(&self) -> i32 {
        match self.status() {
            CheckStatus::Pass => 0,
            CheckStatus::Fail => 1,
            CheckStatus::Warn => 2,
        }
    }

    /// Looks up a result by check name
    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.results
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.result)
    }

    fn record(&mut self, entry: CheckEntry) {
        match entry.result.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warn => self.warned += 1,
            CheckStatus::Fail => self.failed += 1,
        }
        self.total += 1;
        self.results.push(entry);
    }
}

/// Collects checks and runs them in insertion order
#[derive(Default)]
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn run(self) -> HealthCheckReport {
        let mut report = HealthCheckReport::default();

        for check in self.checks {
            let start = Instant::now();
            let result = check.check().with_duration(start.elapsed());

            if result.status.is_fail() {
                warn!(check = check.name(), message = %result.message, "Health check failed");
            } else {
                debug!(
                    check = check.name(),
                    status = result.status.label(),
                    duration = ?result.duration,
                    "Health check finished"
                );
            }

            report.record(CheckEntry {
                name: check.name().to_string(),
                description: check.description(),
                result,
            });
        }

        report
    }
}
