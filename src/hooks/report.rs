use super::HookName;
use crate::checks::{CheckResult, Status};
use serde::{Serialize, Serializer};
use std::time::Duration;

/// Overall decision for one hook invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// One executed check and its result
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    identifier: String,
    description: String,
    #[serde(flatten)]
    result: CheckResult,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    duration: Duration,
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis().try_into().unwrap_or(u64::MAX))
}

impl CheckReport {
    pub fn new(
        identifier: impl Into<String>,
        description: impl Into<String>,
        result: CheckResult,
        duration: Duration,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            description: description.into(),
            result,
            duration,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn result(&self) -> &CheckResult {
        &self.result
    }

    pub fn status(&self) -> Status {
        self.result.status
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Results of every check run for one hook invocation, in execution order.
///
/// A report has no mutating methods; the verdict is computed once when the
/// report is built.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    hook: HookName,
    verdict: Verdict,
    checks: Vec<CheckReport>,
}

impl RunReport {
    pub fn new(hook: HookName, checks: Vec<CheckReport>) -> Self {
        let verdict = if checks.iter().all(|check| check.status().is_pass()) {
            Verdict::Pass
        } else {
            Verdict::Fail
        };

        Self {
            hook,
            verdict,
            checks,
        }
    }

    pub fn hook(&self) -> HookName {
        self.hook
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_pass(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    pub fn checks(&self) -> &[CheckReport] {
        &self.checks
    }

    /// Number of checks that ended with `status`
    pub fn count(&self, status: Status) -> usize {
        self.checks
            .iter()
            .filter(|check| check.status() == status)
            .count()
    }
}
