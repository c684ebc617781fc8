use super::{CheckReport, HookConfig, HookName, RunReport};
use crate::checks::{Check, CheckResult};
use crate::context::CheckContext;
use crate::error::ConfigError;
use crate::registry::CheckRegistry;
use std::any::Any;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinError;

/// Execution settings for a [`Runner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Upper bound for a single check; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Run all checks concurrently instead of one after another
    pub parallel: bool,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            parallel: false,
        }
    }
}

/// Executes the checks bound to a hook and aggregates their results.
///
/// Every check runs even when an earlier one fails, so one invocation shows
/// every problem. Only misconfiguration aborts a run, and it does so before
/// the first check starts.
pub struct Runner {
    options: RunnerOptions,
}

impl Runner {
    pub fn new(options: RunnerOptions) -> Self {
        Self { options }
    }

    pub async fn run(
        &self,
        hook: HookName,
        config: &HookConfig,
        registry: &CheckRegistry,
        ctx: Arc<CheckContext>,
    ) -> Result<RunReport, ConfigError> {
        let checks = config
            .checks_for(hook)
            .iter()
            .map(|identifier| {
                registry
                    .resolve(identifier)
                    .map_err(|_| ConfigError::UnknownCheck {
                        hook: hook.to_string(),
                        identifier: identifier.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            "Running {} check(s) for {} ({} files changed)",
            checks.len(),
            hook,
            ctx.changed_files().len()
        );

        let reports = if self.options.parallel {
            self.run_parallel(checks, ctx).await
        } else {
            self.run_sequential(checks, ctx).await
        };

        Ok(RunReport::new(hook, reports))
    }

    async fn run_sequential(
        &self,
        checks: Vec<Arc<dyn Check>>,
        ctx: Arc<CheckContext>,
    ) -> Vec<CheckReport> {
        let mut reports = Vec::with_capacity(checks.len());
        for check in checks {
            reports.push(execute(check, ctx.clone(), self.options.timeout).await);
        }
        reports
    }

    async fn run_parallel(
        &self,
        checks: Vec<Arc<dyn Check>>,
        ctx: Arc<CheckContext>,
    ) -> Vec<CheckReport> {
        let tasks: Vec<_> = checks
            .into_iter()
            .map(|check| {
                let identifier = check.identifier().to_string();
                let description = check.description().to_string();
                let handle = tokio::spawn(execute(check, ctx.clone(), self.options.timeout));
                (identifier, description, handle)
            })
            .collect();

        // Handles are awaited in spawn order, so reports keep configuration
        // order whatever order the checks finish in.
        let mut reports = Vec::with_capacity(tasks.len());
        for (identifier, description, handle) in tasks {
            let report = match handle.await {
                Ok(report) => report,
                Err(e) => CheckReport::new(
                    identifier,
                    description,
                    CheckResult::error(join_failure(e)),
                    Duration::ZERO,
                ),
            };
            reports.push(report);
        }
        reports
    }
}

/// Run one check on the blocking pool, turning faults into `Error` results
async fn execute(
    check: Arc<dyn Check>,
    ctx: Arc<CheckContext>,
    timeout: Option<Duration>,
) -> CheckReport {
    let identifier = check.identifier().to_string();
    let description = check.description().to_string();
    tracing::debug!("Starting check {}", identifier);

    let started = Instant::now();
    let task = tokio::task::spawn_blocking(move || check.run(&ctx));

    // A timed-out check keeps running on its blocking thread; its result is
    // discarded.
    let joined = match timeout {
        Some(limit) => tokio::time::timeout(limit, task).await.map_err(|_| limit),
        None => Ok(task.await),
    };

    let result = match joined {
        Ok(Ok(Ok(result))) => result,
        Ok(Ok(Err(e))) => CheckResult::error(format!("{e:#}")),
        Ok(Err(e)) => CheckResult::error(join_failure(e)),
        Err(limit) => CheckResult::error(format!("timed out after {limit:?}")),
    };
    let duration = started.elapsed();

    tracing::debug!(
        "Finished check {} with {} in {:?}",
        identifier,
        result.status,
        duration
    );

    CheckReport::new(identifier, description, result, duration)
}

fn join_failure(e: JoinError) -> String {
    if !e.is_panic() {
        return "check was cancelled".to_string();
    }

    match panic_message(e.into_panic()) {
        Some(message) => format!("check panicked: {message}"),
        None => "check panicked".to_string(),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> Option<String> {
    match payload.downcast::<String>() {
        Ok(message) => Some(*message),
        Err(payload) => payload.downcast_ref::<&str>().map(|s| s.to_string()),
    }
}
