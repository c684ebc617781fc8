//! Git hook definitions and execution
//!
//! A hook configuration binds each git hook to an ordered list of check
//! identifiers. The list order is the execution order and the report order.
//!
//! ```yaml
//! hooks:
//!   pre-commit:
//!     - no_before_commit
//!     - no_non_ascii_filenames
//!     - no_trailing_whitespace
//! ```
//!
//! [`Runner`] resolves every identifier through a
//! [`CheckRegistry`](crate::registry::CheckRegistry) before running anything,
//! then runs all checks (no short-circuit on failure) and returns a
//! [`RunReport`].

mod report;
mod runner;

pub use report::{CheckReport, RunReport, Verdict};
pub use runner::{Runner, RunnerOptions};

use crate::error::ConfigError;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Git lifecycle points glerbl can run checks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookName {
    PreCommit,
    PrepareCommitMsg,
    CommitMsg,
    PrePush,
}

impl HookName {
    pub const ALL: [HookName; 4] = [
        HookName::PreCommit,
        HookName::PrepareCommitMsg,
        HookName::CommitMsg,
        HookName::PrePush,
    ];

    /// Name git uses for the hook script
    pub fn as_str(self) -> &'static str {
        match self {
            HookName::PreCommit => "pre-commit",
            HookName::PrepareCommitMsg => "prepare-commit-msg",
            HookName::CommitMsg => "commit-msg",
            HookName::PrePush => "pre-push",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookName::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownHook(s.to_string()))
    }
}

/// Ordered check identifiers bound to each hook
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookConfig {
    hooks: BTreeMap<HookName, Vec<String>>,
}

impl HookConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `hook name -> identifiers` data as loaded from a
    /// configuration source
    pub fn from_raw(raw: &BTreeMap<String, Vec<String>>) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        for (name, checks) in raw {
            config.insert(name.parse()?, checks.clone())?;
        }
        Ok(config)
    }

    /// Bind `checks` to `hook`, replacing any previous binding
    pub fn insert(&mut self, hook: HookName, checks: Vec<String>) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for identifier in &checks {
            if !seen.insert(identifier.as_str()) {
                return Err(ConfigError::DuplicateEntry {
                    hook: hook.to_string(),
                    identifier: identifier.clone(),
                });
            }
        }

        self.hooks.insert(hook, checks);
        Ok(())
    }

    /// Identifiers configured for `hook`, empty when the hook is unconfigured
    pub fn checks_for(&self, hook: HookName) -> &[String] {
        self.hooks.get(&hook).map(Vec::as_slice).unwrap_or_default()
    }

    /// Configured hooks in declaration order of [`HookName`]
    pub fn iter(&self) -> impl Iterator<Item = (HookName, &[String])> {
        self.hooks.iter().map(|(hook, checks)| (*hook, checks.as_slice()))
    }
}
