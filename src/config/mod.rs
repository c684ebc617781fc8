//! Configuration management for glerbl
//!
//! Configuration is layered with figment: embedded defaults, then a
//! repository file (`glerbl.toml`, `glerbl.json`, `glerbl.yaml` or
//! `glerbl.yml`), then `GLERBL_` environment variables. See [`loader`] for the
//! loading rules.
//!
//! ```toml
//! [runner]
//! timeout_secs = 30
//! parallel = false
//!
//! [hooks]
//! pre-commit = ["no_before_commit", "no_trailing_whitespace"]
//!
//! [checks.no_trailing_whitespace]
//! exclude = ["*.md", "vendor/"]
//! ```

pub mod loader;

use crate::checks::DEFAULT_BEFORE_COMMIT_MARKER;
use crate::error::ConfigError;
use crate::hooks::{HookConfig, RunnerOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Main configuration structure for glerbl
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GlerblConfig {
    /// Runner behaviour
    #[serde(default)]
    pub runner: RunnerConfig,

    /// Ordered check identifiers per git hook name
    #[serde(default)]
    pub hooks: BTreeMap<String, Vec<String>>,

    /// Settings for the builtin checks
    #[serde(default)]
    pub checks: ChecksConfig,
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Per-check timeout in seconds (0 disables the timeout)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Run independent checks concurrently
    #[serde(default)]
    pub parallel: bool,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            parallel: false,
        }
    }
}

/// Builtin check settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChecksConfig {
    #[serde(default)]
    pub no_before_commit: BeforeCommitConfig,

    #[serde(default)]
    pub no_non_ascii_filenames: PathFilterConfig,

    #[serde(default)]
    pub no_trailing_whitespace: PathFilterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeforeCommitConfig {
    /// Marker file name, relative to the working-tree root
    #[serde(default = "default_marker")]
    pub marker: String,
}

impl Default for BeforeCommitConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
        }
    }
}

fn default_marker() -> String {
    DEFAULT_BEFORE_COMMIT_MARKER.to_string()
}

/// Settings shared by checks that walk changed paths
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathFilterConfig {
    /// Glob patterns of paths the check ignores
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl GlerblConfig {
    /// Typed hook configuration, validating hook names and duplicate entries
    pub fn hook_config(&self) -> Result<HookConfig, ConfigError> {
        HookConfig::from_raw(&self.hooks)
    }

    pub fn runner_options(&self) -> RunnerOptions {
        RunnerOptions {
            timeout: (self.runner.timeout_secs > 0)
                .then(|| Duration::from_secs(self.runner.timeout_secs)),
            parallel: self.runner.parallel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::HookName;

    #[test]
    fn test_runner_options_from_config() {
        let mut config = GlerblConfig::default();
        assert_eq!(config.runner_options().timeout, Some(Duration::from_secs(30)));
        assert!(!config.runner_options().parallel);

        config.runner.timeout_secs = 0;
        config.runner.parallel = true;
        assert_eq!(config.runner_options().timeout, None);
        assert!(config.runner_options().parallel);
    }

    #[test]
    fn test_hook_config_rejects_unknown_hook() {
        let mut config = GlerblConfig::default();
        config
            .hooks
            .insert("pre-merge-party".to_string(), vec!["no_before_commit".to_string()]);

        assert!(matches!(
            config.hook_config(),
            Err(ConfigError::UnknownHook(name)) if name == "pre-merge-party"
        ));
    }

    #[test]
    fn test_hook_config_preserves_order() {
        let mut config = GlerblConfig::default();
        config.hooks.insert(
            "pre-commit".to_string(),
            vec!["b".to_string(), "a".to_string(), "c".to_string()],
        );

        let hooks = config.hook_config().unwrap();
        assert_eq!(hooks.checks_for(HookName::PreCommit), &["b", "a", "c"]);
    }
}
