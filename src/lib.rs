//! # glerbl - ordered, fail-slow git hook checks
//!
//! glerbl maps a git hook to an ordered list of check identifiers and runs
//! those checks against the working tree before the git operation proceeds.
//!
//! - **Ordered**: checks run, and are reported, in configuration order
//! - **Fail-slow**: every check runs even after a failure, so one attempt
//!   surfaces every violation
//! - **Strict setup**: an unknown check identifier aborts the run before
//!   anything executes
//!
//! ## Quick Start
//!
//! ```toml
//! # glerbl.toml
//! [hooks]
//! pre-commit = ["no_before_commit", "no_non_ascii_filenames", "no_trailing_whitespace"]
//! ```
//!
//! ```bash
//! # .git/hooks/pre-commit
//! exec glerbl run pre-commit
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use glerbl::config::GlerblConfig;
//! use glerbl::context::CheckContext;
//! use glerbl::hooks::{HookName, Runner};
//! use glerbl::registry::CheckRegistry;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GlerblConfig::load()?;
//! let registry = CheckRegistry::builtin(&config.checks)?;
//! let ctx = CheckContext::new(".", vec!["src/main.rs".into()]);
//!
//! let report = Runner::new(config.runner_options())
//!     .run(HookName::PreCommit, &config.hook_config()?, &registry, Arc::new(ctx))
//!     .await?;
//!
//! for check in report.checks() {
//!     println!("{}: {}", check.identifier(), check.status());
//! }
//! # Ok(())
//! # }
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod git;
pub mod hooks;
pub mod registry;
pub mod shared;

pub use cli::{Cli, Output};
pub use config::GlerblConfig;
pub use hooks::{HookConfig, HookName, RunReport, Runner, RunnerOptions, Verdict};
pub use registry::CheckRegistry;
