//! Check contract and builtin checks
//!
//! A check is one independently runnable rule with a stable identifier. Hook
//! configuration refers to checks by that identifier, and the runner resolves
//! them through a [`CheckRegistry`](crate::registry::CheckRegistry).
//!
//! ## Builtin Checks
//!
//! - `no_before_commit` - Fails while a reminder marker file exists at the root
//! - `no_non_ascii_filenames` - Fails on changed paths outside printable ASCII
//! - `no_trailing_whitespace` - Fails on changed text lines ending in whitespace
//!
//! ## Writing a Check
//!
//! ```rust,no_run
//! use glerbl::checks::{Check, CheckResult};
//! use glerbl::context::CheckContext;
//!
//! struct NoEmptyCommit;
//!
//! impl Check for NoEmptyCommit {
//!     fn identifier(&self) -> &str {
//!         "no_empty_commit"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Rejects commits without changes"
//!     }
//!
//!     fn run(&self, ctx: &CheckContext) -> anyhow::Result<CheckResult> {
//!         if ctx.changed_files().is_empty() {
//!             return Ok(CheckResult::fail("nothing to commit"));
//!         }
//!         Ok(CheckResult::pass())
//!     }
//! }
//! ```

mod before_commit;
mod non_ascii_filenames;
mod trailing_whitespace;

pub use before_commit::{DEFAULT_MARKER as DEFAULT_BEFORE_COMMIT_MARKER, NoBeforeCommit};
pub use non_ascii_filenames::NoNonAsciiFilenames;
pub use trailing_whitespace::NoTrailingWhitespace;

use crate::context::CheckContext;
use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A single validation rule run against the working tree.
///
/// Implementations must only read from the context. Expected problems are
/// reported as [`Status::Fail`] results; returning `Err` is reserved for
/// unexpected faults such as an unreadable file, which the runner records as
/// [`Status::Error`] for this check alone.
pub trait Check: Send + Sync {
    /// Stable identifier used as the configuration key
    fn identifier(&self) -> &str;

    /// Short human-readable summary used in listings
    fn description(&self) -> &str;

    /// Inspect the working tree and produce exactly one result
    fn run(&self, ctx: &CheckContext) -> Result<CheckResult>;
}

/// Outcome category of one check execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
    Error,
}

impl Status {
    pub fn is_pass(self) -> bool {
        self == Status::Pass
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Pass => "pass",
            Status::Fail => "fail",
            Status::Error => "error",
        };
        f.write_str(label)
    }
}

/// An offending location reported by a failing check
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Location {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Location {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            line: None,
        }
    }

    pub fn line(path: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            path: path.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.path.display(), line),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

/// Result of running one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
}

impl CheckResult {
    pub fn pass() -> Self {
        Self {
            status: Status::Pass,
            message: None,
            locations: Vec::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: Some(message.into()),
            locations: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            locations: Vec::new(),
        }
    }

    /// Fail with a summary line followed by one line per location, so the
    /// message alone carries every violation.
    pub fn fail_at(summary: &str, locations: Vec<Location>) -> Self {
        let mut message = summary.to_string();
        for location in &locations {
            message.push_str("\n  ");
            message.push_str(&location.to_string());
        }

        Self {
            status: Status::Fail,
            message: Some(message),
            locations,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.status.is_pass()
    }
}
