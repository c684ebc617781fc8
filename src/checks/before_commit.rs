use super::{Check, CheckResult, Location};
use crate::context::CheckContext;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Marker file name looked up at the working-tree root by default
pub const DEFAULT_MARKER: &str = "BEFORE_COMMIT";

/// Blocks commits while a reminder marker file sits at the working-tree root.
///
/// Dropping a `BEFORE_COMMIT` file into the root is a cheap way to remind
/// yourself to do something before the next commit goes in.
pub struct NoBeforeCommit {
    marker: PathBuf,
}

impl NoBeforeCommit {
    pub fn new(marker: impl Into<PathBuf>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl Default for NoBeforeCommit {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl Check for NoBeforeCommit {
    fn identifier(&self) -> &str {
        "no_before_commit"
    }

    fn description(&self) -> &str {
        "Reminder marker file must not exist at the working-tree root"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        let marker_path = ctx.absolute(&self.marker);
        let exists = marker_path
            .try_exists()
            .with_context(|| format!("Failed to check for {}", marker_path.display()))?;

        if !exists {
            return Ok(CheckResult::pass());
        }

        Ok(CheckResult::fail_at(
            &format!(
                "{} exists, resolve the reminder and remove it before committing",
                self.marker.display()
            ),
            vec![Location::file(&self.marker)],
        ))
    }
}
