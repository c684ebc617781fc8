use super::{Check, CheckResult, Location};
use crate::context::CheckContext;
use crate::error::ConfigError;
use crate::shared::glob::build_globset;
use anyhow::Result;
use globset::GlobSet;
use std::path::Path;

/// Only printable ASCII is allowed in changed file paths.
pub struct NoNonAsciiFilenames {
    exclude: GlobSet,
}

impl NoNonAsciiFilenames {
    pub fn new(exclude: &[String]) -> Result<Self, ConfigError> {
        Ok(Self {
            exclude: build_globset(exclude)?,
        })
    }
}

fn is_printable_ascii(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .iter()
        .all(|byte| (0x20..=0x7e).contains(byte))
}

impl Check for NoNonAsciiFilenames {
    fn identifier(&self) -> &str {
        "no_non_ascii_filenames"
    }

    fn description(&self) -> &str {
        "Changed file paths must be printable ASCII"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        let offending: Vec<Location> = ctx
            .changed_files()
            .iter()
            .filter(|path| !self.exclude.is_match(path))
            .filter(|path| !is_printable_ascii(path))
            .map(Location::file)
            .collect();

        if offending.is_empty() {
            return Ok(CheckResult::pass());
        }

        let noun = if offending.len() == 1 { "path" } else { "paths" };
        Ok(CheckResult::fail_at(
            &format!("{} {noun} with non-ASCII characters", offending.len()),
            offending,
        ))
    }
}
