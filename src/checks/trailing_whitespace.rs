use super::{Check, CheckResult, Location};
use crate::context::CheckContext;
use crate::error::ConfigError;
use crate::shared::glob::build_globset;
use anyhow::Result;
use globset::GlobSet;

/// Rejects changed text files containing lines that end in spaces or tabs.
///
/// A `\r` directly before `\n` is part of the line terminator, not trailing
/// whitespace. Binary files and files missing from the working tree (staged
/// deletions, for instance) are skipped.
///
/// Content comes from the working tree, not the index. A partially staged
/// file is judged by what is on disk, so whitespace present only in the
/// staged blob goes unnoticed.
pub struct NoTrailingWhitespace {
    exclude: GlobSet,
}

impl NoTrailingWhitespace {
    pub fn new(exclude: &[String]) -> Result<Self, ConfigError> {
        Ok(Self {
            exclude: build_globset(exclude)?,
        })
    }
}

/// 1-based numbers of lines ending in whitespace
fn trailing_whitespace_lines(content: &[u8]) -> Vec<usize> {
    content
        .split(|&byte| byte == b'\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            matches!(line.last(), Some(b' ' | b'\t')).then_some(index + 1)
        })
        .collect()
}

impl Check for NoTrailingWhitespace {
    fn identifier(&self) -> &str {
        "no_trailing_whitespace"
    }

    fn description(&self) -> &str {
        "Changed text files must not contain trailing whitespace"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        let mut offending = Vec::new();

        for path in ctx.changed_files() {
            if self.exclude.is_match(path) {
                continue;
            }

            let Some(content) = ctx.read(path)? else {
                continue;
            };
            if content_inspector::inspect(&content).is_binary() {
                tracing::trace!("Skipping binary file {}", path.display());
                continue;
            }

            offending.extend(
                trailing_whitespace_lines(&content)
                    .into_iter()
                    .map(|line| Location::line(path, line)),
            );
        }

        if offending.is_empty() {
            return Ok(CheckResult::pass());
        }

        let noun = if offending.len() == 1 { "line" } else { "lines" };
        Ok(CheckResult::fail_at(
            &format!("{} {noun} with trailing whitespace", offending.len()),
            offending,
        ))
    }
}
