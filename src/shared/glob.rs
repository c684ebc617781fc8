//! Glob pattern utilities
//!
//! Exclusion lists in the check configuration are compiled once into a
//! [`GlobSet`] and matched against root-relative paths.

use crate::error::ConfigError;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Create a GlobSet from a list of patterns for efficient batch matching
///
/// Patterns ending in `/` are treated like ignore-file directory entries and
/// match everything below that directory.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let processed_pattern = if pattern.ends_with('/') {
            format!("{pattern}**")
        } else {
            pattern.clone()
        };

        let glob = Glob::new(&processed_pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }

    builder.build().map_err(|source| ConfigError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}
