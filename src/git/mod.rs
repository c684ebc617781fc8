//! Git integration layer for glerbl
//!
//! Finds the repository and lists the paths a hook invocation should look at.
//! Paths are returned relative to the working-tree root.

pub mod operations;

use anyhow::{Context, Result};
use git2::Repository;
use std::path::Path;

pub struct GitRepo {
    pub repo: Repository,
}

impl GitRepo {
    /// Discover the repository containing the current directory
    pub fn discover() -> Result<Self> {
        Self::discover_from(".")
    }

    pub fn discover_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).with_context(|| {
            format!("No Git repository found from {}", path.as_ref().display())
        })?;
        tracing::debug!("Discovered repository at {}", repo.path().display());
        Ok(GitRepo { repo })
    }

    /// Working-tree root; bare repositories have none
    pub fn workdir(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .context("Repository has no working directory")
    }
}
