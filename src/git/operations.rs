use super::GitRepo;
use anyhow::{Context, Result};
use git2::{Status, StatusOptions};
use std::path::PathBuf;

impl GitRepo {
    /// Files staged for commit, relative to the working-tree root.
    ///
    /// Staged deletions are left out: a removed file brings no new name or
    /// content into the commit.
    pub fn get_staged_files(&self) -> Result<Vec<PathBuf>> {
        let mut status_opts = StatusOptions::new();
        status_opts.include_ignored(false);
        status_opts.include_untracked(false);

        let statuses = self
            .repo
            .statuses(Some(&mut status_opts))
            .context("Failed to get repository status")?;

        let staged = Status::INDEX_NEW
            | Status::INDEX_MODIFIED
            | Status::INDEX_RENAMED
            | Status::INDEX_TYPECHANGE;

        let files: Vec<PathBuf> = statuses
            .iter()
            .filter(|entry| entry.status().intersects(staged))
            .map(|entry| path_from_bytes(entry.path_bytes()))
            .collect();

        tracing::debug!("Found {} staged files", files.len());
        Ok(files)
    }

    /// Every path in the index, relative to the working-tree root
    pub fn get_tracked_files(&self) -> Result<Vec<PathBuf>> {
        let index = self.repo.index().context("Failed to read repository index")?;
        let files: Vec<PathBuf> = index
            .iter()
            .map(|entry| path_from_bytes(&entry.path))
            .collect();

        tracing::debug!("Found {} tracked files", files.len());
        Ok(files)
    }
}

/// Git stores paths as raw bytes; keep them intact where the platform allows
#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
