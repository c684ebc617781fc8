//! Read-only working-tree context handed to every check

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Working-tree state a hook invocation runs against.
///
/// Changed paths are stored relative to `root` whenever they live inside it,
/// which keeps reports short and stable across checkouts. The context is
/// shared between checks behind an `Arc` and never mutated after creation.
#[derive(Debug, Clone)]
pub struct CheckContext {
    root: PathBuf,
    changed_files: Vec<PathBuf>,
}

impl CheckContext {
    pub fn new(root: impl Into<PathBuf>, changed_files: Vec<PathBuf>) -> Self {
        let root = root.into();
        let changed_files = changed_files
            .into_iter()
            .map(|path| match path.strip_prefix(&root) {
                Ok(relative) => relative.to_path_buf(),
                Err(_) => path,
            })
            .collect();

        Self {
            root,
            changed_files,
        }
    }

    /// Working-tree root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths changed by the pending operation, in collection order
    pub fn changed_files(&self) -> &[PathBuf] {
        &self.changed_files
    }

    /// Resolve a context path against the root
    pub fn absolute(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Read a file's bytes, returning `None` when it does not exist
    pub fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        let full_path = self.absolute(path);
        match std::fs::read(&full_path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read {}", full_path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_changed_files_are_made_relative() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let ctx = CheckContext::new(
            root,
            vec![root.join("src/main.rs"), PathBuf::from("README.md")],
        );

        assert_eq!(
            ctx.changed_files(),
            &[PathBuf::from("src/main.rs"), PathBuf::from("README.md")]
        );
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("present.txt"), "hello").unwrap();
        let ctx = CheckContext::new(temp_dir.path(), vec![]);

        assert_eq!(
            ctx.read(Path::new("present.txt")).unwrap(),
            Some(b"hello".to_vec())
        );
        assert_eq!(ctx.read(Path::new("absent.txt")).unwrap(), None);
    }
}
