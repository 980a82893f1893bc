//! Idempotent writes.
//!
//! Every mutating operation of the engine goes through [`IdempotentWriter`].
//! Existing files are never overwritten.

use crate::{application::ports::Filesystem, error::StrataResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct IdempotentWriter {
    fs: Arc<dyn Filesystem>,
}

impl IdempotentWriter {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }

    pub fn filesystem(&self) -> &Arc<dyn Filesystem> {
        &self.fs
    }

    /// Create `path` recursively; an existing directory is fine.
    pub fn ensure_directory(&self, path: &Path) -> StrataResult<PathBuf> {
        if !self.fs.is_dir(path) {
            self.fs.create_dir_all(path)?;
            debug!(path = %path.display(), "created directory");
        }
        Ok(path.to_path_buf())
    }

    /// Write `dir/name` only if it does not exist. Returns whether it wrote.
    pub fn write_if_absent(&self, dir: &Path, name: &str, content: &str) -> StrataResult<bool> {
        let path = dir.join(name);
        if self.fs.exists(&path) {
            debug!(path = %path.display(), "exists, skipped");
            return Ok(false);
        }
        self.ensure_directory(dir)?;
        self.fs.write_file(&path, content)?;
        debug!(path = %path.display(), "created file");
        Ok(true)
    }

    /// Write `dir/name` if it is missing or empty. Returns whether it wrote.
    pub fn write_if_empty(&self, dir: &Path, name: &str, content: &str) -> StrataResult<bool> {
        let path = dir.join(name);
        if self.fs.exists(&path) && !self.fs.read_to_string(&path)?.is_empty() {
            debug!(path = %path.display(), "has content, skipped");
            return Ok(false);
        }
        self.ensure_directory(dir)?;
        self.fs.write_file(&path, content)?;
        debug!(path = %path.display(), "wrote file");
        Ok(true)
    }

    /// [`write_if_empty`](Self::write_if_empty) that renders the content only
    /// when the file needs it.
    pub fn write_if_empty_with<F>(&self, dir: &Path, name: &str, render: F) -> StrataResult<bool>
    where
        F: FnOnce() -> StrataResult<String>,
    {
        let path = dir.join(name);
        if self.fs.exists(&path) && !self.fs.read_to_string(&path)?.is_empty() {
            debug!(path = %path.display(), "has content, skipped");
            return Ok(false);
        }
        let content = render()?;
        self.write_if_empty(dir, name, &content)
    }

    /// Replace `path` only when `updated` differs from what is on disk.
    pub fn write_if_changed(&self, path: &Path, current: &str, updated: &str) -> StrataResult<bool> {
        if current == updated {
            return Ok(false);
        }
        self.fs.write_file(path, updated)?;
        debug!(path = %path.display(), "updated file");
        Ok(true)
    }
}
