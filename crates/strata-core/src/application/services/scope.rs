//! Batch boundary around one generation call.

use crate::{application::ports::Filesystem, error::StrataResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// RAII guard for the filesystem mutations of one command.
///
/// Paths recorded during the call are refreshed on [`commit`](Self::commit).
/// Nothing is rolled back: dropping an uncommitted scope only logs, and
/// re-running the command resumes from what is already on disk.
pub struct MutationScope {
    fs: Arc<dyn Filesystem>,
    label: &'static str,
    root: PathBuf,
    touched: Vec<PathBuf>,
    committed: bool,
}

impl MutationScope {
    pub fn begin(fs: Arc<dyn Filesystem>, label: &'static str, root: &Path) -> Self {
        debug!(scope = label, root = %root.display(), "mutation scope opened");
        Self {
            fs,
            label,
            root: root.to_path_buf(),
            touched: Vec::new(),
            committed: false,
        }
    }

    pub fn record(&mut self, path: impl Into<PathBuf>) {
        self.touched.push(path.into());
    }

    pub fn record_all<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.touched.extend(paths.into_iter().map(Into::into));
    }

    pub fn touched(&self) -> &[PathBuf] {
        &self.touched
    }

    /// Refresh the root and every recorded path.
    pub fn commit(mut self) -> StrataResult<()> {
        self.committed = true;
        self.fs.refresh(&self.root)?;
        for path in &self.touched {
            self.fs.refresh(path)?;
        }
        debug!(
            scope = self.label,
            paths = self.touched.len(),
            "mutation scope committed"
        );
        Ok(())
    }
}

impl Drop for MutationScope {
    fn drop(&mut self) {
        if !self.committed {
            warn!(
                scope = self.label,
                touched = self.touched.len(),
                "generation stopped before completing; re-run the command to resume"
            );
        }
    }
}
