//! Templates read from a user override directory.
//!
//! The directory mirrors the built-in layout:
//!
//! ```text
//! overrides/
//! ├── presentationScreen/
//! │   └── Screen.kt
//! └── cleanArchitecture/
//!     └── module/
//!         └── data.gradle.kts
//! ```

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use strata_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::StrataResult,
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

/// Store that serves files under a directory. A missing directory serves
/// nothing.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    root: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a `/`-separated template path below the root. Paths that
    /// would escape the root resolve to nothing.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let contained = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        contained.then(|| self.root.join(relative))
    }
}

impl TemplateStore for DirectoryTemplateStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, path: &str) -> StrataResult<Option<String>> {
        let Some(file) = self.resolve(path) else {
            warn!(path, "template path outside the override directory ignored");
            return Ok(None);
        };
        if !file.is_file() {
            return Ok(None);
        }
        let body = fs::read_to_string(&file).map_err(|e| ApplicationError::FilesystemError {
            path: file.clone(),
            reason: format!("Failed to read template: {}", e),
        })?;
        debug!(file = %file.display(), "template override loaded");
        Ok(Some(body))
    }

    fn list(&self) -> StrataResult<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: self.root.clone(),
                reason: format!("Failed to walk template directory: {}", e),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                let parts: Vec<_> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                paths.push(parts.join("/"));
            }
        }
        paths.sort();
        Ok(paths)
    }
}
