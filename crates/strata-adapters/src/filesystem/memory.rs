//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    error::StrataResult,
};

/// In-memory filesystem for testing.
///
/// Paths are stored as given; callers use absolute paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    refreshed: Vec<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory filesystem with `root` (and its ancestors) present.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let fs = Self::new();
        // A fresh lock cannot be poisoned.
        let _ = fs.create_dir_all(root.as_ref());
        fs
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Paths passed to [`Filesystem::refresh`], in call order.
    pub fn refreshed(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.refreshed.clone())
            .unwrap_or_default()
    }

    /// Full contents, for before/after comparisons.
    pub fn snapshot(&self) -> (BTreeMap<PathBuf, String>, BTreeSet<PathBuf>) {
        self.inner
            .read()
            .map(|inner| (inner.files.clone(), inner.directories.clone()))
            .unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) -> StrataResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.files.clear();
        inner.directories.clear();
        inner.refreshed.clear();
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "A file exists at this path".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> StrataResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_dirs(&self, path: &Path) -> StrataResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner
            .directories
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .cloned()
            .collect())
    }

    fn refresh(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.refreshed.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_include_ancestors() {
        let fs = MemoryFilesystem::with_root("/p/a/b");
        assert!(fs.is_dir(Path::new("/p")));
        assert!(fs.is_dir(Path::new("/p/a")));
        assert_eq!(
            fs.list_dirs(Path::new("/p")).unwrap(),
            vec![PathBuf::from("/p/a")]
        );
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::with_root("/p");
        assert!(fs.write_file(Path::new("/p/x/y.kt"), "").is_err());
        fs.write_file(Path::new("/p/y.kt"), "body").unwrap();
        assert_eq!(fs.read_to_string(Path::new("/p/y.kt")).unwrap(), "body");
        assert!(!fs.is_dir(Path::new("/p/y.kt")));
    }

    #[test]
    fn refresh_is_recorded() {
        let fs = MemoryFilesystem::with_root("/p");
        fs.refresh(Path::new("/p")).unwrap();
        assert_eq!(fs.refreshed(), vec![PathBuf::from("/p")]);
    }

    #[test]
    fn clear_empties_everything() {
        let fs = MemoryFilesystem::with_root("/p");
        fs.write_file(Path::new("/p/a"), "x").unwrap();
        fs.clear().unwrap();
        assert!(fs.list_files().is_empty());
        assert!(!fs.exists(Path::new("/p")));
    }
}
