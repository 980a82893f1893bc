//! Test doubles for the output ports.

use crate::application::{
    ApplicationError,
    ports::{Filesystem, TemplateRenderer, TemplateStore},
};
use crate::domain::PlaceholderMap;
use crate::error::StrataResult;
use mockall::mock;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

mock! {
    pub Store {}

    impl TemplateStore for Store {
        fn load(&self, path: &str) -> StrataResult<Option<String>>;
        fn list(&self) -> StrataResult<Vec<String>>;
    }
}

/// In-memory filesystem with write counting.
#[derive(Default, Clone)]
pub struct FakeFs {
    inner: Arc<Mutex<FakeFsState>>,
}

#[derive(Default)]
struct FakeFsState {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    writes: usize,
    refreshed: Vec<PathBuf>,
}

impl FakeFs {
    pub fn with_root(root: &str) -> Self {
        let fs = Self::default();
        fs.mkdir(root);
        fs
    }

    pub fn mkdir(&self, path: impl AsRef<Path>) {
        let mut state = self.inner.lock().unwrap();
        for ancestor in path.as_ref().ancestors() {
            if !ancestor.as_os_str().is_empty() {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    pub fn put(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.mkdir(parent);
        }
        self.inner
            .lock()
            .unwrap()
            .files
            .insert(path.to_path_buf(), content.to_string());
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.inner.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.inner.lock().unwrap().dirs.contains(path.as_ref())
    }

    pub fn writes(&self) -> usize {
        self.inner.lock().unwrap().writes
    }

    pub fn refreshed(&self) -> Vec<PathBuf> {
        self.inner.lock().unwrap().refreshed.clone()
    }

    pub fn snapshot(&self) -> (BTreeMap<PathBuf, String>, BTreeSet<PathBuf>) {
        let state = self.inner.lock().unwrap();
        (state.files.clone(), state.dirs.clone())
    }
}

impl Filesystem for FakeFs {
    fn exists(&self, path: &Path) -> bool {
        let state = self.inner.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.has_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        self.mkdir(path);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> StrataResult<String> {
        self.read(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not found".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()> {
        let mut state = self.inner.lock().unwrap();
        let parent_ok = path.parent().is_none_or(|p| state.dirs.contains(p));
        if !parent_ok {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "parent directory missing".into(),
            }
            .into());
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        state.writes += 1;
        Ok(())
    }

    fn list_dirs(&self, path: &Path) -> StrataResult<Vec<PathBuf>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .dirs
            .iter()
            .filter(|d| d.parent() == Some(path))
            .cloned()
            .collect())
    }

    fn refresh(&self, path: &Path) -> StrataResult<()> {
        self.inner.lock().unwrap().refreshed.push(path.to_path_buf());
        Ok(())
    }
}

/// Template store backed by a map.
#[derive(Default)]
pub struct MapStore {
    templates: HashMap<String, String>,
}

impl MapStore {
    pub fn with(mut self, path: &str, content: &str) -> Self {
        self.templates.insert(path.to_string(), content.to_string());
        self
    }
}

impl TemplateStore for MapStore {
    fn load(&self, path: &str) -> StrataResult<Option<String>> {
        Ok(self.templates.get(path).cloned())
    }

    fn list(&self) -> StrataResult<Vec<String>> {
        let mut names: Vec<_> = self.templates.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

/// Renderer that applies the placeholder map as-is.
pub struct PlainRenderer;

impl TemplateRenderer for PlainRenderer {
    fn render(&self, source: &str, placeholders: &PlaceholderMap) -> StrataResult<String> {
        Ok(placeholders.apply(source))
    }
}
