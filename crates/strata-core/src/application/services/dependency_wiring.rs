//! Cross-Module Dependency Wiring.

use crate::{
    application::{ApplicationError, ports::Filesystem, services::writer::IdempotentWriter},
    domain::{
        BlockLocator, BraceMatcher,
        build_script::{insert_dependencies, missing_dependencies},
        naming::{BUILD_SCRIPT_GROOVY, BUILD_SCRIPT_KTS},
    },
    error::StrataResult,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct DependencyWiring {
    fs: Arc<dyn Filesystem>,
    writer: IdempotentWriter,
    locator: Arc<dyn BlockLocator>,
}

impl DependencyWiring {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self::with_locator(fs, Arc::new(BraceMatcher))
    }

    pub fn with_locator(fs: Arc<dyn Filesystem>, locator: Arc<dyn BlockLocator>) -> Self {
        Self {
            writer: IdempotentWriter::new(fs.clone()),
            fs,
            locator,
        }
    }

    /// Build script of `module_dir`, Kotlin DSL first.
    pub fn find_build_script(&self, module_dir: &Path) -> Option<PathBuf> {
        [BUILD_SCRIPT_KTS, BUILD_SCRIPT_GROOVY]
            .into_iter()
            .map(|name| module_dir.join(name))
            .find(|path| self.fs.exists(path))
    }

    /// Add `implementation(project(...))` lines for every required path that
    /// is outside `own_prefix` and not yet referenced. Returns whether the
    /// script changed.
    #[instrument(skip_all, fields(script = %build_script.display(), required = required.len()))]
    pub fn add_missing_dependencies(
        &self,
        build_script: &Path,
        own_prefix: &str,
        required: &BTreeSet<String>,
    ) -> StrataResult<bool> {
        if !self.fs.exists(build_script) {
            return Err(ApplicationError::Unresolvable {
                what: "build script",
                path: build_script.to_path_buf(),
            }
            .into());
        }
        let original = self.fs.read_to_string(build_script)?;
        let missing = missing_dependencies(&original, own_prefix, required);
        if missing.is_empty() {
            debug!("all dependencies already declared");
            return Ok(false);
        }
        let updated = insert_dependencies(&original, &missing, self.locator.as_ref());
        if !self.writer.write_if_changed(build_script, &original, &updated)? {
            return Ok(false);
        }
        info!(added = ?missing, "dependencies wired");
        Ok(true)
    }
}
