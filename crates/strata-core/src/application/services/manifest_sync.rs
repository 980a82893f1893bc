//! Module Manifest Synchronizer - keeps `settings.gradle[.kts]` includes current.

use crate::{
    application::{ApplicationError, ports::Filesystem, services::writer::IdempotentWriter},
    domain::{
        ManifestDeclaration, ManifestDialect,
        manifest::append_missing,
    },
    error::StrataResult,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct ManifestSynchronizer {
    fs: Arc<dyn Filesystem>,
    writer: IdempotentWriter,
}

impl ManifestSynchronizer {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self {
            writer: IdempotentWriter::new(fs.clone()),
            fs,
        }
    }

    /// Manifest location and dialect under `project_root`.
    ///
    /// Kotlin DSL is preferred; with no manifest at all the Kotlin DSL file
    /// name is returned (not yet created).
    pub fn locate(&self, project_root: &Path) -> (PathBuf, ManifestDialect) {
        let kts = project_root.join(ManifestDialect::KotlinDsl.file_name());
        let groovy = project_root.join(ManifestDialect::Groovy.file_name());
        let dialect = ManifestDialect::detect(self.fs.exists(&kts), self.fs.exists(&groovy));
        (project_root.join(dialect.file_name()), dialect)
    }

    /// Append an include for every path not yet declared. Returns whether
    /// the manifest changed.
    #[instrument(skip_all, fields(root = %project_root.display(), modules = module_paths.len()))]
    pub fn ensure_includes(&self, project_root: &Path, module_paths: &[String]) -> StrataResult<bool> {
        self.ensure(project_root, |dialect| {
            module_paths.iter().map(|p| dialect.include(p)).collect()
        })
    }

    /// Append an `includeBuild` for `build_dir` if missing.
    #[instrument(skip_all, fields(root = %project_root.display(), build = build_dir))]
    pub fn ensure_include_build(&self, project_root: &Path, build_dir: &str) -> StrataResult<bool> {
        self.ensure(project_root, |dialect| vec![dialect.include_build(build_dir)])
    }

    fn ensure<F>(&self, project_root: &Path, declarations: F) -> StrataResult<bool>
    where
        F: FnOnce(ManifestDialect) -> Vec<ManifestDeclaration>,
    {
        if !self.fs.is_dir(project_root) {
            return Err(ApplicationError::ProjectRootNotFound {
                path: project_root.to_path_buf(),
            }
            .into());
        }
        let (manifest, dialect) = self.locate(project_root);
        let existed = self.fs.exists(&manifest);
        let current = if existed {
            self.fs.read_to_string(&manifest)?
        } else {
            String::new()
        };

        match append_missing(&current, &declarations(dialect)) {
            Some(updated) if self.writer.write_if_changed(&manifest, &current, &updated)? => {
                info!(manifest = %manifest.display(), "manifest updated");
                Ok(true)
            }
            _ => {
                if !existed {
                    self.writer
                        .write_if_absent(project_root, dialect.file_name(), "")?;
                }
                debug!(manifest = %manifest.display(), "manifest already up to date");
                Ok(false)
            }
        }
    }
}
