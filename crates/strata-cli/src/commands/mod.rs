//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core requests, run the matching
//! service and hand the result to [`OutputManager`](crate::output::OutputManager).
//! No generation logic lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use strata_adapters::{LayeredTemplateStore, LocalFilesystem, SimpleRenderer};
use strata_core::application::{Filesystem, TemplateService};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod config;
pub mod feature;
pub mod init;
pub mod repository;
pub mod screen;
pub mod templates;
pub mod usecase;

/// Adapters shared by every generator command.
pub struct Engine {
    pub fs: Arc<dyn Filesystem>,
    pub templates: TemplateService,
}

impl Engine {
    /// Local filesystem, built-in templates overlaid by `templates.dir`, and
    /// a strict renderer.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = LayeredTemplateStore::standard(config.template_dir());
        Self {
            fs: Arc::new(LocalFilesystem::new()),
            templates: TemplateService::new(Arc::new(store), Arc::new(SimpleRenderer::strict())),
        }
    }
}

/// Resolve a module directory given on the command line against the project.
///
/// Absolute paths are kept; relative ones are joined onto `project`. The
/// directory must exist.
pub fn module_dir(project: &Path, module: &Path) -> CliResult<PathBuf> {
    let dir = if module.is_absolute() {
        module.to_path_buf()
    } else {
        project.join(module)
    };
    if dir.is_file() {
        return Err(CliError::InvalidInput {
            message: format!("{} is a file, expected a module directory", dir.display()),
            source: None,
        });
    }
    if !dir.is_dir() {
        return Err(CliError::PathNotFound { path: dir });
    }
    Ok(dir)
}
