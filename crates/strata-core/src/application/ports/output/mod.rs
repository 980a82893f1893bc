//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use crate::domain::PlaceholderMap;
use crate::error::StrataResult;
use std::path::{Path, PathBuf};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - A file written through the port is visible to the next read
/// - Writes require the parent directory to exist
/// - `refresh` is a notification hook; adapters with no cache ignore it
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. Existing is fine.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> StrataResult<String>;

    /// Create or replace a file.
    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()>;

    /// Immediate child directories, sorted. Empty when `path` is missing.
    fn list_dirs(&self, path: &Path) -> StrataResult<Vec<PathBuf>>;

    /// Tell the host that `path` changed on disk.
    fn refresh(&self, _path: &Path) -> StrataResult<()> {
        Ok(())
    }
}

/// Port for template resources.
///
/// Paths are `/`-separated and relative to the template root, e.g.
/// `presentationScreen/Screen.kt`.
///
/// Implemented by:
/// - `strata_adapters::template_store::EmbeddedTemplateStore` (built-in templates)
/// - `strata_adapters::template_store::DirectoryTemplateStore` (user overrides)
/// - `strata_adapters::template_store::LayeredTemplateStore` (overrides, then built-in)
pub trait TemplateStore: Send + Sync {
    /// Raw template text, or `None` if this store has no such resource.
    fn load(&self, path: &str) -> StrataResult<Option<String>>;

    /// Every resource path this store can serve.
    fn list(&self) -> StrataResult<Vec<String>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `strata_adapters::renderer::SimpleRenderer` (placeholder substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Substitute every placeholder in `source`.
    fn render(&self, source: &str, placeholders: &PlaceholderMap) -> StrataResult<String>;
}
