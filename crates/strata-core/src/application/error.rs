//! Application layer errors.
//!
//! These errors represent failures in orchestration: unmet preconditions,
//! missing templates and filesystem failures. Naming and validation errors
//! are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Neither the primary nor the fallback template resource exists.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The project root does not exist or is not a directory.
    #[error("Project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// A generator was pointed at a directory of the wrong layer.
    #[error("Expected a '{expected}' module directory, got {path}")]
    WrongModuleDirectory {
        expected: &'static str,
        path: PathBuf,
    },

    /// A directory the generator depends on cannot be resolved.
    #[error("Cannot resolve {what} for {path}")]
    Unresolvable { what: &'static str, path: PathBuf },

    /// Store access failed (lock poisoned, etc.).
    #[error("Filesystem state is unavailable")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name } => vec![
                format!("Missing template resource: {}", name),
                "Try: strata templates to see available templates".into(),
                "Check the templates.dir override in your config".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Re-run the command once fixed; finished files are kept".into(),
            ],
            Self::ProjectRootNotFound { path } => vec![
                format!("No directory at {}", path.display()),
                "Pass --project <DIR> pointing at the Gradle root".into(),
            ],
            Self::WrongModuleDirectory { expected, .. } => vec![
                format!("Select the feature's '{}' module directory", expected),
                format!("Example: --module features/catalog/{}", expected),
            ],
            Self::Unresolvable { path, .. } => vec![
                format!("Check that {} sits inside a feature directory", path.display()),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::ProjectRootNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::WrongModuleDirectory { .. } | Self::Unresolvable { .. } => {
                ErrorCategory::Validation
            }
            Self::FilesystemError { .. } | Self::StoreLockError | Self::RenderingFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
