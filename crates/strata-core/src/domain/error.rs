// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidName {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Unknown module kind: {0}")]
    UnknownModuleKind(String),

    #[error("Unknown {option}: {value}")]
    UnknownOption { option: &'static str, value: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Unsupported root script entry '{entry}': {reason}")]
    InvalidRootScript { entry: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { field, .. } => vec![
                format!("A {} must be a non-empty single path segment", field),
                "Use letters, digits and underscores, e.g. 'catalog' or 'GetItems'".into(),
            ],
            Self::InvalidPath { .. } => vec![
                "Paths must be relative to the project root".into(),
                "Parent segments ('..') are not allowed".into(),
            ],
            Self::UnknownModuleKind(_) => vec![
                "Valid kinds: domain, data, di, presentation, dataSource, remoteDataSource, localDataSource"
                    .into(),
            ],
            Self::UnknownOption { option, .. } => match *option {
                "di provider" => vec!["Valid providers: hilt, koin".into()],
                "architecture pattern" => vec!["Valid patterns: mvi, mvvm".into()],
                _ => vec!["Run with --help to see accepted values".into()],
            },
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
            Self::InvalidRootScript { .. } => vec![
                "Root scripts are given as <kind>=<relative path>".into(),
                "Example: --root-script data=build-logic/shared/data.gradle.kts".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::InvalidPath { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidRootScript { .. } => ErrorCategory::Validation,
            Self::UnknownModuleKind(_) | Self::UnknownOption { .. } => {
                ErrorCategory::Compatibility
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}
