//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: generator orchestration (FeatureService, ScreenService, ...)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or text rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub mod testing;

// Re-export main services
pub use services::{
    FeatureService, MutationScope, RepositoryService, ScreenService, TemplateService,
    UseCaseService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
