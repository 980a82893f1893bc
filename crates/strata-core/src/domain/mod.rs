// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Strata.
//!
//! This module contains pure logic with no I/O. Filesystem access and
//! template lookup are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Contents
//!
//! - **naming**: packages, source directories and Gradle paths
//! - **placeholder**: substitution rules and template references
//! - **manifest**: `settings.gradle[.kts]` dialects and include lines
//! - **build_script**: brace-matched `dependencies` block edits
//! - **injection**: constructor-injected references
//! - **entities**: requests and reports
//!
pub mod build_script;
pub mod entities;
pub mod error;
pub mod injection;
pub mod manifest;
pub mod naming;
pub mod placeholder;
pub mod value_objects;

mod validation;

pub use build_script::{BlockLocator, BlockSpan, BraceMatcher};
pub use entities::{
    DatasourceLayout, DiOptions, FeatureRequest, GenerationReport, ModuleFlags, RepositoryRequest,
    ScreenRequest, UseCaseRequest,
};
pub use error::{DomainError, ErrorCategory};
pub use injection::{InjectedRef, Injection};
pub use manifest::{ManifestDeclaration, ManifestDialect};
pub use naming::DerivedNaming;
pub use placeholder::{PlaceholderMap, SubstitutionRule, TemplateRef};
pub use validation::DomainValidator;
pub use value_objects::{ArchitecturePattern, DiProvider, ModuleKind};
