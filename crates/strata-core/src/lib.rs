//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strata
//! Gradle feature-module generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            strata-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Feature, Screen, Repository, UseCase) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Store, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     strata-adapters (Infrastructure)    │
//! │  (LocalFilesystem, EmbeddedTemplates)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Naming, Manifest, BuildScript, Kinds) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use strata_core::{
//!     application::{FeatureService, TemplateService},
//!     domain::{FeatureRequest, ModuleFlags},
//! };
//!
//! // 1. Wire adapters into the services
//! let templates = TemplateService::new(store, renderer);
//! let service = FeatureService::new(filesystem, templates);
//!
//! // 2. Generate a feature
//! let request = FeatureRequest::new("/work/app", "features", "catalog")
//!     .with_org("acme")
//!     .with_flags(ModuleFlags::all());
//! let report = service.generate(&request)?;
//! println!("{}", report.summary);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FeatureService, RepositoryService, ScreenService, TemplateService, UseCaseService,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ArchitecturePattern, DiOptions, DiProvider, FeatureRequest, GenerationReport,
        ModuleFlags, ModuleKind, PlaceholderMap, RepositoryRequest, ScreenRequest, TemplateRef,
        UseCaseRequest,
    };
    pub use crate::error::{StrataError, StrataResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
