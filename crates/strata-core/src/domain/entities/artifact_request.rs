//! Requests for single-artifact generators (screen, repository, use case).
//!
//! Each request names an anchor module directory; package names and sibling
//! modules are derived from where that directory sits in the project.

use crate::domain::{
    error::DomainError,
    validation::DomainValidator,
    value_objects::{ArchitecturePattern, DiProvider},
};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// DI options shared by every artifact generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiOptions {
    pub enabled: bool,
    pub provider: DiProvider,
    pub koin_annotations: bool,
}

impl DiOptions {
    pub fn hilt() -> Self {
        Self {
            enabled: true,
            provider: DiProvider::Hilt,
            koin_annotations: false,
        }
    }

    pub fn koin(annotations: bool) -> Self {
        Self {
            enabled: true,
            provider: DiProvider::Koin,
            koin_annotations: annotations,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// Suffix selecting the provider-specific variant of a template:
    /// `""` for Hilt, `"Koin"`, or `"KoinAnnotated"`. `None` when disabled.
    pub fn template_suffix(&self) -> Option<&'static str> {
        if !self.enabled {
            return None;
        }
        Some(match (self.provider, self.koin_annotations) {
            (DiProvider::Hilt, _) => "",
            (DiProvider::Koin, false) => "Koin",
            (DiProvider::Koin, true) => "KoinAnnotated",
        })
    }

    pub fn provider_label(&self) -> &'static str {
        match self.provider {
            DiProvider::Hilt => "Hilt",
            DiProvider::Koin => "Koin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRequest {
    pub project_root: PathBuf,
    /// Module directory the screen goes into, normally `<feature>/presentation`.
    pub module_dir: PathBuf,
    pub screen_name: String,
    pub add_navigation: bool,
    pub flow_state_holder: bool,
    pub screen_state_holder: bool,
    pub pattern: ArchitecturePattern,
    pub di: DiOptions,
    /// Use cases injected into the view model, simple or fully-qualified.
    pub use_cases: Vec<String>,
    /// Gradle paths of the modules those use cases live in.
    pub use_case_modules: BTreeSet<String>,
}

impl ScreenRequest {
    pub fn new(
        project_root: impl Into<PathBuf>,
        module_dir: impl Into<PathBuf>,
        screen_name: impl Into<String>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            module_dir: module_dir.into(),
            screen_name: screen_name.into(),
            add_navigation: false,
            flow_state_holder: false,
            screen_state_holder: false,
            pattern: ArchitecturePattern::default(),
            di: DiOptions::hilt(),
            use_cases: Vec::new(),
            use_case_modules: BTreeSet::new(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_screen_request(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRequest {
    pub project_root: PathBuf,
    /// The feature's `data` module directory.
    pub data_module_dir: PathBuf,
    pub repository_name: String,
    pub di: DiOptions,
}

impl RepositoryRequest {
    pub fn new(
        project_root: impl Into<PathBuf>,
        data_module_dir: impl Into<PathBuf>,
        repository_name: impl Into<String>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            data_module_dir: data_module_dir.into(),
            repository_name: repository_name.into(),
            di: DiOptions::disabled(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_repository_request(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCaseRequest {
    pub project_root: PathBuf,
    /// The feature's `domain` module directory.
    pub domain_module_dir: PathBuf,
    pub use_case_name: String,
    pub di: DiOptions,
    /// Repositories injected into the use case, simple or fully-qualified.
    pub repositories: Vec<String>,
    /// Gradle paths of modules those repositories live in.
    pub repository_modules: BTreeSet<String>,
}

impl UseCaseRequest {
    pub fn new(
        project_root: impl Into<PathBuf>,
        domain_module_dir: impl Into<PathBuf>,
        use_case_name: impl Into<String>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            domain_module_dir: domain_module_dir.into(),
            use_case_name: use_case_name.into(),
            di: DiOptions::hilt(),
            repositories: Vec::new(),
            repository_modules: BTreeSet::new(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_use_case_request(self)
    }
}
