//! Domain value objects: ModuleKind, DiProvider, ArchitecturePattern.
//!
//! # Design
//!
//! These are pure `Copy` value types with equality by value.
//! Each one owns its string representations and its `FromStr` parser; the
//! services never match on raw strings.
//!
//! # Adding a module kind
//!
//! 1. Add the enum variant and extend [`ModuleKind::ALL`]
//! 2. Add the `as_str` / `convention_prefix` / `plugin_id_suffix` arms
//! 3. Ship `cleanArchitecture/module/<kind>.gradle.kts` and a convention
//!    plugin template
//! 4. The orchestrators iterate over kinds, not names

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ModuleKind ────────────────────────────────────────────────────────────────

/// One architectural layer of a feature.
///
/// The string form doubles as the module directory name, the template name,
/// the final manifest path segment and the package suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleKind {
    Domain,
    Data,
    Di,
    Presentation,
    DataSource,
    RemoteDataSource,
    LocalDataSource,
}

impl ModuleKind {
    /// Every kind, in generation order.
    pub const ALL: [ModuleKind; 7] = [
        Self::Domain,
        Self::Data,
        Self::Di,
        Self::Presentation,
        Self::DataSource,
        Self::RemoteDataSource,
        Self::LocalDataSource,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Data => "data",
            Self::Di => "di",
            Self::Presentation => "presentation",
            Self::DataSource => "dataSource",
            Self::RemoteDataSource => "remoteDataSource",
            Self::LocalDataSource => "localDataSource",
        }
    }

    /// Logical template name of this kind's module build script.
    pub const fn template_name(&self) -> &'static str {
        self.as_str()
    }

    /// Last package segment of this kind's base package.
    pub const fn package_suffix(&self) -> &'static str {
        self.as_str()
    }

    /// PascalCase prefix used for convention plugin classes and registrations.
    pub const fn convention_prefix(&self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Data => "Data",
            Self::Di => "DI",
            Self::Presentation => "Presentation",
            Self::DataSource => "DataSource",
            Self::RemoteDataSource => "RemoteDataSource",
            Self::LocalDataSource => "LocalDataSource",
        }
    }

    /// Trailing segment of the convention plugin id.
    pub const fn plugin_id_suffix(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Data => "data",
            Self::Di => "di",
            Self::Presentation => "presentation",
            Self::DataSource => "data-source",
            Self::RemoteDataSource => "remote-data-source",
            Self::LocalDataSource => "local-data-source",
        }
    }

    pub const fn is_datasource(&self) -> bool {
        matches!(
            self,
            Self::DataSource | Self::RemoteDataSource | Self::LocalDataSource
        )
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "domain" => Ok(Self::Domain),
            "data" => Ok(Self::Data),
            "di" => Ok(Self::Di),
            "presentation" | "ui" => Ok(Self::Presentation),
            "datasource" => Ok(Self::DataSource),
            "remotedatasource" | "remote" => Ok(Self::RemoteDataSource),
            "localdatasource" | "local" => Ok(Self::LocalDataSource),
            _ => Err(DomainError::UnknownModuleKind(s.to_string())),
        }
    }
}

// ── DiProvider ────────────────────────────────────────────────────────────────

/// Dependency-injection framework the generated artifacts target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiProvider {
    #[default]
    Hilt,
    Koin,
}

impl DiProvider {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hilt => "hilt",
            Self::Koin => "koin",
        }
    }
}

impl fmt::Display for DiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hilt" | "dagger" => Ok(Self::Hilt),
            "koin" => Ok(Self::Koin),
            other => Err(DomainError::UnknownOption {
                option: "di provider",
                value: other.to_string(),
            }),
        }
    }
}

// ── ArchitecturePattern ───────────────────────────────────────────────────────

/// Presentation pattern of a generated screen.
///
/// Only MVI screens get an `Intent` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchitecturePattern {
    #[default]
    Mvi,
    Mvvm,
}

impl ArchitecturePattern {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mvi => "mvi",
            Self::Mvvm => "mvvm",
        }
    }

    pub const fn has_intent(&self) -> bool {
        matches!(self, Self::Mvi)
    }
}

impl fmt::Display for ArchitecturePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchitecturePattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mvi" => Ok(Self::Mvi),
            "mvvm" => Ok(Self::Mvvm),
            other => Err(DomainError::UnknownOption {
                option: "architecture pattern",
                value: other.to_string(),
            }),
        }
    }
}
