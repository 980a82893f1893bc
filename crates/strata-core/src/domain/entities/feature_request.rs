//! The "generate feature" request and its module enablement rules.

use crate::domain::{error::DomainError, naming, value_objects::ModuleKind};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Which optional layers a feature gets.
///
/// `domain` and `data` are always generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleFlags {
    pub di: bool,
    pub presentation: bool,
    pub datasource_combined: bool,
    pub datasource_remote: bool,
    pub datasource_local: bool,
}

/// How the data-source layer is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasourceLayout {
    None,
    Combined,
    Split { remote: bool, local: bool },
}

impl ModuleFlags {
    pub fn all() -> Self {
        Self {
            di: true,
            presentation: true,
            datasource_combined: true,
            datasource_remote: false,
            datasource_local: false,
        }
    }

    /// Combined wins when both combined and split are requested.
    pub fn datasource_layout(&self) -> DatasourceLayout {
        if self.datasource_combined {
            DatasourceLayout::Combined
        } else if self.datasource_remote || self.datasource_local {
            DatasourceLayout::Split {
                remote: self.datasource_remote,
                local: self.datasource_local,
            }
        } else {
            DatasourceLayout::None
        }
    }

    /// Module kinds to generate, in generation order.
    pub fn enabled_modules(&self) -> Vec<ModuleKind> {
        let mut kinds = vec![ModuleKind::Domain, ModuleKind::Data];
        if self.di {
            kinds.push(ModuleKind::Di);
        }
        if self.presentation {
            kinds.push(ModuleKind::Presentation);
        }
        match self.datasource_layout() {
            DatasourceLayout::None => {}
            DatasourceLayout::Combined => kinds.push(ModuleKind::DataSource),
            DatasourceLayout::Split { remote, local } => {
                if remote {
                    kinds.push(ModuleKind::RemoteDataSource);
                }
                if local {
                    kinds.push(ModuleKind::LocalDataSource);
                }
            }
        }
        kinds
    }
}

/// Everything the feature generator needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRequest {
    pub project_root: PathBuf,
    pub root_folder: String,
    pub feature_name: String,
    pub org_segment: String,
    pub flags: ModuleFlags,
    pub include_build_logic: bool,
    /// Shared scripts applied from module build scripts, keyed by kind.
    /// Values are absolute or project-relative paths.
    pub root_scripts: BTreeMap<ModuleKind, String>,
}

impl FeatureRequest {
    pub fn new(
        project_root: impl Into<PathBuf>,
        root_folder: impl Into<String>,
        feature_name: impl Into<String>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            root_folder: root_folder.into(),
            feature_name: feature_name.into(),
            org_segment: naming::DEFAULT_ORG_SEGMENT.to_string(),
            flags: ModuleFlags::default(),
            include_build_logic: false,
            root_scripts: BTreeMap::new(),
        }
    }

    pub fn with_org(mut self, org: impl Into<String>) -> Self {
        self.org_segment = org.into();
        self
    }

    pub fn with_flags(mut self, flags: ModuleFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_build_logic(mut self, enabled: bool) -> Self {
        self.include_build_logic = enabled;
        self
    }

    pub fn with_root_script(mut self, kind: ModuleKind, path: impl Into<String>) -> Self {
        self.root_scripts.insert(kind, path.into());
        self
    }

    pub fn org(&self) -> &str {
        naming::org_or_default(&self.org_segment)
    }

    pub fn feature_dir(&self) -> PathBuf {
        self.project_root
            .join(&self.root_folder)
            .join(&self.feature_name)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        crate::domain::validation::DomainValidator::validate_feature_request(self)
    }
}
