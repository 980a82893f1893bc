//! Module Tree Builder - lays out one feature module on disk.

use crate::{
    application::services::{TemplateService, writer::IdempotentWriter},
    domain::{
        DatasourceLayout, ModuleKind, PlaceholderMap, TemplateRef,
        naming::{self, BUILD_SCRIPT_KTS, MAIN_RESOURCE_ROOT, MAIN_SOURCE_ROOT, TEST_SOURCE_ROOT},
        placeholder::LEGACY_NAMESPACE_LITERAL,
    },
    error::StrataResult,
};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Build script used when a module kind has no template.
pub const DEFAULT_BUILD_SCRIPT: &str = r#"plugins {
    `java-library`
}

java {
    toolchain {
        languageVersion.set(JavaLanguageVersion.of(17))
    }
}

group = "com.example"
version = "1.0.0"

repositories {
    mavenCentral()
    google()
}

dependencies {
}
"#;

/// Inputs for scaffolding a single module.
#[derive(Debug, Clone)]
pub struct ModuleSpec<'a> {
    pub module_dir: &'a Path,
    pub kind: ModuleKind,
    pub root_folder: &'a str,
    pub feature_name: &'a str,
    pub org: &'a str,
    pub datasource: DatasourceLayout,
}

impl ModuleSpec<'_> {
    pub fn base_package(&self) -> String {
        naming::base_package(
            self.org,
            self.root_folder,
            self.feature_name,
            self.kind.package_suffix(),
        )
    }
}

#[derive(Clone)]
pub struct ModuleScaffolder {
    writer: IdempotentWriter,
    templates: TemplateService,
}

impl ModuleScaffolder {
    pub fn new(writer: IdempotentWriter, templates: TemplateService) -> Self {
        Self { writer, templates }
    }

    /// Build script, source roots, placeholder source and kind-specific
    /// package folders. Returns the files written.
    ///
    /// Fails on the first filesystem error; whatever was created stays.
    #[instrument(skip_all, fields(kind = %spec.kind, module = %spec.module_dir.display()))]
    pub fn scaffold(&self, spec: &ModuleSpec<'_>) -> StrataResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        let package = spec.base_package();
        let module_dir = self.writer.ensure_directory(spec.module_dir)?;

        // ====================================================================
        // Build script
        // ====================================================================
        let placeholders = PlaceholderMap::new()
            .with("NAMESPACE", &package)
            .with_bare("NAMESPACE", &package)
            .with_literal(LEGACY_NAMESPACE_LITERAL, &package);
        let template = TemplateRef::gradle(format!(
            "cleanArchitecture/module/{}",
            spec.kind.template_name()
        ));
        let build_script = self
            .templates
            .render_or(&template, DEFAULT_BUILD_SCRIPT, &placeholders)?;
        if self
            .writer
            .write_if_absent(&module_dir, BUILD_SCRIPT_KTS, &build_script)?
        {
            written.push(module_dir.join(BUILD_SCRIPT_KTS));
        }

        // ====================================================================
        // Source roots
        // ====================================================================
        for root in [MAIN_SOURCE_ROOT, MAIN_RESOURCE_ROOT, TEST_SOURCE_ROOT] {
            self.writer.ensure_directory(&module_dir.join(root))?;
        }

        let package_dir = self
            .writer
            .ensure_directory(&module_dir.join(naming::package_dir(&package)))?;
        let placeholder = format!("package {}\n\nclass Placeholder\n", package);
        if self
            .writer
            .write_if_absent(&package_dir, "Placeholder.kt", &placeholder)?
        {
            written.push(package_dir.join("Placeholder.kt"));
        }

        // ====================================================================
        // Kind-specific folders
        // ====================================================================
        for sub in Self::subfolders(spec.kind, spec.datasource) {
            self.writer.ensure_directory(&package_dir.join(sub))?;
        }

        debug!(package = %package, files = written.len(), "module scaffolded");
        Ok(written)
    }

    fn subfolders(kind: ModuleKind, datasource: DatasourceLayout) -> Vec<&'static str> {
        match kind {
            ModuleKind::Domain => vec!["repository", "model", "usecase"],
            ModuleKind::Data => {
                let mut dirs = vec!["repository"];
                match datasource {
                    DatasourceLayout::None => {}
                    DatasourceLayout::Combined => dirs.push(ModuleKind::DataSource.as_str()),
                    DatasourceLayout::Split { remote, local } => {
                        if remote {
                            dirs.push(ModuleKind::RemoteDataSource.as_str());
                        }
                        if local {
                            dirs.push(ModuleKind::LocalDataSource.as_str());
                        }
                    }
                }
                dirs
            }
            _ => Vec::new(),
        }
    }
}
