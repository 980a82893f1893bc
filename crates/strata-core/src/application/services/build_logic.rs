//! Build-Logic Generator - the shared convention-plugin build.
//!
//! Layout under `<project>/build-logic`:
//!
//! ```text
//! build-logic/
//! ├── settings.gradle.kts
//! ├── build.gradle.kts                       gradlePlugin { ... } regenerated
//! └── src/main/kotlin/com/<org>/convention/
//!     ├── <Kind>ConventionPlugin.kt          one per enabled kind
//!     └── helpers/                           always written
//! ```

use crate::{
    application::services::{TemplateService, writer::IdempotentWriter},
    domain::{
        ModuleKind, PlaceholderMap, TemplateRef,
        naming::{self, BUILD_LOGIC_DIR, BUILD_SCRIPT_KTS},
    },
    error::StrataResult,
};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

const TEMPLATE_ROOT: &str = "cleanArchitecture/buildLogic";
const PLUGIN_BLOCK_MARKER: &str = "gradlePlugin {";
const HELPERS: [&str; 3] = [
    "AndroidLibraryDefaults",
    "TestOptions",
    "StandardTestDependencies",
];

/// `gradlePlugin { plugins { ... } }` with one registration per kind.
pub fn plugin_registrations(org: &str, kinds: &[ModuleKind]) -> String {
    let mut block = String::from("gradlePlugin {\n    plugins {\n");
    for kind in kinds {
        let prefix = kind.convention_prefix();
        block.push_str(&format!(
            "        register(\"androidLibrary{prefix}Convention\") {{\n            \
             id = \"com.{org}.convention.android.library.{id}\"\n            \
             implementationClass = \"com.{org}.convention.{prefix}ConventionPlugin\"\n        \
             }}\n",
            id = kind.plugin_id_suffix(),
        ));
    }
    block.push_str("    }\n}\n");
    block
}

/// Replace everything from the `gradlePlugin {` marker on, or append.
pub fn replace_plugin_block(script: &str, block: &str) -> String {
    match script.find(PLUGIN_BLOCK_MARKER) {
        Some(at) => format!("{}{}", &script[..at], block),
        None => format!("{}\n\n{}", script.trim_end(), block),
    }
}

#[derive(Clone)]
pub struct BuildLogicGenerator {
    writer: IdempotentWriter,
    templates: TemplateService,
}

impl BuildLogicGenerator {
    pub fn new(writer: IdempotentWriter, templates: TemplateService) -> Self {
        Self { writer, templates }
    }

    /// Write the build-logic project for `kinds`. Existing files are kept.
    /// Returns the files written.
    #[instrument(skip_all, fields(org = org, kinds = kinds.len()))]
    pub fn materialize(
        &self,
        project_root: &Path,
        org: &str,
        kinds: &[ModuleKind],
    ) -> StrataResult<Vec<PathBuf>> {
        let org = naming::org_or_default(org);
        let placeholders = PlaceholderMap::new()
            .with("PACKAGE", org)
            .with_bare("PACKAGE", org);
        let mut written = Vec::new();

        let dir = self
            .writer
            .ensure_directory(&project_root.join(BUILD_LOGIC_DIR))?;

        let settings = self.templates.render(
            &TemplateRef::gradle(format!("{}/settings", TEMPLATE_ROOT)),
            &placeholders,
        )?;
        if self
            .writer
            .write_if_absent(&dir, "settings.gradle.kts", &settings)?
        {
            written.push(dir.join("settings.gradle.kts"));
        }

        let build = self.templates.render(
            &TemplateRef::gradle(format!("{}/build", TEMPLATE_ROOT)),
            &placeholders,
        )?;
        let build = replace_plugin_block(&build, &plugin_registrations(org, kinds));
        if self.writer.write_if_absent(&dir, BUILD_SCRIPT_KTS, &build)? {
            written.push(dir.join(BUILD_SCRIPT_KTS));
        }

        let convention_dir = dir.join(naming::package_dir(&format!("com.{}.convention", org)));
        for kind in kinds {
            let name = format!("{}ConventionPlugin", kind.convention_prefix());
            let source = self.templates.render(
                &TemplateRef::kotlin(format!("{}/conventionPlugins/{}", TEMPLATE_ROOT, name)),
                &placeholders,
            )?;
            let file = format!("{}.kt", name);
            if self.writer.write_if_absent(&convention_dir, &file, &source)? {
                written.push(convention_dir.join(file));
            }
        }

        let helpers_dir = convention_dir.join("helpers");
        for helper in HELPERS {
            let source = self.templates.render(
                &TemplateRef::kotlin(format!("{}/conventionPlugins/helpers/{}", TEMPLATE_ROOT, helper)),
                &placeholders,
            )?;
            let file = format!("{}.kt", helper);
            if self.writer.write_if_absent(&helpers_dir, &file, &source)? {
                written.push(helpers_dir.join(file));
            }
        }

        info!(files = written.len(), "build-logic materialized");
        Ok(written)
    }
}
