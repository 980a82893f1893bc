//! Feature Service - main application orchestrator.
//!
//! Generates the module set of one feature:
//! 1. Resolve the project root, root folder and feature directory
//! 2. Compute the enabled module kinds from the request flags
//! 3. Scaffold every enabled module that does not exist yet
//! 4. Ensure every enabled module is included in the manifest
//! 5. Optionally materialize build-logic and include it
//!
//! Every step is idempotent; running the same request twice leaves the tree
//! and manifest unchanged after the first run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::{
            BuildLogicGenerator, ManifestSynchronizer, ModuleScaffolder, ModuleSpec,
            MutationScope, TemplateService, writer::IdempotentWriter,
        },
    },
    domain::{
        FeatureRequest, GenerationReport, ModuleKind, PlaceholderMap, TemplateRef,
        build_script::ensure_apply_from,
        naming::{self, BUILD_LOGIC_DIR, BUILD_SCRIPT_KTS},
    },
    error::StrataResult,
};

/// Orchestrates the "generate feature" operation.
#[derive(Clone)]
pub struct FeatureService {
    fs: Arc<dyn Filesystem>,
    writer: IdempotentWriter,
    templates: TemplateService,
    scaffolder: ModuleScaffolder,
    manifest: ManifestSynchronizer,
    build_logic: BuildLogicGenerator,
}

impl FeatureService {
    pub fn new(fs: Arc<dyn Filesystem>, templates: TemplateService) -> Self {
        let writer = IdempotentWriter::new(fs.clone());
        Self {
            scaffolder: ModuleScaffolder::new(writer.clone(), templates.clone()),
            manifest: ManifestSynchronizer::new(fs.clone()),
            build_logic: BuildLogicGenerator::new(writer.clone(), templates.clone()),
            fs,
            writer,
            templates,
        }
    }

    /// Generate (or complete) the modules of one feature.
    #[instrument(
        skip_all,
        fields(
            feature = %request.feature_name,
            root = %request.root_folder,
            project = %request.project_root.display()
        )
    )]
    pub fn generate(&self, request: &FeatureRequest) -> StrataResult<GenerationReport> {
        // 1. Validate and resolve directories
        request.validate()?;
        let project_root = request.project_root.as_path();
        if !self.fs.is_dir(project_root) {
            return Err(ApplicationError::ProjectRootNotFound {
                path: project_root.to_path_buf(),
            }
            .into());
        }
        let mut scope = MutationScope::begin(self.fs.clone(), "feature", project_root);
        self.writer
            .ensure_directory(&project_root.join(&request.root_folder))?;
        let feature_dir = self.writer.ensure_directory(&request.feature_dir())?;
        scope.record(&feature_dir);

        let mut report = GenerationReport::default();
        let org = request.org();

        // 2. Module set
        let kinds = request.flags.enabled_modules();
        let datasource = request.flags.datasource_layout();
        debug!(?kinds, "enabled modules");

        // 3. Root scripts, shared across modules
        report
            .files_written
            .extend(self.prepare_root_scripts(project_root, &request.root_scripts)?);

        // 4. Modules
        let mut module_paths = Vec::with_capacity(kinds.len());
        for kind in &kinds {
            let module_dir = feature_dir.join(kind.as_str());
            if self.fs.exists(&module_dir) {
                report.existing.push(kind.to_string());
            } else {
                let written = self.scaffolder.scaffold(&ModuleSpec {
                    module_dir: &module_dir,
                    kind: *kind,
                    root_folder: &request.root_folder,
                    feature_name: &request.feature_name,
                    org,
                    datasource,
                })?;
                info!(module = %kind, "module created");
                report.files_written.extend(written);
                report.created.push(kind.to_string());
            }

            if let Some(script) = request.root_scripts.get(kind) {
                if let Some(path) = self.ensure_apply_at_top(project_root, &module_dir, script)? {
                    report.files_written.push(path);
                }
            }

            module_paths.push(naming::gradle_path_for(
                project_root,
                &feature_dir,
                kind.as_str(),
            ));
        }

        // 5. Manifest
        report.manifest_updated = self.manifest.ensure_includes(project_root, &module_paths)?;

        // 6. Build-logic
        if request.include_build_logic {
            let written = self.build_logic.materialize(project_root, org, &kinds)?;
            report.files_written.extend(written);
            let included = self
                .manifest
                .ensure_include_build(project_root, BUILD_LOGIC_DIR)?;
            report.manifest_updated |= included;
        }

        // 7. Summary
        report.summary = if report.created.is_empty() {
            format!(
                "No modules were created because all exist for feature '{}'. Modules ensured in settings.gradle.",
                request.feature_name
            )
        } else {
            format!(
                "Created modules: {} under feature '{}' and updated settings.gradle.",
                report.created.join(", "),
                request.feature_name
            )
        };

        scope.record_all(report.files_written.iter().cloned());
        scope.commit()?;
        info!(summary = %report.summary, "feature generated");
        Ok(report)
    }

    // ========================================================================
    // Root scripts
    // ========================================================================

    fn absolute(project_root: &Path, input: &str) -> PathBuf {
        let path = Path::new(input.trim());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        }
    }

    /// Create every selected root script that does not exist yet.
    ///
    /// A script shared by several kinds starts blank; a script used by one
    /// kind starts from that kind's root template (blank when none).
    fn prepare_root_scripts(
        &self,
        project_root: &Path,
        selections: &BTreeMap<ModuleKind, String>,
    ) -> StrataResult<Vec<PathBuf>> {
        let mut grouped: BTreeMap<PathBuf, Vec<ModuleKind>> = BTreeMap::new();
        for (kind, input) in selections {
            if input.trim().is_empty() {
                continue;
            }
            grouped
                .entry(Self::absolute(project_root, input))
                .or_default()
                .push(*kind);
        }

        let mut written = Vec::new();
        for (path, kinds) in grouped {
            let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
                continue;
            };
            let content = match kinds.as_slice() {
                [kind] => self
                    .templates
                    .render_optional(
                        &TemplateRef::gradle(format!("cleanArchitecture/root/{}", kind.as_str())),
                        &PlaceholderMap::new(),
                    )?
                    .unwrap_or_default(),
                _ => String::new(),
            };
            if self
                .writer
                .write_if_absent(dir, &name.to_string_lossy(), &content)?
            {
                written.push(path);
            }
        }
        Ok(written)
    }

    /// Put `apply(from = rootProject.file("<rel>"))` at the top of the
    /// module's build script. Returns the script path when it changed.
    fn ensure_apply_at_top(
        &self,
        project_root: &Path,
        module_dir: &Path,
        script: &str,
    ) -> StrataResult<Option<PathBuf>> {
        if script.trim().is_empty() {
            return Ok(None);
        }
        let absolute = Self::absolute(project_root, script);
        let relative = match absolute.strip_prefix(project_root) {
            Ok(rel) => naming::to_forward_slashes(rel),
            Err(_) => naming::to_forward_slashes(&absolute),
        };

        let build_file = module_dir.join(BUILD_SCRIPT_KTS);
        let current = if self.fs.exists(&build_file) {
            self.fs.read_to_string(&build_file)?
        } else {
            self.writer.ensure_directory(module_dir)?;
            String::new()
        };
        match ensure_apply_from(&current, &relative) {
            Some(updated) if self.writer.write_if_changed(&build_file, &current, &updated)? => {
                debug!(script = %relative, module = %module_dir.display(), "apply line added");
                Ok(Some(build_file))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FakeFs, MapStore, PlainRenderer};
    use crate::domain::ModuleFlags;
    use crate::error::StrataError;

    fn service(fs: &FakeFs, store: MapStore) -> FeatureService {
        FeatureService::new(
            Arc::new(fs.clone()),
            TemplateService::new(Arc::new(store), Arc::new(PlainRenderer)),
        )
    }

    fn catalog() -> FeatureRequest {
        FeatureRequest::new("/p", "features", "catalog")
            .with_org("acme")
            .with_flags(ModuleFlags::all())
    }

    #[test]
    fn first_run_creates_modules_and_manifest() {
        let fs = FakeFs::with_root("/p");
        let report = service(&fs, MapStore::default()).generate(&catalog()).unwrap();

        assert_eq!(report.created, vec!["domain", "data", "di", "presentation", "dataSource"]);
        assert!(report.manifest_updated);
        assert_eq!(
            report.summary,
            "Created modules: domain, data, di, presentation, dataSource under feature 'catalog' and updated settings.gradle."
        );
        let manifest = fs.read("/p/settings.gradle.kts").unwrap();
        for kind in ["domain", "data", "di", "presentation", "dataSource"] {
            assert!(manifest.contains(&format!("include(\":features:catalog:{}\")", kind)));
        }
    }

    #[test]
    fn leading_dot_in_root_folder_is_ignored() {
        let fs = FakeFs::with_root("/p");
        let request = FeatureRequest::new("/p", "./features", "catalog")
            .with_org("acme")
            .with_flags(ModuleFlags::default());
        service(&fs, MapStore::default()).generate(&request).unwrap();

        let manifest = fs.read("/p/settings.gradle.kts").unwrap();
        assert!(manifest.contains("include(\":features:catalog:domain\")"));
        assert!(!manifest.contains(":.:"));
        assert!(fs.has_dir("/p/features/catalog/domain/src/main/kotlin/com/acme/features/catalog/domain"));
    }

    #[test]
    fn second_run_is_a_no_op() {
        let fs = FakeFs::with_root("/p");
        let svc = service(&fs, MapStore::default());
        svc.generate(&catalog()).unwrap();
        let before = fs.snapshot();

        let report = svc.generate(&catalog()).unwrap();
        assert!(report.created.is_empty());
        assert!(!report.manifest_updated);
        assert_eq!(
            report.summary,
            "No modules were created because all exist for feature 'catalog'. Modules ensured in settings.gradle."
        );
        assert_eq!(fs.snapshot(), before);
    }

    #[test]
    fn existing_module_is_only_included() {
        let fs = FakeFs::with_root("/p");
        fs.mkdir("/p/features/catalog/domain");
        let report = service(&fs, MapStore::default())
            .generate(&FeatureRequest::new("/p", "features", "catalog"))
            .unwrap();
        assert_eq!(report.existing, vec!["domain"]);
        assert_eq!(report.created, vec!["data"]);
        assert!(fs
            .read("/p/settings.gradle.kts")
            .unwrap()
            .contains("include(\":features:catalog:domain\")"));
        assert!(fs.read("/p/features/catalog/domain/build.gradle.kts").is_none());
    }

    #[test]
    fn root_scripts_are_created_and_applied() {
        let fs = FakeFs::with_root("/p");
        let store = MapStore::default().with("cleanArchitecture/root/data.gradle.kts", "// data root\n");
        let request = FeatureRequest::new("/p", "features", "catalog")
            .with_root_script(ModuleKind::Data, "scripts/data.gradle.kts")
            .with_root_script(ModuleKind::Domain, "scripts/shared.gradle.kts")
            .with_root_script(ModuleKind::Di, "scripts/shared.gradle.kts");
        let svc = service(&fs, store);
        svc.generate(&request).unwrap();

        assert_eq!(fs.read("/p/scripts/data.gradle.kts").unwrap(), "// data root\n");
        assert_eq!(fs.read("/p/scripts/shared.gradle.kts").unwrap(), "");
        let data_build = fs.read("/p/features/catalog/data/build.gradle.kts").unwrap();
        assert!(data_build.starts_with("apply(from = rootProject.file(\"scripts/data.gradle.kts\"))\n\n"));

        svc.generate(&request).unwrap();
        let again = fs.read("/p/features/catalog/data/build.gradle.kts").unwrap();
        assert_eq!(again.matches("apply(from").count(), 1);
    }

    #[test]
    fn missing_project_root_fails() {
        let fs = FakeFs::default();
        let err = service(&fs, MapStore::default())
            .generate(&FeatureRequest::new("/nope", "features", "x"))
            .unwrap_err();
        assert!(matches!(
            err,
            StrataError::Application(ApplicationError::ProjectRootNotFound { .. })
        ));
    }

    #[test]
    fn invalid_feature_name_fails_before_writing() {
        let fs = FakeFs::with_root("/p");
        let result = service(&fs, MapStore::default())
            .generate(&FeatureRequest::new("/p", "features", "a/b"));
        assert!(matches!(result, Err(StrataError::Domain(_))));
        assert_eq!(fs.writes(), 0);
    }
}
