//! Presentation screen generator.
//!
//! For a `presentation` module the screen gets its own folder under the
//! module's base package:
//!
//! ```text
//! <base>/
//! ├── <folder>/
//! │   ├── <Base>Screen.kt
//! │   ├── <Base>Intent.kt          MVI only
//! │   ├── <Base>ViewModel.kt
//! │   ├── <Base>UiState.kt
//! │   └── <Name>StateHolder.kt     optional
//! ├── navigation/                  optional
//! │   ├── <Feature>NavHost.kt
//! │   └── destinations/<Name>Destination.kt
//! └── <Feature>FlowStateHolder.kt  optional
//! ```
//!
//! Any other module only receives the optional navigation and flow state
//! holder files.

use crate::{
    application::{
        ports::Filesystem,
        services::{
            DependencyWiring, ModuleContext, MutationScope, TemplateService,
            writer::IdempotentWriter,
        },
    },
    domain::{
        GenerationReport, Injection, ModuleKind, PlaceholderMap, ScreenRequest, TemplateRef,
        naming,
    },
    error::StrataResult,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

const TEMPLATE_ROOT: &str = "presentationScreen";

/// `(base name, folder name)` for a screen name.
///
/// The base name drops a trailing `Screen` (any case); the folder is the
/// base name with a lower-case first letter.
pub fn screen_names(screen_name: &str) -> (String, String) {
    let base = naming::strip_suffix_ignore_case(screen_name, "Screen").to_string();
    let folder = if base.trim().is_empty() {
        naming::lower_first(screen_name)
    } else {
        naming::lower_first(&base)
    };
    (base, folder)
}

#[derive(Clone)]
pub struct ScreenService {
    fs: Arc<dyn Filesystem>,
    writer: IdempotentWriter,
    templates: TemplateService,
    wiring: DependencyWiring,
}

impl ScreenService {
    pub fn new(fs: Arc<dyn Filesystem>, templates: TemplateService) -> Self {
        Self {
            writer: IdempotentWriter::new(fs.clone()),
            wiring: DependencyWiring::new(fs.clone()),
            fs,
            templates,
        }
    }

    #[instrument(
        skip_all,
        fields(screen = %request.screen_name, module = %request.module_dir.display())
    )]
    pub fn generate(&self, request: &ScreenRequest) -> StrataResult<GenerationReport> {
        request.validate()?;
        let ctx = ModuleContext::resolve(self.fs.as_ref(), &request.project_root, &request.module_dir)?;
        let mut scope = MutationScope::begin(self.fs.clone(), "screen", &ctx.project_root);
        let mut report = GenerationReport::default();

        let module_dir = self.writer.ensure_directory(&ctx.module_dir)?;
        scope.record(&module_dir);
        let package = ctx.package(ModuleKind::Presentation.package_suffix());
        let package_dir = self
            .writer
            .ensure_directory(&module_dir.join(naming::package_dir(&package)))?;

        let is_presentation = ctx.is_kind(ModuleKind::Presentation);
        let (base, folder) = screen_names(&request.screen_name);
        let prefix = naming::upper_first(&if is_presentation {
            ctx.feature_name.clone()
        } else {
            ctx.module_name()
        });

        let placeholders = PlaceholderMap::new()
            .with("PACKAGE", &package)
            .with("FOLDER", &folder)
            .with("BASE_NAME", &base)
            .with("SCREEN_NAME", &request.screen_name);

        // ====================================================================
        // Screen files
        // ====================================================================
        if is_presentation {
            let screen_dir = self.writer.ensure_directory(&package_dir.join(&folder))?;

            self.emit(&mut report, &screen_dir, &format!("{}Screen.kt", base), "Screen", &placeholders)?;
            if request.pattern.has_intent() {
                self.emit(&mut report, &screen_dir, &format!("{}Intent.kt", base), "Intent", &placeholders)?;
            }

            let injection = Injection::from_selections(&request.use_cases, None);
            let view_model = format!(
                "ViewModel{}",
                request.di.template_suffix().unwrap_or("Plain")
            );
            self.emit(
                &mut report,
                &screen_dir,
                &format!("{}ViewModel.kt", base),
                &view_model,
                &placeholders
                    .clone()
                    .with("IMPORTS", injection.imports())
                    .with("CONSTRUCTOR_PARAMS", injection.parameters()),
            )?;
            self.emit(&mut report, &screen_dir, &format!("{}UiState.kt", base), "UiState", &placeholders)?;

            if request.screen_state_holder {
                self.emit(
                    &mut report,
                    &screen_dir,
                    &format!("{}StateHolder.kt", request.screen_name),
                    "ScreenStateHolder",
                    &placeholders,
                )?;
            }
        }

        // ====================================================================
        // Navigation
        // ====================================================================
        if request.add_navigation {
            let nav_dir = package_dir.join("navigation");
            let nav_host = format!("{}NavHost", prefix);
            self.emit(
                &mut report,
                &nav_dir,
                &format!("{}.kt", nav_host),
                "NavHost",
                &placeholders.clone().with("NAV_HOST_NAME", &nav_host),
            )?;
            self.emit(
                &mut report,
                &nav_dir.join("destinations"),
                &format!("{}Destination.kt", request.screen_name),
                "Destination",
                &placeholders
                    .clone()
                    .with("ROUTE", request.screen_name.to_lowercase()),
            )?;
        }

        if request.flow_state_holder {
            let flow = format!("{}FlowStateHolder", prefix);
            self.emit(
                &mut report,
                &package_dir,
                &format!("{}.kt", flow),
                "FlowStateHolder",
                &placeholders.clone().with("FLOW_NAME", &flow),
            )?;
        }

        // ====================================================================
        // Use cases from other features
        // ====================================================================
        if !request.use_case_modules.is_empty() {
            match self.wiring.find_build_script(&module_dir) {
                Some(script) => {
                    if self.wiring.add_missing_dependencies(
                        &script,
                        &ctx.feature_prefix(),
                        &request.use_case_modules,
                    )? {
                        report.files_written.push(script);
                    }
                }
                None => debug!(module = %module_dir.display(), "no build script, wiring skipped"),
            }
        }

        report.summary = format!(
            "Presentation screen '{}' generated under {}.",
            request.screen_name,
            naming::relative_dir(&ctx.project_root, &module_dir)
        );
        scope.record_all(report.files_written.iter().cloned());
        scope.commit()?;
        info!(summary = %report.summary, "screen generated");
        Ok(report)
    }

    fn emit(
        &self,
        report: &mut GenerationReport,
        dir: &Path,
        file: &str,
        template: &str,
        placeholders: &PlaceholderMap,
    ) -> StrataResult<()> {
        let wrote = self.writer.write_if_empty_with(dir, file, || {
            self.templates.render(
                &TemplateRef::kotlin(format!("{}/{}", TEMPLATE_ROOT, template)),
                placeholders,
            )
        })?;
        report.record_file(dir.join(file), wrote);
        Ok(())
    }
}
