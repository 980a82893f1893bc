//! Use-case generator.

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::{
            DependencyWiring, ModuleContext, MutationScope, TemplateService,
            writer::IdempotentWriter,
        },
    },
    domain::{
        GenerationReport, Injection, ModuleKind, PlaceholderMap, TemplateRef, UseCaseRequest,
        naming,
    },
    error::StrataResult,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Content written in place of a use case when DI is disabled.
pub const UNAVAILABLE_MARKER: &str = "// TODO: not yet available";

#[derive(Clone)]
pub struct UseCaseService {
    fs: Arc<dyn Filesystem>,
    writer: IdempotentWriter,
    templates: TemplateService,
    wiring: DependencyWiring,
}

impl UseCaseService {
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
        fields(use_case = %request.use_case_name, module = %request.domain_module_dir.display())
    )]
    pub fn generate(&self, request: &UseCaseRequest) -> StrataResult<GenerationReport> {
        request.validate()?;
        let ctx = ModuleContext::resolve(
            self.fs.as_ref(),
            &request.project_root,
            &request.domain_module_dir,
        )?;
        if !ctx.is_kind(ModuleKind::Domain) {
            return Err(ApplicationError::WrongModuleDirectory {
                expected: "domain",
                path: ctx.module_dir.clone(),
            }
            .into());
        }

        let mut scope = MutationScope::begin(self.fs.clone(), "use case", &ctx.project_root);
        let mut report = GenerationReport::default();

        let name = naming::upper_first(request.use_case_name.trim());
        let domain_package = ctx.package(ModuleKind::Domain.package_suffix());
        let package = format!("{}.usecase", domain_package);
        let injection = Injection::from_selections(
            &request.repositories,
            Some(&format!("{}.repository", domain_package)),
        );

        let module_dir = self.writer.ensure_directory(&ctx.module_dir)?;
        scope.record(&module_dir);
        let dir = module_dir.join(naming::package_dir(&package));
        let file = format!("{}.kt", name);
        let wrote = self.writer.write_if_empty_with(&dir, &file, || {
            match request.di.template_suffix() {
                Some(variant) => self.templates.render(
                    &TemplateRef::kotlin(format!("usecaseGenerator/UseCase{}", variant)),
                    &PlaceholderMap::new()
                        .with("PACKAGE", &package)
                        .with("USECASE_NAME", &name)
                        .with("IMPORTS", injection.imports())
                        .with("CONSTRUCTOR_PARAMS", injection.parameters()),
                ),
                None => Ok(UNAVAILABLE_MARKER.to_string()),
            }
        })?;
        report.record_file(dir.join(file), wrote);

        // Repositories from other features
        if !request.repository_modules.is_empty() {
            match self.wiring.find_build_script(&module_dir) {
                Some(script) => {
                    if self.wiring.add_missing_dependencies(
                        &script,
                        &ctx.feature_prefix(),
                        &request.repository_modules,
                    )? {
                        report.files_written.push(script);
                    }
                }
                None => debug!(module = %module_dir.display(), "no build script, wiring skipped"),
            }
        }

        report.summary = format!("Use case '{}' generated in domain module.", name);
        scope.record_all(report.files_written.iter().cloned());
        scope.commit()?;
        info!(summary = %report.summary, "use case generated");
        Ok(report)
    }
}
