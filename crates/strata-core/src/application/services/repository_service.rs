//! Repository generator: domain interface, data implementation and an
//! optional DI binding module.

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::{ModuleContext, MutationScope, TemplateService, writer::IdempotentWriter},
    },
    domain::{
        GenerationReport, ModuleKind, PlaceholderMap, RepositoryRequest, TemplateRef,
        naming,
    },
    error::StrataResult,
};
use std::sync::Arc;
use tracing::{info, instrument};

const TEMPLATE_ROOT: &str = "repositoryGenerator";

/// `(interface, implementation)` class names for a requested repository name.
///
/// The first letter is upper-cased and a trailing `Impl` is dropped from the
/// interface name.
pub fn repository_names(requested: &str) -> (String, String) {
    let titled = naming::upper_first(requested.trim());
    let interface = titled.strip_suffix("Impl").unwrap_or(&titled).to_string();
    let implementation = format!("{}Impl", interface);
    (interface, implementation)
}

#[derive(Clone)]
pub struct RepositoryService {
    fs: Arc<dyn Filesystem>,
    writer: IdempotentWriter,
    templates: TemplateService,
}

impl RepositoryService {
    pub fn new(fs: Arc<dyn Filesystem>, templates: TemplateService) -> Self {
        Self {
            writer: IdempotentWriter::new(fs.clone()),
            fs,
            templates,
        }
    }

    #[instrument(
        skip_all,
        fields(repository = %request.repository_name, module = %request.data_module_dir.display())
    )]
    pub fn generate(&self, request: &RepositoryRequest) -> StrataResult<GenerationReport> {
        request.validate()?;
        let ctx = ModuleContext::resolve(
            self.fs.as_ref(),
            &request.project_root,
            &request.data_module_dir,
        )?;
        if !ctx.is_kind(ModuleKind::Data) {
            return Err(ApplicationError::WrongModuleDirectory {
                expected: "data",
                path: ctx.module_dir.clone(),
            }
            .into());
        }

        let mut scope = MutationScope::begin(self.fs.clone(), "repository", &ctx.project_root);
        let mut report = GenerationReport::default();

        let (interface, implementation) = repository_names(&request.repository_name);
        let domain_package = ctx.package(ModuleKind::Domain.package_suffix());
        let data_package = ctx.package(ModuleKind::Data.package_suffix());

        let placeholders = PlaceholderMap::new()
            .with("DOMAIN_PACKAGE", &domain_package)
            .with("DATA_PACKAGE", &data_package)
            .with("REPOSITORY_NAME", &interface)
            .with("REPOSITORY_IMPL_NAME", &implementation);

        // Domain interface
        let domain_module = self.writer.ensure_directory(&ctx.sibling(ModuleKind::Domain))?;
        scope.record(&domain_module);
        let domain_dir = domain_module
            .join(naming::package_dir(&domain_package))
            .join("repository");
        let file = format!("{}.kt", interface);
        let wrote = self.writer.write_if_empty_with(&domain_dir, &file, || {
            self.templates.render(
                &TemplateRef::kotlin(format!("{}/Repository", TEMPLATE_ROOT)),
                &placeholders.clone().with("PACKAGE", &domain_package),
            )
        })?;
        report.record_file(domain_dir.join(file), wrote);

        // Data implementation
        let data_dir = self
            .writer
            .ensure_directory(&ctx.module_dir)?
            .join(naming::package_dir(&data_package))
            .join("repository");
        scope.record(&ctx.module_dir);
        let file = format!("{}.kt", implementation);
        let wrote = self.writer.write_if_empty_with(&data_dir, &file, || {
            self.templates.render(
                &TemplateRef::kotlin(format!("{}/RepositoryImpl", TEMPLATE_ROOT)),
                &placeholders.clone().with("PACKAGE", &data_package),
            )
        })?;
        report.record_file(data_dir.join(file), wrote);

        // DI binding module
        let mut di_note = String::new();
        if let Some(variant) = request.di.template_suffix() {
            let di_package = ctx.package(ModuleKind::Di.package_suffix());
            let di_module = self.writer.ensure_directory(&ctx.sibling(ModuleKind::Di))?;
            scope.record(&di_module);
            let di_dir = di_module
                .join(naming::package_dir(&di_package))
                .join("repository");
            let wrote = self
                .writer
                .write_if_empty_with(&di_dir, "RepositoryModule.kt", || {
                    self.templates.render(
                        &TemplateRef::kotlin(format!("{}/RepositoryModule{}", TEMPLATE_ROOT, variant)),
                        &placeholders.clone().with("PACKAGE", &di_package),
                    )
                })?;
            report.record_file(di_dir.join("RepositoryModule.kt"), wrote);
            di_note = format!(" {} module created.", request.di.provider_label());
        }

        report.summary = format!(
            "Repository '{}' generated in domain and data modules.{}",
            interface, di_note
        );
        scope.record_all(report.files_written.iter().cloned());
        scope.commit()?;
        info!(summary = %report.summary, "repository generated");
        Ok(report)
    }
}
