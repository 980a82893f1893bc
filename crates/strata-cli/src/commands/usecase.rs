//! `strata usecase`: generate a use case in a domain module.

use strata_core::{application::UseCaseService, domain::UseCaseRequest};
use tracing::instrument;

use crate::{
    cli::UseCaseArgs,
    commands::{Engine, module_dir},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(use_case = %args.name))]
pub fn execute(args: UseCaseArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = args.project.project;
    let domain_module = module_dir(&project, &args.module)?;

    let mut request = UseCaseRequest::new(&project, domain_module, args.name);
    request.di = config
        .di_options(args.di.di, args.di.koin_annotations)
        .map_err(CliError::config)?;
    request.repositories = args.repositories;
    request.repository_modules = args.repository_modules.into_iter().collect();

    let engine = Engine::from_config(&config);
    let report = UseCaseService::new(engine.fs, engine.templates).generate(&request)?;

    output.report(&report, &project)?;
    Ok(())
}
