//! `strata repository`: generate a repository interface and implementation.

use strata_core::{application::RepositoryService, domain::RepositoryRequest};
use tracing::instrument;

use crate::{
    cli::RepositoryArgs,
    commands::{Engine, module_dir},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(repository = %args.name))]
pub fn execute(args: RepositoryArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = args.project.project;
    let data_module = module_dir(&project, &args.module)?;

    let mut request = RepositoryRequest::new(&project, data_module, args.name);
    request.di = config
        .di_options(args.di.di, args.di.koin_annotations)
        .map_err(CliError::config)?;

    let engine = Engine::from_config(&config);
    let report = RepositoryService::new(engine.fs, engine.templates).generate(&request)?;

    output.report(&report, &project)?;
    Ok(())
}
