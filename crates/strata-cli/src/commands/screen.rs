//! `strata screen`: generate a presentation screen.

use strata_core::{application::ScreenService, domain::ScreenRequest};
use tracing::instrument;

use crate::{
    cli::ScreenArgs,
    commands::{Engine, module_dir},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(screen = %args.name))]
pub fn execute(args: ScreenArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(args, &config)?;

    let engine = Engine::from_config(&config);
    let report = ScreenService::new(engine.fs, engine.templates).generate(&request)?;

    output.report(&report, &request.project_root)?;
    Ok(())
}

fn build_request(args: ScreenArgs, config: &AppConfig) -> CliResult<ScreenRequest> {
    let project = args.project.project;
    let module = module_dir(&project, &args.module)?;
    let mut request = ScreenRequest::new(&project, module, args.name);

    request.add_navigation = args.navigation;
    request.flow_state_holder = args.flow_state_holder;
    request.screen_state_holder = args.screen_state_holder;
    request.pattern = config.pattern(args.pattern).map_err(CliError::config)?;
    request.di = config
        .di_options(args.di.di, args.di.koin_annotations)
        .map_err(CliError::config)?;
    request.use_cases = args.use_cases;
    request.use_case_modules = args.use_case_modules.into_iter().collect();
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use strata_core::domain::{ArchitecturePattern, DiOptions};
    use tempfile::TempDir;

    fn screen_args(project: &std::path::Path, extra: &[&str]) -> ScreenArgs {
        let project = project.to_string_lossy().into_owned();
        let mut argv = vec![
            "strata",
            "screen",
            "ItemList",
            "--project",
            project.as_str(),
            "--module",
            "features/catalog/presentation",
        ];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Screen(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("features/catalog/presentation")).unwrap();

        let mut config = AppConfig::default();
        config.defaults.pattern = "mvvm".into();
        config.defaults.di = "koin".into();

        let request = build_request(screen_args(tmp.path(), &[]), &config).unwrap();
        assert_eq!(request.pattern, ArchitecturePattern::Mvvm);
        assert_eq!(request.di, DiOptions::koin(false));
        assert_eq!(request.module_dir, tmp.path().join("features/catalog/presentation"));
    }

    #[test]
    fn use_case_modules_are_deduplicated() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("features/catalog/presentation")).unwrap();

        let args = screen_args(
            tmp.path(),
            &[
                "--use-case-module",
                ":features:catalog:domain",
                "--use-case-module",
                ":features:catalog:domain",
                "--di",
                "none",
            ],
        );
        let request = build_request(args, &AppConfig::default()).unwrap();
        assert_eq!(request.use_case_modules.len(), 1);
        assert_eq!(request.di, DiOptions::disabled());
    }

    #[test]
    fn bad_pattern_in_config_is_configuration_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("features/catalog/presentation")).unwrap();

        let mut config = AppConfig::default();
        config.defaults.pattern = "viper".into();
        let err = build_request(screen_args(tmp.path(), &[]), &config).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
