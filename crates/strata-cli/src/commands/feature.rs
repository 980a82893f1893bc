//! `strata feature`: generate or complete a feature's modules.

use strata_core::{
    application::FeatureService,
    domain::{FeatureRequest, ModuleFlags},
};
use tracing::{debug, instrument};

use crate::{
    cli::FeatureArgs,
    commands::Engine,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(feature = %args.name))]
pub fn execute(args: FeatureArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args, &config);
    debug!(flags = ?request.flags, build_logic = request.include_build_logic, "feature request");

    let engine = Engine::from_config(&config);
    let report = FeatureService::new(engine.fs, engine.templates).generate(&request)?;

    output.report(&report, &request.project_root)?;
    Ok(())
}

fn build_request(args: &FeatureArgs, config: &AppConfig) -> FeatureRequest {
    let flags = if args.all {
        ModuleFlags {
            datasource_remote: args.remote_datasource,
            datasource_local: args.local_datasource,
            ..ModuleFlags::all()
        }
    } else {
        ModuleFlags {
            di: args.di,
            presentation: args.presentation,
            datasource_combined: args.datasource,
            datasource_remote: args.remote_datasource,
            datasource_local: args.local_datasource,
        }
    };

    let build_logic = if args.no_build_logic {
        false
    } else {
        args.build_logic || config.defaults.build_logic
    };

    let root_folder = args
        .root_folder
        .clone()
        .unwrap_or_else(|| config.defaults.root_folder.clone());
    let org = args
        .org
        .clone()
        .unwrap_or_else(|| config.defaults.org.clone());

    args.root_scripts.iter().fold(
        FeatureRequest::new(&args.project.project, root_folder, &args.name)
            .with_org(org)
            .with_flags(flags)
            .with_build_logic(build_logic),
        |request, (kind, path)| request.with_root_script(*kind, path),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use strata_core::domain::ModuleKind;

    fn feature_args(argv: &[&str]) -> FeatureArgs {
        let mut full = vec!["strata", "feature"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Feature(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_supplies_org_and_root_folder() {
        let mut config = AppConfig::default();
        config.defaults.org = "acme".into();
        config.defaults.root_folder = "modules".into();

        let request = build_request(&feature_args(&["catalog"]), &config);
        assert_eq!(request.org_segment, "acme");
        assert_eq!(request.root_folder, "modules");
        assert_eq!(request.flags, ModuleFlags::default());
    }

    #[test]
    fn flags_override_config() {
        let request = build_request(
            &feature_args(&["catalog", "--org", "shop", "--root-folder", "features/shared"]),
            &AppConfig::default(),
        );
        assert_eq!(request.org_segment, "shop");
        assert_eq!(request.root_folder, "features/shared");
    }

    #[test]
    fn all_keeps_split_datasources() {
        let request = build_request(
            &feature_args(&["catalog", "--all", "--remote-datasource"]),
            &AppConfig::default(),
        );
        assert!(request.flags.di && request.flags.presentation);
        assert!(request.flags.datasource_remote);
        assert!(!request.flags.datasource_local);
    }

    #[test]
    fn build_logic_follows_config_unless_disabled() {
        let mut config = AppConfig::default();
        config.defaults.build_logic = true;

        assert!(build_request(&feature_args(&["x"]), &config).include_build_logic);
        assert!(!build_request(&feature_args(&["x", "--no-build-logic"]), &config).include_build_logic);
        assert!(
            build_request(&feature_args(&["x", "--build-logic"]), &AppConfig::default())
                .include_build_logic
        );
    }

    #[test]
    fn root_scripts_are_keyed_by_kind() {
        let request = build_request(
            &feature_args(&["x", "--root-script", "domain=scripts/domain.gradle.kts"]),
            &AppConfig::default(),
        );
        assert_eq!(
            request.root_scripts.get(&ModuleKind::Domain).map(String::as_str),
            Some("scripts/domain.gradle.kts")
        );
    }
}
