//! `strata init`: create a default configuration file.

use std::path::{Path, PathBuf};

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Outcome of writing the config file.
#[derive(Debug, PartialEq, Eq)]
enum InitOutcome {
    Created,
    AlreadyExists,
}

/// Create a default Strata configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    match write_default(&config_path, args.force)? {
        InitOutcome::Created => output.success(&format!(
            "Configuration created at {}",
            config_path.display(),
        ))?,
        InitOutcome::AlreadyExists => output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display(),
        ))?,
    }

    Ok(())
}

fn write_default(config_path: &Path, force: bool) -> CliResult<InitOutcome> {
    if config_path.exists() && !force {
        return Ok(InitOutcome::AlreadyExists);
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(config_path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", config_path.display()),
        source: e,
    })?;

    Ok(InitOutcome::Created)
}
