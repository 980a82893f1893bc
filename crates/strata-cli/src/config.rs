//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRATA_<SECTION>__<KEY>`, e.g.
//!    `STRATA_DEFAULTS__ORG=acme` (a `.env` file is loaded first)
//! 3. Config file: `--config <FILE>`, otherwise the platform config file
//!    followed by `./.strata.toml`
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use strata_core::domain::{ArchitecturePattern, DiOptions, DiProvider};
use tracing::debug;

use crate::cli::DiChoice;

/// File name of a project-local configuration.
pub const LOCAL_CONFIG_FILE: &str = ".strata.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for generators.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Organization package segment.
    pub org: String,
    /// Folder that holds features, relative to the project root.
    pub root_folder: String,
    /// `hilt`, `koin` or `none`.
    pub di: String,
    pub koin_annotations: bool,
    /// `mvi` or `mvvm`.
    pub pattern: String,
    pub build_logic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory whose templates take precedence over the built-in ones.
    pub dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                org: strata_core::domain::naming::DEFAULT_ORG_SEGMENT.into(),
                root_folder: "features".into(),
                di: "hilt".into(),
                koin_annotations: false,
                pattern: "mvi".into(),
                build_logic: false,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            templates: TemplateConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration file");
                builder = builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                for path in [Self::config_path(), PathBuf::from(LOCAL_CONFIG_FILE)] {
                    builder = builder.add_source(
                        File::from(path.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("STRATA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Template override directory, if configured and non-empty.
    pub fn template_dir(&self) -> Option<&Path> {
        self.templates
            .dir
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    /// DI options from an optional CLI choice, falling back to `defaults.di`.
    pub fn di_options(&self, choice: Option<DiChoice>, koin_annotations: bool) -> anyhow::Result<DiOptions> {
        let annotations = koin_annotations || self.defaults.koin_annotations;
        let provider = match choice {
            Some(DiChoice::None) => return Ok(DiOptions::disabled()),
            Some(DiChoice::Hilt) => DiProvider::Hilt,
            Some(DiChoice::Koin) => DiProvider::Koin,
            None if self.defaults.di.trim().eq_ignore_ascii_case("none") => {
                return Ok(DiOptions::disabled());
            }
            None => self
                .defaults
                .di
                .trim()
                .parse::<DiProvider>()
                .context("Invalid defaults.di")?,
        };
        Ok(match provider {
            DiProvider::Hilt => DiOptions::hilt(),
            DiProvider::Koin => DiOptions::koin(annotations),
        })
    }

    /// Pattern from an optional CLI value, falling back to `defaults.pattern`.
    pub fn pattern(&self, choice: Option<crate::cli::Pattern>) -> anyhow::Result<ArchitecturePattern> {
        match choice {
            Some(crate::cli::Pattern::Mvi) => Ok(ArchitecturePattern::Mvi),
            Some(crate::cli::Pattern::Mvvm) => Ok(ArchitecturePattern::Mvvm),
            None => self
                .defaults
                .pattern
                .trim()
                .parse()
                .context("Invalid defaults.pattern"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Pattern;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_org_is_example() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.org, "example");
        assert_eq!(cfg.defaults.root_folder, "features");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("strata.toml");
        fs::write(
            &path,
            "[defaults]\norg = \"acme\"\nbuild_logic = true\n\n[templates]\ndir = \"/tmp/tpl\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.org, "acme");
        assert!(cfg.defaults.build_logic);
        assert_eq!(cfg.defaults.root_folder, "features");
        assert_eq!(cfg.template_dir(), Some(Path::new("/tmp/tpl")));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/strata.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn di_falls_back_to_defaults() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.di_options(None, false).unwrap(), DiOptions::hilt());
        assert_eq!(
            cfg.di_options(Some(DiChoice::Koin), true).unwrap(),
            DiOptions::koin(true)
        );
        assert_eq!(
            cfg.di_options(Some(DiChoice::None), false).unwrap(),
            DiOptions::disabled()
        );

        cfg.defaults.di = "none".into();
        assert_eq!(cfg.di_options(None, false).unwrap(), DiOptions::disabled());
        cfg.defaults.di = "spring".into();
        assert!(cfg.di_options(None, false).is_err());
    }

    #[test]
    fn pattern_falls_back_to_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.pattern(None).unwrap(), ArchitecturePattern::Mvi);
        assert_eq!(cfg.pattern(Some(Pattern::Mvvm)).unwrap(), ArchitecturePattern::Mvvm);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
