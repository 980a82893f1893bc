//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use strata_core::domain::ModuleKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Clean-architecture feature modules for Gradle projects",
    long_about = "Strata generates layered feature modules (domain, data, di, \
                  presentation, data sources) in a Gradle project, keeps \
                  settings.gradle(.kts) in sync and wires cross-module dependencies.",
    after_help = "EXAMPLES:\n\
        \x20 strata feature catalog --all --org acme\n\
        \x20 strata screen ItemList --module features/catalog/presentation --navigation\n\
        \x20 strata repository Items --module features/catalog/data --di hilt\n\
        \x20 strata usecase GetItems --module features/catalog/domain --repository Items\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate or complete the modules of a feature.
    #[command(
        visible_alias = "f",
        about = "Generate feature modules",
        after_help = "EXAMPLES:\n\
            \x20 strata feature catalog\n\
            \x20 strata feature catalog --all --build-logic\n\
            \x20 strata feature payments --root-folder features/shared --remote-datasource --local-datasource\n\
            \x20 strata feature catalog --root-script data=gradle/data.gradle.kts"
    )]
    Feature(FeatureArgs),

    /// Generate a presentation screen.
    #[command(
        visible_alias = "s",
        about = "Generate a presentation screen",
        after_help = "EXAMPLES:\n\
            \x20 strata screen ItemList --module features/catalog/presentation\n\
            \x20 strata screen Checkout --module features/cart/presentation --pattern mvvm --di koin"
    )]
    Screen(ScreenArgs),

    /// Generate a repository interface and implementation.
    #[command(
        visible_alias = "r",
        about = "Generate a repository",
        after_help = "EXAMPLES:\n\
            \x20 strata repository Items --module features/catalog/data\n\
            \x20 strata repository Items --module features/catalog/data --di koin --koin-annotations"
    )]
    Repository(RepositoryArgs),

    /// Generate a use case.
    #[command(
        visible_alias = "u",
        about = "Generate a use case",
        after_help = "EXAMPLES:\n\
            \x20 strata usecase GetItems --module features/catalog/domain --repository Items\n\
            \x20 strata usecase Pay --module features/cart/domain \\\n\
            \x20     --repository com.acme.features.payments.domain.repository.Payments \\\n\
            \x20     --repository-module :features:payments:domain"
    )]
    Usecase(UseCaseArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 strata templates\n\
            \x20 strata templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Initialise a Strata configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 strata init           # default location\n\
            \x20 strata init --local   # .strata.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Strata configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get defaults.org\n\
            \x20 strata config list\n\
            \x20 strata config path"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Project root, shared by every generator.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Gradle project root (the directory holding settings.gradle(.kts)).
    #[arg(
        short = 'p',
        long = "project",
        value_name = "DIR",
        default_value = ".",
        help = "Gradle project root"
    )]
    pub project: PathBuf,
}

/// Dependency-injection options, shared by the artifact generators.
#[derive(Debug, Args)]
pub struct DiArgs {
    /// DI framework for generated classes. Defaults to `defaults.di`.
    #[arg(long = "di", value_enum, value_name = "PROVIDER", help = "DI framework")]
    pub di: Option<DiChoice>,

    /// Use Koin annotations instead of the Koin DSL.
    #[arg(long = "koin-annotations", help = "Use Koin annotations (with --di koin)")]
    pub koin_annotations: bool,
}

// ── feature ───────────────────────────────────────────────────────────────────

/// Arguments for `strata feature`.
#[derive(Debug, Args)]
pub struct FeatureArgs {
    /// Feature name, used as the directory name and package segment.
    #[arg(value_name = "NAME", help = "Feature name")]
    pub name: String,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Folder (relative to the project) that holds features.
    #[arg(long = "root-folder", value_name = "PATH", help = "Root folder for features")]
    pub root_folder: Option<String>,

    /// Organization package segment (`com.<org>...`).
    #[arg(long = "org", value_name = "SEGMENT", help = "Organization package segment")]
    pub org: Option<String>,

    /// Enable di, presentation and a combined data source.
    #[arg(short = 'a', long = "all", help = "Enable di, presentation and datasource")]
    pub all: bool,

    #[arg(long = "di", help = "Generate a di module")]
    pub di: bool,

    #[arg(long = "presentation", help = "Generate a presentation module")]
    pub presentation: bool,

    #[arg(long = "datasource", help = "Generate one combined dataSource module")]
    pub datasource: bool,

    #[arg(long = "remote-datasource", help = "Generate a remoteDataSource module")]
    pub remote_datasource: bool,

    #[arg(long = "local-datasource", help = "Generate a localDataSource module")]
    pub local_datasource: bool,

    /// Materialize the build-logic included build.
    #[arg(
        long = "build-logic",
        conflicts_with = "no_build_logic",
        help = "Generate build-logic convention plugins"
    )]
    pub build_logic: bool,

    /// Skip build-logic even when the config enables it.
    #[arg(long = "no-build-logic", help = "Do not generate build-logic")]
    pub no_build_logic: bool,

    /// Shared script applied at the top of a module's build script.
    #[arg(
        long = "root-script",
        value_name = "KIND=PATH",
        value_parser = parse_root_script,
        help = "Apply a shared script to one module kind (repeatable)"
    )]
    pub root_scripts: Vec<(ModuleKind, String)>,
}

/// Parse `KIND=PATH` for `--root-script`.
fn parse_root_script(raw: &str) -> Result<(ModuleKind, String), String> {
    let (kind, path) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=PATH, got '{}'", raw))?;
    let kind = kind.trim().parse::<ModuleKind>().map_err(|e| e.to_string())?;
    let path = path.trim();
    if path.is_empty() {
        return Err("script path must not be empty".into());
    }
    Ok((kind, path.to_string()))
}

// ── screen ────────────────────────────────────────────────────────────────────

/// Arguments for `strata screen`.
#[derive(Debug, Args)]
pub struct ScreenArgs {
    /// Screen name, e.g. `ItemList` or `ItemListScreen`.
    #[arg(value_name = "NAME", help = "Screen name")]
    pub name: String,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// The feature's presentation module directory.
    #[arg(short = 'm', long = "module", value_name = "DIR", help = "Presentation module directory")]
    pub module: PathBuf,

    #[arg(long = "navigation", help = "Generate a NavHost and a destination")]
    pub navigation: bool,

    #[arg(long = "flow-state-holder", help = "Generate a feature flow state holder")]
    pub flow_state_holder: bool,

    #[arg(long = "screen-state-holder", help = "Generate a screen state holder")]
    pub screen_state_holder: bool,

    /// Defaults to `defaults.pattern`.
    #[arg(long = "pattern", value_enum, value_name = "PATTERN", help = "Architecture pattern")]
    pub pattern: Option<Pattern>,

    #[command(flatten)]
    pub di: DiArgs,

    /// Use case injected into the ViewModel, simple or fully qualified.
    #[arg(long = "use-case", value_name = "NAME", help = "Use case to inject (repeatable)")]
    pub use_cases: Vec<String>,

    /// Gradle path of a module the injected use cases live in.
    #[arg(
        long = "use-case-module",
        value_name = "GRADLE_PATH",
        help = "Module to depend on, e.g. :features:profile:domain (repeatable)"
    )]
    pub use_case_modules: Vec<String>,
}

// ── repository ────────────────────────────────────────────────────────────────

/// Arguments for `strata repository`.
#[derive(Debug, Args)]
pub struct RepositoryArgs {
    /// Repository name; a trailing `Impl` is dropped.
    #[arg(value_name = "NAME", help = "Repository name")]
    pub name: String,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// The feature's data module directory.
    #[arg(short = 'm', long = "module", value_name = "DIR", help = "Data module directory")]
    pub module: PathBuf,

    #[command(flatten)]
    pub di: DiArgs,
}

// ── usecase ───────────────────────────────────────────────────────────────────

/// Arguments for `strata usecase`.
#[derive(Debug, Args)]
pub struct UseCaseArgs {
    #[arg(value_name = "NAME", help = "Use case name")]
    pub name: String,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// The feature's domain module directory.
    #[arg(short = 'm', long = "module", value_name = "DIR", help = "Domain module directory")]
    pub module: PathBuf,

    #[command(flatten)]
    pub di: DiArgs,

    /// Repository injected into the use case, simple or fully qualified.
    #[arg(long = "repository", value_name = "NAME", help = "Repository to inject (repeatable)")]
    pub repositories: Vec<String>,

    /// Gradle path of a module the injected repositories live in.
    #[arg(
        long = "repository-module",
        value_name = "GRADLE_PATH",
        help = "Module to depend on, e.g. :features:profile:data (repeatable)"
    )]
    pub repository_modules: Vec<String>,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `strata templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Grouped by generator, overrides marked.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.strata.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.org`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// DI framework choice, including "none".
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DiChoice {
    Hilt,
    Koin,
    None,
}

impl std::fmt::Display for DiChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hilt => write!(f, "hilt"),
            Self::Koin => write!(f, "koin"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Presentation architecture pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Pattern {
    Mvi,
    Mvvm,
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mvi => write!(f, "mvi"),
            Self::Mvvm => write!(f, "mvvm"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn di_choice_display() {
        assert_eq!(DiChoice::Hilt.to_string(), "hilt");
        assert_eq!(DiChoice::Koin.to_string(), "koin");
        assert_eq!(DiChoice::None.to_string(), "none");
    }

    #[test]
    fn parse_feature_command() {
        let cli = Cli::parse_from([
            "strata",
            "feature",
            "catalog",
            "--all",
            "--org",
            "acme",
            "--root-script",
            "data=scripts/data.gradle.kts",
        ]);
        let Commands::Feature(args) = cli.command else {
            panic!("expected Feature command");
        };
        assert!(args.all);
        assert_eq!(args.org.as_deref(), Some("acme"));
        assert_eq!(args.project.project, PathBuf::from("."));
        assert_eq!(
            args.root_scripts,
            vec![(ModuleKind::Data, "scripts/data.gradle.kts".to_string())]
        );
    }

    #[test]
    fn root_script_requires_known_kind() {
        assert!(parse_root_script("data=x.gradle.kts").is_ok());
        assert!(parse_root_script("remote-data-source=x").is_ok());
        assert!(parse_root_script("nope=x").is_err());
        assert!(parse_root_script("data=").is_err());
        assert!(parse_root_script("data").is_err());
    }

    #[test]
    fn screen_collects_repeated_use_cases() {
        let cli = Cli::parse_from([
            "strata",
            "screen",
            "ItemList",
            "-m",
            "features/catalog/presentation",
            "--use-case",
            "GetItems",
            "--use-case",
            "com.acme.Refresh",
            "--di",
            "koin",
            "--koin-annotations",
        ]);
        let Commands::Screen(args) = cli.command else {
            panic!("expected Screen command");
        };
        assert_eq!(args.use_cases, vec!["GetItems", "com.acme.Refresh"]);
        assert_eq!(args.di.di, Some(DiChoice::Koin));
        assert!(args.di.koin_annotations);
        assert_eq!(args.pattern, None);
    }

    #[test]
    fn module_is_required_for_artifacts() {
        assert!(Cli::try_parse_from(["strata", "repository", "Items"]).is_err());
        assert!(Cli::try_parse_from(["strata", "usecase", "GetItems"]).is_err());
    }

    #[test]
    fn build_logic_flags_conflict() {
        let result = Cli::try_parse_from([
            "strata",
            "feature",
            "x",
            "--build-logic",
            "--no-build-logic",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["strata", "--quiet", "--verbose", "templates"]);
        assert!(result.is_err());
    }
}
