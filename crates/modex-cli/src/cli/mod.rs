//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modex",
    bin_name = "modex",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Express + TypeScript project and module scaffolding",
    long_about = "Modex bootstraps Express + TypeScript + Mongoose services and \
                  generates the per-resource module files they are built from.",
    after_help = "EXAMPLES:\n\
        \x20 modex new shop-api --description 'Inventory service'\n\
        \x20 modex new blog --dir ~/work --skip-install\n\
        \x20 modex generate academicSemester\n\
        \x20 modex completions bash > /usr/share/bash-completion/completions/modex",
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
    /// Create a new Express + TypeScript project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 modex new shop-api\n\
            \x20 modex new blog --description 'Blog backend' --dir ~/work\n\
            \x20 modex new scratch --skip-install --open"
    )]
    New(NewArgs),

    /// Generate a resource module inside an existing project.
    #[command(
        visible_alias = "g",
        about = "Generate a resource module",
        after_help = "EXAMPLES:\n\
            \x20 modex generate academicSemester\n\
            \x20 modex generate user-profile --project ./shop-api\n\
            \x20 modex generate order --dry-run"
    )]
    Generate(GenerateArgs),

    /// Initialise a Modex configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 modex init           # global config\n\
            \x20 modex init --local   # .modex.toml in CWD\n\
            \x20 modex init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modex completions bash > ~/.local/share/bash-completion/completions/modex\n\
            \x20 modex completions zsh  > ~/.zfunc/_modex\n\
            \x20 modex completions fish > ~/.config/fish/completions/modex.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Modex configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modex config get defaults.package_manager\n\
            \x20 modex config set defaults.editor code\n\
            \x20 modex config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `modex new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name.  Prompted for when omitted (interactive builds only).
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Short description stored in the generated package.json.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    /// Parent directory the project folder is created under.
    #[arg(
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory for the new project"
    )]
    pub dir: PathBuf,

    /// Write the project tree without running any installs.
    #[arg(long = "skip-install", help = "Skip dependency installation")]
    pub skip_install: bool,

    /// Package manager executable used for installs.
    #[arg(
        long = "package-manager",
        value_name = "PROGRAM",
        help = "Package manager executable (default from config)"
    )]
    pub package_manager: Option<String>,

    /// Open the project in the configured editor afterwards.
    #[arg(long = "open", help = "Open the project in your editor when done")]
    pub open: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `modex generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Module name in any casing.  Prompted for when omitted (interactive
    /// builds only).
    #[arg(value_name = "NAME", help = "Module name in any casing")]
    pub name: Option<String>,

    /// Project the module is generated into.
    #[arg(
        long = "project",
        value_name = "DIR",
        default_value = ".",
        help = "Project root (default: current directory)"
    )]
    pub project: PathBuf,

    /// Where module folders live, relative to the project root.
    #[arg(
        long = "root",
        value_name = "PATH",
        help = "Module directory relative to the project root (default from config)"
    )]
    pub root: Option<String>,

    /// List the files that would be written without writing them.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `modex init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.modex.toml` in the current directory instead of the global
    /// config location.
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

/// Arguments for `modex completions`.
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

/// Subcommands for `modex config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.package_manager`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "modex",
            "new",
            "shop-api",
            "--description",
            "Inventory service",
            "--skip-install",
        ]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name.as_deref(), Some("shop-api"));
                assert_eq!(args.description.as_deref(), Some("Inventory service"));
                assert!(args.skip_install);
                assert_eq!(args.dir, PathBuf::from("."));
            }
            other => panic!("expected New, got {other:?}"),
        }
    }

    #[test]
    fn new_name_is_optional() {
        let cli = Cli::parse_from(["modex", "new"]);
        match cli.command {
            Commands::New(args) => assert!(args.name.is_none()),
            other => panic!("expected New, got {other:?}"),
        }
    }

    #[test]
    fn new_has_short_alias() {
        let cli = Cli::parse_from(["modex", "n", "blog"]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from(["modex", "generate", "academicSemester"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.name.as_deref(), Some("academicSemester"));
                assert_eq!(args.project, PathBuf::from("."));
                assert!(args.root.is_none());
                assert!(!args.dry_run);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn generate_has_short_alias() {
        let cli = Cli::parse_from(["modex", "g", "order"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn parse_config_get() {
        let cli = Cli::parse_from(["modex", "config", "get", "defaults.editor"]);
        match cli.command {
            Commands::Config(ConfigCommands::Get { key }) => {
                assert_eq!(key, "defaults.editor");
            }
            other => panic!("expected Config Get, got {other:?}"),
        }
    }

    #[test]
    fn parse_completions_shell() {
        let cli = Cli::parse_from(["modex", "completions", "zsh"]);
        match cli.command {
            Commands::Completions(args) => assert!(matches!(args.shell, Shell::Zsh)),
            other => panic!("expected Completions, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["modex", "--quiet", "--verbose", "new", "x"]);
        assert!(result.is_err());
    }
}
