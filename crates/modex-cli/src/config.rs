//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`MODEX_` prefix, `__` as the path separator)
//! 3. `--config FILE`, or the global file plus `.modex.toml` in the CWD
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Name of the per-project config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".modex.toml";

/// Application configuration.
///
/// Every struct carries `#[serde(default)]` so a hand-trimmed config file
/// with missing sections or keys still deserialises; absent values fall
/// back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Module generator settings.
    pub modules: ModuleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Package manager executable used for installs.
    pub package_manager: String,
    /// Editor command used by `modex new --open`.
    pub editor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Where module folders live, relative to the project root.
    pub root: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            package_manager: "npm".into(),
            editor: "code".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            root: "src/app/modules".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via `--config`.
    /// When given it must exist; when `None` the global file and a local
    /// `.modex.toml` are merged in if present.  `MODEX_`-prefixed environment
    /// variables override everything (e.g. `MODEX_DEFAULTS__EDITOR=vim`).
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("failed to seed default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.clone()).required(true));
            }
            None => {
                builder = builder
                    .add_source(File::from(Self::config_path()).required(false))
                    .add_source(File::from(PathBuf::from(LOCAL_CONFIG_FILE)).required(false));
            }
        }

        let merged = builder
            .add_source(Environment::with_prefix("MODEX").separator("__"))
            .build()
            .context("failed to read configuration")?;

        merged
            .try_deserialize()
            .context("configuration has an invalid shape")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.modex.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "modex", "modex")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}
