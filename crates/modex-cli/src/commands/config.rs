//! `modex config` — read and write configuration values.

use std::path::PathBuf;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            // Edit the file itself, not the merged in-memory view, so env and
            // local overrides are never baked into the global config.
            let path = global.config.clone().unwrap_or_else(AppConfig::config_path);
            let mut on_disk = read_config_file(&path)?;
            set_config_value(&mut on_disk, &key, &value)?;
            write_config_file(&path, &on_disk)?;
            output.success(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.package_manager" => Ok(config.defaults.package_manager.clone()),
        "defaults.editor" => Ok(config.defaults.editor.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "modules.root" => Ok(config.modules.root.clone()),
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "defaults.package_manager" => config.defaults.package_manager = value.into(),
        "defaults.editor" => config.defaults.editor = value.into(),
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::InvalidInput {
                message: format!("'{value}' is not a boolean (use true or false)"),
                source: None,
            })?;
        }
        "output.format" => config.output.format = value.into(),
        "modules.root" => config.modules.root = value.into(),
        _ => return Err(CliError::UnknownConfigKey { key: key.into() }),
    }
    Ok(())
}

/// Parse the config file at `path`, falling back to defaults if it does not
/// exist yet.  Missing sections are filled from defaults via serde.
fn read_config_file(path: &PathBuf) -> CliResult<AppConfig> {
    match std::fs::read_to_string(path) {
        Ok(text) => toml::from_str(&text).map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(CliError::IoError {
            message: format!("Failed to read '{}'", path.display()),
            source: e,
        }),
    }
}

fn write_config_file(path: &PathBuf, config: &AppConfig) -> CliResult<()> {
    let serialised = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, &serialised).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "defaults.package_manager").unwrap(),
            "npm"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "defaults.editor", "vim").unwrap();
        assert_eq!(get_config_value(&cfg, "defaults.editor").unwrap(), "vim");
    }

    #[test]
    fn set_boolean_key_parses() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "output.no_color", "true").unwrap();
        assert!(cfg.output.no_color);
    }

    #[test]
    fn set_rejects_a_non_boolean() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            set_config_value(&mut cfg, "output.no_color", "maybe"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn set_unknown_key_is_error() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            set_config_value(&mut cfg, "defaults.shell", "zsh"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn read_missing_file_falls_back_to_defaults() {
        let path = PathBuf::from("/nonexistent/dir/config.toml");
        let cfg = read_config_file(&path).unwrap();
        assert_eq!(cfg.defaults.package_manager, "npm");
    }

    #[test]
    fn write_then_read_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "modules.root", "lib/modules").unwrap();
        write_config_file(&path, &cfg).unwrap();

        let back = read_config_file(&path).unwrap();
        assert_eq!(back.modules.root, "lib/modules");
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\neditor = \"hx\"\n").unwrap();

        let cfg = read_config_file(&path).unwrap();
        assert_eq!(cfg.defaults.editor, "hx");
        // Everything absent from the file keeps its default.
        assert_eq!(cfg.defaults.package_manager, "npm");
        assert_eq!(cfg.modules.root, "src/app/modules");
    }
}
