//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::apply_env_overrides;
use super::sources::{config_root_dir, read_config_text_with_sources};
use super::{Config, LoadedConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_source(path_override)?.config)
}

/// Load configuration and report which source supplied it.
pub fn load_config_with_source(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&config_text)?;
    apply_env_overrides(&mut config, &env_lookup);
    validate_config(&config)?;
    tracing::debug!(?source, themes_dir = %config.themes.dir.display(), "loaded config");
    Ok(LoadedConfig { config, source })
}

/// Reject file names that cannot name a single file inside a theme folder.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    for (key, value) in [
        ("themes.theme_file", &config.themes.theme_file),
        ("themes.preview_file", &config.themes.preview_file),
    ] {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid(format!("`{key}` must not be empty")));
        }
        if trimmed.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "`{key}` must be a plain file name, got `{value}`"
            )));
        }
    }
    if config.themes.theme_file == config.themes.preview_file {
        return Err(ConfigError::Invalid(
            "`themes.preview_file` must differ from `themes.theme_file`".to_string(),
        ));
    }
    Ok(())
}
