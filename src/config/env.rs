//! Environment overrides.
//!
//! `THEMECHECK_*` variables override file values; `NO_COLOR` (any non-empty
//! value) disables colored output.

use std::path::PathBuf;

use super::Config;

pub(super) const ENV_THEMES_DIR: &str = "THEMECHECK_THEMES_DIR";
pub(super) const ENV_THEME_FILE: &str = "THEMECHECK_THEME_FILE";
pub(super) const ENV_PREVIEW_FILE: &str = "THEMECHECK_PREVIEW_FILE";
pub(super) const ENV_NO_COLOR: &str = "NO_COLOR";

pub(super) fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(dir) = non_empty_env(env_lookup, ENV_THEMES_DIR) {
        config.themes.dir = PathBuf::from(dir);
    }
    if let Some(file) = non_empty_env(env_lookup, ENV_THEME_FILE) {
        config.themes.theme_file = file;
    }
    if let Some(file) = non_empty_env(env_lookup, ENV_PREVIEW_FILE) {
        config.themes.preview_file = file;
    }
    if non_empty_env(env_lookup, ENV_NO_COLOR).is_some() {
        config.display.color = false;
    }
}

/// Look up `name`, treating blank values as unset.
fn non_empty_env<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
