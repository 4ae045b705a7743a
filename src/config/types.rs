//! Configuration data model.
//!
//! This module holds struct definitions plus default values. Loader and
//! source-resolution logic lives in sibling modules so precedence behavior
//! stays in one place.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{DEFAULT_PREVIEW_FILE, DEFAULT_THEMES_DIR, DEFAULT_THEME_FILE};

/// Top-level runtime configuration, mirroring the `themecheck.toml` layout.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub themes: ThemesConfig,
    pub display: DisplayConfig,
}

/// Where themes live and which files are read or written per theme.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemesConfig {
    /// Directory holding one subfolder per theme.
    pub dir: PathBuf,
    /// Theme definition file name inside each folder.
    pub theme_file: String,
    /// Preview image file name written inside each folder.
    pub preview_file: String,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_THEMES_DIR),
            theme_file: DEFAULT_THEME_FILE.to_string(),
            preview_file: DEFAULT_PREVIEW_FILE.to_string(),
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Where the loaded configuration text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from local `./themecheck.toml`.
    Local,
    /// Config loaded from the global config root.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

/// Resolved configuration plus its source, for diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
