//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. CLI flags (`--themes-dir`, `--no-color`), applied by the binary
//! 2. Environment variables (`THEMECHECK_THEMES_DIR`, `THEMECHECK_THEME_FILE`,
//!    `THEMECHECK_PREVIEW_FILE`, `NO_COLOR`)
//! 3. TOML file specified via --config CLI flag
//! 4. ./themecheck.toml in the current directory
//! 5. $XDG_CONFIG_HOME/themecheck/themecheck.toml (or
//!    ~/.config/themecheck/themecheck.toml)
//! 6. Built-in defaults
//!
//! ```toml
//! [themes]
//! dir = "themes"
//! theme_file = "theme.json"
//! preview_file = "preview.svg"
//!
//! [display]
//! color = true
//! ```

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use loader::{load_config, load_config_with_source, validate_config};
pub use sources::config_root_dir;
pub use types::{Config, ConfigSource, DisplayConfig, LoadedConfig, ThemesConfig};
