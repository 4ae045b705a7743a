//! Default configuration constants.

/// Directory scanned for theme folders, relative to the working directory.
pub(super) const DEFAULT_THEMES_DIR: &str = "themes";
/// Theme definition file expected inside each theme folder.
pub(super) const DEFAULT_THEME_FILE: &str = "theme.json";
/// Preview image written beside each theme file.
pub(super) const DEFAULT_PREVIEW_FILE: &str = "preview.svg";
/// Local config file name, also used under the global config root.
pub(super) const CONFIG_FILE_NAME: &str = "themecheck.toml";
/// Subdirectory of the global config root holding [`CONFIG_FILE_NAME`].
pub(super) const CONFIG_DIR_NAME: &str = "themecheck";
