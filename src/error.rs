//! Unified error types for themecheck.
//!
//! These cover failures that stop an operation outright. Problems found in
//! theme content are never errors; they are reported as
//! [`Issue`](crate::theme::Issue) values.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ThemeLoadError
// ---------------------------------------------------------------------------

/// Errors reading one theme file from disk.
///
/// The display text is surfaced verbatim as the theme's single diagnostic.
#[derive(Debug)]
pub enum ThemeLoadError {
    /// File could not be opened or read.
    Read(std::io::Error),
    /// File contents are not valid JSON.
    Json(serde_json::Error),
}

impl fmt::Display for ThemeLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "Failed to read file: {e}"),
            Self::Json(e) => write!(f, "Invalid JSON: {e}"),
        }
    }
}

impl std::error::Error for ThemeLoadError {}

impl From<std::io::Error> for ThemeLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Read(e)
    }
}

impl From<serde_json::Error> for ThemeLoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// PreviewError
// ---------------------------------------------------------------------------

/// Errors rendering or writing a preview image.
#[derive(Debug)]
pub enum PreviewError {
    /// The theme has no usable `dark` or `light` scheme.
    MissingScheme(&'static str),
    /// A scheme could not be converted into a complete color set.
    Scheme(serde_json::Error),
    /// Writing the preview file failed.
    Io(std::io::Error),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingScheme(mode) => write!(f, "missing {mode} scheme"),
            Self::Scheme(e) => write!(f, "incomplete color scheme: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for PreviewError {}

impl From<serde_json::Error> for PreviewError {
    fn from(e: serde_json::Error) -> Self {
        Self::Scheme(e)
    }
}

impl From<std::io::Error> for PreviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_load_error_messages_name_the_failure() {
        let io = ThemeLoadError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert_eq!(io.to_string(), "Failed to read file: gone");

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let parse = ThemeLoadError::from(json);
        assert!(parse.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn config_error_invalid_is_prefixed() {
        let err = ConfigError::Invalid("theme_file is empty".into());
        assert_eq!(err.to_string(), "invalid config: theme_file is empty");
    }
}
