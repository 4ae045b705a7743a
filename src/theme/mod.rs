//! Theme schema validation.
//!
//! A theme is a JSON object with metadata, a `dark` and a `light` base color
//! scheme, and optional `variants` that derive further schemes through
//! sparse overrides. Validation works on raw [`serde_json::Value`]s so wrong
//! types are reported as diagnostics instead of deserialization failures.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

mod diagnostics;
mod scheme;
mod validate;
mod variants;

pub use diagnostics::{Diagnostics, Issue, IssueKind};
pub use scheme::{
    is_valid_hex_color, resolve_scheme, validate_color_map, validate_color_scheme, ColorMap,
    ColorScheme,
};
pub use validate::{load_theme, validate_theme, validate_theme_file};

/// Top-level fields every theme must declare.
pub const REQUIRED_META_FIELDS: [&str; 7] =
    ["id", "name", "version", "author", "description", "dark", "light"];

/// Color roles every resolved scheme must define, in report order.
pub const REQUIRED_COLOR_FIELDS: [&str; 17] = [
    "primary",
    "primaryText",
    "primaryContainer",
    "secondary",
    "surface",
    "surfaceText",
    "surfaceVariant",
    "surfaceVariantText",
    "surfaceTint",
    "background",
    "backgroundText",
    "outline",
    "surfaceContainer",
    "surfaceContainerHigh",
    "error",
    "warning",
    "info",
];

/// Display mode a base scheme or flavor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    Dark,
    Light,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Dark, Mode::Light];

    /// JSON key for this mode.
    pub fn key(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn camel_case_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").expect("valid camelCase regex"))
}

fn semver_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("valid semver regex"))
}

/// True when `s` starts lowercase and is otherwise ASCII alphanumeric.
pub fn is_camel_case(s: &str) -> bool {
    !s.is_empty() && camel_case_pattern().is_match(s)
}

/// True for plain `MAJOR.MINOR.PATCH` versions.
pub fn is_semver(s: &str) -> bool {
    semver_pattern().is_match(s)
}
