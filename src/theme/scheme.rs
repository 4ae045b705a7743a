//! Color scheme field checks and layered scheme resolution.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

use super::{Issue, IssueKind, REQUIRED_COLOR_FIELDS};

/// Raw role→value map as it appears in theme JSON.
pub type ColorMap = serde_json::Map<String, Value>;

fn hex_color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"))
}

/// True for `#RRGGBB` with hex digits in either case.
pub fn is_valid_hex_color(value: &str) -> bool {
    hex_color_pattern().is_match(value)
}

/// Validate a JSON value as a complete color scheme.
///
/// `label` prefixes every message (`dark`, `variants.options[0] (mocha).dark`).
pub fn validate_color_scheme(value: &Value, label: &str) -> Vec<Issue> {
    match value.as_object() {
        Some(map) => validate_color_map(map, label),
        None => vec![Issue::new(
            IssueKind::Structural,
            format!("{label} must be an object"),
        )],
    }
}

/// Validate that `map` defines every required role as a hex color string.
pub fn validate_color_map(map: &ColorMap, label: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    for field in REQUIRED_COLOR_FIELDS {
        let Some(value) = map.get(field) else {
            issues.push(Issue::new(
                IssueKind::Structural,
                format!("{label} missing required field: {field}"),
            ));
            continue;
        };
        match value.as_str() {
            None => issues.push(Issue::new(
                IssueKind::Structural,
                format!("{label}.{field} must be a string"),
            )),
            Some(color) if !is_valid_hex_color(color) => issues.push(Issue::new(
                IssueKind::Format,
                format!("{label}.{field} must be a valid hex color (got: {color})"),
            )),
            Some(_) => {}
        }
    }
    issues
}

/// Flatten override layers into one scheme; later layers win per role.
///
/// Inputs are left untouched so every resolved scheme stands on its own.
pub fn resolve_scheme(layers: &[&ColorMap]) -> ColorMap {
    layers.iter().fold(ColorMap::new(), |mut resolved, layer| {
        for (role, value) in layer.iter() {
            resolved.insert(role.clone(), value.clone());
        }
        resolved
    })
}

/// Fully resolved scheme with every required role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub primary: String,
    pub primary_text: String,
    pub primary_container: String,
    pub secondary: String,
    pub surface: String,
    pub surface_text: String,
    pub surface_variant: String,
    pub surface_variant_text: String,
    pub surface_tint: String,
    pub background: String,
    pub background_text: String,
    pub outline: String,
    pub surface_container: String,
    pub surface_container_high: String,
    pub error: String,
    pub warning: String,
    pub info: String,
}

impl ColorScheme {
    /// Convert a raw map; fails when a role is missing or not a string.
    ///
    /// Roles outside the required set are ignored.
    pub fn from_map(map: &ColorMap) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(map.clone()))
    }
}
