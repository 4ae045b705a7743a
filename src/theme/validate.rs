//! Theme-level validation: metadata fields, base schemes, and variants.

use serde_json::Value;
use std::path::Path;

use crate::error::ThemeLoadError;

use super::variants::validate_variants;
use super::{
    is_camel_case, is_semver, validate_color_scheme, Diagnostics, Mode, REQUIRED_META_FIELDS,
};

/// Read and parse one theme file.
pub fn load_theme(path: &Path) -> Result<Value, ThemeLoadError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Load and validate one theme file.
///
/// Returns the parsed theme alongside its diagnostics; a read or parse
/// failure yields no theme and exactly one diagnostic.
pub fn validate_theme_file(path: &Path) -> (Option<Value>, Diagnostics) {
    match load_theme(path) {
        Ok(theme) => {
            let diagnostics = validate_theme(&theme);
            (Some(theme), diagnostics)
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "theme file failed to load");
            let mut diagnostics = Diagnostics::new();
            diagnostics.parse(err.to_string());
            (None, diagnostics)
        }
    }
}

/// Validate a parsed theme. An empty result means the theme is valid.
pub fn validate_theme(theme: &Value) -> Diagnostics {
    let mut out = Diagnostics::new();
    let Some(theme) = theme.as_object() else {
        out.structural("theme must be a JSON object");
        return out;
    };

    for field in REQUIRED_META_FIELDS {
        if !theme.contains_key(field) {
            out.structural(format!("Missing required field: {field}"));
        }
    }

    if let Some(id) = theme.get("id") {
        match id.as_str() {
            None => out.structural("ID must be a string"),
            Some("") => out.structural("ID is empty"),
            Some(id) if !is_camel_case(id) => out.format(format!(
                "ID '{id}' must be camelCase (start lowercase, alphanumeric only)"
            )),
            Some(_) => {}
        }
    }

    if let Some(version) = theme.get("version") {
        match version.as_str() {
            None => out.structural("version must be a string"),
            Some("") => out.structural("version is empty"),
            Some(version) if !is_semver(version) => out.format(format!(
                "version '{version}' must be semver format (e.g., 1.0.0)"
            )),
            Some(_) => {}
        }
    }

    for field in ["name", "author", "description"] {
        let Some(value) = theme.get(field) else {
            continue;
        };
        if !value.as_str().is_some_and(|text| !text.trim().is_empty()) {
            out.structural(format!("{field} must be a non-empty string"));
        }
    }

    match theme.get("variants") {
        Some(variants) => validate_variants(theme, variants, &mut out),
        None => {
            for mode in Mode::ALL {
                if let Some(scheme) = theme.get(mode.key()) {
                    out.extend(validate_color_scheme(scheme, mode.key()));
                }
            }
        }
    }

    out
}
