//! Variant resolution for themes that derive schemes from overrides.
//!
//! Two forms exist: `simple` (a flat list of options over the base schemes)
//! and `multi` (flavors crossed with accents).

use serde_json::Value;

use super::{ColorMap, Diagnostics, Mode};

mod multi;
mod simple;

/// Validate the `variants` section of a theme against its base schemes.
pub(super) fn validate_variants(theme: &ColorMap, variants: &Value, out: &mut Diagnostics) {
    let Some(variants) = variants.as_object() else {
        out.structural("variants must be an object");
        return;
    };

    let bases = BaseSchemes::from_theme(theme, out);
    match variants.get("type") {
        None => simple::validate(&bases, variants, out),
        Some(Value::String(kind)) if kind == "simple" => simple::validate(&bases, variants, out),
        Some(Value::String(kind)) if kind == "multi" => multi::validate(&bases, variants, out),
        Some(Value::String(kind)) => {
            out.format(format!("variants.type '{kind}' must be 'simple' or 'multi'"))
        }
        Some(_) => out.structural("variants.type must be a string"),
    }
}

/// The theme's `dark` and `light` objects, when present and well-typed.
pub(super) struct BaseSchemes<'a> {
    dark: Option<&'a ColorMap>,
    light: Option<&'a ColorMap>,
}

impl<'a> BaseSchemes<'a> {
    /// Collect base schemes, reporting present-but-non-object ones.
    ///
    /// Missing bases are already reported by the top-level field check.
    fn from_theme(theme: &'a ColorMap, out: &mut Diagnostics) -> Self {
        Self {
            dark: base_scheme(theme, Mode::Dark, out),
            light: base_scheme(theme, Mode::Light, out),
        }
    }

    pub(super) fn get(&self, mode: Mode) -> Option<&'a ColorMap> {
        match mode {
            Mode::Dark => self.dark,
            Mode::Light => self.light,
        }
    }
}

fn base_scheme<'a>(theme: &'a ColorMap, mode: Mode, out: &mut Diagnostics) -> Option<&'a ColorMap> {
    match theme.get(mode.key()) {
        None => None,
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            out.structural(format!("{mode} must be an object"));
            None
        }
    }
}

/// Read a sparse override map; a present non-object value is reported.
pub(super) fn override_map<'a>(
    parent: &'a ColorMap,
    key: &str,
    label: &str,
    out: &mut Diagnostics,
) -> Option<&'a ColorMap> {
    match parent.get(key) {
        None => None,
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            out.structural(format!("{label}.{key} must be an object"));
            None
        }
    }
}

/// Check that `entry.field` exists and is a string, returning it.
pub(super) fn required_string<'a>(
    entry: &'a ColorMap,
    field: &str,
    label: &str,
    out: &mut Diagnostics,
) -> Option<&'a str> {
    match entry.get(field) {
        None => {
            out.structural(format!("{label} missing required field: {field}"));
            None
        }
        Some(Value::String(value)) if value.trim().is_empty() => {
            out.structural(format!("{label}.{field} must be a non-empty string"));
            None
        }
        Some(Value::String(value)) => Some(value.as_str()),
        Some(_) => {
            out.structural(format!("{label}.{field} must be a string"));
            None
        }
    }
}

/// Read a non-empty array field, or `None` when absent, empty, or mistyped.
pub(super) fn non_empty_array<'a>(parent: &'a ColorMap, field: &str) -> Option<&'a [Value]> {
    parent
        .get(field)
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .map(Vec::as_slice)
}

/// Read a non-empty (after trimming) string field.
pub(super) fn non_empty_str<'a>(parent: &'a ColorMap, field: &str) -> Option<&'a str> {
    parent
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
}
