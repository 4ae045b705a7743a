//! `simple` variants: named options layered directly over the base schemes.

use crate::theme::{
    is_valid_hex_color, resolve_scheme, validate_color_map, ColorMap, Diagnostics, Mode,
};

use super::{non_empty_array, non_empty_str, override_map, required_string, BaseSchemes};

pub(super) fn validate(bases: &BaseSchemes<'_>, variants: &ColorMap, out: &mut Diagnostics) {
    let options = non_empty_array(variants, "options");
    if options.is_none() {
        out.structural("variants.options must be a non-empty array");
    }
    let default = non_empty_str(variants, "default");
    if default.is_none() {
        out.structural("variants.default must be a non-empty string");
    }
    let Some(options) = options else {
        return;
    };

    let empty = ColorMap::new();
    let mut ids: Vec<&str> = Vec::with_capacity(options.len());
    for (index, option) in options.iter().enumerate() {
        let position = format!("variants.options[{index}]");
        let Some(option) = option.as_object() else {
            out.structural(format!("{position} must be an object"));
            continue;
        };

        let id = required_string(option, "id", &position, out);
        required_string(option, "name", &position, out);
        let label = match id {
            Some(id) => format!("{position} ({id})"),
            None => position,
        };
        if let Some(id) = id {
            if ids.contains(&id) {
                // Duplicate option ids are allowed; the first match wins downstream.
                tracing::debug!(id, "simple variant option id repeated");
            }
            ids.push(id);
        }

        for mode in Mode::ALL {
            let overrides = override_map(option, mode.key(), &label, out).unwrap_or(&empty);
            let scheme_label = format!("{label}.{mode}");
            validate_raw_overrides(overrides, &scheme_label, out);
            let Some(base) = bases.get(mode) else {
                continue;
            };
            let resolved = resolve_scheme(&[base, overrides]);
            out.extend(validate_color_map(&resolved, &scheme_label));
        }
    }

    if let Some(default) = default {
        if !ids.contains(&default) {
            out.referential(format!(
                "variants.default '{default}' does not match any option id"
            ));
        }
    }
}

/// Check every override entry as written, independent of the base scheme.
///
/// Runs even when the base is missing, so bad override values surface
/// alongside the base error.
fn validate_raw_overrides(overrides: &ColorMap, label: &str, out: &mut Diagnostics) {
    for (role, value) in overrides {
        match value.as_str() {
            None => out.structural(format!("{label}.{role} override must be a string")),
            Some(color) if !is_valid_hex_color(color) => out.format(format!(
                "{label}.{role} override must be a valid hex color (got: {color})"
            )),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testsupport::{full_scheme, simple_theme};
    use crate::theme::{validate_theme, IssueKind};
    use serde_json::json;

    fn messages(theme: &serde_json::Value) -> Vec<String> {
        validate_theme(theme)
            .into_issues()
            .into_iter()
            .map(|issue| issue.message)
            .collect()
    }

    #[test]
    fn valid_simple_variants_pass() {
        let theme = simple_theme(json!({
            "default": "warm",
            "options": [
                {"id": "warm", "name": "Warm", "dark": {"primary": "#ff8800"}},
                {"id": "cool", "name": "Cool", "light": {"primary": "#0088ff"}},
            ],
        }));
        assert!(messages(&theme).is_empty(), "{:?}", messages(&theme));
    }

    #[test]
    fn missing_options_and_default_are_reported_together() {
        let theme = simple_theme(json!({"options": []}));
        assert_eq!(
            messages(&theme),
            vec![
                "variants.options must be a non-empty array",
                "variants.default must be a non-empty string",
            ]
        );
    }

    #[test]
    fn default_must_match_an_option() {
        let theme = simple_theme(json!({
            "default": "missing",
            "options": [{"id": "warm", "name": "Warm"}],
        }));
        let diagnostics = validate_theme(&theme);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.count(IssueKind::Referential), 1);
        assert_eq!(
            diagnostics.issues()[0].message,
            "variants.default 'missing' does not match any option id"
        );
    }

    #[test]
    fn malformed_override_is_reported_raw_and_resolved() {
        let theme = simple_theme(json!({
            "default": "warm",
            "options": [{"id": "warm", "name": "Warm", "dark": {"primary": "orange"}}],
        }));
        assert_eq!(
            messages(&theme),
            vec![
                "variants.options[0] (warm).dark.primary override must be a valid hex color (got: orange)",
                "variants.options[0] (warm).dark.primary must be a valid hex color (got: orange)",
            ]
        );
    }

    #[test]
    fn overrides_are_checked_when_base_is_missing() {
        let mut theme = simple_theme(json!({
            "default": "warm",
            "options": [{"id": "warm", "name": "Warm", "dark": {"primary": "orange"}}],
        }));
        theme.as_object_mut().expect("theme object").remove("dark");
        assert_eq!(
            messages(&theme),
            vec![
                "Missing required field: dark",
                "variants.options[0] (warm).dark.primary override must be a valid hex color (got: orange)",
            ]
        );
    }

    #[test]
    fn overrides_are_checked_when_base_is_not_an_object() {
        let mut theme = simple_theme(json!({
            "default": "warm",
            "options": [{"id": "warm", "name": "Warm", "dark": {"primary": 12}}],
        }));
        theme["dark"] = json!("oops");
        assert_eq!(
            messages(&theme),
            vec![
                "dark must be an object",
                "variants.options[0] (warm).dark.primary override must be a string",
            ]
        );
    }

    #[test]
    fn extra_override_roles_are_checked_on_their_own() {
        let theme = simple_theme(json!({
            "default": "warm",
            "options": [{
                "id": "warm",
                "name": "Warm",
                "light": {"accent2": "#12345", "accent3": "#abcdef"},
            }],
        }));
        assert_eq!(
            messages(&theme),
            vec!["variants.options[0] (warm).light.accent2 override must be a valid hex color (got: #12345)"]
        );
    }

    #[test]
    fn incomplete_base_is_reported_per_option_and_mode() {
        let mut theme = simple_theme(json!({
            "default": "a",
            "options": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
        }));
        theme["dark"]
            .as_object_mut()
            .expect("dark object")
            .remove("warning");
        assert_eq!(
            messages(&theme),
            vec![
                "variants.options[0] (a).dark missing required field: warning",
                "variants.options[1] (b).dark missing required field: warning",
            ]
        );
    }

    #[test]
    fn override_can_complete_a_partial_base() {
        let mut theme = simple_theme(json!({
            "default": "a",
            "options": [{"id": "a", "name": "A", "dark": {"warning": "#eeee00"}}],
        }));
        theme["dark"]
            .as_object_mut()
            .expect("dark object")
            .remove("warning");
        assert!(messages(&theme).is_empty());
    }

    #[test]
    fn option_without_id_is_labeled_by_position() {
        let theme = simple_theme(json!({
            "default": "a",
            "options": [{"name": "Nameless", "dark": {"info": 7}}, {"id": "a", "name": "A"}],
        }));
        assert_eq!(
            messages(&theme),
            vec![
                "variants.options[0] missing required field: id",
                "variants.options[0].dark.info override must be a string",
                "variants.options[0].dark.info must be a string",
            ]
        );
    }

    #[test]
    fn duplicate_option_ids_are_permitted() {
        let theme = simple_theme(json!({
            "default": "a",
            "options": [{"id": "a", "name": "A"}, {"id": "a", "name": "Again"}],
        }));
        assert!(messages(&theme).is_empty());
    }

    #[test]
    fn explicit_simple_type_selects_simple_form() {
        let theme = simple_theme(json!({
            "type": "simple",
            "default": "a",
            "options": [{"id": "a", "name": "A", "dark": full_scheme("#010101")}],
        }));
        assert!(messages(&theme).is_empty());
    }
}
