//! `multi` variants: flavors (one per mode) crossed with per-flavor accents.
//!
//! Every flavor × accent pair is resolved and checked, not just the
//! defaults, so any combination a user can select yields a full scheme.

use serde_json::Value;

use crate::theme::{resolve_scheme, validate_color_map, ColorMap, Diagnostics, Mode};

use super::{non_empty_array, non_empty_str, override_map, required_string, BaseSchemes};

/// A flavor with a valid id and exactly one mode.
struct Flavor<'a> {
    id: &'a str,
    mode: Mode,
    overrides: Option<&'a ColorMap>,
}

struct Accent<'a> {
    id: &'a str,
    entry: &'a ColorMap,
}

/// Selection named by `defaults.<mode>`; unset parts were already reported.
#[derive(Default)]
struct ModeDefault<'a> {
    flavor: Option<&'a str>,
    accent: Option<&'a str>,
}

/// Flavor ids in declaration order plus the mode-resolved subset.
#[derive(Default)]
struct FlavorCatalog<'a> {
    ids: Vec<&'a str>,
    flavors: Vec<Flavor<'a>>,
}

impl FlavorCatalog<'_> {
    fn has_mode(&self, id: &str, mode: Mode) -> bool {
        self.flavors
            .iter()
            .any(|flavor| flavor.id == id && flavor.mode == mode)
    }
}

pub(super) fn validate(bases: &BaseSchemes<'_>, variants: &ColorMap, out: &mut Diagnostics) {
    let Some(flavors) = non_empty_array(variants, "flavors") else {
        out.structural("variants.flavors must be a non-empty array");
        return;
    };
    let Some(accents) = non_empty_array(variants, "accents") else {
        out.structural("variants.accents must be a non-empty array");
        return;
    };

    let defaults = read_defaults(variants, out);
    let catalog = collect_flavors(flavors, out);
    for (mode, selection) in &defaults {
        let Some(flavor) = selection.flavor else {
            continue;
        };
        if catalog.has_mode(flavor, *mode) {
            continue;
        }
        if catalog.ids.contains(&flavor) {
            out.consistency(format!(
                "variants.defaults.{mode}.flavor '{flavor}' is not a {mode} flavor"
            ));
        } else {
            out.referential(format!(
                "variants.defaults.{mode}.flavor '{flavor}' does not match any flavor id"
            ));
        }
    }

    let accents = collect_accents(accents, &catalog.ids, out);
    for (mode, selection) in &defaults {
        let Some(accent) = selection.accent else {
            continue;
        };
        if !accents.iter().any(|entry| entry.id == accent) {
            out.referential(format!(
                "variants.defaults.{mode}.accent '{accent}' does not match any accent id"
            ));
        }
    }

    let empty = ColorMap::new();
    for flavor in &catalog.flavors {
        let Some(base) = bases.get(flavor.mode) else {
            continue;
        };
        let flavor_overrides = flavor.overrides.unwrap_or(&empty);
        for accent in &accents {
            let accent_overrides = accent
                .entry
                .get(flavor.id)
                .and_then(Value::as_object)
                .unwrap_or(&empty);
            let resolved = resolve_scheme(&[base, flavor_overrides, accent_overrides]);
            let label = format!("variants[{}+{}].{}", flavor.id, accent.id, flavor.mode);
            out.extend(validate_color_map(&resolved, &label));
        }
    }
}

fn read_defaults<'a>(
    variants: &'a ColorMap,
    out: &mut Diagnostics,
) -> Vec<(Mode, ModeDefault<'a>)> {
    let defaults = match variants.get("defaults") {
        Some(Value::Object(map)) => map,
        Some(_) => {
            out.structural("variants.defaults must be an object");
            return Vec::new();
        }
        None => {
            out.structural("variants.defaults is required");
            return Vec::new();
        }
    };

    let mut selections = Vec::with_capacity(Mode::ALL.len());
    for mode in Mode::ALL {
        let label = format!("variants.defaults.{mode}");
        let selection = match defaults.get(mode.key()) {
            Some(Value::Object(entry)) => ModeDefault {
                flavor: default_reference(entry, "flavor", &label, out),
                accent: default_reference(entry, "accent", &label, out),
            },
            Some(_) => {
                out.structural(format!("{label} must be an object"));
                ModeDefault::default()
            }
            None => {
                out.structural(format!("{label} is required"));
                ModeDefault::default()
            }
        };
        selections.push((mode, selection));
    }
    selections
}

fn default_reference<'a>(
    entry: &'a ColorMap,
    field: &str,
    label: &str,
    out: &mut Diagnostics,
) -> Option<&'a str> {
    let value = non_empty_str(entry, field);
    if value.is_none() {
        out.structural(format!("{label}.{field} must be a non-empty string"));
    }
    value
}

fn collect_flavors<'a>(flavors: &'a [Value], out: &mut Diagnostics) -> FlavorCatalog<'a> {
    let mut catalog = FlavorCatalog::default();
    for (index, flavor) in flavors.iter().enumerate() {
        let position = format!("variants.flavors[{index}]");
        let Some(flavor) = flavor.as_object() else {
            out.structural(format!("{position} must be an object"));
            continue;
        };

        let id = required_string(flavor, "id", &position, out);
        required_string(flavor, "name", &position, out);
        let label = match id {
            Some(id) => format!("{position} ({id})"),
            None => position,
        };

        let mode = match (
            flavor.contains_key(Mode::Dark.key()),
            flavor.contains_key(Mode::Light.key()),
        ) {
            (true, false) => Some(Mode::Dark),
            (false, true) => Some(Mode::Light),
            (true, true) => {
                out.consistency(format!("{label} must define only one of dark or light"));
                None
            }
            (false, false) => {
                out.structural(format!("{label} must define one of dark or light"));
                None
            }
        };

        let Some(id) = id else {
            continue;
        };
        // Duplicates still join the matrix so their overrides are checked.
        if catalog.ids.contains(&id) {
            out.consistency(format!("{label} duplicates flavor id '{id}'"));
        } else {
            catalog.ids.push(id);
        }
        if let Some(mode) = mode {
            let overrides = override_map(flavor, mode.key(), &label, out);
            catalog.flavors.push(Flavor {
                id,
                mode,
                overrides,
            });
        }
    }
    catalog
}

fn collect_accents<'a>(
    accents: &'a [Value],
    flavor_ids: &[&str],
    out: &mut Diagnostics,
) -> Vec<Accent<'a>> {
    let mut collected: Vec<Accent<'a>> = Vec::with_capacity(accents.len());
    for (index, accent) in accents.iter().enumerate() {
        let position = format!("variants.accents[{index}]");
        let Some(entry) = accent.as_object() else {
            out.structural(format!("{position} must be an object"));
            continue;
        };

        let id = required_string(entry, "id", &position, out);
        required_string(entry, "name", &position, out);
        let label = match id {
            Some(id) => format!("{position} ({id})"),
            None => position,
        };

        // Coverage is structural: the key must exist even if its map is empty.
        for flavor_id in flavor_ids {
            if entry.contains_key(*flavor_id) {
                override_map(entry, flavor_id, &label, out);
            } else {
                out.consistency(format!(
                    "{label} missing override for flavor '{flavor_id}'"
                ));
            }
        }

        let Some(id) = id else {
            continue;
        };
        if collected.iter().any(|existing| existing.id == id) {
            out.consistency(format!("{label} duplicates accent id '{id}'"));
        }
        collected.push(Accent { id, entry });
    }
    collected
}
