//! SVG preview images for validated themes.
//!
//! Each preview shows the dark scheme on the left and the light scheme on
//! the right, drawn as a small mock UI using every color role.

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::catalog::ThemeFolder;
use crate::error::PreviewError;
use crate::theme::{validate_theme_file, ColorScheme, Mode};

/// Width and height of one mode panel.
pub const PANEL_SIZE: u32 = 240;
/// Gap between the dark and light panels.
pub const DIVIDER_WIDTH: u32 = 4;

/// Render one 240×240 panel as an SVG group translated to `x`.
pub fn render_panel(scheme: &ColorScheme, name: &str, x: u32) -> String {
    let name = v_htmlescape::escape(name).to_string();
    let s = scheme;
    format!(
        r##"<g transform="translate({x}, 0)">
  <rect width="240" height="240" fill="{background}"/>
  <rect x="8" y="8" width="224" height="224" rx="8" fill="{surface}"/>
  <rect x="16" y="16" width="208" height="36" rx="6" fill="{surface_container}"/>
  <text x="28" y="40" font-family="system-ui, sans-serif" font-size="12" font-weight="600" fill="{surface_text}">{name}</text>
  <rect x="16" y="60" width="208" height="72" rx="6" fill="{surface_container_high}"/>
  <text x="28" y="82" font-family="system-ui, sans-serif" font-size="11" fill="{surface_text}">Surface Text</text>
  <text x="28" y="98" font-family="system-ui, sans-serif" font-size="10" fill="{outline}">Outline color</text>
  <rect x="28" y="108" width="72" height="18" rx="9" fill="{primary}"/>
  <text x="64" y="120" font-family="system-ui, sans-serif" font-size="9" text-anchor="middle" fill="{primary_text}">Primary</text>
  <rect x="108" y="108" width="48" height="18" rx="4" fill="{secondary}"/>
  <rect x="16" y="140" width="100" height="52" rx="6" fill="{surface_container}"/>
  <rect x="24" y="148" width="84" height="36" rx="4" fill="{background}"/>
  <text x="66" y="170" font-family="system-ui, sans-serif" font-size="9" text-anchor="middle" fill="{background_text}">Background</text>
  <rect x="124" y="140" width="100" height="52" rx="6" fill="{surface_container}"/>
  <circle cx="148" cy="166" r="9" fill="{error}"/>
  <circle cx="172" cy="166" r="9" fill="{warning}"/>
  <circle cx="196" cy="166" r="9" fill="{info}"/>
  <rect x="16" y="200" width="208" height="24" rx="4" fill="{surface_tint}" opacity="0.15"/>
  <text x="120" y="216" font-family="system-ui, sans-serif" font-size="9" text-anchor="middle" fill="{surface_text}">Surface Tint Overlay</text>
</g>"##,
        background = s.background,
        surface = s.surface,
        surface_container = s.surface_container,
        surface_text = s.surface_text,
        surface_container_high = s.surface_container_high,
        outline = s.outline,
        primary = s.primary,
        primary_text = s.primary_text,
        secondary = s.secondary,
        background_text = s.background_text,
        error = s.error,
        warning = s.warning,
        info = s.info,
        surface_tint = s.surface_tint,
    )
}

/// Render the combined dark/light preview for a theme.
pub fn render_preview(theme: &Value) -> Result<String, PreviewError> {
    let name = theme.get("name").and_then(Value::as_str).unwrap_or("Theme");
    let dark = scheme_for(theme, Mode::Dark)?;
    let light = scheme_for(theme, Mode::Light)?;

    let width = PANEL_SIZE * 2 + DIVIDER_WIDTH;
    let dark_panel = render_panel(&dark, &format!("{name} (dark)"), 0);
    let light_panel = render_panel(&light, &format!("{name} (light)"), PANEL_SIZE + DIVIDER_WIDTH);
    Ok(format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{PANEL_SIZE}" viewBox="0 0 {width} {PANEL_SIZE}">
  {dark_panel}
  <rect x="{PANEL_SIZE}" y="0" width="{DIVIDER_WIDTH}" height="{PANEL_SIZE}" fill="#888"/>
  {light_panel}
</svg>"##
    ))
}

fn scheme_for(theme: &Value, mode: Mode) -> Result<ColorScheme, PreviewError> {
    let map = theme
        .get(mode.key())
        .and_then(Value::as_object)
        .ok_or(PreviewError::MissingScheme(mode.key()))?;
    Ok(ColorScheme::from_map(map)?)
}

/// What happened to one theme during preview generation.
#[derive(Debug)]
pub enum PreviewOutcome {
    /// Preview written to this path.
    Generated(PathBuf),
    /// Theme was not rendered; the reason is user-facing.
    Skipped { folder: String, reason: String },
}

/// Render previews for every folder, writing `preview_file` beside each theme.
///
/// Only themes that pass validation are rendered. A write failure is
/// reported as a skip so the remaining folders are still processed.
pub fn generate_previews(folders: &[ThemeFolder], preview_file: &str) -> Vec<PreviewOutcome> {
    folders
        .iter()
        .map(|folder| generate_one(folder, preview_file))
        .collect()
}

fn generate_one(folder: &ThemeFolder, preview_file: &str) -> PreviewOutcome {
    let skipped = |reason: String| {
        tracing::debug!(folder = %folder.name, %reason, "preview skipped");
        PreviewOutcome::Skipped {
            folder: folder.name.clone(),
            reason,
        }
    };

    let (theme, diagnostics) = validate_theme_file(&folder.theme_path);
    let Some(theme) = theme else {
        let reason = diagnostics
            .issues()
            .first()
            .map(ToString::to_string)
            .unwrap_or_default();
        return skipped(reason);
    };
    if !diagnostics.is_empty() {
        return skipped(format!(
            "theme has {} validation error(s)",
            diagnostics.len()
        ));
    }

    let Some(dir) = folder.theme_path.parent() else {
        return skipped("theme file has no parent directory".to_string());
    };
    let output = dir.join(preview_file);
    match write_preview(&theme, &output) {
        Ok(()) => PreviewOutcome::Generated(output),
        Err(err) => skipped(err.to_string()),
    }
}

fn write_preview(theme: &Value, output: &Path) -> Result<(), PreviewError> {
    let svg = render_preview(theme)?;
    std::fs::write(output, svg)?;
    Ok(())
}
