//! Centralized, hardcoded console settings: labels, glyphs, and colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";

// ---------------------------------------------------------------------------
// Labels / glyphs
// ---------------------------------------------------------------------------

pub const LABEL_ERROR: &str = "error:";
pub const LABEL_OK: &str = "OK";
pub const LABEL_FAILED: &str = "FAILED";

pub const GLYPH_PASS: &str = "✓";
pub const GLYPH_FAIL: &str = "✗";
pub const GLYPH_ITEM: &str = "-";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_PASS: Color = Color::Green;
pub const COLOR_FAIL: Color = Color::Red;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_DETAIL: Color = Color::DarkGrey;
