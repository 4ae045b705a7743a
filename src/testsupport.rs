//! Shared test fixtures for theme, catalog, and preview test modules.
//!
//! Theme builders return `serde_json::Value`s so tests can break individual
//! fields with plain indexing before validating.

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::theme::REQUIRED_COLOR_FIELDS;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "themecheck-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }

    /// Write `theme` as `<folder>/theme.json`.
    pub fn write_theme(&self, folder: &str, theme: &Value) -> PathBuf {
        let text = serde_json::to_string_pretty(theme).expect("serialize theme fixture");
        self.write_text(&format!("{folder}/theme.json"), &text)
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Scheme object with every required role set to `hex`.
pub fn full_scheme(hex: &str) -> Value {
    let map = REQUIRED_COLOR_FIELDS
        .iter()
        .map(|field| (field.to_string(), Value::String(hex.to_string())))
        .collect::<serde_json::Map<_, _>>();
    Value::Object(map)
}

/// Minimal valid theme with no variants.
pub fn base_theme() -> Value {
    json!({
        "id": "abc",
        "name": "Abc",
        "version": "1.0.0",
        "author": "Theme Author",
        "description": "A test theme",
        "dark": full_scheme("#101010"),
        "light": full_scheme("#f0f0f0"),
    })
}

/// Valid base theme carrying `variants` (simple form unless the value says otherwise).
pub fn simple_theme(variants: Value) -> Value {
    let mut theme = base_theme();
    theme["variants"] = variants;
    theme
}

/// Valid base theme carrying a `multi` variants section.
pub fn multi_theme(mut variants: Value) -> Value {
    variants["type"] = json!("multi");
    let mut theme = base_theme();
    theme["variants"] = variants;
    theme
}

/// Valid theme with the given id and name.
pub fn named_theme(id: &str, name: &str) -> Value {
    let mut theme = base_theme();
    theme["id"] = json!(id);
    theme["name"] = json!(name);
    theme
}
