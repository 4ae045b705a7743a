//! Fixture helpers shared by the integration suites.

use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use themecheck::config::Config;
use themecheck::theme::REQUIRED_COLOR_FIELDS;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Scratch themes tree removed on drop.
pub struct ThemesTree {
    root: PathBuf,
}

impl ThemesTree {
    pub fn new(prefix: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "themecheck-it-{prefix}-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(root.join("themes")).expect("create themes dir");
        Self { root }
    }

    pub fn themes_dir(&self) -> PathBuf {
        self.root.join("themes")
    }

    pub fn write_theme(&self, folder: &str, theme: &Value) -> PathBuf {
        let dir = self.themes_dir().join(folder);
        fs::create_dir_all(&dir).expect("create theme folder");
        let path = dir.join("theme.json");
        fs::write(&path, serde_json::to_string_pretty(theme).expect("serialize"))
            .expect("write theme");
        path
    }

    pub fn write_raw(&self, folder: &str, text: &str) -> PathBuf {
        let dir = self.themes_dir().join(folder);
        fs::create_dir_all(&dir).expect("create theme folder");
        let path = dir.join("theme.json");
        fs::write(&path, text).expect("write theme");
        path
    }

    /// Plain-output config pointing at this tree.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.themes.dir = self.themes_dir();
        config.display.color = false;
        config
    }

    pub fn folder(&self, name: &str) -> PathBuf {
        self.themes_dir().join(name)
    }
}

impl Drop for ThemesTree {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub fn scheme(hex: &str) -> Value {
    let map: Map<String, Value> = REQUIRED_COLOR_FIELDS
        .iter()
        .map(|field| (field.to_string(), json!(hex)))
        .collect();
    Value::Object(map)
}

pub fn theme(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "version": "1.0.0",
        "author": "Test Author",
        "description": "Fixture theme",
        "dark": scheme("#101010"),
        "light": scheme("#f0f0f0"),
    })
}

pub fn exists(path: &Path) -> bool {
    path.is_file()
}
