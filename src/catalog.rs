//! Theme catalog sweep: folder discovery and cross-theme uniqueness.
//!
//! A catalog is a directory with one subfolder per theme. Folders are
//! processed in sorted order so duplicate reporting is deterministic, and a
//! theme that fails to load never stops the rest of the sweep.

use serde_json::Value;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::theme::{validate_theme_file, Issue, IssueKind};

/// One theme folder that contains a theme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFolder {
    /// Folder name, used to group diagnostics.
    pub name: String,
    /// Full path to the folder's theme file.
    pub theme_path: PathBuf,
}

impl ThemeFolder {
    /// `<folder>/<file>` as shown in progress lines.
    pub fn display_path(&self) -> String {
        match self.theme_path.file_name() {
            Some(file) => format!("{}/{}", self.name, file.to_string_lossy()),
            None => self.name.clone(),
        }
    }
}

/// Result of scanning a themes directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// The themes directory does not exist.
    MissingDir(PathBuf),
    /// The directory exists but no subfolder holds a theme file.
    Empty(PathBuf),
    /// Theme folders sorted by name.
    Found(Vec<ThemeFolder>),
}

/// List subfolders of `themes_dir` that contain `theme_file`, sorted by name.
pub fn discover_theme_folders(themes_dir: &Path, theme_file: &str) -> io::Result<Discovery> {
    if !themes_dir.is_dir() {
        return Ok(Discovery::MissingDir(themes_dir.to_path_buf()));
    }

    let mut folders = Vec::new();
    for entry in std::fs::read_dir(themes_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let theme_path = path.join(theme_file);
        if !theme_path.is_file() {
            tracing::debug!(folder = %path.display(), "skipping folder without theme file");
            continue;
        }
        folders.push(ThemeFolder {
            name: entry.file_name().to_string_lossy().into_owned(),
            theme_path,
        });
    }

    if folders.is_empty() {
        return Ok(Discovery::Empty(themes_dir.to_path_buf()));
    }
    folders.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(count = folders.len(), "discovered theme folders");
    Ok(Discovery::Found(folders))
}

/// Running id→folder and name→folder owners for one sweep.
#[derive(Debug, Default)]
pub struct UniquenessIndex {
    ids: BTreeMap<String, String>,
    names: BTreeMap<String, String>,
}

impl UniquenessIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the theme's id and name for `folder`.
    ///
    /// The first folder to use a value owns it; later claimants get one
    /// issue per collision naming the owner. Only non-empty strings count.
    pub fn claim(&mut self, theme: &Value, folder: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        if let Some(id) = claimable(theme, "id") {
            if let Some(owner) = claim_value(&mut self.ids, id, folder) {
                issues.push(Issue::new(
                    IssueKind::Consistency,
                    format!("Duplicate ID '{id}' (also in {owner})"),
                ));
            }
        }
        if let Some(name) = claimable(theme, "name") {
            if let Some(owner) = claim_value(&mut self.names, name, folder) {
                issues.push(Issue::new(
                    IssueKind::Consistency,
                    format!("Duplicate name '{name}' (also in {owner})"),
                ));
            }
        }
        issues
    }
}

fn claimable<'a>(theme: &'a Value, field: &str) -> Option<&'a str> {
    theme
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Record `value` for `folder`, returning the earlier owner if there is one.
fn claim_value(owners: &mut BTreeMap<String, String>, value: &str, folder: &str) -> Option<String> {
    if let Some(owner) = owners.get(value) {
        return Some(owner.clone());
    }
    owners.insert(value.to_string(), folder.to_string());
    None
}

/// Diagnostics for one theme folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOutcome {
    pub folder: ThemeFolder,
    pub issues: Vec<Issue>,
}

impl ThemeOutcome {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Per-theme outcomes of a validation sweep, in folder order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub outcomes: Vec<ThemeOutcome>,
}

impl SweepReport {
    /// Outcomes with at least one issue.
    pub fn failed(&self) -> impl Iterator<Item = &ThemeOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(ThemeOutcome::passed)
    }

    /// Process exit code for CI gating: 0 when every theme passed.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Validate every folder in order, checking ids and names across themes.
pub fn validate_catalog(folders: &[ThemeFolder]) -> SweepReport {
    let mut index = UniquenessIndex::new();
    let mut outcomes = Vec::with_capacity(folders.len());
    for folder in folders {
        let (theme, diagnostics) = validate_theme_file(&folder.theme_path);
        let mut issues = diagnostics.into_issues();
        if let Some(theme) = &theme {
            issues.extend(index.claim(theme, &folder.name));
        }
        tracing::debug!(folder = %folder.name, issues = issues.len(), "validated theme");
        outcomes.push(ThemeOutcome {
            folder: folder.clone(),
            issues,
        });
    }
    SweepReport { outcomes }
}

/// Outcome of `validate_dir`: either nothing to check or a full report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRun {
    MissingDir(PathBuf),
    Empty(PathBuf),
    Checked(SweepReport),
}

impl CatalogRun {
    /// Exit code; a missing or empty catalog is not a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingDir(_) | Self::Empty(_) => 0,
            Self::Checked(report) => report.exit_code(),
        }
    }
}

/// Discover and validate every theme under `themes_dir`.
pub fn validate_dir(themes_dir: &Path, theme_file: &str) -> io::Result<CatalogRun> {
    Ok(match discover_theme_folders(themes_dir, theme_file)? {
        Discovery::MissingDir(path) => CatalogRun::MissingDir(path),
        Discovery::Empty(path) => CatalogRun::Empty(path),
        Discovery::Found(folders) => CatalogRun::Checked(validate_catalog(&folders)),
    })
}
