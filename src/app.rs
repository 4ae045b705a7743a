//! Command runners behind the `themecheck` subcommands.
//!
//! Each runner takes a resolved [`Config`] and an output stream and returns
//! the process exit code, so integration tests can drive them directly.

use std::io::{self, Write};

use crate::catalog::{discover_theme_folders, validate_dir, Discovery};
use crate::config::Config;
use crate::preview::generate_previews;
use crate::ui::Reporter;

/// Exit code for CLI or configuration failures.
pub const EXIT_USAGE: i32 = 2;

/// Validate every theme under the configured directory.
///
/// Returns 0 when all themes pass (or there is nothing to check), 1 otherwise.
pub fn run_validate<W: Write>(config: &Config, out: W) -> io::Result<i32> {
    let run = validate_dir(&config.themes.dir, &config.themes.theme_file)?;
    let mut reporter = Reporter::new(out, config.display.color);
    reporter.catalog_run(&run)?;
    Ok(run.exit_code())
}

/// Write a preview image beside every valid theme.
///
/// Skipped themes are reported but never fail the run.
pub fn run_preview<W: Write>(config: &Config, out: W) -> io::Result<i32> {
    let mut reporter = Reporter::new(out, config.display.color);
    match discover_theme_folders(&config.themes.dir, &config.themes.theme_file)? {
        Discovery::MissingDir(dir) => {
            reporter.notice(&format!("No {} directory found", dir.display()))?;
        }
        Discovery::Empty(dir) => {
            reporter.notice(&format!("No theme folders found in {}", dir.display()))?;
        }
        Discovery::Found(folders) => {
            let outcomes = generate_previews(&folders, &config.themes.preview_file);
            reporter.previews(&outcomes)?;
        }
    }
    Ok(0)
}
