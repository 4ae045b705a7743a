//! CLI entry point for themecheck.

mod cli;

use clap::Parser;
use std::io;

use themecheck::app::{run_preview, run_validate, EXIT_USAGE};
use themecheck::config::{load_config_with_source, Config};
use themecheck::logging::init_logging;
use themecheck::ui::Reporter;

fn main() {
    let args = cli::Args::parse();
    init_logging(args.verbose);

    // Load config.
    let mut config = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => {
            tracing::info!(source = ?loaded.source, "configuration loaded");
            loaded.config
        }
        Err(e) => {
            report_error(!args.no_color, &e.to_string());
            std::process::exit(EXIT_USAGE);
        }
    };

    // Apply CLI overrides.
    apply_cli_overrides(&mut config, &args);

    let stdout = io::stdout().lock();
    let result = match args.command() {
        cli::Command::Validate => run_validate(&config, stdout),
        cli::Command::Preview => run_preview(&config, stdout),
    };
    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            report_error(config.display.color, &format!("failed to scan themes: {e}"));
            std::process::exit(EXIT_USAGE);
        }
    }
}

fn apply_cli_overrides(config: &mut Config, args: &cli::Args) {
    if let Some(dir) = &args.themes_dir {
        config.themes.dir = dir.clone();
    }
    if args.no_color {
        config.display.color = false;
    }
}

fn report_error(color: bool, msg: &str) {
    let mut reporter = Reporter::new(io::stderr().lock(), color);
    let _ = reporter.error(msg);
}
