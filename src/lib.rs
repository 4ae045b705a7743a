//! themecheck: build-time validation and previews for theme definitions.
//!
//! A themes directory holds one folder per theme, each with a `theme.json`
//! describing metadata, `dark` and `light` color schemes, and optional
//! variants. This crate checks every theme against the schema, reports all
//! problems at once, and renders SVG previews of valid themes.
//!
//! # Quick start
//!
//! ```no_run
//! use std::path::Path;
//! use themecheck::catalog::validate_dir;
//!
//! let run = validate_dir(Path::new("themes"), "theme.json").unwrap();
//! std::process::exit(run.exit_code());
//! ```

pub mod app;
pub mod build_info;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod preview;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
pub mod ui;
