//! Plain/colored console reporter for sweep and preview results.

use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

use crate::catalog::{CatalogRun, SweepReport};
use crate::preview::PreviewOutcome;
use crate::ui::settings;

/// Writes run results to any stream, optionally with ANSI colors.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Recover the underlying stream (used by tests to inspect output).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Print a labeled error line.
    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        let label = self.paint_bold(settings::LABEL_ERROR, settings::COLOR_ERROR);
        writeln!(self.out, "{label} {msg}")
    }

    /// Print an unlabeled highlighted notice (nothing-to-do situations).
    pub fn notice(&mut self, msg: &str) -> io::Result<()> {
        let line = self.paint(msg, settings::COLOR_WARNING);
        writeln!(self.out, "{line}")
    }

    /// Print a whole validation run, including the nothing-to-check cases.
    pub fn catalog_run(&mut self, run: &CatalogRun) -> io::Result<()> {
        match run {
            CatalogRun::MissingDir(dir) => self.notice(&format!(
                "No {} directory found, skipping theme validation",
                dir.display()
            )),
            CatalogRun::Empty(dir) => {
                self.notice(&format!("No theme folders found in {}", dir.display()))
            }
            CatalogRun::Checked(report) => self.sweep(report),
        }
    }

    /// Print per-theme status lines and, on failure, issues grouped by folder.
    pub fn sweep(&mut self, report: &SweepReport) -> io::Result<()> {
        writeln!(self.out, "Validating {} theme(s)...", report.outcomes.len())?;
        writeln!(self.out)?;

        for outcome in &report.outcomes {
            let status = if outcome.passed() {
                self.paint(settings::LABEL_OK, settings::COLOR_PASS)
            } else {
                self.paint(settings::LABEL_FAILED, settings::COLOR_FAIL)
            };
            writeln!(
                self.out,
                "Checking {}... {status}",
                outcome.folder.display_path()
            )?;
        }
        writeln!(self.out)?;

        if report.is_success() {
            let line = format!("{} All themes validated successfully!", settings::GLYPH_PASS);
            return writeln!(self.out, "{}", self.paint(&line, settings::COLOR_PASS));
        }

        let line = format!("Validation failed for {} theme(s):", report.failed_count());
        writeln!(self.out, "{}", self.paint(&line, settings::COLOR_FAIL))?;
        writeln!(self.out)?;
        for outcome in report.failed() {
            let heading = format!("{} {}", settings::GLYPH_FAIL, outcome.folder.name);
            writeln!(self.out, "{}", self.paint(&heading, settings::COLOR_FAIL))?;
            for issue in &outcome.issues {
                writeln!(
                    self.out,
                    "{}{} {issue}",
                    settings::INDENT_1,
                    settings::GLYPH_ITEM
                )?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Print one line per preview outcome followed by a completion line.
    pub fn previews(&mut self, outcomes: &[PreviewOutcome]) -> io::Result<()> {
        for outcome in outcomes {
            match outcome {
                PreviewOutcome::Generated(path) => {
                    writeln!(self.out, "Generated {}", path.display())?
                }
                PreviewOutcome::Skipped { folder, reason } => {
                    let line = format!("Skipping {folder}: {reason}");
                    writeln!(self.out, "{}", self.paint(&line, settings::COLOR_DETAIL))?
                }
            }
        }
        writeln!(self.out)?;
        writeln!(self.out, "Done!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ThemeFolder, ThemeOutcome};
    use crate::theme::{Issue, IssueKind};
    use std::path::PathBuf;

    fn folder(name: &str) -> ThemeFolder {
        ThemeFolder {
            name: name.to_string(),
            theme_path: PathBuf::from(format!("themes/{name}/theme.json")),
        }
    }

    fn render(report: &SweepReport, color: bool) -> String {
        let mut reporter = Reporter::new(Vec::new(), color);
        reporter.sweep(report).expect("write to vec");
        String::from_utf8(reporter.into_inner()).expect("utf8 output")
    }

    #[test]
    fn successful_sweep_summary() {
        let report = SweepReport {
            outcomes: vec![ThemeOutcome {
                folder: folder("nord"),
                issues: Vec::new(),
            }],
        };
        assert_eq!(
            render(&report, false),
            "Validating 1 theme(s)...\n\
             \n\
             Checking nord/theme.json... OK\n\
             \n\
             ✓ All themes validated successfully!\n"
        );
    }

    #[test]
    fn failed_sweep_groups_issues_by_folder() {
        let report = SweepReport {
            outcomes: vec![
                ThemeOutcome {
                    folder: folder("a"),
                    issues: vec![Issue::new(
                        IssueKind::Format,
                        "version '1.0' must be semver format (e.g., 1.0.0)",
                    )],
                },
                ThemeOutcome {
                    folder: folder("b"),
                    issues: Vec::new(),
                },
            ],
        };
        assert_eq!(
            render(&report, false),
            "Validating 2 theme(s)...\n\
             \n\
             Checking a/theme.json... FAILED\n\
             Checking b/theme.json... OK\n\
             \n\
             Validation failed for 1 theme(s):\n\
             \n\
             ✗ a\n  \
             - version '1.0' must be semver format (e.g., 1.0.0)\n\
             \n"
        );
    }

    #[test]
    fn color_output_wraps_status_in_ansi() {
        // crossterm suppresses ANSI codes when NO_COLOR is set.
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let report = SweepReport {
            outcomes: vec![ThemeOutcome {
                folder: folder("a"),
                issues: Vec::new(),
            }],
        };
        let colored = render(&report, true);
        assert!(colored.contains("\u{1b}["));
        assert!(!render(&report, false).contains("\u{1b}["));
    }

    #[test]
    fn missing_dir_is_a_single_notice() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter
            .catalog_run(&CatalogRun::MissingDir(PathBuf::from("themes")))
            .expect("write");
        let text = String::from_utf8(reporter.into_inner()).expect("utf8");
        assert_eq!(text, "No themes directory found, skipping theme validation\n");
    }
}
