//! Text output formatter for human-readable display
//!
//! Each dependency is printed as a block:
//!
//! ```text
//! Module source: terraform-aws-modules/vpc/aws
//! Current version: 5.0.0
//! Latest version: 5.1.2 [minor]
//! ```
//!
//! Lookup failures are printed as a single `Error fetching ...` line.

use crate::domain::{DependencyKind, LookupOutcome, ReportEntry, ScanReport};
use crate::output::{OutputFormatter, Verbosity};
use crate::update::{ChangeKind, LatestVersion, UpdateStatus};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn colored_change(&self, kind: ChangeKind) -> String {
        if !self.color {
            return kind.label().to_string();
        }
        match kind {
            ChangeKind::Major => kind.label().red().bold().to_string(),
            ChangeKind::Minor => kind.label().yellow().to_string(),
            ChangeKind::Patch => kind.label().green().to_string(),
        }
    }

    fn format_latest(&self, latest: &LatestVersion, status: UpdateStatus) -> String {
        let version = match latest {
            LatestVersion::Found(v) => v.to_string(),
            LatestVersion::NotFound => return "Not found".to_string(),
        };

        match status {
            UpdateStatus::Outdated(kind) => {
                let version = if self.color {
                    version.bright_white().bold().to_string()
                } else {
                    version
                };
                format!("{} [{}]", version, self.colored_change(kind))
            }
            _ => version,
        }
    }

    fn format_error_line(&self, entry: &ReportEntry, message: &str) -> String {
        let target = match entry.dependency.kind {
            DependencyKind::Module => entry.dependency.source.clone(),
            DependencyKind::Provider => format!("provider {}", entry.dependency.source),
        };
        let line = format!("Error fetching latest version for {}: {}", target, message);
        if self.color {
            line.red().to_string()
        } else {
            line
        }
    }

    /// Format a single report entry
    fn format_entry(&self, entry: &ReportEntry, writer: &mut dyn Write) -> std::io::Result<()> {
        match &entry.outcome {
            LookupOutcome::Failed(message) => {
                writeln!(writer, "{}", self.format_error_line(entry, message))
            }
            LookupOutcome::Resolved { latest, status } => {
                if self.verbosity == Verbosity::Quiet
                    && !matches!(status, UpdateStatus::Outdated(_))
                {
                    return Ok(());
                }

                let dep = &entry.dependency;
                writeln!(writer, "{} source: {}", dep.kind.display_name(), dep.source)?;
                writeln!(writer, "Current version: {}", dep.version)?;
                writeln!(
                    writer,
                    "Latest version: {}",
                    self.format_latest(latest, *status)
                )?;
                writeln!(writer)
            }
        }
    }

    fn format_summary(&self, report: &ScanReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let total = report.modules.len() + report.providers.len();
        let line = format!(
            "Scanned {} file(s): {} module(s), {} provider(s), {} outdated, {} error(s)",
            report.files_scanned,
            report.modules.len(),
            report.providers.len(),
            report.outdated_count(),
            report.error_count()
        );
        if total == 0 {
            writeln!(writer, "No Terraform modules or providers found.")?;
        }
        if self.color {
            writeln!(writer, "{}", line.dimmed())
        } else {
            writeln!(writer, "{}", line)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ScanReport, writer: &mut dyn Write) -> std::io::Result<()> {
        for kind in DependencyKind::all() {
            for entry in report.entries(*kind) {
                self.format_entry(entry, writer)?;
            }
        }

        if self.verbosity == Verbosity::Verbose {
            self.format_summary(report, writer)?;
        }

        Ok(())
    }
}
