//! JSON output formatter for machine processing

use crate::domain::{LookupOutcome, ReportEntry, ScanReport};
use crate::output::OutputFormatter;
use crate::update::{ChangeKind, UpdateStatus};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput {
    /// Scanned root path
    root: String,
    /// Number of .tf files read
    files_scanned: usize,
    /// Summary statistics
    summary: JsonSummary,
    /// Module entries
    modules: Vec<JsonEntry>,
    /// Provider entries
    providers: Vec<JsonEntry>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    outdated: usize,
    errors: usize,
}

/// JSON representation of one dependency
#[derive(Serialize)]
struct JsonEntry {
    /// Module source or provider name
    source: String,
    /// Pinned version (empty when none)
    current: String,
    /// Latest version, null when not found or lookup failed
    latest: Option<String>,
    /// up_to_date, outdated, ahead, unknown, or error
    status: &'static str,
    /// Change kind when outdated
    #[serde(skip_serializing_if = "Option::is_none")]
    change: Option<ChangeKind>,
    /// Lookup error message
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl JsonFormatter {
    fn entry_to_json(entry: &ReportEntry) -> JsonEntry {
        let (latest, status, change, error) = match &entry.outcome {
            LookupOutcome::Resolved { latest, status } => {
                let change = match status {
                    UpdateStatus::Outdated(kind) => Some(*kind),
                    _ => None,
                };
                (
                    latest.version().map(|v| v.to_string()),
                    status.label(),
                    change,
                    None,
                )
            }
            LookupOutcome::Failed(msg) => (None, "error", None, Some(msg.clone())),
        };

        JsonEntry {
            source: entry.dependency.source.clone(),
            current: entry.dependency.version.clone(),
            latest,
            status,
            change,
            error,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            root: report.root.display().to_string(),
            files_scanned: report.files_scanned,
            summary: JsonSummary {
                outdated: report.outdated_count(),
                errors: report.error_count(),
            },
            modules: report.modules.iter().map(Self::entry_to_json).collect(),
            providers: report.providers.iter().map(Self::entry_to_json).collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
