//! Report structures pairing declarations with registry lookup outcomes

use super::{Dependency, DependencyKind};
use crate::update::{LatestVersion, UpdateStatus};
use std::path::PathBuf;

/// Result of looking up the latest version of one dependency
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Registry answered; latest may still be `NotFound`
    Resolved {
        latest: LatestVersion,
        status: UpdateStatus,
    },
    /// Lookup failed; message is shown inline in the report
    Failed(String),
}

/// A single line item of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    /// The declaration that was looked up
    pub dependency: Dependency,
    /// What the registry said
    pub outcome: LookupOutcome,
}

impl ReportEntry {
    /// Creates an entry from a successful lookup
    pub fn resolved(dependency: Dependency, latest: LatestVersion) -> Self {
        let status = UpdateStatus::compare(&dependency.version, &latest);
        Self {
            dependency,
            outcome: LookupOutcome::Resolved { latest, status },
        }
    }

    /// Creates an entry from a failed lookup
    pub fn failed(dependency: Dependency, message: impl Into<String>) -> Self {
        Self {
            dependency,
            outcome: LookupOutcome::Failed(message.into()),
        }
    }

    /// Returns the error message if the lookup failed
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            LookupOutcome::Failed(msg) => Some(msg),
            LookupOutcome::Resolved { .. } => None,
        }
    }

    /// Returns the resolved latest version, if the lookup succeeded
    pub fn latest(&self) -> Option<&LatestVersion> {
        match &self.outcome {
            LookupOutcome::Resolved { latest, .. } => Some(latest),
            LookupOutcome::Failed(_) => None,
        }
    }

    /// Returns the update status, if the lookup succeeded
    pub fn status(&self) -> Option<UpdateStatus> {
        match &self.outcome {
            LookupOutcome::Resolved { status, .. } => Some(*status),
            LookupOutcome::Failed(_) => None,
        }
    }

    /// Returns true if a newer version than the pinned one exists
    pub fn is_outdated(&self) -> bool {
        matches!(self.status(), Some(UpdateStatus::Outdated(_)))
    }
}

/// Full result of a scan
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    /// Root path that was scanned
    pub root: PathBuf,
    /// Number of `.tf` files read
    pub files_scanned: usize,
    /// Module entries sorted by source
    pub modules: Vec<ReportEntry>,
    /// Provider entries sorted by source
    pub providers: Vec<ReportEntry>,
}

impl ScanReport {
    /// Creates an empty report for the given root
    pub fn new(root: impl Into<PathBuf>, files_scanned: usize) -> Self {
        Self {
            root: root.into(),
            files_scanned,
            modules: Vec::new(),
            providers: Vec::new(),
        }
    }

    /// Adds an entry to the section matching its kind
    pub fn add_entry(&mut self, entry: ReportEntry) {
        match entry.dependency.kind {
            DependencyKind::Module => self.modules.push(entry),
            DependencyKind::Provider => self.providers.push(entry),
        }
    }

    /// Entries of the given kind
    pub fn entries(&self, kind: DependencyKind) -> &[ReportEntry] {
        match kind {
            DependencyKind::Module => &self.modules,
            DependencyKind::Provider => &self.providers,
        }
    }

    /// All entries, modules first
    pub fn all_entries(&self) -> impl Iterator<Item = &ReportEntry> {
        self.modules.iter().chain(self.providers.iter())
    }

    /// Number of failed lookups
    pub fn error_count(&self) -> usize {
        self.all_entries().filter(|e| e.error().is_some()).count()
    }

    /// Number of outdated dependencies
    pub fn outdated_count(&self) -> usize {
        self.all_entries().filter(|e| e.is_outdated()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::ChangeKind;
    use semver::Version;

    fn found(v: &str) -> LatestVersion {
        LatestVersion::Found(Version::parse(v).unwrap())
    }

    #[test]
    fn test_resolved_entry_computes_status() {
        let entry = ReportEntry::resolved(Dependency::module("a/b/c", "1.0.0"), found("2.0.0"));
        assert_eq!(
            entry.status(),
            Some(UpdateStatus::Outdated(ChangeKind::Major))
        );
        assert!(entry.is_outdated());
        assert!(entry.error().is_none());
    }

    #[test]
    fn test_failed_entry() {
        let entry = ReportEntry::failed(Dependency::provider("aws", ""), "boom");
        assert_eq!(entry.error(), Some("boom"));
        assert!(entry.latest().is_none());
        assert!(!entry.is_outdated());
    }

    #[test]
    fn test_report_routes_entries_by_kind() {
        let mut report = ScanReport::new("/tf", 3);
        report.add_entry(ReportEntry::resolved(
            Dependency::module("a/b/c", "1.0.0"),
            found("1.0.0"),
        ));
        report.add_entry(ReportEntry::failed(Dependency::provider("x", ""), "err"));

        assert_eq!(report.entries(DependencyKind::Module).len(), 1);
        assert_eq!(report.entries(DependencyKind::Provider).len(), 1);
        assert_eq!(report.all_entries().count(), 2);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.outdated_count(), 0);
    }
}
