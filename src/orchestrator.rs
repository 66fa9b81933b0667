//! Scan orchestrator coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: walk → extract → resolve → classify
//! - Sequential registry lookups, modules first, then providers
//! - Per-entry error capture so one failed lookup never stops the run

use crate::cli::ScanConfig;
use crate::domain::{DependencyKind, ReportEntry, ScanReport};
use crate::error::{IoError, RegistryError};
use crate::manifest::scan_tree;
use crate::progress::Progress;
use crate::registry::{HttpClient, TerraformRegistry};
use tracing::debug;

/// Orchestrator for a single scan
pub struct Orchestrator {
    /// Scan configuration
    config: ScanConfig,
    /// Registry used for lookups
    registry: TerraformRegistry,
}

impl Orchestrator {
    /// Create a new orchestrator talking to the configured registry
    pub fn new(config: ScanConfig) -> Result<Self, RegistryError> {
        let client = HttpClient::with_timeout(config.timeout)?;
        let registry = TerraformRegistry::new(client, &config.registry_url);
        Ok(Self { config, registry })
    }

    /// Create an orchestrator with a custom registry (for testing)
    pub fn with_registry(config: ScanConfig, registry: TerraformRegistry) -> Self {
        Self { config, registry }
    }

    /// Get the scan configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run the scan
    pub async fn run(&self) -> Result<ScanReport, IoError> {
        self.run_with_progress(self.config.show_progress).await
    }

    /// Run the scan with optional progress display
    ///
    /// Only a walk failure is returned as an error. Registry failures are
    /// recorded on the affected entry.
    pub async fn run_with_progress(&self, show_progress: bool) -> Result<ScanReport, IoError> {
        let mut progress = Progress::new(show_progress);

        // Step 1: Walk the tree and collect declarations
        progress.spinner("Scanning Terraform files...");
        let scan = scan_tree(&self.config.root);
        progress.finish_and_clear();
        let scan = scan?;

        let mut report = ScanReport::new(&self.config.root, scan.files_scanned);
        let declarations = scan.declarations;

        // Step 2: Resolve each unique source, one request at a time
        progress.start(declarations.len() as u64, "Resolving latest versions");
        for kind in DependencyKind::all() {
            for dependency in declarations.of_kind(*kind) {
                progress.set_message(&dependency.source);

                let entry = match self.registry.resolve(dependency).await {
                    Ok(latest) => {
                        debug!("{}: latest is {}", dependency, latest);
                        ReportEntry::resolved(dependency.clone(), latest)
                    }
                    Err(e) => {
                        debug!("{}: lookup failed: {}", dependency, e);
                        ReportEntry::failed(dependency.clone(), e.to_string())
                    }
                };
                report.add_entry(entry);
                progress.inc();
            }
        }
        progress.finish_and_clear();

        Ok(report)
    }
}
