//! Recursive Terraform file discovery
//!
//! Features:
//! - Visits every `.tf` file under a root path
//! - Skips directories whose name starts with `.` (`.terraform`, `.git`, ...)
//! - Merges declarations with last-write-wins per source

use crate::domain::DeclarationSet;
use crate::error::IoError;
use crate::manifest::TerraformParser;
use std::path::Path;
use tracing::debug;

/// File extension recognized as Terraform configuration (case-sensitive)
pub const TERRAFORM_EXTENSION: &str = "tf";

/// Declarations collected from a directory tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Module and provider declarations
    pub declarations: DeclarationSet,
    /// Number of `.tf` files read
    pub files_scanned: usize,
}

/// Scan a directory tree (or a single file) for Terraform declarations
///
/// The first I/O error aborts the scan; no partial result is returned.
pub fn scan_tree(root: &Path) -> Result<ScanResult, IoError> {
    let mut result = ScanResult::default();
    let metadata = std::fs::metadata(root).map_err(|e| IoError::generic(root, e))?;

    if metadata.is_dir() {
        walk_dir(root, &mut result)?;
    } else if is_terraform_file(root) {
        scan_file(root, &mut result)?;
    }

    debug!(
        "scanned {} file(s), found {} declaration(s)",
        result.files_scanned,
        result.declarations.len()
    );
    Ok(result)
}

fn walk_dir(dir: &Path, result: &mut ScanResult) -> Result<(), IoError> {
    let mut entries = std::fs::read_dir(dir)
        .map_err(|e| IoError::generic(dir, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| IoError::generic(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| IoError::generic(&path, e))?;

        if file_type.is_dir() {
            if is_hidden(&path) {
                debug!("skipping hidden directory {}", path.display());
                continue;
            }
            walk_dir(&path, result)?;
        } else if is_terraform_file(&path) {
            scan_file(&path, result)?;
        }
    }

    Ok(())
}

fn scan_file(path: &Path, result: &mut ScanResult) -> Result<(), IoError> {
    let dependencies = TerraformParser.parse_file(path)?;
    result.declarations.extend(dependencies);
    result.files_scanned += 1;
    Ok(())
}

/// Check if a path's final component starts with `.`
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

/// Check if a path has the Terraform extension
pub fn is_terraform_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == TERRAFORM_EXTENSION)
        .unwrap_or(false)
}
