//! Latest version selection
//!
//! Registry version lists may contain entries that are not valid semantic
//! versions. Those are dropped before selecting the highest version, and an
//! empty candidate set yields `LatestVersion::NotFound` rather than an error.

use semver::Version;
use std::fmt;
use tracing::debug;

/// Highest published version of a dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatestVersion {
    /// Highest valid semantic version in the registry
    Found(Version),
    /// Registry lists no valid semantic version
    NotFound,
}

impl LatestVersion {
    /// Returns the version if one was found
    pub fn version(&self) -> Option<&Version> {
        match self {
            LatestVersion::Found(v) => Some(v),
            LatestVersion::NotFound => None,
        }
    }

    /// Returns true if no valid version was found
    pub fn is_not_found(&self) -> bool {
        matches!(self, LatestVersion::NotFound)
    }
}

impl fmt::Display for LatestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatestVersion::Found(v) => write!(f, "{}", v),
            LatestVersion::NotFound => write!(f, "Not found"),
        }
    }
}

/// Parse a version string as a semantic version, tolerating a leading `v`
pub fn parse_version(version: &str) -> Option<Version> {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(trimmed).ok()
}

/// Select the highest valid semantic version from a registry version list
pub fn select_latest<S: AsRef<str>>(versions: &[S]) -> LatestVersion {
    let latest = versions
        .iter()
        .filter_map(|v| {
            let parsed = parse_version(v.as_ref());
            if parsed.is_none() {
                debug!("ignoring non-semver version '{}'", v.as_ref());
            }
            parsed
        })
        .max();

    match latest {
        Some(v) => LatestVersion::Found(v),
        None => LatestVersion::NotFound,
    }
}
