//! Pinned-versus-latest classification

use super::{parse_version, LatestVersion};
use serde::Serialize;
use std::cmp::Ordering;

/// Semantic version change between the pinned and the latest version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
}

impl ChangeKind {
    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Major => "major",
            ChangeKind::Minor => "minor",
            ChangeKind::Patch => "patch",
        }
    }
}

/// How a pinned version relates to the latest published one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Pinned version equals the latest
    UpToDate,
    /// A newer version is published
    Outdated(ChangeKind),
    /// Pinned version is newer than anything published
    Ahead,
    /// Pinned version is empty, a constraint, or no latest is known
    Unknown,
}

impl UpdateStatus {
    /// Compare a pinned version string with the resolved latest version
    ///
    /// Only exact versions (optionally prefixed with `v` or `=`) are compared;
    /// constraint expressions such as `~> 5.0` yield `Unknown`.
    pub fn compare(current: &str, latest: &LatestVersion) -> Self {
        let Some(latest) = latest.version() else {
            return UpdateStatus::Unknown;
        };
        let current = current.trim();
        let current = current.strip_prefix('=').unwrap_or(current);
        let Some(current) = parse_version(current) else {
            return UpdateStatus::Unknown;
        };

        // Build metadata does not affect precedence.
        match current.cmp_precedence(latest) {
            Ordering::Equal => UpdateStatus::UpToDate,
            Ordering::Greater => UpdateStatus::Ahead,
            Ordering::Less => {
                let kind = if latest.major != current.major {
                    ChangeKind::Major
                } else if latest.minor != current.minor {
                    ChangeKind::Minor
                } else {
                    ChangeKind::Patch
                };
                UpdateStatus::Outdated(kind)
            }
        }
    }

    /// Machine-readable label
    pub fn label(&self) -> &'static str {
        match self {
            UpdateStatus::UpToDate => "up_to_date",
            UpdateStatus::Outdated(_) => "outdated",
            UpdateStatus::Ahead => "ahead",
            UpdateStatus::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    fn latest(v: &str) -> LatestVersion {
        LatestVersion::Found(Version::parse(v).unwrap())
    }

    #[test]
    fn test_up_to_date() {
        assert_eq!(
            UpdateStatus::compare("1.2.0", &latest("1.2.0")),
            UpdateStatus::UpToDate
        );
    }

    #[test]
    fn test_outdated_major_minor_patch() {
        assert_eq!(
            UpdateStatus::compare("1.2.0", &latest("2.0.0")),
            UpdateStatus::Outdated(ChangeKind::Major)
        );
        assert_eq!(
            UpdateStatus::compare("1.2.0", &latest("1.3.0")),
            UpdateStatus::Outdated(ChangeKind::Minor)
        );
        assert_eq!(
            UpdateStatus::compare("1.2.0", &latest("1.2.5")),
            UpdateStatus::Outdated(ChangeKind::Patch)
        );
    }

    #[test]
    fn test_prerelease_to_release_is_patch() {
        assert_eq!(
            UpdateStatus::compare("1.2.0-rc.1", &latest("1.2.0")),
            UpdateStatus::Outdated(ChangeKind::Patch)
        );
    }

    #[test]
    fn test_ahead() {
        assert_eq!(
            UpdateStatus::compare("3.0.0", &latest("2.9.0")),
            UpdateStatus::Ahead
        );
    }

    #[test]
    fn test_prefixed_exact_versions() {
        assert_eq!(
            UpdateStatus::compare("v1.0.0", &latest("1.0.0")),
            UpdateStatus::UpToDate
        );
        assert_eq!(
            UpdateStatus::compare("= 1.0.0", &latest("1.0.1")),
            UpdateStatus::Outdated(ChangeKind::Patch)
        );
    }

    #[test]
    fn test_unknown_cases() {
        assert_eq!(
            UpdateStatus::compare("", &latest("1.0.0")),
            UpdateStatus::Unknown
        );
        assert_eq!(
            UpdateStatus::compare("~> 5.0", &latest("5.1.0")),
            UpdateStatus::Unknown
        );
        assert_eq!(
            UpdateStatus::compare("1.0.0", &LatestVersion::NotFound),
            UpdateStatus::Unknown
        );
    }

    #[test]
    fn test_build_metadata_is_ignored() {
        assert_eq!(
            UpdateStatus::compare("1.0.0", &latest("1.0.0+build.5")),
            UpdateStatus::UpToDate
        );
        assert_eq!(
            UpdateStatus::compare("1.0.0+old", &latest("1.0.1+new")),
            UpdateStatus::Outdated(ChangeKind::Patch)
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(ChangeKind::Minor.label(), "minor");
        assert_eq!(UpdateStatus::UpToDate.label(), "up_to_date");
        assert_eq!(UpdateStatus::Outdated(ChangeKind::Major).label(), "outdated");
    }
}
