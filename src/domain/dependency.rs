//! Dependency declaration structures

use super::DependencyKind;
use std::fmt;

/// A module or provider declaration found in a Terraform file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Module source or provider name, as written
    pub source: String,
    /// Pinned version, empty when the declaration has none
    pub version: String,
    /// Whether this is a module or a provider
    pub kind: DependencyKind,
    /// 1-based line of the declaration within its file
    pub line: usize,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(
        kind: DependencyKind,
        source: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            version: version.into(),
            kind,
            line: 0,
        }
    }

    /// Creates a module dependency
    pub fn module(source: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(DependencyKind::Module, source, version)
    }

    /// Creates a provider dependency
    pub fn provider(source: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(DependencyKind::Provider, source, version)
    }

    /// Sets the declaration line (builder pattern)
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Returns true if a version is pinned
    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_version() {
            write!(f, "{}@{} [{}]", self.source, self.version, self.kind)
        } else {
            write!(f, "{} [{}]", self.source, self.kind)
        }
    }
}
