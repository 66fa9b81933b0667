//! Accumulated declarations for a single scan

use super::{Dependency, DependencyKind};
use std::collections::BTreeMap;

/// Module and provider declarations keyed by source identifier
///
/// Later declarations of the same source replace earlier ones. Keys are kept
/// sorted so iteration order is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationSet {
    modules: BTreeMap<String, Dependency>,
    providers: BTreeMap<String, Dependency>,
}

impl DeclarationSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a declaration, replacing any previous one with the same source
    pub fn insert(&mut self, dependency: Dependency) {
        let map = match dependency.kind {
            DependencyKind::Module => &mut self.modules,
            DependencyKind::Provider => &mut self.providers,
        };
        map.insert(dependency.source.clone(), dependency);
    }

    /// Inserts every declaration from an iterator
    pub fn extend(&mut self, dependencies: impl IntoIterator<Item = Dependency>) {
        for dep in dependencies {
            self.insert(dep);
        }
    }

    /// Module declarations sorted by source
    pub fn modules(&self) -> impl Iterator<Item = &Dependency> {
        self.modules.values()
    }

    /// Provider declarations sorted by source
    pub fn providers(&self) -> impl Iterator<Item = &Dependency> {
        self.providers.values()
    }

    /// Declarations of the given kind sorted by source
    pub fn of_kind(&self, kind: DependencyKind) -> impl Iterator<Item = &Dependency> {
        match kind {
            DependencyKind::Module => self.modules.values(),
            DependencyKind::Provider => self.providers.values(),
        }
    }

    /// Pinned version of a module source, if declared
    pub fn module_version(&self, source: &str) -> Option<&str> {
        self.modules.get(source).map(|d| d.version.as_str())
    }

    /// Pinned version of a provider source, if declared
    pub fn provider_version(&self, source: &str) -> Option<&str> {
        self.providers.get(source).map(|d| d.version.as_str())
    }

    /// Total number of unique declarations
    pub fn len(&self) -> usize {
        self.modules.len() + self.providers.len()
    }

    /// Returns true if nothing was declared
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
