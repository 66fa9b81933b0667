//! Dependency kind definitions for Terraform declarations

use std::fmt;

/// Kind of a Terraform dependency declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DependencyKind {
    /// `module "<name>" { source = ... }` block
    Module,
    /// `provider "<name>"` declaration
    Provider,
}

impl DependencyKind {
    /// Returns the label used in report lines ("Module source: ...")
    pub fn display_name(&self) -> &'static str {
        match self {
            DependencyKind::Module => "Module",
            DependencyKind::Provider => "Provider",
        }
    }

    /// Returns the registry API path segment for this kind
    pub fn api_segment(&self) -> &'static str {
        match self {
            DependencyKind::Module => "modules",
            DependencyKind::Provider => "providers",
        }
    }

    /// Returns all dependency kinds in report order
    pub fn all() -> &'static [DependencyKind] {
        &[DependencyKind::Module, DependencyKind::Provider]
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
