//! Core domain models for tfridge
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency kinds (module or provider)
//! - Dependency declarations extracted from Terraform files
//! - Accumulated declarations for a scan
//! - Report entries pairing declarations with registry lookups

mod declarations;
mod dependency;
mod kind;
mod report;

pub use declarations::DeclarationSet;
pub use dependency::Dependency;
pub use kind::DependencyKind;
pub use report::{LookupOutcome, ReportEntry, ScanReport};
