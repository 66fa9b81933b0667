//! Version comparison logic
//!
//! This module provides:
//! - Latest version selection from a registry version list
//! - Classification of a pinned version against the latest one

mod latest;
mod status;

pub use latest::{parse_version, select_latest, LatestVersion};
pub use status::{ChangeKind, UpdateStatus};
