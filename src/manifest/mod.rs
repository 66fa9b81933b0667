//! Terraform file discovery and extraction
//!
//! This module provides functionality to:
//! - Walk a directory tree for `.tf` files
//! - Extract module and provider declarations from each file

mod terraform;
mod walker;

pub use terraform::TerraformParser;
pub use walker::{is_hidden, is_terraform_file, scan_tree, ScanResult, TERRAFORM_EXTENSION};
