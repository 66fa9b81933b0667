//! tfridge - Terraform module and provider version checker library
//!
//! This library provides the core functionality for checking Terraform
//! declarations against the registry:
//! - Extracting `module` and `provider` declarations from `.tf` files
//! - Resolving the latest published version of each source
//! - Reporting current vs latest versions as text or JSON

pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod update;
