//! CLI argument parsing module for tfridge
//!
//! `CliArgs` is what clap parses; `ScanConfig` is what the rest of the
//! program consumes. The conversion validates the root path.

use crate::error::ConfigError;
use crate::output::OutputConfig;
use crate::registry::{DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parse timeout string in format: N or Ns (seconds), Nm (minutes)
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty timeout string".to_string());
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60)
    } else {
        (s, 1)
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number in timeout: {}", num_str))?;

    if num == 0 {
        return Err("timeout must be greater than zero".to_string());
    }

    Ok(Duration::from_secs(num * multiplier))
}

/// Terraform module and provider version checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tfridge",
    version,
    about = "Scan a specified directory for Terraform module and provider updates"
)]
pub struct CliArgs {
    /// Directory (or single .tf file) to scan
    pub path: Option<PathBuf>,

    /// Enable verbose output (debug logging and a summary line)
    #[arg(long)]
    pub verbose: bool,

    /// Only report outdated dependencies and lookup errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Base URL of the Terraform registry
    #[arg(long, env = "TFRIDGE_REGISTRY_URL", default_value = DEFAULT_REGISTRY_URL)]
    pub registry_url: String,

    /// Timeout for each registry request (e.g., 30, 30s, 1m)
    #[arg(long, value_parser = parse_timeout, default_value = "30s")]
    pub timeout: Duration,
}

/// Validated configuration for one scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory or file to scan
    pub root: PathBuf,
    /// Registry base URL without trailing slash
    pub registry_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Output formatting options
    pub output: OutputConfig,
    /// Whether to draw a progress spinner
    pub show_progress: bool,
}

impl CliArgs {
    /// Validate the arguments and build the scan configuration
    pub fn into_config(self) -> Result<ScanConfig, ConfigError> {
        let root = self.path.ok_or(ConfigError::MissingPath)?;
        if !root.exists() {
            return Err(ConfigError::PathNotFound { path: root });
        }

        let registry_url = self.registry_url.trim_end_matches('/').to_string();
        if !(registry_url.starts_with("http://") || registry_url.starts_with("https://")) {
            return Err(ConfigError::InvalidRegistryUrl {
                value: self.registry_url,
            });
        }

        let output = OutputConfig::from_cli(self.json, self.verbose, self.quiet, !self.no_color);
        let show_progress = !self.no_progress && !self.json && !self.quiet;

        Ok(ScanConfig {
            root,
            registry_url,
            timeout: self.timeout,
            output,
            show_progress,
        })
    }
}

impl ScanConfig {
    /// Create a configuration with defaults for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            output: OutputConfig::default(),
            show_progress: false,
        }
    }

    /// Use a different registry base URL
    pub fn with_registry_url(mut self, url: &str) -> Self {
        self.registry_url = url.trim_end_matches('/').to_string();
        self
    }
}
