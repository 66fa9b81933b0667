//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Invalid command line input (fatal, before scanning)
//! - IoError: Directory walk failures (fatal)
//! - ManifestError: Issues reading a Terraform file
//! - RegistryError: Issues with Terraform registry communication (per entry)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DependencyKind;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Terraform file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to reading Terraform files
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read a Terraform file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Registry answered with a non-success status
    #[error("failed to fetch latest version of '{package}' from {registry}, status code: {status}")]
    UnexpectedStatus {
        package: String,
        registry: String,
        status: u16,
    },

    /// Network request failed
    #[error("failed to fetch '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },

    /// Provider source is neither `name` nor `namespace/name`
    #[error("provider format is incorrect: {source_id}")]
    InvalidProviderFormat { source_id: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No path argument was given
    #[error("Please specify a path to the directory you want to scan")]
    MissingPath,

    /// The path argument does not exist
    #[error("Path '{}' does not exist.", path.display())]
    PathNotFound { path: PathBuf },

    /// Registry URL is not an http(s) URL
    #[error("invalid registry URL '{value}': expected an http:// or https:// URL")]
    InvalidRegistryUrl { value: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Generic IO error
    #[error("IO error at {path}: {source}")]
    Generic {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl RegistryError {
    /// Creates a new UnexpectedStatus error
    pub fn unexpected_status(
        package: impl Into<String>,
        registry: impl Into<String>,
        status: u16,
    ) -> Self {
        RegistryError::UnexpectedStatus {
            package: package.into(),
            registry: registry.into(),
            status,
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Returns the registry name used in messages for this dependency kind
    pub fn registry_name(kind: DependencyKind) -> &'static str {
        match kind {
            DependencyKind::Module => "Terraform module registry",
            DependencyKind::Provider => "Terraform provider registry",
        }
    }
}

impl From<ManifestError> for IoError {
    fn from(err: ManifestError) -> Self {
        match err {
            ManifestError::ReadError { path, source } => IoError::Generic { path, source },
        }
    }
}

impl IoError {
    /// Creates a new Generic IO error
    pub fn generic(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Generic {
            path: path.into(),
            source,
        }
    }
}
