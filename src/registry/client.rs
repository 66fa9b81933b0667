//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Bounded request timeout and User-Agent
//! - Status code checking (any non-2xx is an error carrying the code)
//! - JSON decoding with registry-aware error context
//!
//! Requests are made once; there is no retry.

use crate::error::RegistryError;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("tfridge/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with the default User-Agent and a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, RegistryError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                RegistryError::network_error(
                    "",
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { client, timeout })
    }

    /// Get the configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Perform a GET request, failing on any non-success status
    pub async fn get(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(package, registry)
            } else {
                RegistryError::network_error(package, registry, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} returned status {}: {}", registry, status, url);
            return Err(RegistryError::unexpected_status(
                package,
                registry,
                status.as_u16(),
            ));
        }

        Ok(response)
    }

    /// Perform a GET request and decode the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get(url, package, registry).await?;

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(package, registry)
            } else {
                RegistryError::invalid_response(
                    package,
                    registry,
                    format!("failed to parse JSON: {}", e),
                )
            }
        })
    }
}
