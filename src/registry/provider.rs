//! Terraform provider registry adapter
//!
//! Fetches published provider versions.
//! API endpoint: {base}/v1/providers/{namespace}/{name}
//!
//! Providers declared without a namespace belong to `hashicorp`.

use crate::domain::DependencyKind;
use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;

/// Namespace assumed for providers declared by bare name
pub const DEFAULT_PROVIDER_NAMESPACE: &str = "hashicorp";

/// Provider registry adapter
pub struct ProviderRegistryAdapter {
    client: HttpClient,
    base_url: String,
}

/// Provider versions response
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    versions: Vec<String>,
}

/// Normalize a provider source to `namespace/name`
///
/// `name` gets the default namespace, `namespace/name` is kept, anything
/// else is rejected.
pub fn normalize_provider_source(source: &str) -> Result<String, RegistryError> {
    match source.matches('/').count() {
        0 => Ok(format!("{}/{}", DEFAULT_PROVIDER_NAMESPACE, source)),
        1 => Ok(source.to_string()),
        _ => Err(RegistryError::InvalidProviderFormat {
            source_id: source.to_string(),
        }),
    }
}

impl ProviderRegistryAdapter {
    /// Create a new provider adapter against the given registry base URL
    pub fn new(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a provider source
    fn build_url(&self, source: &str) -> Result<String, RegistryError> {
        let normalized = normalize_provider_source(source)?;
        Ok(format!(
            "{}/v1/{}/{}",
            self.base_url,
            DependencyKind::Provider.api_segment(),
            normalized
        ))
    }
}

#[async_trait]
impl RegistryAdapter for ProviderRegistryAdapter {
    fn registry_name(&self) -> &'static str {
        RegistryError::registry_name(DependencyKind::Provider)
    }

    async fn fetch_versions(&self, source: &str) -> Result<Vec<String>, RegistryError> {
        let url = self.build_url(source)?;
        let response: ProviderResponse = self
            .client
            .get_json(&url, source, self.registry_name())
            .await?;
        Ok(response.versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn adapter(base_url: &str) -> ProviderRegistryAdapter {
        ProviderRegistryAdapter::new(HttpClient::new().unwrap(), base_url)
    }

    #[test]
    fn test_provider_adapter_registry_name() {
        assert_eq!(
            adapter("http://x").registry_name(),
            "Terraform provider registry"
        );
    }

    #[test]
    fn test_normalize_bare_name() {
        assert_eq!(normalize_provider_source("aws").unwrap(), "hashicorp/aws");
    }

    #[test]
    fn test_normalize_namespaced() {
        assert_eq!(
            normalize_provider_source("myorg/custom").unwrap(),
            "myorg/custom"
        );
    }

    #[test]
    fn test_normalize_too_many_parts() {
        let err = normalize_provider_source("a/b/c").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidProviderFormat { .. }));
    }

    #[test]
    fn test_build_url() {
        assert_eq!(
            adapter("https://registry.terraform.io")
                .build_url("aws")
                .unwrap(),
            "https://registry.terraform.io/v1/providers/hashicorp/aws"
        );
    }

    #[tokio::test]
    async fn test_resolve_latest_for_bare_name() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/providers/hashicorp/aws")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"versions": ["5.0.0", "5.31.0", "4.67.0"]}"#)
            .create_async()
            .await;

        let latest = adapter(&server.url()).resolve_latest("aws").await.unwrap();

        mock.assert_async().await;
        assert_eq!(latest.to_string(), "5.31.0");
    }

    #[tokio::test]
    async fn test_invalid_format_makes_no_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let result = adapter(&server.url()).fetch_versions("a/b/c").await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(RegistryError::InvalidProviderFormat { .. })
        ));
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/providers/myorg/custom")
            .with_status(500)
            .create_async()
            .await;

        let result = adapter(&server.url()).resolve_latest("myorg/custom").await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(RegistryError::UnexpectedStatus { status: 500, .. })
        ));
    }
}
