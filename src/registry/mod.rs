//! Registry adapters for fetching Terraform version information
//!
//! This module provides:
//! - HTTP client shared foundation with a bounded timeout
//! - Module registry adapter
//! - Provider registry adapter
//! - `TerraformRegistry`, resolving the latest version of a declaration

mod client;
mod module;
mod provider;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use module::ModuleRegistryAdapter;
pub use provider::{
    normalize_provider_source, ProviderRegistryAdapter, DEFAULT_PROVIDER_NAMESPACE,
};

use crate::domain::{Dependency, DependencyKind};
use crate::error::RegistryError;
use crate::update::{select_latest, LatestVersion};
use async_trait::async_trait;

/// Public Terraform registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.terraform.io";

/// Trait for registry adapters
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the published version strings for a source
    async fn fetch_versions(&self, source: &str) -> Result<Vec<String>, RegistryError>;

    /// Fetch versions and select the highest valid semantic version
    async fn resolve_latest(&self, source: &str) -> Result<LatestVersion, RegistryError> {
        let versions = self.fetch_versions(source).await?;
        Ok(select_latest(&versions))
    }
}

/// Module and provider lookups against one registry
pub struct TerraformRegistry {
    modules: Box<dyn RegistryAdapter>,
    providers: Box<dyn RegistryAdapter>,
}

impl TerraformRegistry {
    /// Create a registry client for the given base URL
    pub fn new(client: HttpClient, base_url: &str) -> Self {
        Self {
            modules: Box::new(ModuleRegistryAdapter::new(client.clone(), base_url)),
            providers: Box::new(ProviderRegistryAdapter::new(client, base_url)),
        }
    }

    /// Create a registry client from custom adapters
    pub fn with_adapters(
        modules: Box<dyn RegistryAdapter>,
        providers: Box<dyn RegistryAdapter>,
    ) -> Self {
        Self { modules, providers }
    }

    /// Latest published version of a module source
    pub async fn resolve_latest_module_version(
        &self,
        source: &str,
    ) -> Result<LatestVersion, RegistryError> {
        self.modules.resolve_latest(source).await
    }

    /// Latest published version of a provider source
    pub async fn resolve_latest_provider_version(
        &self,
        source: &str,
    ) -> Result<LatestVersion, RegistryError> {
        self.providers.resolve_latest(source).await
    }

    /// Latest published version of a declaration of either kind
    pub async fn resolve(&self, dependency: &Dependency) -> Result<LatestVersion, RegistryError> {
        match dependency.kind {
            DependencyKind::Module => self.resolve_latest_module_version(&dependency.source).await,
            DependencyKind::Provider => {
                self.resolve_latest_provider_version(&dependency.source)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAdapter {
        versions: Vec<&'static str>,
    }

    #[async_trait]
    impl RegistryAdapter for FixedAdapter {
        fn registry_name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch_versions(&self, _source: &str) -> Result<Vec<String>, RegistryError> {
            Ok(self.versions.iter().map(|v| v.to_string()).collect())
        }
    }

    fn registry() -> TerraformRegistry {
        TerraformRegistry::with_adapters(
            Box::new(FixedAdapter {
                versions: vec!["1.0.0", "1.1.0"],
            }),
            Box::new(FixedAdapter {
                versions: vec!["5.0.0", "bogus"],
            }),
        )
    }

    #[tokio::test]
    async fn test_resolve_routes_by_kind() {
        let registry = registry();

        let module = registry
            .resolve(&Dependency::module("a/b/c", "1.0.0"))
            .await
            .unwrap();
        assert_eq!(module.to_string(), "1.1.0");

        let provider = registry
            .resolve(&Dependency::provider("aws", ""))
            .await
            .unwrap();
        assert_eq!(provider.to_string(), "5.0.0");
    }

    #[test]
    fn test_default_registry_url() {
        assert_eq!(DEFAULT_REGISTRY_URL, "https://registry.terraform.io");
    }
}
