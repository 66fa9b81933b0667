//! Terraform module registry adapter
//!
//! Fetches published module versions.
//! API endpoint: {base}/v1/modules/{namespace}/{name}/{provider}
//!
//! A module source may address a submodule with `//path`; only the part
//! before `//` identifies the module in the registry.

use crate::domain::DependencyKind;
use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;

/// Module registry adapter
pub struct ModuleRegistryAdapter {
    client: HttpClient,
    base_url: String,
}

/// Module response; `description` and `source` are also sent but unused
#[derive(Debug, Deserialize)]
struct ModuleResponse {
    #[serde(default)]
    versions: Vec<String>,
}

impl ModuleRegistryAdapter {
    /// Create a new module adapter against the given registry base URL
    pub fn new(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Strip a `//submodule` suffix from a module source
    pub fn lookup_path(source: &str) -> &str {
        match source.find("//") {
            Some(idx) => &source[..idx],
            None => source,
        }
    }

    /// Build the URL for a module source
    fn build_url(&self, source: &str) -> String {
        format!(
            "{}/v1/{}/{}",
            self.base_url,
            DependencyKind::Module.api_segment(),
            Self::lookup_path(source)
        )
    }
}

#[async_trait]
impl RegistryAdapter for ModuleRegistryAdapter {
    fn registry_name(&self) -> &'static str {
        RegistryError::registry_name(DependencyKind::Module)
    }

    async fn fetch_versions(&self, source: &str) -> Result<Vec<String>, RegistryError> {
        let url = self.build_url(source);
        let response: ModuleResponse = self
            .client
            .get_json(&url, source, self.registry_name())
            .await?;
        Ok(response.versions)
    }
}
