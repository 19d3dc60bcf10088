//! Common traits for control plane resources

use serde::Deserialize;

use crate::seca::iterator::Page;
use crate::seca::models::ResourceMetadata;

/// Common trait for all resources (regions, workspaces, ...)
///
/// Every resource exposes a metadata block, so name, provider and resource
/// version lookups are provided on top of it.
pub trait SecaResource {
    /// Get the resource metadata
    fn metadata(&self) -> &ResourceMetadata;

    /// Get the resource name
    fn name(&self) -> &str {
        &self.metadata().name
    }

    /// Get the name of the provider that owns this resource
    fn provider_name(&self) -> Option<&str> {
        self.metadata().provider.as_deref()
    }

    /// Get the server-assigned resource version
    fn resource_version(&self) -> Option<&str> {
        self.metadata().resource_version.as_deref()
    }

    /// Check if the resource name matches exactly
    fn matches(&self, input: &str) -> bool {
        self.name() == input
    }
}

/// Trait for API responses that contain one page of a listing
pub trait PaginatedResponse<T> {
    /// Consume self and return the page
    fn into_page(self) -> Page<T>;
}

/// Generic list envelope: `{"items": [...], "metadata": {"skipToken": "..."}}`
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub metadata: Option<ListMetadata>,
}

/// Listing metadata carrying the continuation token
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadata {
    #[serde(default)]
    pub skip_token: Option<String>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_page(self) -> Page<T> {
        let next_token = self
            .metadata
            .and_then(|m| m.skip_token)
            .filter(|t| !t.is_empty());
        Page::new(self.items, next_token)
    }
}
