//! Region data models

use serde::{Deserialize, Serialize};

use crate::seca::models::ResourceMetadata;
use crate::seca::traits::SecaResource;

/// Region descriptor from the global region provider
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub metadata: ResourceMetadata,
    #[serde(default)]
    pub spec: RegionSpec,
}

/// Region spec: zones and the providers reachable in this region
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegionSpec {
    #[serde(default)]
    pub available_zones: Vec<String>,
    #[serde(default)]
    pub providers: Vec<Provider>,
}

/// Provider entry advertised by a region
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Provider {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub version: String,
}

impl Provider {
    pub fn new(name: &str, url: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            version: version.to_string(),
        }
    }
}

impl SecaResource for Region {
    fn metadata(&self) -> &ResourceMetadata {
        &self.metadata
    }
}

impl Region {
    /// Create a region descriptor with the given providers
    pub fn new(name: &str, providers: Vec<Provider>) -> Self {
        Self {
            metadata: ResourceMetadata::named(name),
            spec: RegionSpec {
                available_zones: Vec::new(),
                providers,
            },
        }
    }

    /// Look up a provider by name
    pub fn provider(&self, name: &str) -> Option<&Provider> {
        self.spec.providers.iter().find(|p| p.name == name)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.spec.providers
    }

    pub fn zones(&self) -> &[String] {
        &self.spec.available_zones
    }
}
