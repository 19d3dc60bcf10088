//! Workspace data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::seca::models::ResourceMetadata;
use crate::seca::traits::SecaResource;

/// Workspace from the workspace provider
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    pub metadata: ResourceMetadata,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// Provider-specific spec, kept opaque
    #[serde(default)]
    pub spec: serde_json::Value,
    #[serde(default)]
    pub status: Option<WorkspaceStatus>,
}

/// Workspace status
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceStatus {
    #[serde(default)]
    pub state: Option<String>,
}

impl SecaResource for Workspace {
    fn metadata(&self) -> &ResourceMetadata {
        &self.metadata
    }
}

impl Workspace {
    /// Get the lifecycle state, defaulting to "unknown" if not reported
    pub fn state(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.state.as_deref())
            .unwrap_or("unknown")
    }

    pub fn tenant(&self) -> &str {
        self.metadata.tenant.as_deref().unwrap_or("")
    }

    /// Labels rendered as "k=v" pairs
    pub fn label_pairs(&self) -> Vec<String> {
        self.labels
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect()
    }

    /// Check if workspace name contains the given filter (case-insensitive)
    pub fn matches_filter(&self, filter: &str) -> bool {
        self.name().to_lowercase().contains(&filter.to_lowercase())
    }
}
