//! Client for the providers of one region

use log::debug;
use reqwest::Client;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::providers;
use crate::error::{Result, SecaError};
use crate::seca::client::ProviderClient;
use crate::seca::regions::{Provider, Region};
use crate::seca::resolver::RegionalResolver;
use crate::seca::traits::SecaResource;

/// Client for the regional providers advertised by a region descriptor
///
/// Holds one resolver per provider; each provider client is built the first
/// time it is needed.
pub struct RegionalClient {
    http: Client,
    token: String,
    region: Arc<RwLock<Region>>,
    workspace_api: RegionalResolver<ProviderClient>,
    compute_api: RegionalResolver<ProviderClient>,
    network_api: RegionalResolver<ProviderClient>,
    storage_api: RegionalResolver<ProviderClient>,
}

impl RegionalClient {
    /// Create a regional client sharing an existing connection pool
    pub fn new(http: Client, token: &str, region: Region) -> Self {
        let region = Arc::new(RwLock::new(region));
        Self {
            http,
            token: token.to_string(),
            workspace_api: RegionalResolver::new(region.clone()),
            compute_api: RegionalResolver::new(region.clone()),
            network_api: RegionalResolver::new(region.clone()),
            storage_api: RegionalResolver::new(region.clone()),
            region,
        }
    }

    /// Name of the region this client talks to
    pub fn region_name(&self) -> String {
        self.read_region().name().to_string()
    }

    /// Providers currently advertised by the region
    pub fn providers(&self) -> Vec<Provider> {
        self.read_region().providers().to_vec()
    }

    /// Shared region descriptor
    ///
    /// Updating it (e.g. after re-reading the region) affects providers that
    /// have not been resolved yet; resolved clients are kept.
    pub fn region(&self) -> Arc<RwLock<Region>> {
        self.region.clone()
    }

    fn read_region(&self) -> std::sync::RwLockReadGuard<'_, Region> {
        self.region.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn unresolvable_provider(&self, provider: &str) -> SecaError {
        let region = self.read_region();
        if region.provider(provider).is_some() {
            SecaError::Config(format!(
                "Provider '{}' is advertised by region '{}' but not supported by this client",
                provider,
                region.name()
            ))
        } else {
            SecaError::ProviderNotFound {
                provider: provider.to_string(),
                region: region.name().to_string(),
            }
        }
    }

    /// Client for a regional provider, built on first use
    pub async fn provider_client(&self, provider: &str) -> Result<&ProviderClient> {
        let resolver = match provider {
            providers::WORKSPACE => &self.workspace_api,
            providers::COMPUTE => &self.compute_api,
            providers::NETWORK => &self.network_api,
            providers::STORAGE => &self.storage_api,
            other => return Err(self.unresolvable_provider(other)),
        };

        let http = self.http.clone();
        let token = self.token.clone();
        resolver
            .get_client(provider, |url| async move {
                debug!("Building regional provider client for {}", url);
                ProviderClient::with_client(http, &url, &token)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seca::client::build_http_client;

    fn test_region() -> Region {
        Region::new(
            "eu-central-1",
            vec![
                Provider::new(
                    providers::WORKSPACE,
                    "http://h/providers/seca.workspace",
                    "v1",
                ),
                Provider::new(providers::COMPUTE, "http://h/providers/seca.compute", "v1"),
            ],
        )
    }

    #[tokio::test]
    async fn test_provider_client_uses_advertised_url() {
        let client = RegionalClient::new(build_http_client(), "t", test_region());

        let compute = client.provider_client(providers::COMPUTE).await.unwrap();
        assert_eq!(compute.endpoint(), "http://h/providers/seca.compute");

        let workspace = client.provider_client(providers::WORKSPACE).await.unwrap();
        assert_eq!(workspace.endpoint(), "http://h/providers/seca.workspace");
    }

    #[tokio::test]
    async fn test_provider_client_is_cached_per_provider() {
        let client = RegionalClient::new(build_http_client(), "t", test_region());

        let first = client.provider_client(providers::COMPUTE).await.unwrap() as *const _;
        let second = client.provider_client(providers::COMPUTE).await.unwrap() as *const _;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unadvertised_provider_not_found() {
        let client = RegionalClient::new(build_http_client(), "t", test_region());

        match client.provider_client(providers::NETWORK).await {
            Err(SecaError::ProviderNotFound { provider, region }) => {
                assert_eq!(provider, providers::NETWORK);
                assert_eq!(region, "eu-central-1");
            }
            other => panic!("Expected ProviderNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_provider_name_not_found() {
        let client = RegionalClient::new(build_http_client(), "t", test_region());
        let result = client.provider_client("seca.unknown").await;
        assert!(matches!(result, Err(SecaError::ProviderNotFound { .. })));
    }

    #[tokio::test]
    async fn test_advertised_but_unsupported_provider() {
        let mut region = test_region();
        region.spec.providers.push(Provider::new(
            "seca.authorization",
            "http://h/providers/seca.authorization",
            "v1",
        ));
        let client = RegionalClient::new(build_http_client(), "t", region);

        match client.provider_client("seca.authorization").await {
            Err(SecaError::Config(msg)) => {
                assert!(msg.contains("seca.authorization"));
                assert!(msg.contains("not supported"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_region_update_enables_provider() {
        let client = RegionalClient::new(build_http_client(), "t", test_region());
        assert!(client.provider_client(providers::STORAGE).await.is_err());

        client
            .region()
            .write()
            .unwrap()
            .spec
            .providers
            .push(Provider::new(
                providers::STORAGE,
                "http://h/providers/seca.storage",
                "v1",
            ));

        let storage = client.provider_client(providers::STORAGE).await.unwrap();
        assert_eq!(storage.endpoint(), "http://h/providers/seca.storage");
        assert_eq!(client.providers().len(), 3);
    }
}
