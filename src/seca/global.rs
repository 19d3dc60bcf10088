//! Entry point client for the global API

use log::debug;
use reqwest::Client;

use crate::config::providers;
use crate::error::Result;
use crate::seca::client::{build_http_client, ProviderClient};
use crate::seca::resolver::GlobalResolver;

/// Client for the global (region-independent) API
///
/// Provider clients are built on first use and share one connection pool.
pub struct GlobalClient {
    http: Client,
    endpoint: String,
    token: String,
    region_api: GlobalResolver<ProviderClient>,
}

impl GlobalClient {
    /// Create a client for the global API at `endpoint`
    pub fn new(endpoint: &str, token: &str) -> Self {
        Self {
            http: build_http_client(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token: token.to_string(),
            region_api: GlobalResolver::new(),
        }
    }

    /// Global API endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// Client for the global region provider, built on first use
    pub(crate) async fn region_api(&self) -> Result<&ProviderClient> {
        let http = self.http.clone();
        let token = self.token.clone();
        self.region_api
            .get_client(&self.endpoint, |url| async move {
                debug!("Building {} provider client for {}", providers::REGION, url);
                ProviderClient::with_client(http, &url, &token)
            })
            .await
    }
}
