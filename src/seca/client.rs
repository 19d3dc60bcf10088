//! HTTP client bound to a single provider endpoint

use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, SecaError};
use crate::seca::iterator::{Page, PagingIterator};
use crate::seca::traits::{ApiListResponse, PaginatedResponse};

/// Build the shared HTTP client with connection pool settings
pub fn build_http_client() -> Client {
    Client::builder()
        // Connection pool settings - reuse connections
        .pool_max_idle_per_host(20)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Client for one provider (region, workspace, compute, ...)
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Clone)]
pub struct ProviderClient {
    client: Client,
    token: String,
    endpoint: Url,
}

impl fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

impl ProviderClient {
    /// Create a provider client with its own connection pool
    pub fn new(endpoint: &str, token: &str) -> Result<Self> {
        Self::with_client(build_http_client(), endpoint, token)
    }

    /// Create a provider client sharing an existing connection pool
    ///
    /// Fails with `InvalidEndpoint` unless `endpoint` is an absolute http(s) URL.
    pub fn with_client(client: Client, endpoint: &str, token: &str) -> Result<Self> {
        let url = Url::parse(endpoint)
            .map_err(|e| SecaError::InvalidEndpoint(format!("'{}': {}", endpoint, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SecaError::InvalidEndpoint(format!(
                "'{}': unsupported scheme '{}'",
                endpoint,
                url.scheme()
            )));
        }

        Ok(Self {
            client,
            token: token.to_string(),
            endpoint: url,
        })
    }

    /// Provider base URL
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Build a full URL for an API path (e.g. "/v1/regions")
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let full = format!("{}{}", self.endpoint.as_str().trim_end_matches('/'), path);
        Url::parse(&full).map_err(|e| SecaError::InvalidEndpoint(format!("'{}': {}", full, e)))
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, api::ACCEPT)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: Url) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: Url) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Parse an API response, returning error for non-success status codes
    async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(SecaError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch one page of a listing
    ///
    /// The continuation token is passed through untouched as the `skipToken`
    /// query parameter; it is omitted for the first page.
    pub async fn list_page<T>(
        &self,
        path: &str,
        skip_token: Option<&str>,
        error_context: &str,
    ) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let mut url = self.url(path)?;
        if let Some(token) = skip_token {
            url.query_pairs_mut()
                .append_pair(api::SKIP_TOKEN_PARAM, token);
        }

        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(url).send().await?;
        let list: ApiListResponse<T> = self.parse_api_response(response, error_context).await?;
        let page = list.into_page();

        debug!(
            "{} page returned {} items (next token: {:?})",
            error_context,
            page.items.len(),
            page.next_token
        );
        Ok(page)
    }

    /// Build a lazy iterator over every page of a listing
    pub fn paginate<T>(&self, path: String, error_context: String) -> PagingIterator<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        PagingIterator::new(move |token: Option<String>| {
            let client = client.clone();
            let path = path.clone();
            let error_context = error_context.clone();
            async move {
                client
                    .list_page(&path, token.as_deref(), &error_context)
                    .await
            }
        })
    }

    /// Fetch a single resource by API path
    ///
    /// Returns `None` for 404 and an error for other non-success status codes.
    pub async fn fetch_resource<T>(&self, path: &str, resource_label: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(url).send().await?;

        match response.status().as_u16() {
            404 => Ok(None),
            _ => Ok(Some(
                self.parse_api_response(response, resource_label).await?,
            )),
        }
    }

    /// Delete a resource by API path
    ///
    /// Returns `true` when the deletion was accepted and `false` when the
    /// resource did not exist.
    pub async fn delete_resource(&self, path: &str, resource_label: &str) -> Result<bool> {
        let url = self.url(path)?;
        debug!("Deleting {} at: {}", resource_label, url);

        let response = self.delete(url).send().await?;

        match response.status().as_u16() {
            200 | 202 | 204 => Ok(true),
            404 => Ok(false),
            status => Err(SecaError::Api {
                status,
                message: format!("Failed to delete {}", resource_label),
            }),
        }
    }
}
