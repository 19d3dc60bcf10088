//! Lazy, concurrency-safe resolution of provider clients
//!
//! A resolver constructs its client on first use and serves the cached
//! instance afterwards. Concurrent first callers wait on the one in-flight
//! construction instead of building their own client. Failed resolutions
//! (unknown provider, constructor error) are not cached.
//!
//! Two flavors exist:
//! - [`GlobalResolver`]: the requested name is the endpoint URL itself.
//! - [`RegionalResolver`]: the name is looked up in a shared [`Region`]
//!   descriptor to find the endpoint URL.

use log::debug;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::OnceCell;

use crate::error::{Result, SecaError};
use crate::seca::regions::Region;
use crate::seca::traits::SecaResource;

/// Resolution state of a resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    Unresolved,
    /// Terminal: a resolver never goes back to `Unresolved`
    Resolved,
}

/// Memoizing holder shared by both resolver flavors
///
/// Backed by a `OnceCell`: reads of a resolved value are lock-free, the
/// `Unresolved -> Resolved` transition runs under the cell's internal lock,
/// and an initializer that fails leaves the cell unset.
pub struct LazyResolvedClient<T> {
    /// Resolved client together with the key it was resolved for
    cell: OnceCell<(String, T)>,
}

impl<T> LazyResolvedClient<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn state(&self) -> ResolverState {
        if self.cell.initialized() {
            ResolverState::Resolved
        } else {
            ResolverState::Unresolved
        }
    }

    /// Name or endpoint the cached client was resolved for
    pub fn resolved_key(&self) -> Option<&str> {
        self.cell.get().map(|(key, _)| key.as_str())
    }

    /// Return the cached entry, or resolve the endpoint and construct the client
    ///
    /// `resolve_endpoint` and `construct` only run while holding the cell's
    /// lock, and only if no other caller has populated the cell meanwhile.
    async fn get_or_resolve<R, F, Fut>(
        &self,
        key: &str,
        resolve_endpoint: R,
        construct: F,
    ) -> Result<&(String, T)>
    where
        R: FnOnce() -> Result<String>,
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(entry) = self.cell.get() {
            return Ok(entry);
        }

        self.cell
            .get_or_try_init(|| async move {
                let endpoint = resolve_endpoint()?;
                debug!("Constructing client for '{}' at {}", key, endpoint);
                let client = construct(endpoint).await?;
                debug!("Client for '{}' resolved", key);
                Ok::<_, SecaError>((key.to_string(), client))
            })
            .await
    }
}

impl<T> Default for LazyResolvedClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolver for globally scoped providers, keyed by endpoint URL
pub struct GlobalResolver<T> {
    inner: LazyResolvedClient<T>,
}

impl<T> GlobalResolver<T> {
    pub fn new() -> Self {
        Self {
            inner: LazyResolvedClient::new(),
        }
    }

    pub fn state(&self) -> ResolverState {
        self.inner.state()
    }

    /// Get the client, constructing it from `endpoint` on first use
    ///
    /// Once resolved, the cached client is returned whatever `endpoint` is.
    pub async fn get_client<F, Fut>(&self, endpoint: &str, construct: F) -> Result<&T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let (_, client) = self
            .inner
            .get_or_resolve(endpoint, || Ok(endpoint.to_string()), construct)
            .await?;
        Ok(client)
    }
}

impl<T> Default for GlobalResolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolver for regional providers, keyed by provider name
///
/// The region descriptor is shared with the owning client and may be
/// updated by it; lookups always read the current contents.
pub struct RegionalResolver<T> {
    region: Arc<RwLock<Region>>,
    inner: LazyResolvedClient<T>,
}

impl<T> RegionalResolver<T> {
    pub fn new(region: Arc<RwLock<Region>>) -> Self {
        Self {
            region,
            inner: LazyResolvedClient::new(),
        }
    }

    pub fn state(&self) -> ResolverState {
        self.inner.state()
    }

    /// Provider name the cached client was resolved for
    pub fn resolved_provider(&self) -> Option<&str> {
        self.inner.resolved_key()
    }

    /// Get the client for `provider`, constructing it on first use
    ///
    /// A resolver serves exactly one provider: once resolved, asking for a
    /// different provider fails without touching the cached client.
    pub async fn get_client<F, Fut>(&self, provider: &str, construct: F) -> Result<&T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let (bound, client) = self
            .inner
            .get_or_resolve(provider, || self.provider_endpoint(provider), construct)
            .await?;

        if bound != provider {
            // Report an unknown provider as such before the binding conflict
            self.provider_endpoint(provider)?;
            return Err(SecaError::ResolverBound {
                bound: bound.clone(),
                requested: provider.to_string(),
            });
        }
        Ok(client)
    }

    /// Find the endpoint URL advertised for `provider`
    fn provider_endpoint(&self, provider: &str) -> Result<String> {
        let region = self.region.read().unwrap_or_else(PoisonError::into_inner);
        match region.provider(provider) {
            Some(p) => Ok(p.url.clone()),
            None => {
                debug!(
                    "Provider '{}' not advertised by region '{}'",
                    provider,
                    region.name()
                );
                Err(SecaError::ProviderNotFound {
                    provider: provider.to_string(),
                    region: region.name().to_string(),
                })
            }
        }
    }
}
