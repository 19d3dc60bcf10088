//! Region API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, SecaError};
use crate::seca::iterator::PagingIterator;
use crate::seca::regional::RegionalClient;
use crate::seca::GlobalClient;

use super::models::Region;

impl GlobalClient {
    /// List all regions, fetching pages lazily
    pub async fn list_regions(&self) -> Result<PagingIterator<Region>> {
        let region_api = self.region_api().await?;
        let path = format!("{}/{}", api::VERSION_PREFIX, api::REGIONS);
        Ok(region_api.paginate(path, "regions".to_string()))
    }

    /// Get all regions
    pub async fn get_regions(&self) -> Result<Vec<Region>> {
        self.list_regions().await?.all().await
    }

    /// Get a single region by name
    pub async fn get_region(&self, name: &str) -> Result<Option<Region>> {
        let region_api = self.region_api().await?;
        let path = format!(
            "{}/{}/{}",
            api::VERSION_PREFIX,
            api::REGIONS,
            urlencoding::encode(name)
        );
        region_api
            .fetch_resource(&path, &format!("region '{}'", name))
            .await
    }

    /// Build a client for the providers of a region
    ///
    /// Fetches the region descriptor once; provider clients are built lazily
    /// by the returned client.
    pub async fn regional_client(&self, name: &str) -> Result<RegionalClient> {
        debug!("Resolving region '{}'", name);
        match self.get_region(name).await? {
            Some(region) => {
                debug!(
                    "Region '{}' advertises {} providers",
                    name,
                    region.providers().len()
                );
                Ok(RegionalClient::new(self.http().clone(), self.token(), region))
            }
            None => Err(SecaError::Api {
                status: 404,
                message: format!("Region '{}' not found", name),
            }),
        }
    }
}
