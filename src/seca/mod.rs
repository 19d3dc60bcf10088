//! Control plane client module
//!
//! Regions are listed through the global API; each region descriptor names
//! the regional providers and their endpoints. Provider clients are resolved
//! lazily and listings are consumed page by page.

mod client;
mod credentials;
mod global;
pub mod iterator;
mod models;
mod regional;
pub mod regions;
pub mod resolver;
pub mod scope;
pub mod traits;
pub mod workspaces;

pub use client::{build_http_client, ProviderClient};
pub use credentials::TokenResolver;
pub use global::GlobalClient;
pub use iterator::{Page, PagingIterator};
pub use models::ResourceMetadata;
pub use regional::RegionalClient;
pub use regions::{run_provider_command, run_region_command, Provider, Region, RegionSpec};
pub use resolver::{GlobalResolver, LazyResolvedClient, RegionalResolver, ResolverState};
pub use scope::{ResourceScope, ScopeField};
pub use traits::{ApiListResponse, PaginatedResponse, SecaResource};
pub use workspaces::{run_ws_command, Workspace, WorkspaceStatus};
