//! seca - Client SDK for a multi-provider cloud control plane
//!
//! The control plane is split into providers (`seca.region`,
//! `seca.workspace`, `seca.compute`, ...). The global API lists regions, and
//! every region descriptor advertises the endpoint of each regional provider.
//!
//! # Features
//!
//! - Lazy, page-by-page iteration over skip-token listings
//! - Provider clients resolved once per owner, safe under concurrent first use
//! - Region, provider and workspace listing
//! - `secactl` CLI with table, CSV and JSON output
//!
//! # Example
//!
//! ```bash
//! # List regions
//! secactl --endpoint https://api.example.com get regions
//!
//! # List providers of a region
//! secactl get providers --region eu-central-1
//!
//! # List workspaces of a tenant
//! secactl get ws --tenant acme --region eu-central-1 -o json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod seca;
pub mod ui;

pub use cli::{Cli, Command, GetResource, OutputFormat, ProviderArgs, RegionArgs, WsArgs};
pub use error::{Result, SecaError};
pub use seca::{
    run_provider_command, run_region_command, run_ws_command, GlobalClient, GlobalResolver,
    Page, PagingIterator, Provider, ProviderClient, Region, RegionalClient, RegionalResolver,
    ResourceScope, SecaResource, TokenResolver, Workspace,
};
