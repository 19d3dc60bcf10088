//! Region module

mod api;
mod commands;
mod models;

pub use commands::{run_provider_command, run_region_command};
pub use models::{Provider, Region, RegionSpec};
