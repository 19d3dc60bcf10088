//! CLI argument parsing

mod common;
mod get;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use get::{GetResource, ProviderArgs, RegionArgs, WsArgs};

/// Control plane CLI
#[derive(Parser, Debug)]
#[command(name = "secactl")]
#[command(version)]
#[command(about = "Explore regions, providers and workspaces of a cloud control plane", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Global API endpoint URL
    #[arg(short = 'e', long, env = defaults::ENDPOINT_ENV_VAR, global = true)]
    pub endpoint: Option<String>,

    /// API token (overrides env vars)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Batch mode - no spinners or interactive output
    #[arg(short, long, default_value_t = false, global = true)]
    pub batch: bool,

    /// Omit table/CSV headers
    #[arg(long, default_value_t = false, global = true)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
}
