//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get regions
    #[command(visible_alias = "regions")]
    Region(RegionArgs),

    /// Get providers advertised by a region
    #[command(visible_alias = "providers")]
    Provider(ProviderArgs),

    /// Get workspaces of a tenant in a region
    #[command(visible_alias = "workspace", visible_alias = "workspaces")]
    Ws(WsArgs),
}

/// Arguments for 'get region' subcommand
#[derive(Parser, Debug)]
pub struct RegionArgs {
    /// Region name (if specified, shows details for that region)
    pub name: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get provider' subcommand
#[derive(Parser, Debug)]
pub struct ProviderArgs {
    /// Region whose providers to list
    #[arg(short, long)]
    pub region: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get ws' subcommand
#[derive(Parser, Debug)]
pub struct WsArgs {
    /// Workspace name (if specified, shows details for that workspace)
    pub name: Option<String>,

    /// Tenant owning the workspaces
    #[arg(short, long)]
    pub tenant: String,

    /// Region hosting the workspace provider
    #[arg(short, long)]
    pub region: String,

    /// Filter workspaces by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
