//! secactl - Main entry point

use clap::Parser;
use log::{debug, info};

use seca::config::defaults;
use seca::{
    run_provider_command, run_region_command, run_ws_command, Cli, Command, GetResource,
    GlobalClient, SecaError, TokenResolver,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting secactl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = cli.endpoint.clone().ok_or_else(|| {
        SecaError::Config(format!(
            "No API endpoint configured. Use --endpoint <URL> or set {}",
            defaults::ENDPOINT_ENV_VAR
        ))
    })?;
    debug!("Using global API endpoint: {}", endpoint);

    let token = TokenResolver::new(&endpoint).resolve(cli.token.as_deref())?;
    let client = GlobalClient::new(&endpoint, &token);

    let Command::Get { resource } = &cli.command;
    let result = match resource {
        GetResource::Region(_) => run_region_command(&client, &cli).await,
        GetResource::Provider(_) => run_provider_command(&client, &cli).await,
        GetResource::Ws(_) => run_ws_command(&client, &cli).await,
    };

    match &result {
        Ok(()) => info!("Completed successfully"),
        Err(_) => info!("Completed with errors"),
    }
    result
}
