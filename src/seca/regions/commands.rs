//! Region and provider command handlers

use log::debug;

use crate::cli::{Cli, Command, GetResource};
use crate::output::{output_providers, output_regions};
use crate::seca::GlobalClient;
use crate::ui::{create_spinner, finish_spinner};

/// Run the region list/detail command
pub async fn run_region_command(
    client: &GlobalClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Region(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching regions...", cli.batch);

    let result = match &args.name {
        Some(name) => {
            debug!("Fetching region '{}'", name);
            client
                .get_region(name)
                .await
                .map(|region| region.map(|r| vec![r]))
        }
        None => client.get_regions().await.map(Some),
    };

    finish_spinner(spinner);

    let Some(regions) = result? else {
        let name = args.name.as_deref().unwrap_or_default();
        return Err(format!("Region '{}' not found", name).into());
    };
    debug!("Fetched {} regions", regions.len());

    output_regions(&regions, args.output, cli.no_header);
    Ok(())
}

/// Run the provider list command for one region
pub async fn run_provider_command(
    client: &GlobalClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Provider(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching region...", cli.batch);
    let result = client.regional_client(&args.region).await;
    finish_spinner(spinner);

    let regional = result?;
    let providers = regional.providers();
    debug!(
        "Region '{}' advertises {} providers",
        args.region,
        providers.len()
    );

    output_providers(&providers, args.output, cli.no_header);
    Ok(())
}
