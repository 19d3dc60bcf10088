//! Workspace command handlers

use log::debug;

use crate::cli::{Cli, Command, GetResource};
use crate::output::output_workspaces;
use crate::seca::scope::ResourceScope;
use crate::seca::GlobalClient;
use crate::ui::{create_spinner, finish_spinner};

use super::Workspace;

/// Run the workspace list/detail command
pub async fn run_ws_command(
    client: &GlobalClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Ws(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let scope = ResourceScope::tenant(&args.tenant).with_region(&args.region);
    let spinner = create_spinner("Fetching workspaces...", cli.batch);

    let result = fetch_workspaces(client, &scope, args.name.as_deref()).await;
    finish_spinner(spinner);

    let mut workspaces = match result? {
        Some(workspaces) => workspaces,
        None => {
            let name = args.name.as_deref().unwrap_or_default();
            return Err(format!(
                "Workspace '{}' not found for tenant '{}' in region '{}'",
                name, args.tenant, args.region
            )
            .into());
        }
    };

    if let Some(filter) = &args.filter {
        workspaces.retain(|ws| ws.matches_filter(filter));
        debug!(
            "Filtered to {} workspaces matching '{}'",
            workspaces.len(),
            filter
        );
    }

    output_workspaces(&workspaces, &args.region, args.output, cli.no_header);
    Ok(())
}

/// Fetch one named workspace or all workspaces of the tenant
///
/// Returns `None` only when a named workspace does not exist.
async fn fetch_workspaces(
    client: &GlobalClient,
    scope: &ResourceScope,
    name: Option<&str>,
) -> crate::Result<Option<Vec<Workspace>>> {
    let region = scope.region.as_deref().unwrap_or_default();
    let regional = client.regional_client(region).await?;

    match name {
        Some(name) => {
            debug!("Fetching workspace '{}'", name);
            let scope = scope.clone().with_name(name);
            Ok(regional.get_workspace(&scope).await?.map(|ws| vec![ws]))
        }
        None => {
            let mut iter = regional.list_workspaces(scope).await?;
            let mut workspaces = Vec::new();
            while let Some(ws) = iter.next().await? {
                workspaces.push(ws);
            }
            debug!(
                "Fetched {} workspaces in {} pages",
                workspaces.len(),
                iter.pages_fetched()
            );
            Ok(Some(workspaces))
        }
    }
}
