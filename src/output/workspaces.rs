//! Workspace output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{escape_csv, print_json};
use crate::cli::OutputFormat;
use crate::seca::{SecaResource, Workspace};

/// Flattened workspace for structured output
#[derive(Serialize, Debug, PartialEq)]
struct WorkspaceRow {
    name: String,
    tenant: String,
    region: String,
    state: String,
    labels: String,
}

impl WorkspaceRow {
    fn new(ws: &Workspace, region: &str) -> Self {
        Self {
            name: ws.name().to_string(),
            tenant: ws.tenant().to_string(),
            region: region.to_string(),
            state: ws.state().to_string(),
            labels: ws.label_pairs().join(","),
        }
    }
}

/// Output workspaces in the specified format
pub fn output_workspaces(
    workspaces: &[Workspace],
    region: &str,
    format: OutputFormat,
    no_header: bool,
) {
    let rows: Vec<WorkspaceRow> = workspaces
        .iter()
        .map(|ws| WorkspaceRow::new(ws, region))
        .collect();

    match format {
        OutputFormat::Table => output_table(&rows, no_header),
        OutputFormat::Csv => output_csv(&rows, no_header),
        OutputFormat::Json => print_json(&rows),
    }
}

fn output_table(rows: &[WorkspaceRow], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["Name", "Tenant", "Region", "State", "Labels"]);
    }
    for row in rows {
        table.add_row(vec![
            &row.name,
            &row.tenant,
            &row.region,
            &row.state,
            &row.labels,
        ]);
    }

    println!();
    println!("{table}");
    if !no_header {
        println!("\nTotal: {} workspaces", rows.len());
    }
}

fn output_csv(rows: &[WorkspaceRow], no_header: bool) {
    if !no_header {
        println!("name,tenant,region,state,labels");
    }
    for row in rows {
        println!(
            "{},{},{},{},{}",
            escape_csv(&row.name),
            escape_csv(&row.tenant),
            escape_csv(&row.region),
            escape_csv(&row.state),
            escape_csv(&row.labels)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seca::ResourceMetadata;

    fn workspace() -> Workspace {
        let mut ws = Workspace {
            metadata: ResourceMetadata {
                name: "dev".to_string(),
                tenant: Some("acme".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        ws.labels.insert("env".to_string(), "dev".to_string());
        ws.labels.insert("team".to_string(), "core".to_string());
        ws
    }

    #[test]
    fn test_workspace_row() {
        let row = WorkspaceRow::new(&workspace(), "eu-1");
        assert_eq!(
            row,
            WorkspaceRow {
                name: "dev".to_string(),
                tenant: "acme".to_string(),
                region: "eu-1".to_string(),
                state: "unknown".to_string(),
                labels: "env=dev,team=core".to_string(),
            }
        );
    }

    #[test]
    fn test_workspace_row_json() {
        let json = serde_json::to_value(WorkspaceRow::new(&workspace(), "eu-1")).unwrap();
        assert_eq!(json["name"], "dev");
        assert_eq!(json["labels"], "env=dev,team=core");
    }

    #[test]
    fn test_output_workspaces_all_formats() {
        let workspaces = vec![workspace()];
        output_workspaces(&workspaces, "eu-1", OutputFormat::Table, false);
        output_workspaces(&workspaces, "eu-1", OutputFormat::Csv, true);
        output_workspaces(&workspaces, "eu-1", OutputFormat::Json, false);
    }
}
