//! Region output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json};
use crate::cli::OutputFormat;
use crate::seca::{Region, SecaResource};

const HEADERS: [&str; 3] = ["Name", "Zones", "Providers"];

fn region_row(region: &Region) -> Vec<String> {
    let providers: Vec<&str> = region.providers().iter().map(|p| p.name.as_str()).collect();
    vec![
        region.name().to_string(),
        region.zones().join(", "),
        providers.join(", "),
    ]
}

/// Output regions in the specified format
pub fn output_regions(regions: &[Region], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => output_table(regions, no_header),
        OutputFormat::Csv => output_csv(regions, no_header),
        OutputFormat::Json => print_json(regions),
    }
}

fn output_table(regions: &[Region], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(HEADERS.to_vec());
    }

    for region in regions {
        table.add_row(region_row(region));
    }

    println!();
    println!("{table}");
    if !no_header {
        println!("\nTotal: {} regions", regions.len());
    }
}

fn output_csv(regions: &[Region], no_header: bool) {
    if !no_header {
        println!("name,zones,providers");
    }
    for region in regions {
        let row: Vec<String> = region_row(region).iter().map(|v| escape_csv(v)).collect();
        println!("{}", row.join(","));
    }
}
