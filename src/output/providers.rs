//! Provider output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, print_json};
use crate::cli::OutputFormat;
use crate::seca::Provider;

/// Output the providers of a region in the specified format
pub fn output_providers(providers: &[Provider], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["Name", "Version", "URL"]);
            }
            for p in providers {
                table.add_row(vec![&p.name, &p.version, &p.url]);
            }
            println!();
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("name,version,url");
            }
            for p in providers {
                println!(
                    "{},{},{}",
                    escape_csv(&p.name),
                    escape_csv(&p.version),
                    escape_csv(&p.url)
                );
            }
        }
        OutputFormat::Json => print_json(providers),
    }
}
