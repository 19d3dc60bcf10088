//! Output formatters for command results

mod common;
mod providers;
mod regions;
mod workspaces;

pub use common::{escape_csv, print_json};
pub use providers::output_providers;
pub use regions::output_regions;
pub use workspaces::output_workspaces;
