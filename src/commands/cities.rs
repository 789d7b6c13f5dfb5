//! `citynet cities` command - list cities in index order

use crate::cli::{Cli, OutputFormat};
use citynet_core::error::Result;
use citynet_core::graph::CityGraph;

/// Execute the cities command
pub fn execute(cli: &Cli, graph: &CityGraph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(graph.cities())?);
        }
        OutputFormat::Human => {
            if graph.is_empty() {
                if !cli.quiet {
                    println!("No cities");
                }
                return Ok(());
            }
            let names: Vec<&str> = graph.cities().iter().map(|c| c.name.as_str()).collect();
            println!("Cities: {}", names.join(", "));
        }
    }
    Ok(())
}
