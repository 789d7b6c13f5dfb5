//! `citynet path` command - shortest route between two cities

use crate::cli::{Cli, OutputFormat};
use crate::commands::render::route;
use citynet_core::error::Result;
use citynet_core::graph::{shortest_path, CityGraph};

/// Execute the path command
pub fn execute(cli: &Cli, graph: &CityGraph, from: &str, to: &str) -> Result<()> {
    let result = shortest_path(graph, from, to)?;
    tracing::debug!(
        from,
        to,
        found = result.found,
        hops = result.path_length,
        "shortest path computed"
    );

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => match result.distance {
            Some(km) => {
                println!("Shortest distance: {} km", km);
                println!("Path: {}", route(&result.path));
            }
            None => {
                println!("No path between {} and {}", result.from, result.to);
            }
        },
    }
    Ok(())
}
