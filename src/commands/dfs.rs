//! `citynet dfs` command - depth-first route from a city

use crate::cli::{Cli, OutputFormat};
use crate::commands::render::route;
use citynet_core::error::Result;
use citynet_core::graph::{depth_first_order, CityGraph};

/// Execute the dfs command
pub fn execute(cli: &Cli, graph: &CityGraph, start: &str) -> Result<()> {
    let result = depth_first_order(graph, start)?;
    tracing::debug!(start, visited = result.order.len(), "depth-first walk done");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            println!("DFS route: {}", route(&result.order));
            if !cli.quiet {
                println!("Cities: {}", result.order.join(", "));
            }
        }
    }
    Ok(())
}
