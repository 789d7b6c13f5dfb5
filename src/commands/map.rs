//! `citynet map` command - adjacency lists and the distance matrix

use crate::cli::{Cli, OutputFormat};
use citynet_core::error::Result;
use citynet_core::graph::CityGraph;

/// Width of one matrix column; names are cut to three characters
const CELL_WIDTH: usize = 6;
const HEADER_NAME_CHARS: usize = 3;

/// Execute the map command
pub fn execute(cli: &Cli, graph: &CityGraph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(graph)?);
        }
        OutputFormat::Human => {
            if graph.is_empty() {
                if !cli.quiet {
                    println!("No cities");
                }
                return Ok(());
            }

            if !cli.quiet {
                println!("Adjacency list:");
            }
            for line in adjacency_lines(graph) {
                println!("{}", line);
            }

            println!();
            if !cli.quiet {
                println!("Distance matrix:");
            }
            for line in matrix_lines(graph) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// `A -> B(5km) -> C(2km) -> NULL`, neighbours newest first
fn adjacency_lines(graph: &CityGraph) -> Vec<String> {
    graph
        .cities()
        .iter()
        .map(|city| {
            let mut line = city.name.clone();
            for neighbor in graph.neighbors(city.index) {
                let name = graph
                    .city(neighbor.city)
                    .map_or("?", |c| c.name.as_str());
                line.push_str(&format!(" -> {}({}km)", name, neighbor.distance));
            }
            line.push_str(" -> NULL");
            line
        })
        .collect()
}

fn short_name(name: &str) -> String {
    name.chars().take(HEADER_NAME_CHARS).collect()
}

fn matrix_lines(graph: &CityGraph) -> Vec<String> {
    let mut lines = Vec::with_capacity(graph.len() + 1);

    let mut header = " ".repeat(CELL_WIDTH);
    for city in graph.cities() {
        header.push_str(&format!("{:<width$}", short_name(&city.name), width = CELL_WIDTH));
    }
    lines.push(header.trim_end().to_string());

    for city in graph.cities() {
        let mut row = format!("{:<width$}", short_name(&city.name), width = CELL_WIDTH);
        for cell in graph.matrix_row(city.index) {
            row.push_str(&format!("{:<width$}", cell.to_string(), width = CELL_WIDTH));
        }
        lines.push(row.trim_end().to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use citynet_core::config::{Limits, RoadSpec};

    fn graph() -> CityGraph {
        CityGraph::build(
            &["Amsterdam", "Berlin", "C"],
            &[
                RoadSpec::new("Amsterdam", "Berlin", 5),
                RoadSpec::new("Amsterdam", "C", 2),
            ],
            &Limits::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_adjacency_lines_newest_first() {
        let lines = adjacency_lines(&graph());
        assert_eq!(
            lines,
            vec![
                "Amsterdam -> C(2km) -> Berlin(5km) -> NULL",
                "Berlin -> Amsterdam(5km) -> NULL",
                "C -> Amsterdam(2km) -> NULL",
            ]
        );
    }

    #[test]
    fn test_matrix_lines() {
        let lines = matrix_lines(&graph());
        assert_eq!(lines[0], "      Ams   Ber   C");
        assert_eq!(lines[1], "Ams   0     5     2");
        assert_eq!(lines[2], "Ber   5     0     INF");
        assert_eq!(lines[3], "C     2     INF   0");
    }

    #[test]
    fn test_short_name_counts_chars() {
        assert_eq!(short_name("Zürich"), "Zür");
        assert_eq!(short_name("A"), "A");
    }
}
