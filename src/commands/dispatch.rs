//! Command dispatch logic for citynet
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use citynet_core::bail_usage;
use citynet_core::config::{GlobalConfig, Limits, NetworkFile};
use citynet_core::error::Result;
use citynet_core::graph::CityGraph;

pub fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let global = GlobalConfig::load()?;
    citynet_core::trace_time!(start, "load_global_config");

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Cities) => {
            let graph = load_graph(cli, &global)?;
            commands::cities::execute(cli, &graph)
        }

        Some(Commands::Map) => {
            let graph = load_graph(cli, &global)?;
            commands::map::execute(cli, &graph)
        }

        Some(Commands::Path { from, to }) => {
            let graph = load_graph(cli, &global)?;
            commands::path::execute(cli, &graph, from, to)
        }

        Some(Commands::Dfs { start: city }) => {
            let graph = load_graph(cli, &global)?;
            commands::dfs::execute(cli, &graph, city)
        }

        Some(Commands::Huffman { entries }) => {
            let limits = network_limits(cli, &global)?;
            commands::huffman::execute(cli, &limits, entries)
        }

        Some(Commands::Avl { keys }) => {
            let limits = network_limits(cli, &global)?;
            commands::avl::execute(cli, &limits, keys)
        }
    }
}

fn handle_no_command() -> Result<()> {
    println!("citynet - city transportation network explorer");
    println!();
    println!("Run `citynet --help` for usage information.");
    Ok(())
}

/// Load the network named by `--network` and build its graph
fn load_graph(cli: &Cli, global: &GlobalConfig) -> Result<CityGraph> {
    let Some(path) = cli.network.as_deref() else {
        bail_usage!("no network loaded; pass --network <file>");
    };

    let start = Instant::now();
    let network = NetworkFile::load(path)?;
    let limits = network.effective_limits(global);
    let graph = CityGraph::from_network(&network, &limits)?;

    tracing::debug!(
        cities = graph.len(),
        roads = graph.road_count(),
        "network graph built"
    );
    citynet_core::trace_time!(start, "load_graph");
    Ok(graph)
}

/// Limits for the tree commands: a network file's own `[limits]` when one is
/// given, the global config otherwise.
fn network_limits(cli: &Cli, global: &GlobalConfig) -> Result<Limits> {
    match cli.network.as_deref() {
        Some(path) => Ok(NetworkFile::load(path)?.effective_limits(global)),
        None => Ok(global.limits),
    }
}
