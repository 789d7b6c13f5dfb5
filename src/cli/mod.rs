//! CLI argument parsing for citynet
//!
//! Global flags: --network, --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use citynet_core::format::OutputFormat;
use parse::{parse_frequency_entry, parse_output_format};

/// Citynet - city transportation network explorer
#[derive(Parser, Debug)]
#[command(name = "citynet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network file describing cities and roads (TOML, or JSON by extension)
    #[arg(long, short, global = true, env = "CITYNET_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. warn, debug, citynet_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the cities of the network in index order
    Cities,

    /// Show the network as adjacency lists and a distance matrix
    Map,

    /// Shortest route between two cities
    Path {
        /// Starting city
        from: String,

        /// Destination city
        to: String,
    },

    /// Depth-first route from a city
    Dfs {
        /// Starting city
        start: String,
    },

    /// Build a frequency merge tree and print it level by level
    Huffman {
        /// Entries as SYMBOL:WEIGHT, e.g. a:5 b:9
        #[arg(required = true, num_args = 1.., value_parser = parse_frequency_entry)]
        entries: Vec<(char, u64)>,
    },

    /// Insert city numbers into a balanced tree and print it level by level
    Avl {
        /// City numbers, inserted in the given order
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        keys: Vec<i64>,
    },
}
