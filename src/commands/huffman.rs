//! `citynet huffman` command - frequency merge tree, printed level by level

use crate::cli::{Cli, OutputFormat};
use crate::commands::render::level_lines;
use citynet_core::config::Limits;
use citynet_core::error::Result;
use citynet_core::tree::{level_order, FrequencyTreeBuilder};

/// Execute the huffman command
pub fn execute(cli: &Cli, limits: &Limits, entries: &[(char, u64)]) -> Result<()> {
    let root = FrequencyTreeBuilder::new(limits).build(entries)?;
    let order = level_order(Some(&root));

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "weight": root.weight(),
                "nodes": root.node_count(),
                "leaves": root.leaf_count(),
                "level_order": order,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Merge tree (total weight {}):", root.weight());
            }
            for line in level_lines(&order) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
