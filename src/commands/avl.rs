//! `citynet avl` command - balanced order tree, printed level by level

use crate::cli::{Cli, OutputFormat};
use crate::commands::render::level_lines;
use citynet_core::config::Limits;
use citynet_core::error::{CityNetError, Result};
use citynet_core::tree::{avl_insert_all, level_order};

/// Execute the avl command
pub fn execute(cli: &Cli, limits: &Limits, keys: &[i64]) -> Result<()> {
    if keys.is_empty() {
        return Err(CityNetError::invalid_value("city numbers", "(none)"));
    }
    if keys.len() > limits.max_order_keys {
        return Err(CityNetError::capacity_exceeded(
            "city numbers",
            limits.max_order_keys,
            keys.len(),
        ));
    }

    let tree = avl_insert_all(keys);
    let order = level_order(tree.root());

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "keys": tree.keys(),
                "height": tree.height(),
                "level_order": order,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Order tree (height {}):", tree.height());
            }
            for line in level_lines(&order) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
