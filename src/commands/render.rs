//! Shared human-readable rendering helpers

use citynet_core::tree::LevelOrder;

/// One line per depth, nodes joined by a single space
pub(crate) fn level_lines(order: &LevelOrder) -> Vec<String> {
    order
        .layers()
        .map(|layer| {
            layer
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// `A -> B -> C`
pub(crate) fn route(names: &[String]) -> String {
    names.join(" -> ")
}
