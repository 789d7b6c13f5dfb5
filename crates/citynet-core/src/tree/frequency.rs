//! Frequency-weighted merge tree (Huffman-style construction)

use super::level_order::{LevelNode, NodeLabel};
use crate::config::Limits;
use crate::error::{CityNetError, Result};

/// Node of a merge tree. Leaves carry a symbol; merge nodes carry none and
/// weigh the sum of their two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyNode {
    symbol: Option<char>,
    weight: u64,
    left: Option<Box<FrequencyNode>>,
    right: Option<Box<FrequencyNode>>,
}

impl FrequencyNode {
    pub fn leaf(symbol: char, weight: u64) -> Self {
        Self {
            symbol: Some(symbol),
            weight,
            left: None,
            right: None,
        }
    }

    /// Combine two roots; fails when the summed weight does not fit in `u64`
    pub fn merge(left: FrequencyNode, right: FrequencyNode) -> Result<Self> {
        let weight = left.weight.checked_add(right.weight).ok_or_else(|| {
            CityNetError::invalid_value(
                "frequency weight",
                format!("{} + {} overflows", left.weight, right.weight),
            )
        })?;
        Ok(Self {
            symbol: None,
            weight,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        })
    }

    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn left(&self) -> Option<&FrequencyNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&FrequencyNode> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn node_count(&self) -> usize {
        1 + self.left().map_or(0, Self::node_count) + self.right().map_or(0, Self::node_count)
    }

    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.left().map_or(0, Self::leaf_count) + self.right().map_or(0, Self::leaf_count)
    }
}

impl LevelNode for FrequencyNode {
    fn label(&self) -> NodeLabel {
        match self.symbol {
            Some(c) => NodeLabel::Symbol(c),
            None => NodeLabel::Internal,
        }
    }

    fn left_child(&self) -> Option<&Self> {
        self.left()
    }

    fn right_child(&self) -> Option<&Self> {
        self.right()
    }
}

/// Builds merge trees, clamping oversized inputs to `max_entries`
#[derive(Debug, Clone, Copy)]
pub struct FrequencyTreeBuilder {
    max_entries: usize,
}

impl Default for FrequencyTreeBuilder {
    fn default() -> Self {
        Self::new(&Limits::default())
    }
}

impl FrequencyTreeBuilder {
    pub fn new(limits: &Limits) -> Self {
        Self {
            max_entries: limits.max_frequency_entries,
        }
    }

    /// Merge the two lightest live roots until one remains.
    ///
    /// The lighter root of each pair becomes the left child and the merged
    /// node takes its slot. Ties keep the earlier slot (strict `<` scan).
    #[tracing::instrument(skip_all, fields(entries = entries.len()))]
    pub fn build(&self, entries: &[(char, u64)]) -> Result<FrequencyNode> {
        if entries.is_empty() {
            return Err(CityNetError::invalid_value("frequency entries", "(none)"));
        }

        let entries = if entries.len() > self.max_entries {
            tracing::warn!(
                requested = entries.len(),
                limit = self.max_entries,
                "too many frequency entries, keeping the first {}",
                self.max_entries
            );
            &entries[..self.max_entries]
        } else {
            entries
        };

        let mut slots: Vec<Option<FrequencyNode>> = entries
            .iter()
            .map(|&(symbol, weight)| Some(FrequencyNode::leaf(symbol, weight)))
            .collect();

        for _ in 1..slots.len() {
            let (first, second) = two_lightest(&slots).ok_or_else(|| {
                CityNetError::Other("merge tree ran out of live roots".to_string())
            })?;
            let (Some(left), Some(right)) = (slots[first].take(), slots[second].take()) else {
                return Err(CityNetError::Other(
                    "merge tree selected an empty slot".to_string(),
                ));
            };
            tracing::trace!(left = left.weight, right = right.weight, "merging roots");
            slots[first] = Some(FrequencyNode::merge(left, right)?);
        }

        slots
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| CityNetError::Other("merge tree is empty".to_string()))
    }
}

/// Slot indices of the lightest and second-lightest live roots
fn two_lightest(slots: &[Option<FrequencyNode>]) -> Option<(usize, usize)> {
    let mut min1: Option<(usize, u64)> = None;
    let mut min2: Option<(usize, u64)> = None;

    for (i, slot) in slots.iter().enumerate() {
        let Some(node) = slot else { continue };
        let w = node.weight;
        if min1.is_none_or(|(_, m)| w < m) {
            min2 = min1;
            min1 = Some((i, w));
        } else if min2.is_none_or(|(_, m)| w < m) {
            min2 = Some((i, w));
        }
    }

    Some((min1?.0, min2?.0))
}

/// Build a merge tree with the default entry limit
pub fn build_frequency_tree(entries: &[(char, u64)]) -> Result<FrequencyNode> {
    FrequencyTreeBuilder::default().build(entries)
}
