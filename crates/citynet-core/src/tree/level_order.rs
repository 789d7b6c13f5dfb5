//! Breadth-first, layer-by-layer walk shared by both tree kinds

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

/// Where a node sits relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Root,
    Left,
    Right,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Root => Ok(()),
            Position::Left => write!(f, "L"),
            Position::Right => write!(f, "R"),
        }
    }
}

/// What a node shows when emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum NodeLabel {
    /// Leaf of a frequency tree
    Symbol(char),
    /// Merge node of a frequency tree
    Internal,
    /// Order-tree key
    Key(i64),
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Symbol(c) => write!(f, "{}", c),
            NodeLabel::Internal => write!(f, "*"),
            NodeLabel::Key(k) => write!(f, "{}", k),
        }
    }
}

/// Capability set the emitter needs from a binary tree node
pub trait LevelNode {
    fn label(&self) -> NodeLabel;
    fn left_child(&self) -> Option<&Self>;
    fn right_child(&self) -> Option<&Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelEntry {
    pub label: NodeLabel,
    pub position: Position,
    pub depth: usize,
}

impl fmt::Display for LevelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label, self.position)
    }
}

/// FIFO walk over a tree, one `LevelEntry` per node.
///
/// `current_layer` counts nodes still to be emitted at the present depth and
/// `next_layer` counts children queued for the one below; when the first
/// reaches zero the depth advances. Not restartable: the queue is drained as
/// the iterator is consumed.
pub struct LevelOrderEmitter<'a, N: LevelNode> {
    queue: VecDeque<(&'a N, Position)>,
    current_layer: usize,
    next_layer: usize,
    depth: usize,
}

impl<'a, N: LevelNode> LevelOrderEmitter<'a, N> {
    pub fn new(root: Option<&'a N>) -> Self {
        let mut queue = VecDeque::new();
        if let Some(root) = root {
            queue.push_back((root, Position::Root));
        }
        Self {
            current_layer: queue.len(),
            queue,
            next_layer: 0,
            depth: 0,
        }
    }
}

impl<'a, N: LevelNode> Iterator for LevelOrderEmitter<'a, N> {
    type Item = LevelEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, position) = self.queue.pop_front()?;
        let entry = LevelEntry {
            label: node.label(),
            position,
            depth: self.depth,
        };

        if let Some(left) = node.left_child() {
            self.queue.push_back((left, Position::Left));
            self.next_layer += 1;
        }
        if let Some(right) = node.right_child() {
            self.queue.push_back((right, Position::Right));
            self.next_layer += 1;
        }

        self.current_layer -= 1;
        if self.current_layer == 0 {
            self.current_layer = self.next_layer;
            self.next_layer = 0;
            self.depth += 1;
        }

        Some(entry)
    }
}

/// Fully drained level-order walk: the flat entry sequence plus the index
/// one past the last entry of each layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelOrder {
    pub entries: Vec<LevelEntry>,
    pub layer_ends: Vec<usize>,
}

impl LevelOrder {
    pub fn of<N: LevelNode>(root: Option<&N>) -> Self {
        let mut entries: Vec<LevelEntry> = Vec::new();
        let mut layer_ends = Vec::new();

        for entry in LevelOrderEmitter::new(root) {
            if entries.last().is_some_and(|prev| prev.depth != entry.depth) {
                layer_ends.push(entries.len());
            }
            entries.push(entry);
        }
        if !entries.is_empty() {
            layer_ends.push(entries.len());
        }

        Self {
            entries,
            layer_ends,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries grouped by depth, root layer first
    pub fn layers(&self) -> impl Iterator<Item = &[LevelEntry]> + '_ {
        let starts = std::iter::once(0).chain(self.layer_ends.iter().copied());
        starts
            .zip(self.layer_ends.iter().copied())
            .map(move |(start, end)| &self.entries[start..end])
    }
}

/// Convenience wrapper over `LevelOrder::of`
pub fn level_order<N: LevelNode>(root: Option<&N>) -> LevelOrder {
    LevelOrder::of(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node {
        key: i64,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    }

    fn node(key: i64, left: Option<Node>, right: Option<Node>) -> Node {
        Node {
            key,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    impl LevelNode for Node {
        fn label(&self) -> NodeLabel {
            NodeLabel::Key(self.key)
        }
        fn left_child(&self) -> Option<&Self> {
            self.left.as_deref()
        }
        fn right_child(&self) -> Option<&Self> {
            self.right.as_deref()
        }
    }

    fn rendered(order: &LevelOrder) -> Vec<String> {
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

    #[test]
    fn test_empty_tree() {
        let order = level_order::<Node>(None);
        assert!(order.is_empty());
        assert!(order.layer_ends.is_empty());
        assert_eq!(order.layers().count(), 0);
    }

    #[test]
    fn test_single_node() {
        let root = node(7, None, None);
        let order = level_order(Some(&root));
        assert_eq!(order.entries.len(), 1);
        assert_eq!(order.entries[0].position, Position::Root);
        assert_eq!(order.layer_ends, vec![1]);
        assert_eq!(rendered(&order), vec!["7"]);
    }

    #[test]
    fn test_positions_and_layers() {
        // 4 -> (2 -> 1, 3), (6 -> -, 7)
        let root = node(
            4,
            Some(node(2, Some(node(1, None, None)), Some(node(3, None, None)))),
            Some(node(6, None, Some(node(7, None, None)))),
        );
        let order = level_order(Some(&root));
        assert_eq!(order.layer_ends, vec![1, 3, 6]);
        assert_eq!(rendered(&order), vec!["4", "2L 6R", "1L 3R 7R"]);
        let depths: Vec<usize> = order.entries.iter().map(|e| e.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_lopsided_tree() {
        let root = node(1, None, Some(node(2, None, Some(node(3, None, None)))));
        let order = level_order(Some(&root));
        assert_eq!(rendered(&order), vec!["1", "2R", "3R"]);
    }

    #[test]
    fn test_emitter_is_consumed_once() {
        let root = node(1, Some(node(0, None, None)), None);
        let mut emitter = LevelOrderEmitter::new(Some(&root));
        assert_eq!(emitter.by_ref().count(), 2);
        assert!(emitter.next().is_none());
    }

    #[test]
    fn test_label_display() {
        assert_eq!(NodeLabel::Symbol('a').to_string(), "a");
        assert_eq!(NodeLabel::Internal.to_string(), "*");
        assert_eq!(NodeLabel::Key(-3).to_string(), "-3");
    }

    #[test]
    fn test_serialize_entry() {
        let entry = LevelEntry {
            label: NodeLabel::Symbol('x'),
            position: Position::Left,
            depth: 1,
        };
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["label"]["kind"], "symbol");
        assert_eq!(json["label"]["value"], "x");
        assert_eq!(json["position"], "left");
    }
}
