//! AVL-balanced binary search tree over city numbers
//!
//! Insertion rebuilds the path back to the root: each recursive call
//! returns the (possibly rotated) subtree root, and the caller stores it in
//! place of the child it descended into.

use std::cmp::Ordering;

use super::level_order::{LevelNode, NodeLabel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNode {
    key: i64,
    left: Option<Box<OrderNode>>,
    right: Option<Box<OrderNode>>,
    height: u32,
}

impl OrderNode {
    pub fn new(key: i64) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub fn key(&self) -> i64 {
        self.key
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn left(&self) -> Option<&OrderNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&OrderNode> {
        self.right.as_deref()
    }

    /// Left height minus right height
    pub fn balance_factor(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

impl LevelNode for OrderNode {
    fn label(&self) -> NodeLabel {
        NodeLabel::Key(self.key)
    }

    fn left_child(&self) -> Option<&Self> {
        self.left()
    }

    fn right_child(&self) -> Option<&Self> {
        self.right()
    }
}

fn height(node: &Option<Box<OrderNode>>) -> u32 {
    node.as_ref().map_or(0, |n| n.height)
}

/// Left child becomes the subtree root; its right subtree moves under the
/// old root's left.
fn rotate_right(mut node: Box<OrderNode>) -> Box<OrderNode> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Mirror of `rotate_right`
fn rotate_left(mut node: Box<OrderNode>) -> Box<OrderNode> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Insert `key` under `node` and return the new subtree root.
///
/// A duplicate key returns the subtree unchanged.
pub fn insert(node: Option<Box<OrderNode>>, key: i64) -> Box<OrderNode> {
    let Some(mut node) = node else {
        return Box::new(OrderNode::new(key));
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert(node.left.take(), key)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), key)),
        Ordering::Equal => return node,
    }

    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        let left_key = node.left.as_ref().map_or(key, |l| l.key);
        if key < left_key {
            // left-left
            return rotate_right(node);
        }
        if key > left_key {
            // left-right
            node.left = node.left.take().map(rotate_left);
            return rotate_right(node);
        }
    }

    if balance < -1 {
        let right_key = node.right.as_ref().map_or(key, |r| r.key);
        if key > right_key {
            // right-right
            return rotate_left(node);
        }
        if key < right_key {
            // right-left
            node.right = node.right.take().map(rotate_right);
            return rotate_left(node);
        }
    }

    node
}

/// Owning handle for an order tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalancedOrderTree {
    root: Option<Box<OrderNode>>,
    len: usize,
}

impl BalancedOrderTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keys in sequence
    #[tracing::instrument(skip_all, fields(keys = keys.len()))]
    pub fn from_keys(keys: &[i64]) -> Self {
        let mut tree = Self::new();
        for &key in keys {
            if !tree.insert(key) {
                tracing::debug!(key, "duplicate key ignored");
            }
        }
        tracing::debug!(len = tree.len, height = tree.height(), "order tree built");
        tree
    }

    /// Returns false when the key was already present
    pub fn insert(&mut self, key: i64) -> bool {
        if self.contains(key) {
            return false;
        }
        self.root = Some(insert(self.root.take(), key));
        self.len += 1;
        true
    }

    pub fn contains(&self, key: i64) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn root(&self) -> Option<&OrderNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Keys in ascending order
    pub fn keys(&self) -> Vec<i64> {
        fn walk(node: Option<&OrderNode>, out: &mut Vec<i64>) {
            if let Some(node) = node {
                walk(node.left(), out);
                out.push(node.key);
                walk(node.right(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root(), &mut out);
        out
    }

    /// Check stored heights, balance factors and key ordering at every node
    pub fn is_balanced(&self) -> bool {
        fn check(node: Option<&OrderNode>, lo: Option<i64>, hi: Option<i64>) -> Option<u32> {
            let Some(node) = node else {
                return Some(0);
            };
            if lo.is_some_and(|lo| node.key <= lo) || hi.is_some_and(|hi| node.key >= hi) {
                return None;
            }
            let lh = check(node.left(), lo, Some(node.key))?;
            let rh = check(node.right(), Some(node.key), hi)?;
            let expected = 1 + lh.max(rh);
            (lh.abs_diff(rh) <= 1 && node.height == expected).then_some(expected)
        }
        check(self.root(), None, None).is_some()
    }
}

/// Insert every key in order into a fresh tree
pub fn avl_insert_all(keys: &[i64]) -> BalancedOrderTree {
    BalancedOrderTree::from_keys(keys)
}
