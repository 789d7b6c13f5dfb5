//! Binary trees built from separately entered data
//!
//! - `frequency`: merge tree built by repeatedly combining the two lightest roots
//! - `order`: AVL-balanced search tree over city numbers
//! - `level_order`: layered breadth-first emission shared by both

pub mod frequency;
pub mod level_order;
pub mod order;

pub use frequency::{build_frequency_tree, FrequencyNode, FrequencyTreeBuilder};
pub use level_order::{
    level_order, LevelEntry, LevelNode, LevelOrder, LevelOrderEmitter, NodeLabel, Position,
};
pub use order::{avl_insert_all, BalancedOrderTree, OrderNode};
