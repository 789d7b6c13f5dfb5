//! Citynet Core Library
//!
//! Graph and tree algorithms for a small city transportation network:
//! shortest routes, depth-first traversal, frequency-weighted merge trees
//! and an AVL-balanced ordering of city numbers.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod tree;
