//! CLI commands for citynet

pub mod avl;
pub mod cities;
pub mod dfs;
pub mod dispatch;
pub mod huffman;
pub mod map;
pub mod path;

mod render;
