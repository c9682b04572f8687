//! Read-only queries over a [`crate::tree::Tree`].

mod filter_tree;
mod find_node;

pub use filter_tree::{filter_tree, folder_tree};
pub(crate) use find_node::find_node_mut;
pub use find_node::{contains_descendant, find_node};
