//! Folder/file node model.
//!
//! A [`Tree`] is a forest of [`Node`]s. Nodes own their children, so a tree
//! is finite and acyclic by construction; [`Tree::new`] checks the remaining
//! invariants (unique ids, childless files).

mod node;
mod tree;

pub use node::{AccessLevel, Node, NodeId, NodeKind, UnknownAccessLevelError, UnknownNodeKindError};
pub use tree::{InvalidTreeError, PreOrder, Tree};
