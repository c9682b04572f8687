//! Tree mutations. Each one takes the current tree by reference and hands
//! back a new one, so a declined operation can always fall back to the
//! input.

mod move_node;
mod outcome;
mod remove_node;

pub use move_node::{move_node, move_with_authorization};
pub use outcome::Outcome;
pub use remove_node::{remove_node, remove_with_authorization};
