//! In-memory folder/file namespace.
//!
//! A [`tree::Tree`] is an immutable snapshot: [`query`] reads it,
//! [`mutation`] derives new snapshots from it, gated by the two-level
//! permission check in [`access`]. [`snapshot`] loads the initial tree.

pub mod access;
pub mod mutation;
pub mod query;
pub mod snapshot;
pub mod tree;

#[cfg(test)]
mod testing;
