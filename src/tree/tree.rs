use std::collections::HashSet;
use std::fmt;

use snafu::Snafu;

use crate::tree::{Node, NodeId};

/// An ordered forest of root nodes.
///
/// Every id in the forest is unique and no file has children. Both hold for
/// every tree built through [`Tree::new`], and every operation in this crate
/// preserves them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
    roots: Vec<Node>,
}

impl Tree {
    pub fn new(roots: Vec<Node>) -> Result<Self, InvalidTreeError> {
        Self::validate(&roots)?;
        Ok(Self { roots })
    }

    fn validate(roots: &[Node]) -> Result<(), InvalidTreeError> {
        let mut seen = HashSet::new();
        for node in PreOrder::new(roots) {
            if !seen.insert(node.id()) {
                return DuplicateIdSnafu {
                    id: node.id().clone(),
                }
                .fail();
            }
            if node.kind().is_file() && !node.children().is_empty() {
                return FileWithChildrenSnafu {
                    id: node.id().clone(),
                }
                .fail();
            }
        }

        Ok(())
    }

    /// Wraps roots that are already known to be well-formed, i.e. derived
    /// from another valid tree.
    pub(crate) fn from_valid_roots(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<Node> {
        self.roots
    }

    pub(crate) fn roots_mut(&mut self) -> &mut Vec<Node> {
        &mut self.roots
    }

    /// All nodes, depth-first, parents before children, siblings in order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(&self.roots)
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.iter().map(Node::id)
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Node;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order walk over a sequence of sibling subtrees.
pub struct PreOrder<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(nodes: &'a [Node]) -> Self {
        Self {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(node) => {
                    self.stack.push(node.children().iter());
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

fn write_outline(f: &mut fmt::Formatter<'_>, nodes: &[Node], depth: usize) -> fmt::Result {
    for node in nodes {
        let suffix = if node.kind().is_folder() { "/" } else { "" };
        writeln!(
            f,
            "{:indent$}{}{} ({}, {})",
            "",
            node.name(),
            suffix,
            node.id(),
            node.access(),
            indent = depth * 2
        )?;
        write_outline(f, node.children(), depth + 1)?;
    }
    Ok(())
}

/// Indented outline, one node per line. Folders get a trailing slash.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_outline(f, &self.roots, 0)
    }
}

/// Outline of the subtree rooted at this node.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_outline(f, std::slice::from_ref(self), 0)
    }
}

#[derive(Debug, Snafu)]
pub enum InvalidTreeError {
    #[snafu(display("Node id '{}' appears more than once", id))]
    DuplicateId { id: NodeId },
    #[snafu(display("File '{}' cannot have children", id))]
    FileWithChildren { id: NodeId },
}
