use tracing::debug;

use crate::tree::{Node, Tree};

/// Structure-preserving search.
///
/// A node survives when one of its descendants survives, in which case it
/// keeps only the surviving children, or otherwise when its own name contains
/// `query` ignoring case, in which case it keeps no children. An empty query
/// returns the tree as is.
pub fn filter_tree(tree: &Tree, query: &str) -> Tree {
    if query.is_empty() {
        return tree.clone();
    }

    debug!("Filtering tree by '{}'", query);
    Tree::from_valid_roots(prune(tree.roots(), &|node| node.name_matches(query)))
}

/// Folder-only projection, used to offer move destinations. Files are
/// dropped; folders always survive, keeping their surviving subfolders.
pub fn folder_tree(tree: &Tree) -> Tree {
    Tree::from_valid_roots(prune(tree.roots(), &|node| node.kind().is_folder()))
}

fn prune(nodes: &[Node], keep: &dyn Fn(&Node) -> bool) -> Vec<Node> {
    nodes
        .iter()
        .filter_map(|node| {
            let children = prune(node.children(), keep);
            if !children.is_empty() {
                Some(node.with_children(children))
            } else if keep(node) {
                Some(node.with_children(Vec::new()))
            } else {
                None
            }
        })
        .collect()
}
