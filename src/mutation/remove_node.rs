use tracing::{debug, info};

use crate::access::{Operation, check_access};
use crate::mutation::Outcome;
use crate::query::find_node;
use crate::tree::{AccessLevel, Node, Tree};

/// Drops the node with the given id together with its subtree. An absent
/// id yields an equal tree.
pub fn remove_node(tree: &Tree, id: impl AsRef<str>) -> Tree {
    Tree::from_valid_roots(without(tree.roots(), id.as_ref()))
}

fn without(nodes: &[Node], id: &str) -> Vec<Node> {
    nodes
        .iter()
        .filter(|node| node.id() != id)
        .map(|node| node.with_children(without(node.children(), id)))
        .collect()
}

/// Looks the node up, checks delete access for `permission`, then removes it.
pub fn remove_with_authorization(
    tree: &Tree,
    id: impl AsRef<str>,
    permission: AccessLevel,
) -> (Tree, Outcome) {
    let id = id.as_ref();
    let Some(node) = find_node(tree, id) else {
        debug!("Node '{}' not found, nothing to remove", id);
        return (tree.clone(), Outcome::NotFound { id: id.into() });
    };

    if !check_access(permission, node, Operation::Delete) {
        info!(
            "Denied deleting {} '{}' with '{}' permission",
            node.kind(),
            id,
            permission
        );
        return (
            tree.clone(),
            Outcome::PermissionDenied {
                kind: node.kind(),
                operation: Operation::Delete,
            },
        );
    }

    info!("Removing {} '{}'", node.kind(), id);
    (remove_node(tree, id), Outcome::Ok)
}
