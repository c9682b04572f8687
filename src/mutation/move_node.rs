use tracing::{debug, info};

use crate::access::{Operation, check_access};
use crate::mutation::{Outcome, remove_node};
use crate::query::{contains_descendant, find_node, find_node_mut};
use crate::tree::{AccessLevel, Node, Tree};

/// Re-parents the source node, with its subtree, as the last child of the
/// destination folder. No access check is made.
pub fn move_node(
    tree: &Tree,
    source_id: impl AsRef<str>,
    destination_id: impl AsRef<str>,
) -> (Tree, Outcome) {
    match locate(tree, source_id.as_ref(), destination_id.as_ref()) {
        Ok((source, destination)) => relocate(tree, source, destination),
        Err(outcome) => (tree.clone(), outcome),
    }
}

/// Moves the source node after checking write access on it. Only the source
/// is checked; the destination's access level plays no part.
pub fn move_with_authorization(
    tree: &Tree,
    source_id: impl AsRef<str>,
    destination_id: impl AsRef<str>,
    permission: AccessLevel,
) -> (Tree, Outcome) {
    let (source, destination) = match locate(tree, source_id.as_ref(), destination_id.as_ref()) {
        Ok(found) => found,
        Err(outcome) => return (tree.clone(), outcome),
    };

    if !check_access(permission, source, Operation::Write) {
        info!(
            "Denied moving {} '{}' with '{}' permission",
            source.kind(),
            source.id(),
            permission
        );
        return (
            tree.clone(),
            Outcome::PermissionDenied {
                kind: source.kind(),
                operation: Operation::Write,
            },
        );
    }

    relocate(tree, source, destination)
}

fn locate<'a>(
    tree: &'a Tree,
    source_id: &str,
    destination_id: &str,
) -> Result<(&'a Node, &'a Node), Outcome> {
    let source = find_node(tree, source_id).ok_or_else(|| Outcome::NotFound {
        id: source_id.into(),
    })?;
    let destination = find_node(tree, destination_id).ok_or_else(|| Outcome::NotFound {
        id: destination_id.into(),
    })?;
    Ok((source, destination))
}

fn relocate(tree: &Tree, source: &Node, destination: &Node) -> (Tree, Outcome) {
    if !destination.kind().is_folder() {
        debug!("Move destination '{}' is a file", destination.id());
        return (
            tree.clone(),
            Outcome::NotAFolder {
                id: destination.id().clone(),
            },
        );
    }

    if source.id() == destination.id() || contains_descendant(source, destination.id()) {
        debug!(
            "Refusing to move '{}' into itself or its descendant '{}'",
            source.id(),
            destination.id()
        );
        return (
            tree.clone(),
            Outcome::WouldCreateCycle {
                source: source.id().clone(),
                destination: destination.id().clone(),
            },
        );
    }

    // The destination is looked up again in the pruned tree, since the node
    // found above belongs to the input tree.
    let mut moved = remove_node(tree, source.id());
    let Some(target) = find_node_mut(moved.roots_mut(), destination.id().as_ref()) else {
        debug!(
            "Destination '{}' vanished with the removal of '{}'",
            destination.id(),
            source.id()
        );
        return (
            tree.clone(),
            Outcome::NotFound {
                id: destination.id().clone(),
            },
        );
    };
    target.push_child(source.clone());

    info!("Moved {} '{}' into '{}'", source.kind(), source.id(), destination.id());
    (moved, Outcome::Ok)
}
