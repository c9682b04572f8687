use crate::tree::{Node, Tree};

/// First node with the given id in pre-order, if any.
pub fn find_node(tree: &Tree, id: impl AsRef<str>) -> Option<&Node> {
    let id = id.as_ref();
    tree.iter().find(|node| node.id() == id)
}

pub(crate) fn find_node_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Node> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(node.children_mut(), id) {
            return Some(found);
        }
    }
    None
}

/// Whether `id` names a node strictly below `node`.
pub fn contains_descendant(node: &Node, id: impl AsRef<str>) -> bool {
    let id = id.as_ref();
    node.descendants().any(|descendant| descendant.id() == id)
}
