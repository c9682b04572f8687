use std::str::FromStr;

use derive_more::{Display, From, IsVariant};
use snafu::Snafu;

use crate::tree::PreOrder;

/// Identity of a node. Unique across the whole tree and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
pub struct NodeId(String);

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum NodeKind {
    #[display("folder")]
    Folder,
    #[display("file")]
    File,
}

impl FromStr for NodeKind {
    type Err = UnknownNodeKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "folder" => Ok(NodeKind::Folder),
            "file" => Ok(NodeKind::File),
            _ => UnknownNodeKindSnafu { value }.fail(),
        }
    }
}

/// Permission level. Used both as the access a node demands and as the
/// ambient permission of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AccessLevel {
    #[display("read")]
    Read,
    #[display("write")]
    Write,
    #[display("readWrite")]
    ReadWrite,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 3] = [AccessLevel::Read, AccessLevel::Write, AccessLevel::ReadWrite];
}

impl FromStr for AccessLevel {
    type Err = UnknownAccessLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "read" => Ok(AccessLevel::Read),
            "write" => Ok(AccessLevel::Write),
            "readWrite" | "read-write" => Ok(AccessLevel::ReadWrite),
            _ => UnknownAccessLevelSnafu { value }.fail(),
        }
    }
}

/// A folder or file entry. Files never carry children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    name: String,
    kind: NodeKind,
    access: AccessLevel,
    children: Vec<Node>,
}

impl Node {
    /// Builds a node without checking it. [`crate::tree::Tree::new`] rejects
    /// files that were given children.
    pub fn new(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        kind: NodeKind,
        access: AccessLevel,
        children: Vec<Node>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            access,
            children,
        }
    }

    pub fn folder(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        access: AccessLevel,
        children: Vec<Node>,
    ) -> Self {
        Self::new(id, name, NodeKind::Folder, access, children)
    }

    pub fn file(id: impl Into<NodeId>, name: impl Into<String>, access: AccessLevel) -> Self {
        Self::new(id, name, NodeKind::File, access, Vec::new())
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn access(&self) -> AccessLevel {
        self.access
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Every node strictly below this one, in pre-order.
    pub fn descendants(&self) -> PreOrder<'_> {
        PreOrder::new(&self.children)
    }

    /// Case-insensitive substring match against the name.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Shallow copy carrying `children` instead of the original ones.
    pub(crate) fn with_children(&self, children: Vec<Node>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            access: self.access,
            children,
        }
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

#[derive(Debug, Snafu)]
#[snafu(display("Unknown node type '{}', expected 'folder' or 'file'", value))]
pub struct UnknownNodeKindError {
    value: String,
}

#[derive(Debug, Snafu)]
#[snafu(display(
    "Unknown access level '{}', expected 'read', 'write' or 'readWrite'",
    value
))]
pub struct UnknownAccessLevelError {
    value: String,
}
