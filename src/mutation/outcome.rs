use derive_more::IsVariant;

use crate::access::Operation;
use crate::tree::{NodeId, NodeKind};

/// Result of an authorization-gated mutation. Every variant other than
/// [`Outcome::Ok`] comes with the input tree returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Outcome {
    Ok,
    /// `id` does not name any node in the tree.
    NotFound { id: NodeId },
    /// The caller or the node lacks the access `operation` needs.
    PermissionDenied { kind: NodeKind, operation: Operation },
    /// The destination is the source or lies inside it.
    WouldCreateCycle { source: NodeId, destination: NodeId },
    /// A move destination that is a file.
    NotAFolder { id: NodeId },
}
