//! Error types for linking and linked-environment queries.

use thiserror::Error;

use crate::base::NodeId;
use crate::model::Kind;

/// Errors raised while linking a tree or resolving through a linked
/// environment. All are fatal to the failing operation; none are
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Id lookup with no matching node.
    #[error("missing node {id}")]
    MissingNode { id: NodeId },

    /// A name traversal step with no matching child, or a reference
    /// whose head is not in scope.
    #[error("could not resolve reference {name}")]
    UnresolvedReference { name: String },

    /// Parent query on a node with no parent: the root itself, or a
    /// node that is not reachable from the root.
    #[error("node {id} is not in the environment")]
    Orphan { id: NodeId },

    /// A filled node reached the linked factory without an id.
    #[error("unlinked {kind} node")]
    UnlinkedNode { kind: Kind },

    /// A reference reached the linked factory without a scope.
    #[error("unscoped reference {name}")]
    UnscopedReference { name: String },

    /// Two nodes carry the same id.
    #[error("duplicate node id {id}")]
    DuplicateId { id: NodeId },
}

impl ResolveError {
    /// Convenience constructor for unresolved-name failures.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::UnresolvedReference { name: name.into() }
    }
}
