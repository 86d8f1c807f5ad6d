//! Refinement stages of the node tree: `Raw -> Filled -> Linked`.
//!
//! Stages share the structural tree; they differ only in attribute
//! completeness. The stage-dependent attributes (node id, reference
//! scope) are associated types of [`Stage`], so holes exist in the
//! early stages and are gone from the type once a tree is linked.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::base::{Name, NodeId};

/// Scope attached to a linked reference: maps the head segment of the
/// reference name to the id of the node resolution continues through.
pub type Scope = FxHashMap<Name, NodeId>;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Raw {}
    impl Sealed for super::Filled {}
    impl Sealed for super::Linked {}
}

/// Stage axis of the tree. Closed: the only stages are [`Raw`],
/// [`Filled`] and [`Linked`].
pub trait Stage: sealed::Sealed + Copy + fmt::Debug + Eq + Hash + 'static {
    /// Node identity. A hole until the linker assigns it.
    type Id: Clone + fmt::Debug + PartialEq;

    /// Resolution scope of a reference. A hole until linking.
    type ReferenceScope: Clone + fmt::Debug + PartialEq;
}

/// Parser output. Syntactically optional attributes may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Raw;

/// Filler output: syntactic defaults populated. Structurally equal to
/// [`Raw`]; the tag records the filler's promise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Filled;

/// Linker output: every node has an id, every reference a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Linked;

impl Stage for Raw {
    type Id = Option<NodeId>;
    type ReferenceScope = Option<Scope>;
}

impl Stage for Filled {
    type Id = Option<NodeId>;
    type ReferenceScope = Option<Scope>;
}

impl Stage for Linked {
    type Id = NodeId;
    type ReferenceScope = Scope;
}
