//! The staged node model.
//!
//! A [`Node`] is a tagged variant over the closed kind set, generic
//! over its refinement [`Stage`]. The tree algorithms ([`children`],
//! [`descendants`], [`transform`], [`reduce`]) are stage-independent;
//! the linked-stage operations live in [`crate::env`].
//!
//! [`children`]: Node::children
//! [`descendants`]: Node::descendants
//! [`transform`]: Node::transform
//! [`reduce`]: Node::reduce

mod kind;
mod node;
mod stage;
mod tree;


pub use kind::{Category, Kind, KindOrCategory};
pub use node::{
    Assignment, BaseCall, Body, Catch, Class, Constructor, Describe, EnvironmentNode, Field, If,
    LiteralValue, Method, Mixin, New, Node, NodeData, Package, Parameter, Program, Reference,
    Return, Send, Singleton, Super, SuperCall, Test, Throw, Try, Variable,
};
pub use stage::{Filled, Linked, Raw, Scope, Stage};
pub use tree::Descendants;
