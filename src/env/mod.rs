//! Linked environment — indices and resolution over a linked tree.
//!
//! ## Key Types
//!
//! - [`Environment`] — The linked factory and the owner of the tree
//! - [`ResolveError`] — Linking and resolution failures
//!
//! The environment is constructed once from a filled tree whose ids
//! and reference scopes were assigned by the external linker, and is
//! immutable afterwards. All linked-stage queries (parenthood,
//! qualified names, reference targets, hierarchy and member lookup)
//! live here and take node ids, because the identity of a linked node
//! IS its id.

mod environment;
mod error;
mod resolve;

pub use environment::Environment;
pub use error::ResolveError;
