//! # wollok-base
//!
//! Core library for the Wollok language: staged AST model, linked
//! environment and runtime evaluation state.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! runtime   → Evaluation, Frame, instances, interruption unwinding
//!   ↓
//! env       → linked Environment: indices, FQNs, hierarchy, lookup
//!   ↓
//! model     → staged Node sum, kinds/categories, tree algorithms
//!   ↓
//! base      → primitives (ids, names, interning rules, memo cache)
//! ```
//!
//! The parser, the filler and the linker that produce trees, the
//! standard-library loader and the instruction dispatcher that drives
//! frames are external collaborators; they interact with the core
//! through the types re-exported below. A tree moves through three
//! stages (`Raw -> Filled -> Linked`); [`Environment::link`] is the
//! gate into the last one, and everything behind it is immutable.

// ============================================================================
// MODULES (dependency order: base → model → env → runtime)
// ============================================================================

/// Foundation types: ids, names, interning rules, memo cache
pub mod base;

/// Staged node model and stage-independent tree algorithms
pub mod model;

/// Linked environment: indices, qualified names, hierarchy, lookup
pub mod env;

/// Runtime state: evaluation, frames, instances, interruptions
pub mod runtime;

// Re-export the working vocabulary of the crate
pub use base::{DECIMAL_PRECISION, InstanceId, Name, NodeId};
pub use env::{Environment, ResolveError};
pub use model::{Category, Filled, Kind, Linked, Node, NodeData, Raw};
pub use runtime::{Evaluation, Frame, InnerValue, Instance, Interruption, RuntimeError};
