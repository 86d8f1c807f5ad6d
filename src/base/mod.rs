//! Foundation types for the Wollok toolchain.
//!
//! This module provides the fundamental types used throughout the core:
//! - [`NodeId`], [`InstanceId`] - Opaque unique identifiers
//! - [`Name`] - Small-string type for names and fully qualified names
//! - [`MemoCache`] - Keyed memo table with a compute-on-miss contract
//! - [`DECIMAL_PRECISION`], [`round_decimals`] - Numeric interning rules
//! - Domain constants (core module FQNs)
//!
//! This module has NO dependencies on other wollok modules.

pub mod constants;

mod cache;
mod ids;

pub use cache::MemoCache;
pub use ids::{DECIMAL_PRECISION, InstanceId, Name, NodeId, round_decimals};
