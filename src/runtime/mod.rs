//! Runtime evaluation state.
//!
//! ## Key Types
//!
//! - [`Evaluation`] — Frame stack plus instance heap; cloning it is
//!   the snapshot operation
//! - [`Frame`] — One activation record: locals, operand stack, resume
//!   set
//! - [`Instance`] — A heap entry, interned for primitive values
//! - [`Interruption`] — The closed set of non-local exit kinds
//!
//! The instruction dispatcher that drives frames is an external
//! collaborator; it mutates the evaluation through the operations
//! exposed here and nothing else.

mod error;
mod evaluation;
mod frame;
mod instance;

pub use error::RuntimeError;
pub use evaluation::Evaluation;
pub use frame::{Frame, Interruption};
pub use instance::{InnerValue, Instance};
