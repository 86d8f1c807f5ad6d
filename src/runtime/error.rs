//! Error types for runtime evaluation state.

use thiserror::Error;

use crate::base::InstanceId;

use super::frame::Interruption;

/// Errors raised by evaluation-state operations. All are fatal to the
/// operation; recovery (if any) happens above, typically by restoring
/// an earlier evaluation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Instance lookup by an id with no heap entry.
    #[error("access to undefined instance {id}")]
    UndefinedInstance { id: InstanceId },

    /// Pop from an empty operand stack.
    #[error("popped empty operand stack")]
    OperandStackUnderflow,

    /// Current-frame access with no frames on the stack.
    #[error("no active frame")]
    FrameStackUnderflow,

    /// The frame stack was exhausted while unwinding an interruption.
    /// For exceptions the detail carries the interrupted instance's
    /// module and message.
    #[error("unhandled {kind}{detail}")]
    UnhandledInterruption { kind: Interruption, detail: String },
}
