//! Call frames: locals, operand stack and the resume set that anchors
//! interruption unwinding.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::base::{InstanceId, Name};

use super::error::RuntimeError;

/// A non-local exit kind. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interruption {
    /// Early exit from the current method activation.
    Return,
    /// Thrown exception looking for a handler.
    Exception,
}

impl fmt::Display for Interruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Interruption::Return => "return",
            Interruption::Exception => "exception",
        })
    }
}

/// One activation record of the evaluator.
///
/// Locals keep their declaration order, which is the order the
/// dispatcher bound parameters in. Cloning a frame isolates all three
/// parts from the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub locals: IndexMap<Name, InstanceId>,
    operand_stack: Vec<InstanceId>,
    /// Interruption kinds this frame can resume from.
    pub resume: FxHashSet<Interruption>,
}

impl Frame {
    pub fn new(locals: impl IntoIterator<Item = (Name, InstanceId)>) -> Self {
        Self {
            locals: locals.into_iter().collect(),
            operand_stack: Vec::new(),
            resume: FxHashSet::default(),
        }
    }

    /// Add an interruption kind this frame resumes from.
    pub fn resume_on(mut self, kind: Interruption) -> Self {
        self.resume.insert(kind);
        self
    }

    pub fn push_operand(&mut self, id: InstanceId) {
        self.operand_stack.push(id);
    }

    /// Pop the top operand. Underflow is fatal: well-formed programs
    /// balance every push with a pop.
    pub fn pop_operand(&mut self) -> Result<InstanceId, RuntimeError> {
        self.operand_stack
            .pop()
            .ok_or(RuntimeError::OperandStackUnderflow)
    }

    pub fn top_operand(&self) -> Option<&InstanceId> {
        self.operand_stack.last()
    }

    pub fn operands(&self) -> &[InstanceId] {
        &self.operand_stack
    }

    pub fn local(&self, name: &str) -> Option<&InstanceId> {
        self.locals.get(name)
    }

    pub fn set_local(&mut self, name: impl Into<Name>, id: InstanceId) {
        self.locals.insert(name.into(), id);
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new([])
    }
}
