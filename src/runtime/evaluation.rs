//! Evaluation state: the frame stack, the instance heap and the
//! interruption unwinding algorithm.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{trace, warn};

use crate::base::constants::{MESSAGE_FIELD, NUMBER_MODULE, STRING_MODULE};
use crate::base::{InstanceId, Name, round_decimals};
use crate::env::Environment;

use super::error::RuntimeError;
use super::frame::{Frame, Interruption};
use super::instance::{InnerValue, Instance};

/// The full mutable state of one evaluation.
///
/// Cloning an evaluation is the snapshot operation: the frame stack
/// and the instance heap are isolated from the original, while the
/// immutable node tree stays shared behind the [`Arc`]. Concurrent
/// evaluations each hold their own clone; within one evaluation all
/// mutation is serialised by construction.
#[derive(Debug, Clone)]
pub struct Evaluation {
    environment: Arc<Environment>,
    frame_stack: Vec<Frame>,
    instances: FxHashMap<InstanceId, Instance>,
}

impl Evaluation {
    pub fn new(environment: Arc<Environment>) -> Self {
        Self {
            environment,
            frame_stack: Vec::new(),
            instances: FxHashMap::default(),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    // ------------------------------------------------------------------
    // Frames
    // ------------------------------------------------------------------

    /// The active frame: the top of the stack.
    pub fn current_frame(&self) -> Result<&Frame, RuntimeError> {
        self.frame_stack
            .last()
            .ok_or(RuntimeError::FrameStackUnderflow)
    }

    pub fn current_frame_mut(&mut self) -> Result<&mut Frame, RuntimeError> {
        self.frame_stack
            .last_mut()
            .ok_or(RuntimeError::FrameStackUnderflow)
    }

    pub fn push_frame(&mut self, frame: Frame) {
        self.frame_stack.push(frame);
    }

    pub fn pop_frame(&mut self) -> Option<Frame> {
        self.frame_stack.pop()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frame_stack
    }

    // ------------------------------------------------------------------
    // Instances
    // ------------------------------------------------------------------

    /// The instance with the given id.
    pub fn instance(&self, id: &InstanceId) -> Result<&Instance, RuntimeError> {
        self.instances
            .get(id)
            .ok_or_else(|| RuntimeError::UndefinedInstance { id: id.clone() })
    }

    pub fn instance_mut(&mut self, id: &InstanceId) -> Result<&mut Instance, RuntimeError> {
        self.instances
            .get_mut(id)
            .ok_or_else(|| RuntimeError::UndefinedInstance { id: id.clone() })
    }

    /// Create an instance of `module` and return its id.
    ///
    /// Numbers and strings are interned: the rounded numeric form or
    /// the string value becomes the id, so structurally equal
    /// primitives share one heap entry. Re-creating an interned
    /// primitive overwrites its entry with a value-equal one. Every
    /// other module gets a fresh id.
    pub fn create_instance(
        &mut self,
        module: impl Into<Name>,
        base_inner_value: Option<InnerValue>,
    ) -> InstanceId {
        let module = module.into();
        let (id, inner_value) = match (module.as_str(), base_inner_value) {
            (NUMBER_MODULE, Some(InnerValue::Number(value))) => {
                let rounded = round_decimals(value);
                (InstanceId::number(rounded), Some(InnerValue::Number(rounded)))
            }
            (STRING_MODULE, Some(InnerValue::Text(text))) => {
                (InstanceId::text(&text), Some(InnerValue::Text(text)))
            }
            (_, inner_value) => (InstanceId::fresh(), inner_value),
        };
        trace!(%id, module = %module, "created instance");
        self.instances
            .insert(id.clone(), Instance::new(id.clone(), module, inner_value));
        id
    }

    // ------------------------------------------------------------------
    // Interruption
    // ------------------------------------------------------------------

    /// Unwind the frame stack until a frame resumes `kind`. That frame
    /// keeps its place on the stack, loses `kind` from its resume set
    /// and receives `value` on its operand stack. Exhausting the stack
    /// is fatal.
    pub fn interrupt(&mut self, kind: Interruption, value: InstanceId) -> Result<(), RuntimeError> {
        while let Some(frame) = self.frame_stack.last_mut() {
            if frame.resume.remove(&kind) {
                frame.push_operand(value);
                trace!(%kind, depth = self.frame_stack.len(), "interruption handled");
                return Ok(());
            }
            self.frame_stack.pop();
        }
        let detail = self.interruption_detail(kind, &value);
        warn!(%kind, %value, "interruption reached the bottom of the stack");
        Err(RuntimeError::UnhandledInterruption { kind, detail })
    }

    /// Detail for an unhandled interruption: exceptions report the
    /// interrupted instance's module and its `message` field (or its
    /// own inner value); other kinds report nothing.
    fn interruption_detail(&self, kind: Interruption, value: &InstanceId) -> String {
        if kind != Interruption::Exception {
            return String::new();
        }
        let Some(instance) = self.instances.get(value) else {
            return String::new();
        };
        let message = instance
            .fields
            .get(MESSAGE_FIELD)
            .and_then(|id| self.instances.get(id))
            .and_then(|holder| holder.inner_value.as_ref())
            .or(instance.inner_value.as_ref());
        match message {
            Some(inner) => format!(": {}: {inner}", instance.module),
            None => format!(": {}", instance.module),
        }
    }
}
