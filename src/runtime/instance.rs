//! Runtime instances and their inner primitive values.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::base::{InstanceId, Name};

/// Primitive payload carried by instances of the core value modules.
///
/// Collections hold instance ids, not instances; to the core they are
/// opaque containers whose elements live in the heap like everything
/// else.
#[derive(Debug, Clone, PartialEq)]
pub enum InnerValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    List(Vec<InstanceId>),
}

impl fmt::Display for InnerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InnerValue::Boolean(value) => write!(f, "{value}"),
            InnerValue::Number(value) => write!(f, "{value}"),
            InnerValue::Text(value) => f.write_str(value),
            InnerValue::List(elements) => write!(f, "[{} elements]", elements.len()),
        }
    }
}

/// A heap entry. The `id` field always equals the key the instance is
/// stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub id: InstanceId,
    /// Fully qualified name of the instantiated module.
    pub module: Name,
    pub fields: FxHashMap<Name, InstanceId>,
    pub inner_value: Option<InnerValue>,
}

impl Instance {
    pub(super) fn new(id: InstanceId, module: Name, inner_value: Option<InnerValue>) -> Self {
        Self {
            id,
            module,
            fields: FxHashMap::default(),
            inner_value,
        }
    }

    pub fn field(&self, name: &str) -> Option<&InstanceId> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: impl Into<Name>, value: InstanceId) {
        self.fields.insert(name.into(), value);
    }
}
