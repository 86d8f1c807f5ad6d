//! The staged node: one common shell, a tagged payload per kind, and
//! typed accessors over the uniform child positions.
//!
//! Child positions always store [`Node`] so the tree algorithms can
//! walk every kind the same way; accessors such as
//! [`Node::as_method`] or [`Method::parameters`] re-project the
//! payload types where callers need them.

use crate::base::Name;

use super::kind::{Kind, KindOrCategory};
use super::stage::Stage;

/// A node of the tree at stage `S`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S: Stage> {
    pub id: S::Id,
    pub data: NodeData<S>,
}

impl<S: Stage> Node<S> {
    pub fn new(id: S::Id, data: NodeData<S>) -> Self {
        Self { id, data }
    }

    /// Kind tag of this node.
    pub fn kind(&self) -> Kind {
        match &self.data {
            NodeData::Environment(_) => Kind::Environment,
            NodeData::Package(_) => Kind::Package,
            NodeData::Class(_) => Kind::Class,
            NodeData::Singleton(_) => Kind::Singleton,
            NodeData::Mixin(_) => Kind::Mixin,
            NodeData::Program(_) => Kind::Program,
            NodeData::Describe(_) => Kind::Describe,
            NodeData::Test(_) => Kind::Test,
            NodeData::Reference(_) => Kind::Reference,
            NodeData::SelfExpr => Kind::SelfExpr,
            NodeData::Literal(_) => Kind::Literal,
            NodeData::Send(_) => Kind::Send,
            NodeData::Super(_) => Kind::Super,
            NodeData::New(_) => Kind::New,
            NodeData::If(_) => Kind::If,
            NodeData::Throw(_) => Kind::Throw,
            NodeData::Try(_) => Kind::Try,
            NodeData::Variable(_) => Kind::Variable,
            NodeData::Return(_) => Kind::Return,
            NodeData::Assignment(_) => Kind::Assignment,
            NodeData::Field(_) => Kind::Field,
            NodeData::Method(_) => Kind::Method,
            NodeData::Constructor(_) => Kind::Constructor,
            NodeData::Parameter(_) => Kind::Parameter,
            NodeData::Body(_) => Kind::Body,
            NodeData::Catch(_) => Kind::Catch,
        }
    }

    /// Kind or category membership.
    pub fn is(&self, filter: impl Into<KindOrCategory>) -> bool {
        filter.into().matches(self.kind())
    }

    /// Declared name, for the kinds that carry one. Anonymous
    /// singletons have none.
    pub fn name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Package(n) => Some(n.name.as_str()),
            NodeData::Class(n) => Some(n.name.as_str()),
            NodeData::Singleton(n) => n.name.as_deref(),
            NodeData::Mixin(n) => Some(n.name.as_str()),
            NodeData::Program(n) => Some(n.name.as_str()),
            NodeData::Describe(n) => Some(n.name.as_str()),
            NodeData::Test(n) => Some(n.name.as_str()),
            NodeData::Field(n) => Some(n.name.as_str()),
            NodeData::Method(n) => Some(n.name.as_str()),
            NodeData::Variable(n) => Some(n.name.as_str()),
            NodeData::Parameter(n) => Some(n.name.as_str()),
            NodeData::Reference(n) => Some(n.name.as_str()),
            _ => None,
        }
    }

    /// Members of entity-like nodes; empty for every other kind.
    pub fn members(&self) -> &[Node<S>] {
        match &self.data {
            NodeData::Environment(n) => &n.members,
            NodeData::Package(n) => &n.members,
            NodeData::Class(n) => &n.members,
            NodeData::Singleton(n) => &n.members,
            NodeData::Mixin(n) => &n.members,
            NodeData::Describe(n) => &n.members,
            _ => &[],
        }
    }

    /// Mixin references of a module, in declared order.
    pub fn mixins(&self) -> &[Node<S>] {
        match &self.data {
            NodeData::Class(n) => &n.mixins,
            NodeData::Singleton(n) => &n.mixins,
            NodeData::Mixin(n) => &n.mixins,
            _ => &[],
        }
    }

    /// Superclass reference: the explicit superclass of a class, or
    /// the super call target of a singleton. Mixins have none.
    pub fn superclass(&self) -> Option<&Node<S>> {
        match &self.data {
            NodeData::Class(n) => n.superclass.as_deref(),
            NodeData::Singleton(n) => n.super_call.as_ref().map(|call| &*call.superclass),
            _ => None,
        }
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method<S>> {
        self.members().iter().filter_map(Node::as_method)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field<S>> {
        self.members().iter().filter_map(Node::as_field)
    }

    pub fn constructors(&self) -> impl Iterator<Item = &Constructor<S>> {
        self.members().iter().filter_map(Node::as_constructor)
    }

    pub fn tests(&self) -> impl Iterator<Item = &Test<S>> {
        self.members().iter().filter_map(Node::as_test)
    }
}

// ============================================================================
// PAYLOADS
// ============================================================================

/// Per-kind payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData<S: Stage> {
    Environment(EnvironmentNode<S>),
    Package(Package<S>),
    Class(Class<S>),
    Singleton(Singleton<S>),
    Mixin(Mixin<S>),
    Program(Program<S>),
    Describe(Describe<S>),
    Test(Test<S>),
    Reference(Reference<S>),
    SelfExpr,
    Literal(LiteralValue),
    Send(Send<S>),
    Super(Super<S>),
    New(New<S>),
    If(If<S>),
    Throw(Throw<S>),
    Try(Try<S>),
    Variable(Variable<S>),
    Return(Return<S>),
    Assignment(Assignment<S>),
    Field(Field<S>),
    Method(Method<S>),
    Constructor(Constructor<S>),
    Parameter(Parameter),
    Body(Body<S>),
    Catch(Catch<S>),
}

/// Root of a linked tree; members are the top-level packages.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentNode<S: Stage> {
    pub members: Vec<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Package<S: Stage> {
    pub name: Name,
    pub members: Vec<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class<S: Stage> {
    pub name: Name,
    /// Absent only on the hierarchy root.
    pub superclass: Option<Box<Node<S>>>,
    pub mixins: Vec<Node<S>>,
    pub members: Vec<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Singleton<S: Stage> {
    /// Anonymous object literals have no name; their qualified name is
    /// derived from the superclass instead.
    pub name: Option<Name>,
    /// A hole only in raw trees; the filler defaults it to the root
    /// class.
    pub super_call: Option<SuperCall<S>>,
    pub mixins: Vec<Node<S>>,
    pub members: Vec<Node<S>>,
}

/// Superclass invocation of a singleton: `object inherits X(args)`.
/// A nested record, not a node; its fields still count as structural
/// children.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperCall<S: Stage> {
    pub superclass: Box<Node<S>>,
    pub args: Vec<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mixin<S: Stage> {
    pub name: Name,
    pub mixins: Vec<Node<S>>,
    pub members: Vec<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program<S: Stage> {
    pub name: Name,
    pub body: Box<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Describe<S: Stage> {
    pub name: Name,
    pub members: Vec<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Test<S: Stage> {
    pub name: Name,
    pub body: Box<Node<S>>,
}

/// A by-name mention of another node. `scope` is populated by the
/// linker and drives [`target`](crate::env::Environment::target)
/// resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference<S: Stage> {
    pub name: Name,
    pub scope: S::ReferenceScope,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Nil,
    Boolean(bool),
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Send<S: Stage> {
    pub receiver: Box<Node<S>>,
    pub message: Name,
    pub args: Vec<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Super<S: Stage> {
    pub args: Vec<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct New<S: Stage> {
    pub instantiated: Box<Node<S>>,
    pub args: Vec<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If<S: Stage> {
    pub condition: Box<Node<S>>,
    pub then_body: Box<Node<S>>,
    /// A hole only in raw trees; the filler defaults it to an empty
    /// body.
    pub else_body: Option<Box<Node<S>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Throw<S: Stage> {
    pub exception: Box<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Try<S: Stage> {
    pub body: Box<Node<S>>,
    pub catches: Vec<Node<S>>,
    pub always: Option<Box<Node<S>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catch<S: Stage> {
    pub parameter: Box<Node<S>>,
    pub parameter_type: Option<Box<Node<S>>>,
    pub body: Box<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable<S: Stage> {
    pub name: Name,
    pub is_read_only: bool,
    pub value: Option<Box<Node<S>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return<S: Stage> {
    pub value: Option<Box<Node<S>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<S: Stage> {
    pub variable: Box<Node<S>>,
    pub value: Box<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field<S: Stage> {
    pub name: Name,
    pub is_read_only: bool,
    pub value: Option<Box<Node<S>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method<S: Stage> {
    pub name: Name,
    pub is_override: bool,
    pub is_native: bool,
    pub parameters: Vec<Node<S>>,
    /// Absent on abstract and native methods.
    pub body: Option<Box<Node<S>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constructor<S: Stage> {
    pub parameters: Vec<Node<S>>,
    pub base_call: Option<BaseCall<S>>,
    pub body: Option<Box<Node<S>>>,
}

/// Constructor delegation: `= self(...)` or `= super(...)`. A nested
/// record like [`SuperCall`].
#[derive(Debug, Clone, PartialEq)]
pub struct BaseCall<S: Stage> {
    pub calls_super: bool,
    pub args: Vec<Node<S>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Name,
    /// At most one parameter is varargs, always the last.
    pub is_var_arg: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body<S: Stage> {
    pub sentences: Vec<Node<S>>,
}

// ============================================================================
// TYPED PROJECTIONS
// ============================================================================

macro_rules! projections {
    ($($fn_name:ident => $variant:ident ( $ty:ty )),+ $(,)?) => {
        impl<S: Stage> Node<S> {
            $(
                pub fn $fn_name(&self) -> Option<&$ty> {
                    match &self.data {
                        NodeData::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }
            )+
        }
    };
}

projections! {
    as_environment => Environment(EnvironmentNode<S>),
    as_package => Package(Package<S>),
    as_class => Class(Class<S>),
    as_singleton => Singleton(Singleton<S>),
    as_mixin => Mixin(Mixin<S>),
    as_describe => Describe(Describe<S>),
    as_test => Test(Test<S>),
    as_reference => Reference(Reference<S>),
    as_field => Field(Field<S>),
    as_method => Method(Method<S>),
    as_constructor => Constructor(Constructor<S>),
    as_parameter => Parameter(Parameter),
    as_body => Body(Body<S>),
}

// ============================================================================
// ARITY
// ============================================================================

/// Arity match over a parameter list: exact length, or at least the
/// fixed prefix when the last parameter is varargs.
fn arity_matches<S: Stage>(parameters: &[Node<S>], arity: usize) -> bool {
    let count = parameters.len();
    let varargs = parameters
        .last()
        .and_then(Node::as_parameter)
        .is_some_and(|p| p.is_var_arg);
    (varargs && count - 1 <= arity) || count == arity
}

impl<S: Stage> Method<S> {
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter_map(Node::as_parameter)
    }

    pub fn matches_arity(&self, arity: usize) -> bool {
        arity_matches(&self.parameters, arity)
    }
}

impl<S: Stage> Constructor<S> {
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter_map(Node::as_parameter)
    }

    pub fn matches_arity(&self, arity: usize) -> bool {
        arity_matches(&self.parameters, arity)
    }
}
