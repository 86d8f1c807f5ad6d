//! Stage-independent tree algorithms: child enumeration, breadth-first
//! traversal, bottom-up rewrite and pre-order fold.
//!
//! Each kind's child-bearing attributes are declared once, in the
//! matches below; the order is the declared attribute order, then the
//! intra-attribute order of sequences. Nested records ([`SuperCall`],
//! [`BaseCall`]) contribute their node fields in place.

use std::collections::VecDeque;
use std::convert::Infallible;

use crate::base::Name;

use super::kind::Kind;
use super::node::*;
use super::stage::{Filled, Raw, Stage};

impl<S: Stage> Node<S> {
    /// Direct structural children, in declared attribute order.
    pub fn children(&self) -> Vec<&Node<S>> {
        let mut out: Vec<&Node<S>> = Vec::new();
        match &self.data {
            NodeData::Environment(n) => out.extend(&n.members),
            NodeData::Package(n) => out.extend(&n.members),
            NodeData::Class(n) => {
                out.extend(n.superclass.as_deref());
                out.extend(&n.mixins);
                out.extend(&n.members);
            }
            NodeData::Singleton(n) => {
                if let Some(call) = &n.super_call {
                    out.push(&call.superclass);
                    out.extend(&call.args);
                }
                out.extend(&n.mixins);
                out.extend(&n.members);
            }
            NodeData::Mixin(n) => {
                out.extend(&n.mixins);
                out.extend(&n.members);
            }
            NodeData::Program(n) => out.push(&n.body),
            NodeData::Describe(n) => out.extend(&n.members),
            NodeData::Test(n) => out.push(&n.body),
            NodeData::Reference(_) | NodeData::SelfExpr | NodeData::Literal(_) => {}
            NodeData::Send(n) => {
                out.push(&n.receiver);
                out.extend(&n.args);
            }
            NodeData::Super(n) => out.extend(&n.args),
            NodeData::New(n) => {
                out.push(&n.instantiated);
                out.extend(&n.args);
            }
            NodeData::If(n) => {
                out.push(&n.condition);
                out.push(&n.then_body);
                out.extend(n.else_body.as_deref());
            }
            NodeData::Throw(n) => out.push(&n.exception),
            NodeData::Try(n) => {
                out.push(&n.body);
                out.extend(&n.catches);
                out.extend(n.always.as_deref());
            }
            NodeData::Variable(n) => out.extend(n.value.as_deref()),
            NodeData::Return(n) => out.extend(n.value.as_deref()),
            NodeData::Assignment(n) => {
                out.push(&n.variable);
                out.push(&n.value);
            }
            NodeData::Field(n) => out.extend(n.value.as_deref()),
            NodeData::Method(n) => {
                out.extend(&n.parameters);
                out.extend(n.body.as_deref());
            }
            NodeData::Constructor(n) => {
                out.extend(&n.parameters);
                if let Some(call) = &n.base_call {
                    out.extend(&call.args);
                }
                out.extend(n.body.as_deref());
            }
            NodeData::Parameter(_) => {}
            NodeData::Body(n) => out.extend(&n.sentences),
            NodeData::Catch(n) => {
                out.push(&n.parameter);
                out.extend(n.parameter_type.as_deref());
                out.push(&n.body);
            }
        }
        out
    }

    /// Breadth-first traversal of all descendants, self excluded.
    /// Compose with `filter(|n| n.is(...))` to restrict by kind.
    pub fn descendants(&self) -> Descendants<'_, S> {
        Descendants {
            queue: self.children().into_iter().collect(),
        }
    }

    /// Bottom-up structural rewrite: every child is rewritten before
    /// the node holding it. Non-node attributes pass through.
    pub fn transform(self, tx: &mut impl FnMut(Node<S>) -> Node<S>) -> Node<S> {
        let Node { id, data } = self;
        let data = match data {
            NodeData::Environment(n) => NodeData::Environment(EnvironmentNode {
                members: transform_all(n.members, tx),
            }),
            NodeData::Package(n) => NodeData::Package(Package {
                name: n.name,
                members: transform_all(n.members, tx),
            }),
            NodeData::Class(n) => NodeData::Class(Class {
                name: n.name,
                superclass: transform_opt(n.superclass, tx),
                mixins: transform_all(n.mixins, tx),
                members: transform_all(n.members, tx),
            }),
            NodeData::Singleton(n) => NodeData::Singleton(Singleton {
                name: n.name,
                super_call: n.super_call.map(|call| SuperCall {
                    superclass: transform_box(call.superclass, tx),
                    args: transform_all(call.args, tx),
                }),
                mixins: transform_all(n.mixins, tx),
                members: transform_all(n.members, tx),
            }),
            NodeData::Mixin(n) => NodeData::Mixin(Mixin {
                name: n.name,
                mixins: transform_all(n.mixins, tx),
                members: transform_all(n.members, tx),
            }),
            NodeData::Program(n) => NodeData::Program(Program {
                name: n.name,
                body: transform_box(n.body, tx),
            }),
            NodeData::Describe(n) => NodeData::Describe(Describe {
                name: n.name,
                members: transform_all(n.members, tx),
            }),
            NodeData::Test(n) => NodeData::Test(Test {
                name: n.name,
                body: transform_box(n.body, tx),
            }),
            NodeData::Reference(n) => NodeData::Reference(n),
            NodeData::SelfExpr => NodeData::SelfExpr,
            NodeData::Literal(value) => NodeData::Literal(value),
            NodeData::Send(n) => NodeData::Send(Send {
                receiver: transform_box(n.receiver, tx),
                message: n.message,
                args: transform_all(n.args, tx),
            }),
            NodeData::Super(n) => NodeData::Super(Super {
                args: transform_all(n.args, tx),
            }),
            NodeData::New(n) => NodeData::New(New {
                instantiated: transform_box(n.instantiated, tx),
                args: transform_all(n.args, tx),
            }),
            NodeData::If(n) => NodeData::If(If {
                condition: transform_box(n.condition, tx),
                then_body: transform_box(n.then_body, tx),
                else_body: transform_opt(n.else_body, tx),
            }),
            NodeData::Throw(n) => NodeData::Throw(Throw {
                exception: transform_box(n.exception, tx),
            }),
            NodeData::Try(n) => NodeData::Try(Try {
                body: transform_box(n.body, tx),
                catches: transform_all(n.catches, tx),
                always: transform_opt(n.always, tx),
            }),
            NodeData::Variable(n) => NodeData::Variable(Variable {
                name: n.name,
                is_read_only: n.is_read_only,
                value: transform_opt(n.value, tx),
            }),
            NodeData::Return(n) => NodeData::Return(Return {
                value: transform_opt(n.value, tx),
            }),
            NodeData::Assignment(n) => NodeData::Assignment(Assignment {
                variable: transform_box(n.variable, tx),
                value: transform_box(n.value, tx),
            }),
            NodeData::Field(n) => NodeData::Field(Field {
                name: n.name,
                is_read_only: n.is_read_only,
                value: transform_opt(n.value, tx),
            }),
            NodeData::Method(n) => NodeData::Method(Method {
                name: n.name,
                is_override: n.is_override,
                is_native: n.is_native,
                parameters: transform_all(n.parameters, tx),
                body: transform_opt(n.body, tx),
            }),
            NodeData::Constructor(n) => NodeData::Constructor(Constructor {
                parameters: transform_all(n.parameters, tx),
                base_call: n.base_call.map(|call| BaseCall {
                    calls_super: call.calls_super,
                    args: transform_all(call.args, tx),
                }),
                body: transform_opt(n.body, tx),
            }),
            NodeData::Parameter(n) => NodeData::Parameter(n),
            NodeData::Body(n) => NodeData::Body(Body {
                sentences: transform_all(n.sentences, tx),
            }),
            NodeData::Catch(n) => NodeData::Catch(Catch {
                parameter: transform_box(n.parameter, tx),
                parameter_type: transform_opt(n.parameter_type, tx),
                body: transform_box(n.body, tx),
            }),
        };
        tx(Node { id, data })
    }

    /// Pre-order fold: the accumulator visits self first, then threads
    /// through the children left to right.
    pub fn reduce<T>(&self, initial: T, tx: &mut impl FnMut(T, &Node<S>) -> T) -> T {
        let acc = tx(initial, self);
        self.children()
            .into_iter()
            .fold(acc, |acc, child| child.reduce(acc, tx))
    }
}

fn transform_all<S: Stage>(
    nodes: Vec<Node<S>>,
    tx: &mut impl FnMut(Node<S>) -> Node<S>,
) -> Vec<Node<S>> {
    nodes.into_iter().map(|node| node.transform(tx)).collect()
}

fn transform_box<S: Stage>(
    node: Box<Node<S>>,
    tx: &mut impl FnMut(Node<S>) -> Node<S>,
) -> Box<Node<S>> {
    Box::new((*node).transform(tx))
}

fn transform_opt<S: Stage>(
    node: Option<Box<Node<S>>>,
    tx: &mut impl FnMut(Node<S>) -> Node<S>,
) -> Option<Box<Node<S>>> {
    node.map(|node| transform_box(node, tx))
}

/// Breadth-first descendant iterator. See [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a, S: Stage> {
    queue: VecDeque<&'a Node<S>>,
}

impl<'a, S: Stage> Iterator for Descendants<'a, S> {
    type Item = &'a Node<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}

// ============================================================================
// STAGE CONVERSION
// ============================================================================

impl Node<Raw> {
    /// Re-tag a raw tree as filled. The external filler is responsible
    /// for having populated the syntactic defaults first.
    pub fn into_filled(self) -> Node<Filled> {
        let converted: Result<Node<Filled>, Infallible> =
            self.convert_stage(&mut |_, id| Ok(id), &mut |_, scope| Ok(scope));
        match converted {
            Ok(node) => node,
            Err(never) => match never {},
        }
    }
}

impl<A: Stage> Node<A> {
    /// Rebuild the tree at another stage, converting the stage-typed
    /// attributes through the given functions. Used by the filled and
    /// linked factories.
    pub(crate) fn convert_stage<B: Stage, E>(
        self,
        convert_id: &mut impl FnMut(Kind, A::Id) -> Result<B::Id, E>,
        convert_scope: &mut impl FnMut(&Name, A::ReferenceScope) -> Result<B::ReferenceScope, E>,
    ) -> Result<Node<B>, E> {
        let kind = self.kind();
        let Node { id, data } = self;
        let id = convert_id(kind, id)?;
        let data = match data {
            NodeData::Environment(n) => NodeData::Environment(EnvironmentNode {
                members: convert_all(n.members, convert_id, convert_scope)?,
            }),
            NodeData::Package(n) => NodeData::Package(Package {
                name: n.name,
                members: convert_all(n.members, convert_id, convert_scope)?,
            }),
            NodeData::Class(n) => NodeData::Class(Class {
                name: n.name,
                superclass: convert_opt(n.superclass, convert_id, convert_scope)?,
                mixins: convert_all(n.mixins, convert_id, convert_scope)?,
                members: convert_all(n.members, convert_id, convert_scope)?,
            }),
            NodeData::Singleton(n) => NodeData::Singleton(Singleton {
                name: n.name,
                super_call: match n.super_call {
                    Some(call) => Some(SuperCall {
                        superclass: convert_box(call.superclass, convert_id, convert_scope)?,
                        args: convert_all(call.args, convert_id, convert_scope)?,
                    }),
                    None => None,
                },
                mixins: convert_all(n.mixins, convert_id, convert_scope)?,
                members: convert_all(n.members, convert_id, convert_scope)?,
            }),
            NodeData::Mixin(n) => NodeData::Mixin(Mixin {
                name: n.name,
                mixins: convert_all(n.mixins, convert_id, convert_scope)?,
                members: convert_all(n.members, convert_id, convert_scope)?,
            }),
            NodeData::Program(n) => NodeData::Program(Program {
                name: n.name,
                body: convert_box(n.body, convert_id, convert_scope)?,
            }),
            NodeData::Describe(n) => NodeData::Describe(Describe {
                name: n.name,
                members: convert_all(n.members, convert_id, convert_scope)?,
            }),
            NodeData::Test(n) => NodeData::Test(Test {
                name: n.name,
                body: convert_box(n.body, convert_id, convert_scope)?,
            }),
            NodeData::Reference(n) => NodeData::Reference(Reference {
                scope: convert_scope(&n.name, n.scope)?,
                name: n.name,
            }),
            NodeData::SelfExpr => NodeData::SelfExpr,
            NodeData::Literal(value) => NodeData::Literal(value),
            NodeData::Send(n) => NodeData::Send(Send {
                receiver: convert_box(n.receiver, convert_id, convert_scope)?,
                message: n.message,
                args: convert_all(n.args, convert_id, convert_scope)?,
            }),
            NodeData::Super(n) => NodeData::Super(Super {
                args: convert_all(n.args, convert_id, convert_scope)?,
            }),
            NodeData::New(n) => NodeData::New(New {
                instantiated: convert_box(n.instantiated, convert_id, convert_scope)?,
                args: convert_all(n.args, convert_id, convert_scope)?,
            }),
            NodeData::If(n) => NodeData::If(If {
                condition: convert_box(n.condition, convert_id, convert_scope)?,
                then_body: convert_box(n.then_body, convert_id, convert_scope)?,
                else_body: convert_opt(n.else_body, convert_id, convert_scope)?,
            }),
            NodeData::Throw(n) => NodeData::Throw(Throw {
                exception: convert_box(n.exception, convert_id, convert_scope)?,
            }),
            NodeData::Try(n) => NodeData::Try(Try {
                body: convert_box(n.body, convert_id, convert_scope)?,
                catches: convert_all(n.catches, convert_id, convert_scope)?,
                always: convert_opt(n.always, convert_id, convert_scope)?,
            }),
            NodeData::Variable(n) => NodeData::Variable(Variable {
                name: n.name,
                is_read_only: n.is_read_only,
                value: convert_opt(n.value, convert_id, convert_scope)?,
            }),
            NodeData::Return(n) => NodeData::Return(Return {
                value: convert_opt(n.value, convert_id, convert_scope)?,
            }),
            NodeData::Assignment(n) => NodeData::Assignment(Assignment {
                variable: convert_box(n.variable, convert_id, convert_scope)?,
                value: convert_box(n.value, convert_id, convert_scope)?,
            }),
            NodeData::Field(n) => NodeData::Field(Field {
                name: n.name,
                is_read_only: n.is_read_only,
                value: convert_opt(n.value, convert_id, convert_scope)?,
            }),
            NodeData::Method(n) => NodeData::Method(Method {
                name: n.name,
                is_override: n.is_override,
                is_native: n.is_native,
                parameters: convert_all(n.parameters, convert_id, convert_scope)?,
                body: convert_opt(n.body, convert_id, convert_scope)?,
            }),
            NodeData::Constructor(n) => NodeData::Constructor(Constructor {
                parameters: convert_all(n.parameters, convert_id, convert_scope)?,
                base_call: match n.base_call {
                    Some(call) => Some(BaseCall {
                        calls_super: call.calls_super,
                        args: convert_all(call.args, convert_id, convert_scope)?,
                    }),
                    None => None,
                },
                body: convert_opt(n.body, convert_id, convert_scope)?,
            }),
            NodeData::Parameter(n) => NodeData::Parameter(n),
            NodeData::Body(n) => NodeData::Body(Body {
                sentences: convert_all(n.sentences, convert_id, convert_scope)?,
            }),
            NodeData::Catch(n) => NodeData::Catch(Catch {
                parameter: convert_box(n.parameter, convert_id, convert_scope)?,
                parameter_type: convert_opt(n.parameter_type, convert_id, convert_scope)?,
                body: convert_box(n.body, convert_id, convert_scope)?,
            }),
        };
        Ok(Node { id, data })
    }
}

fn convert_all<A: Stage, B: Stage, E>(
    nodes: Vec<Node<A>>,
    convert_id: &mut impl FnMut(Kind, A::Id) -> Result<B::Id, E>,
    convert_scope: &mut impl FnMut(&Name, A::ReferenceScope) -> Result<B::ReferenceScope, E>,
) -> Result<Vec<Node<B>>, E> {
    nodes
        .into_iter()
        .map(|node| node.convert_stage(convert_id, convert_scope))
        .collect()
}

fn convert_box<A: Stage, B: Stage, E>(
    node: Box<Node<A>>,
    convert_id: &mut impl FnMut(Kind, A::Id) -> Result<B::Id, E>,
    convert_scope: &mut impl FnMut(&Name, A::ReferenceScope) -> Result<B::ReferenceScope, E>,
) -> Result<Box<Node<B>>, E> {
    Ok(Box::new((*node).convert_stage(convert_id, convert_scope)?))
}

fn convert_opt<A: Stage, B: Stage, E>(
    node: Option<Box<Node<A>>>,
    convert_id: &mut impl FnMut(Kind, A::Id) -> Result<B::Id, E>,
    convert_scope: &mut impl FnMut(&Name, A::ReferenceScope) -> Result<B::ReferenceScope, E>,
) -> Result<Option<Box<Node<B>>>, E> {
    node.map(|node| convert_box(node, convert_id, convert_scope))
        .transpose()
}
