//! Indexing, parenthood and ancestor queries, and link validation.

use wollok::base::{Name, NodeId};
use wollok::env::{Environment, ResolveError};
use wollok::model::{Category, Filled, Kind, Node, NodeData, Package, Reference};

use crate::helpers::*;

#[test]
fn test_node_by_id_returns_the_unique_node() {
    let fx = nested_packages();
    let c = fx.env.node(fx.class_c).unwrap();
    assert_eq!(c.id, fx.class_c);
    assert_eq!(c.name(), Some("C"));
    assert!(c.is(Kind::Class));
}

#[test]
fn test_unknown_id_is_a_missing_node() {
    let fx = nested_packages();
    let missing = NodeId::fresh();
    let err = fx.env.node(missing).unwrap_err();
    assert_eq!(err, ResolveError::MissingNode { id: missing });
    assert!(err.to_string().contains("missing node"));
}

#[test]
fn test_members_are_the_top_level_entities() {
    let fx = nested_packages();
    let names: Vec<_> = fx.env.members().iter().map(|m| m.name().unwrap()).collect();
    assert_eq!(names, ["p"]);
}

#[test]
fn test_parent_is_derived_from_the_tree() {
    let fx = nested_packages();
    assert_eq!(fx.env.parent(fx.class_c).unwrap().id, fx.package_q);
    assert_eq!(fx.env.parent(fx.package_q).unwrap().id, fx.package_p);
    assert!(fx.env.parent(fx.package_p).unwrap().is(Kind::Environment));
}

#[test]
fn test_the_root_has_no_parent() {
    let fx = nested_packages();
    let root_id = fx.env.root().id;
    let err = fx.env.parent(root_id).unwrap_err();
    assert_eq!(err, ResolveError::Orphan { id: root_id });
    assert!(err.to_string().contains("is not in the environment"));
}

#[test]
fn test_closest_ancestor_walks_upwards() {
    let fx = nested_packages();
    let by_kind = fx.env.closest_ancestor(fx.class_c, Kind::Package).unwrap();
    assert_eq!(by_kind.id, fx.package_q);

    let by_category = fx.env.closest_ancestor(fx.class_c, Category::Entity).unwrap();
    assert_eq!(by_category.id, fx.package_q);

    assert!(fx.env.closest_ancestor(fx.package_p, Kind::Package).is_none());
}

#[test]
fn test_contains_tracks_indexed_ids() {
    let fx = nested_packages();
    assert!(fx.env.contains(fx.class_c));
    assert!(!fx.env.contains(NodeId::fresh()));
}

#[test]
fn test_linking_rejects_nodes_without_ids() {
    let orphan: Node<Filled> = Node::new(
        None,
        NodeData::Package(Package {
            name: Name::from("x"),
            members: Vec::new(),
        }),
    );
    let err = Environment::link(environment(vec![orphan])).unwrap_err();
    assert_eq!(err, ResolveError::UnlinkedNode { kind: Kind::Package });
}

#[test]
fn test_linking_rejects_references_without_scopes() {
    let unscoped = fresh(NodeData::Reference(Reference {
        name: Name::from("X"),
        scope: None,
    }));
    let holder = class(NodeId::fresh(), "Holder", Some(unscoped), Vec::new(), Vec::new());
    let err = Environment::link(environment(vec![package("p", vec![holder])])).unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnscopedReference {
            name: "X".to_owned()
        }
    );
}

#[test]
fn test_linking_rejects_duplicate_ids() {
    let shared = NodeId::fresh();
    let first = class(shared, "First", None, Vec::new(), Vec::new());
    let second = class(shared, "Second", None, Vec::new(), Vec::new());
    let err = Environment::link(environment(vec![package("p", vec![first, second])])).unwrap_err();
    assert_eq!(err, ResolveError::DuplicateId { id: shared });
}
