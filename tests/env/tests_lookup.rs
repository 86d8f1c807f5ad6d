//! Method and constructor lookup by name and arity.

use rstest::rstest;
use wollok::base::NodeId;
use wollok::env::ResolveError;

use crate::helpers::*;

#[test]
fn test_the_closest_definition_wins() {
    let fx = method_lookup();
    let hit = fx.env.lookup_method(fx.sub, "size", 0).unwrap().unwrap();
    assert_eq!(hit.id, fx.sub_size);
    let hit = fx.env.lookup_method(fx.base, "size", 0).unwrap().unwrap();
    assert_eq!(hit.id, fx.base_size);
}

#[test]
fn test_methods_are_inherited_through_the_hierarchy() {
    let fx = method_lookup();
    let hit = fx.env.lookup_method(fx.sub, "greet", 1).unwrap().unwrap();
    assert_eq!(hit.id, fx.base_greet);
    assert!(fx.env.lookup_method(fx.sub, "greet", 2).unwrap().is_none());
}

#[test]
fn test_abstract_methods_are_skipped() {
    let fx = method_lookup();
    assert!(fx.env.lookup_method(fx.sub, "sketch", 1).unwrap().is_none());
}

#[test]
fn test_native_methods_need_no_body() {
    let fx = method_lookup();
    let hit = fx.env.lookup_method(fx.sub, "digest", 2).unwrap().unwrap();
    assert_eq!(hit.id, fx.sub_digest);
}

#[rstest]
#[case(0, false)]
#[case(1, true)]
#[case(4, true)]
fn test_varargs_methods_accept_any_longer_arity(#[case] arity: usize, #[case] found: bool) {
    let fx = method_lookup();
    let hit = fx.env.lookup_method(fx.sub, "plot", arity).unwrap();
    assert_eq!(hit.map(|m| m.id), found.then_some(fx.sub_plot));
}

#[test]
fn test_singletons_look_up_through_their_super_call() {
    let fx = method_lookup();
    let hit = fx.env.lookup_method(fx.app, "greet", 1).unwrap().unwrap();
    assert_eq!(hit.id, fx.base_greet);
}

#[test]
fn test_unknown_modules_are_missing_nodes() {
    let fx = method_lookup();
    let missing = NodeId::fresh();
    let err = fx.env.lookup_method(missing, "anything", 0).unwrap_err();
    assert_eq!(err, ResolveError::MissingNode { id: missing });
}

#[test]
fn test_constructors_match_by_arity() {
    let fx = method_lookup();
    let hit = fx.env.lookup_constructor(fx.base, 2).unwrap().unwrap();
    assert_eq!(hit.id, fx.base_pair_ctor);
    let hit = fx.env.lookup_constructor(fx.base, 4).unwrap().unwrap();
    assert_eq!(hit.id, fx.base_var_ctor);
    assert!(fx.env.lookup_constructor(fx.base, 0).unwrap().is_none());
}

#[test]
fn test_constructors_are_not_inherited() {
    let fx = method_lookup();
    let hit = fx.env.lookup_constructor(fx.sub, 1).unwrap().unwrap();
    assert_eq!(hit.id, fx.sub_unary_ctor);
    assert!(fx.env.lookup_constructor(fx.sub, 2).unwrap().is_none());
}
