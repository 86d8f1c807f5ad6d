//! Hierarchy linearisation order, dedup and termination.

use wollok::base::NodeId;

use crate::helpers::*;

#[test]
fn test_mixins_come_first_then_the_superclass_chain() {
    let fx = mixin_hierarchy();
    let ids: Vec<NodeId> = fx.env.hierarchy(fx.c).unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, [fx.c, fx.m1, fx.m3, fx.m2, fx.b, fx.a]);
}

#[test]
fn test_hierarchy_starts_with_the_module_itself() {
    let fx = mixin_hierarchy();
    for id in [fx.a, fx.b, fx.c, fx.m1, fx.m2, fx.m3] {
        assert_eq!(fx.env.hierarchy(id).unwrap()[0].id, id);
    }
}

#[test]
fn test_superclass_chains_linearise_in_order() {
    let fx = mixin_hierarchy();
    let ids: Vec<NodeId> = fx.env.hierarchy(fx.b).unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, [fx.b, fx.a]);
}

#[test]
fn test_mixins_inline_their_own_ancestors() {
    let fx = mixin_hierarchy();
    let ids: Vec<NodeId> = fx.env.hierarchy(fx.m1).unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, [fx.m1, fx.m3]);
}

#[test]
fn test_diamonds_keep_the_first_occurrence() {
    let (d, m1, m2, m3) = (
        NodeId::fresh(),
        NodeId::fresh(),
        NodeId::fresh(),
        NodeId::fresh(),
    );
    let class_d = class(
        d,
        "D",
        None,
        vec![
            scoped_reference("M1", &[("M1", m1)]),
            scoped_reference("M2", &[("M2", m2)]),
        ],
        Vec::new(),
    );
    let mixin_m1 = mixin(m1, "M1", vec![scoped_reference("M3", &[("M3", m3)])], Vec::new());
    let mixin_m2 = mixin(m2, "M2", vec![scoped_reference("M3", &[("M3", m3)])], Vec::new());
    let mixin_m3 = mixin(m3, "M3", Vec::new(), Vec::new());
    let env = link(environment(vec![package(
        "diamond",
        vec![class_d, mixin_m1, mixin_m2, mixin_m3],
    )]));

    let ids: Vec<NodeId> = env.hierarchy(d).unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, [d, m1, m3, m2]);
}

#[test]
fn test_every_hierarchy_id_is_distinct() {
    let fx = mixin_hierarchy();
    let hierarchy = fx.env.hierarchy(fx.c).unwrap();
    let mut ids: Vec<NodeId> = hierarchy.iter().map(|m| m.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), hierarchy.len());
}

#[test]
fn test_singletons_linearise_through_their_super_call() {
    let fx = method_lookup();
    let ids: Vec<NodeId> = fx.env.hierarchy(fx.app).unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, [fx.app, fx.base]);
}

#[test]
fn test_inherits_checks_hierarchy_membership() {
    let fx = mixin_hierarchy();
    assert!(fx.env.inherits(fx.c, fx.c).unwrap());
    assert!(fx.env.inherits(fx.c, fx.a).unwrap());
    assert!(fx.env.inherits(fx.c, fx.m3).unwrap());
    assert!(!fx.env.inherits(fx.a, fx.c).unwrap());
    assert!(!fx.env.inherits(fx.m1, fx.m2).unwrap());
}

#[test]
fn test_linearisation_terminates_on_cycles() {
    let (env, a, b) = cyclic_classes();
    let ids: Vec<NodeId> = env.hierarchy(a).unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, [a, b]);
    assert!(env.inherits(a, b).unwrap());
    assert!(env.inherits(b, a).unwrap());
}
