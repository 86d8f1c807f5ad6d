//! Instance creation, interning and snapshot isolation.

use wollok::base::InstanceId;
use wollok::base::constants::{NUMBER_MODULE, STRING_MODULE};
use wollok::runtime::{Evaluation, Frame, InnerValue, RuntimeError};

use crate::helpers::empty_environment;

#[test]
fn test_numbers_intern_by_rounded_value() {
    let mut eval = Evaluation::new(empty_environment());
    let exact = eval.create_instance(NUMBER_MODULE, Some(InnerValue::Number(1.0)));
    let nearby = eval.create_instance(NUMBER_MODULE, Some(InnerValue::Number(1.000001)));
    assert_eq!(exact, nearby);
    assert_eq!(exact.as_str(), "N!1.00000");
    assert_eq!(
        eval.instance(&exact).unwrap().inner_value,
        Some(InnerValue::Number(1.0))
    );
}

#[test]
fn test_strings_intern_by_value() {
    let mut eval = Evaluation::new(empty_environment());
    let first = eval.create_instance(STRING_MODULE, Some(InnerValue::Text("hola".into())));
    let second = eval.create_instance(STRING_MODULE, Some(InnerValue::Text("hola".into())));
    assert_eq!(first, second);
    assert_eq!(first.as_str(), "S!hola");
}

#[test]
fn test_other_modules_always_get_fresh_instances() {
    let mut eval = Evaluation::new(empty_environment());
    let first = eval.create_instance("store.Cart", None);
    let second = eval.create_instance("store.Cart", None);
    assert_ne!(first, second);

    let instance = eval.instance(&first).unwrap();
    assert_eq!(instance.module, "store.Cart");
    assert_eq!(instance.id, first);
    assert!(instance.fields.is_empty());
    assert_eq!(instance.inner_value, None);
}

#[test]
fn test_missing_instances_are_undefined() {
    let eval = Evaluation::new(empty_environment());
    let ghost = InstanceId::fresh();
    let err = eval.instance(&ghost).unwrap_err();
    assert_eq!(err, RuntimeError::UndefinedInstance { id: ghost });
    assert!(err.to_string().contains("access to undefined instance"));
}

#[test]
fn test_fields_hold_instance_ids() {
    let mut eval = Evaluation::new(empty_environment());
    let cart = eval.create_instance("store.Cart", None);
    let total = eval.create_instance(NUMBER_MODULE, Some(InnerValue::Number(99.9)));
    eval.instance_mut(&cart).unwrap().set_field("total", total.clone());
    assert_eq!(eval.instance(&cart).unwrap().field("total"), Some(&total));
}

#[test]
fn test_snapshots_isolate_instances_and_frames() {
    let mut eval = Evaluation::new(empty_environment());
    let cart = eval.create_instance("store.Cart", None);
    eval.push_frame(Frame::new([]));

    let mut snapshot = eval.clone();
    snapshot
        .current_frame_mut()
        .unwrap()
        .push_operand(cart.clone());
    snapshot
        .instance_mut(&cart)
        .unwrap()
        .set_field("touched", cart.clone());
    let extra = snapshot.create_instance("store.Item", None);
    snapshot.push_frame(Frame::new([]));

    assert!(eval.current_frame().unwrap().operands().is_empty());
    assert!(eval.instance(&cart).unwrap().fields.is_empty());
    assert!(eval.instance(&extra).is_err());
    assert_eq!(eval.frames().len(), 1);
}

#[test]
fn test_snapshots_do_not_leak_mutations_back() {
    let mut eval = Evaluation::new(empty_environment());
    let cart = eval.create_instance("store.Cart", None);
    eval.push_frame(Frame::new([]));
    let snapshot = eval.clone();

    eval.current_frame_mut().unwrap().push_operand(cart.clone());
    eval.instance_mut(&cart).unwrap().set_field("touched", cart.clone());

    assert!(snapshot.current_frame().unwrap().operands().is_empty());
    assert!(snapshot.instance(&cart).unwrap().fields.is_empty());
}

#[test]
fn test_snapshots_share_the_node_tree() {
    let eval = Evaluation::new(empty_environment());
    let snapshot = eval.clone();
    assert!(std::ptr::eq(eval.environment(), snapshot.environment()));
}
