//! Interruption unwinding: bounded frame popping and unhandled
//! failures.

use wollok::base::constants::STRING_MODULE;
use wollok::runtime::{Evaluation, Frame, InnerValue, Interruption, RuntimeError};

use crate::helpers::empty_environment;

#[test]
fn test_unwinding_stops_at_the_resuming_frame() {
    let mut eval = Evaluation::new(empty_environment());
    let payload = eval.create_instance(STRING_MODULE, Some(InnerValue::Text("payload".into())));

    eval.push_frame(Frame::new([]));
    eval.push_frame(Frame::new([]).resume_on(Interruption::Exception));
    eval.push_frame(Frame::new([]));

    eval.interrupt(Interruption::Exception, payload.clone()).unwrap();

    assert_eq!(eval.frames().len(), 2);
    let handler = eval.current_frame().unwrap();
    assert_eq!(handler.top_operand(), Some(&payload));
    assert!(handler.resume.is_empty());
    assert!(eval.frames()[0].operands().is_empty());
}

#[test]
fn test_each_kind_unwinds_independently() {
    let mut eval = Evaluation::new(empty_environment());
    let payload = eval.create_instance(STRING_MODULE, Some(InnerValue::Text("x".into())));

    eval.push_frame(Frame::new([]).resume_on(Interruption::Exception));
    eval.push_frame(Frame::new([]).resume_on(Interruption::Return));

    eval.interrupt(Interruption::Exception, payload.clone()).unwrap();

    // The return-resuming frame was popped on the way down.
    assert_eq!(eval.frames().len(), 1);
    assert_eq!(eval.current_frame().unwrap().top_operand(), Some(&payload));
}

#[test]
fn test_unhandled_exceptions_report_module_and_message() {
    let mut eval = Evaluation::new(empty_environment());
    let message = eval.create_instance(STRING_MODULE, Some(InnerValue::Text("boom".into())));
    let exception = eval.create_instance("E", None);
    eval.instance_mut(&exception).unwrap().set_field("message", message);
    eval.push_frame(Frame::new([]));

    let err = eval.interrupt(Interruption::Exception, exception).unwrap_err();

    assert!(eval.frames().is_empty());
    assert!(err.to_string().contains("E: boom"), "got: {err}");
}

#[test]
fn test_exceptions_without_a_message_field_use_their_inner_value() {
    let mut eval = Evaluation::new(empty_environment());
    let exception = eval.create_instance("E2", Some(InnerValue::Text("ouch".into())));
    eval.push_frame(Frame::new([]));

    let err = eval.interrupt(Interruption::Exception, exception).unwrap_err();
    assert!(err.to_string().contains("E2: ouch"), "got: {err}");
}

#[test]
fn test_other_kinds_fail_with_an_empty_detail() {
    let mut eval = Evaluation::new(empty_environment());
    let payload = eval.create_instance("anything.Else", None);

    let err = eval.interrupt(Interruption::Return, payload).unwrap_err();
    match &err {
        RuntimeError::UnhandledInterruption { kind, detail } => {
            assert_eq!(*kind, Interruption::Return);
            assert!(detail.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.to_string(), "unhandled return");
}
