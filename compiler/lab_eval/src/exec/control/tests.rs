#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use lab_value::{undefined_variable, EvalErrorKind};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_keywords() {
    assert_eq!(ControlKeyword::parse("return").unwrap(), ControlKeyword::Return);
    assert_eq!(ControlKeyword::parse("break").unwrap(), ControlKeyword::Break);
    assert_eq!(
        ControlKeyword::parse("continue").unwrap(),
        ControlKeyword::Continue
    );
    assert_eq!(ControlKeyword::Break.as_str(), "break");
}

#[test]
fn test_parse_unknown_keyword() {
    let err = ControlKeyword::parse("goto").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnknownKeyword {
            keyword: "goto".to_string()
        }
    );
}

#[test]
fn test_loop_takes_break_and_continue() {
    assert!(matches!(to_loop_action(ControlAction::Continue), LoopAction::Next));
    assert!(matches!(to_loop_action(ControlAction::Break), LoopAction::Exit));
}

#[test]
fn test_loop_passes_return_and_errors_on() {
    let action = to_loop_action(ControlAction::Return(Some(Value::scalar(1.0))));
    assert!(matches!(
        action,
        LoopAction::Pass(ControlAction::Return(Some(_)))
    ));

    let action = to_loop_action(undefined_variable("x").into());
    assert!(matches!(action, LoopAction::Pass(ControlAction::Error(_))));
}

#[test]
fn test_catch_return_takes_value() {
    let caught = catch_return(Err(ControlAction::Return(Some(Value::scalar(2.0)))));
    assert_eq!(caught.unwrap(), Some(Value::scalar(2.0)));

    let caught = catch_return(Err(ControlAction::Return(None)));
    assert_eq!(caught.unwrap(), None);
}

#[test]
fn test_catch_return_keeps_normal_value() {
    let caught = catch_return(Ok(Value::text("done")));
    assert_eq!(caught.unwrap(), Some(Value::text("done")));
}

#[test]
fn test_catch_return_passes_loop_signals_on() {
    assert!(matches!(
        catch_return(Err(ControlAction::Break)),
        Err(ControlAction::Break)
    ));
    assert!(matches!(
        catch_return(Err(ControlAction::Continue)),
        Err(ControlAction::Continue)
    ));
}
