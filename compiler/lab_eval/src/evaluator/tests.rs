#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::Scope;
use lab_ir::{Span, SyntaxChild, SyntaxNode};
use lab_measure::{MeasureError, MeasuredValue};
use lab_value::EvalErrorKind;
use pretty_assertions::assert_eq;

fn eval(node: &SyntaxNode) -> EvalResult {
    Evaluator::new().evaluate(node, &mut Scope::new())
}

fn eval_ok(node: &SyntaxNode) -> Value {
    eval(node).unwrap()
}

fn eval_err(node: &SyntaxNode) -> EvalError {
    match eval(node) {
        Err(ControlAction::Error(err)) => *err,
        other => panic!("expected an error, got {other:?}"),
    }
}

fn n(token: &str) -> SyntaxNode {
    SyntaxNode::number(&[token])
}

// Literals

#[test]
fn test_number_literal() {
    assert_eq!(
        eval_ok(&SyntaxNode::number(&["12.3", "4.5"])),
        Value::number(MeasuredValue::with_reading_error(12.3, 4.5))
    );
}

#[test]
fn test_text_symbol_package_literals() {
    assert_eq!(eval_ok(&SyntaxNode::text("\"ohm\"")), Value::text("ohm"));
    assert_eq!(eval_ok(&SyntaxNode::symbol("alpha")), Value::symbol("alpha"));
    assert_eq!(eval_ok(&SyntaxNode::package("numpy")), Value::package("numpy"));
}

#[test]
fn test_list_literal_preserves_order() {
    let list = SyntaxNode::list(vec![n("1"), SyntaxNode::text("'a'"), SyntaxNode::symbol("b")]);
    assert_eq!(
        eval_ok(&list),
        Value::list(vec![Value::scalar(1.0), Value::text("a"), Value::symbol("b")])
    );
}

#[test]
fn test_empty_list() {
    assert_eq!(eval_ok(&SyntaxNode::list(vec![])), Value::list(vec![]));
}

#[test]
fn test_nested_list() {
    let list = SyntaxNode::list(vec![SyntaxNode::list(vec![n("1")]), SyntaxNode::list(vec![])]);
    assert_eq!(
        eval_ok(&list),
        Value::list(vec![
            Value::list(vec![Value::scalar(1.0)]),
            Value::list(vec![])
        ])
    );
}

#[test]
fn test_signal_inside_list_aborts_it() {
    let list = SyntaxNode::list(vec![n("1"), SyntaxNode::brk(), n("2")]);
    assert!(matches!(eval(&list), Err(ControlAction::Break)));
}

// Names

#[test]
fn test_assign_then_lookup() {
    let mut env = Scope::new();
    let mut evaluator = Evaluator::new();
    let bound = evaluator
        .evaluate(&SyntaxNode::assign("g", n("9.81")), &mut env)
        .unwrap();
    assert_eq!(bound, Value::scalar(9.81));
    assert_eq!(
        evaluator.evaluate(&SyntaxNode::name("g"), &mut env).unwrap(),
        Value::scalar(9.81)
    );
}

#[test]
fn test_undefined_name() {
    assert_eq!(
        eval_err(&SyntaxNode::name("nope")).kind,
        EvalErrorKind::UndefinedVariable {
            name: "nope".to_string()
        }
    );
}

// Operators

#[test]
fn test_binary_and_group() {
    // (2 + 3) * 4
    let node = SyntaxNode::binary(
        SyntaxNode::group(SyntaxNode::binary(n("2"), "+", n("3"))),
        "*",
        n("4"),
    );
    assert_eq!(eval_ok(&node), Value::scalar(20.0));
}

#[test]
fn test_power() {
    let node = SyntaxNode::binary(n("3"), "^", n("2"));
    assert_eq!(eval_ok(&node), Value::scalar(9.0));
}

#[test]
fn test_division_by_zero() {
    let node = SyntaxNode::binary(n("1"), "/", n("0"));
    assert_eq!(
        eval_err(&node).kind,
        EvalErrorKind::Arithmetic(MeasureError::DivisionByZero)
    );
}

#[test]
fn test_unknown_binary_operator() {
    let node = SyntaxNode::binary(n("1"), "%", n("2"));
    assert_eq!(
        eval_err(&node).kind,
        EvalErrorKind::MalformedNode {
            kind: NodeKind::Binary,
            detail: "unknown operator `%`".to_string()
        }
    );
}

#[test]
fn test_unary_negation() {
    let node = SyntaxNode::unary("-", SyntaxNode::number(&["2", "0.5"]));
    assert_eq!(
        eval_ok(&node),
        Value::number(MeasuredValue::with_reading_error(-2.0, 0.5))
    );
}

#[test]
fn test_left_operand_error_wins() {
    let node = SyntaxNode::binary(SyntaxNode::name("a"), "+", SyntaxNode::name("b"));
    assert_eq!(
        eval_err(&node).kind,
        EvalErrorKind::UndefinedVariable {
            name: "a".to_string()
        }
    );
}

// Calls

#[test]
fn test_intrinsic_call() {
    let node = SyntaxNode::call("abs", vec![SyntaxNode::unary("-", n("4"))]);
    assert_eq!(eval_ok(&node), Value::scalar(4.0));
}

#[test]
fn test_avg_call_over_list() {
    let node = SyntaxNode::call("avg", vec![SyntaxNode::list(vec![n("2"), n("4")])]);
    assert_eq!(
        eval_ok(&node),
        Value::number(MeasuredValue::new(3.0, 0.0, 1.0))
    );
}

#[test]
fn test_unknown_function() {
    let node = SyntaxNode::call("launch", vec![]);
    assert_eq!(
        eval_err(&node).kind,
        EvalErrorKind::UndefinedFunction {
            name: "launch".to_string()
        }
    );
}

// Control

#[test]
fn test_bare_return() {
    assert!(matches!(
        eval(&SyntaxNode::ret(None)),
        Err(ControlAction::Return(None))
    ));
}

#[test]
fn test_return_with_value() {
    let Err(ControlAction::Return(Some(value))) = eval(&SyntaxNode::ret(Some(n("7")))) else {
        panic!("expected a return signal");
    };
    assert_eq!(value, Value::scalar(7.0));
}

#[test]
fn test_return_operand_signal_passes_through() {
    // `return (break)` is a break, not a return wrapping one.
    let node = SyntaxNode::ret(Some(SyntaxNode::brk()));
    assert!(matches!(eval(&node), Err(ControlAction::Break)));
}

#[test]
fn test_break_and_continue() {
    assert!(matches!(eval(&SyntaxNode::brk()), Err(ControlAction::Break)));
    assert!(matches!(eval(&SyntaxNode::cont()), Err(ControlAction::Continue)));
}

#[test]
fn test_unknown_keyword() {
    assert_eq!(
        eval_err(&SyntaxNode::control("goto", None)).kind,
        EvalErrorKind::UnknownKeyword {
            keyword: "goto".to_string()
        }
    );
}

#[test]
fn test_control_in_value_position() {
    let node = SyntaxNode::assign("x", SyntaxNode::ret(Some(n("1"))));
    let mut env = Scope::new();
    let result = Evaluator::new().evaluate(&node, &mut env);
    assert!(matches!(result, Err(ControlAction::Return(Some(_)))));
    assert_eq!(env.lookup("x"), None);
}

// Blocks

#[test]
fn test_block_yields_last_value() {
    let block = SyntaxNode::block(vec![SyntaxNode::assign("x", n("2")), SyntaxNode::name("x")]);
    let mut env = Scope::new();
    assert_eq!(
        Evaluator::new().eval_block(&block, &mut env).unwrap(),
        Some(Value::scalar(2.0))
    );
}

#[test]
fn test_empty_block() {
    let block = SyntaxNode::block(vec![]);
    assert_eq!(
        Evaluator::new().eval_block(&block, &mut Scope::new()).unwrap(),
        None
    );
    assert_eq!(eval_err(&block).kind.variant_name(), "MalformedNode");
}

#[test]
fn test_block_in_value_position() {
    let node = SyntaxNode::binary(SyntaxNode::block(vec![n("1"), n("2")]), "+", n("3"));
    assert_eq!(eval_ok(&node), Value::scalar(5.0));
}

#[test]
fn test_return_skips_rest_of_block() {
    let block = SyntaxNode::block(vec![
        SyntaxNode::assign("a", n("1")),
        SyntaxNode::ret(Some(SyntaxNode::name("a"))),
        SyntaxNode::assign("b", n("2")),
    ]);
    let mut env = Scope::new();
    let result = Evaluator::new().eval_block(&block, &mut env);
    assert!(matches!(result, Err(ControlAction::Return(Some(_)))));
    assert_eq!(env.lookup("a"), Some(Value::scalar(1.0)));
    assert_eq!(env.lookup("b"), None);
}

#[test]
fn test_eval_block_rejects_non_block() {
    let Err(ControlAction::Error(err)) = Evaluator::new().eval_block(&n("1"), &mut Scope::new())
    else {
        panic!("expected an error");
    };
    assert_eq!(err.kind.variant_name(), "MalformedNode");
}

// Run

#[test]
fn test_run_top_level_return_ends_script() {
    let program = SyntaxNode::block(vec![SyntaxNode::ret(Some(n("3"))), n("4")]);
    let result = Evaluator::new().run(&program, &mut Scope::new()).unwrap();
    assert_eq!(result, Some(Value::scalar(3.0)));
}

#[test]
fn test_run_escaped_break_is_unresolved() {
    let program = SyntaxNode::block(vec![n("1"), SyntaxNode::brk()]);
    let err = Evaluator::new().run(&program, &mut Scope::new()).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnresolvedControlSignal { keyword: "break" }
    );
}

#[test]
fn test_run_single_expression() {
    let result = Evaluator::new().run(&n("5"), &mut Scope::new()).unwrap();
    assert_eq!(result, Some(Value::scalar(5.0)));
}

// Spans and depth

#[test]
fn test_error_gets_innermost_span() {
    let inner = SyntaxNode::name("missing").with_span(Span::new(4, 11));
    let outer = SyntaxNode::group(inner).with_span(Span::new(3, 12));
    assert_eq!(eval_err(&outer).span, Some(Span::new(4, 11)));
}

#[test]
fn test_error_gets_enclosing_span_when_leaf_has_none() {
    let outer = SyntaxNode::group(SyntaxNode::name("missing")).with_span(Span::new(3, 12));
    assert_eq!(eval_err(&outer).span, Some(Span::new(3, 12)));
}

#[test]
fn test_max_depth_exceeded() {
    let mut node = n("1");
    for _ in 0..10 {
        node = SyntaxNode::group(node);
    }
    let mut evaluator = Evaluator::builder().max_depth(Some(5)).build();
    let Err(ControlAction::Error(err)) = evaluator.evaluate(&node, &mut Scope::new()) else {
        panic!("expected a depth error");
    };
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 5 });

    // The counter unwinds with the error; the evaluator stays usable.
    assert_eq!(evaluator.evaluate(&n("2"), &mut Scope::new()).unwrap(), Value::scalar(2.0));
}

#[test]
fn test_within_max_depth() {
    let node = SyntaxNode::group(SyntaxNode::group(n("1")));
    let mut evaluator = Evaluator::builder().max_depth(Some(3)).build();
    assert_eq!(evaluator.max_depth(), Some(3));
    assert_eq!(
        evaluator.evaluate(&node, &mut Scope::new()).unwrap(),
        Value::scalar(1.0)
    );
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_deeply_nested_script_evaluates_and_drops() {
    let mut node = n("1");
    for _ in 0..50_000 {
        node = SyntaxNode::unary("-", node);
    }
    let result = Evaluator::new().run(&node, &mut Scope::new()).unwrap();
    assert_eq!(result, Some(Value::scalar(1.0)));
    drop(node);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_default_depth_is_unbounded() {
    assert_eq!(Evaluator::new().max_depth(), None);
}

#[test]
fn test_malformed_children() {
    let node = SyntaxNode::new(NodeKind::Group, vec![SyntaxChild::Token("(".to_string())]);
    assert_eq!(
        eval_err(&node).kind,
        EvalErrorKind::MalformedNode {
            kind: NodeKind::Group,
            detail: "expected exactly one nested node".to_string()
        }
    );
}
