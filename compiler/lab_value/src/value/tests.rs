use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_type_names() {
    assert_eq!(Value::scalar(1.0).type_name(), "number");
    assert_eq!(Value::text("a").type_name(), "text");
    assert_eq!(Value::symbol("x").type_name(), "symbol");
    assert_eq!(Value::package("numpy").type_name(), "package");
    assert_eq!(Value::list(vec![]).type_name(), "list");
}

#[test]
fn test_symbol_never_equals_package_of_same_name() {
    assert_ne!(Value::symbol("math"), Value::package("math"));
    assert_eq!(Value::symbol("math"), Value::symbol("math"));
    assert_eq!(Value::package("math"), Value::package("math"));
}

#[test]
fn test_list_equality_is_structural() {
    let a = Value::list(vec![Value::scalar(1.0), Value::text("s")]);
    let b = Value::list(vec![Value::scalar(1.0), Value::text("s")]);
    let c = Value::list(vec![Value::text("s"), Value::scalar(1.0)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_number_equality_includes_channels() {
    assert_eq!(
        Value::number(MeasuredValue::new(1.0, 0.1, 0.2)),
        Value::number(MeasuredValue::new(1.0, 0.1, 0.2))
    );
    assert_ne!(
        Value::number(MeasuredValue::new(1.0, 0.1, 0.2)),
        Value::scalar(1.0)
    );
}

#[test]
fn test_accessors() {
    assert_eq!(
        Value::scalar(2.0).as_number(),
        Some(MeasuredValue::exact(2.0))
    );
    assert_eq!(Value::text("hi").as_text(), Some("hi"));
    assert_eq!(Value::text("hi").as_number(), None);
    assert_eq!(
        Value::list(vec![Value::scalar(1.0)]).as_list(),
        Some(&[Value::scalar(1.0)][..])
    );
    assert_eq!(Value::symbol("x").as_list(), None);
}

#[test]
fn test_display() {
    assert_eq!(
        Value::number(MeasuredValue::with_reading_error(1234.56789, 0.05333)).to_string(),
        "1234.57±0.05"
    );
    assert_eq!(Value::text("volts").to_string(), "\"volts\"");
    assert_eq!(Value::symbol("x").to_string(), "x");
    assert_eq!(Value::package("numpy").to_string(), "@numpy");
    assert_eq!(
        Value::list(vec![Value::text("a"), Value::symbol("b")]).to_string(),
        "[\"a\", b]"
    );
    assert_eq!(Value::list(vec![]).to_string(), "[]");
}

#[test]
fn test_clone_shares_payload() {
    let list = Value::list(vec![Value::scalar(1.0)]);
    let copy = list.clone();
    assert_eq!(list, copy);
}
