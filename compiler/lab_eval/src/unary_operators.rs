//! Unary operator implementations for the evaluator.

use lab_ir::UnaryOp;
use lab_value::{type_mismatch, EvalResult, Value};

/// Evaluate a prefix operator applied to `value`.
///
/// Only numbers take prefix operators. Negation is multiplication by an exact
/// `-1`, so a zero magnitude loses its relative uncertainty.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (number @ Value::Number(_), UnaryOp::Plus) => Ok(number),
        (other, _) => Err(type_mismatch("number", other.type_name()).into()),
    }
}
