//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the value set is fixed, so a `match` on the
//! operand pair keeps every combination visible and exhaustive.

use lab_ir::BinaryOp;
use lab_measure::MeasuredValue;
use lab_value::{binary_type_mismatch, type_mismatch, EvalError, EvalResult, Heap, Value};

/// Evaluate `left op right`.
#[allow(
    clippy::needless_pass_by_value,
    reason = "operands arrive owned from evaluation; borrowing would force clones at call sites"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op),
        (Value::Text(a), Value::Text(b)) if op == BinaryOp::Add => {
            Ok(Value::text(format!("{}{}", &**a, &**b)))
        }
        (Value::List(a), Value::List(b)) if op == BinaryOp::Add => Ok(concat_lists(a, b)),
        _ => Err(binary_type_mismatch(op, left.type_name(), right.type_name()).into()),
    }
}

fn eval_number_binary(a: MeasuredValue, b: MeasuredValue, op: BinaryOp) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a.checked_div(b)?,
        BinaryOp::Pow => a.pow(integral_exponent(b)?)?,
    };
    Ok(Value::Number(result))
}

/// The exponent of `^` as an `i32`. Its uncertainty is not propagated.
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    reason = "integrality is exact and checked before the cast"
)]
fn integral_exponent(exponent: MeasuredValue) -> Result<i32, EvalError> {
    let n = exponent.magnitude();
    if n.trunc() != n || n.abs() > f64::from(i32::MAX) {
        return Err(type_mismatch("integral exponent", &n.to_string()));
    }
    Ok(n as i32)
}

fn concat_lists(a: &Heap<Vec<Value>>, b: &Heap<Vec<Value>>) -> Value {
    let mut items = Vec::with_capacity(a.len() + b.len());
    items.extend(a.iter().cloned());
    items.extend(b.iter().cloned());
    Value::list(items)
}
