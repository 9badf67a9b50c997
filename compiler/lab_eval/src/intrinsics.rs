//! Built-in functions callable from scripts.
//!
//! | Name           | Arguments                | Result                          |
//! |----------------|--------------------------|---------------------------------|
//! | `sin` `cos`    | number (radians)         | number                          |
//! | `tan` `asin`   | number                   | number, may fail                |
//! | `atan` `abs`   | number                   | number                          |
//! | `avg`          | list of numbers          | average of measurements         |
//! | `avg_readings` | list of numbers, number  | average of readings             |
//! | `latex`        | number                   | text                            |
//!
//! User-defined functions are a host concern and never reach this table.

use lab_measure::{average_of_measurements, average_of_readings, MeasuredValue};
use lab_value::{
    type_mismatch, undefined_function, wrong_arg_count, EvalError, EvalResult, Value,
};

/// Names of every intrinsic, in table order.
pub const INTRINSICS: [&str; 9] = [
    "sin",
    "cos",
    "tan",
    "asin",
    "atan",
    "abs",
    "avg",
    "avg_readings",
    "latex",
];

pub fn is_intrinsic(name: &str) -> bool {
    INTRINSICS.contains(&name)
}

/// Call the intrinsic `name` with already evaluated arguments.
pub fn call_intrinsic(name: &str, args: &[Value]) -> EvalResult {
    let result = match name {
        "sin" => number_arg(name, args)?.sine(),
        "cos" => number_arg(name, args)?.cosine(),
        "tan" => number_arg(name, args)?.tangent()?,
        "asin" => number_arg(name, args)?.arcsin()?,
        "atan" => number_arg(name, args)?.arctan(),
        "abs" => number_arg(name, args)?.abs(),
        "avg" => {
            let [list] = expect_args::<1>(name, args)?;
            average_of_measurements(&numbers(list)?)?
        }
        "avg_readings" => {
            let [list, reading_error] = expect_args::<2>(name, args)?;
            let magnitudes: Vec<f64> = numbers(list)?
                .iter()
                .map(MeasuredValue::magnitude)
                .collect();
            average_of_readings(&magnitudes, number(reading_error)?.magnitude())?
        }
        "latex" => return Ok(Value::text(number_arg(name, args)?.latex())),
        _ => return Err(undefined_function(name).into()),
    };
    Ok(Value::Number(result))
}

fn expect_args<'a, const N: usize>(
    name: &str,
    args: &'a [Value],
) -> Result<&'a [Value; N], EvalError> {
    args.try_into()
        .map_err(|_| wrong_arg_count(name, N, args.len()))
}

/// The single number argument of a one-argument intrinsic.
fn number_arg(name: &str, args: &[Value]) -> Result<MeasuredValue, EvalError> {
    let [value] = expect_args::<1>(name, args)?;
    number(value)
}

fn number(value: &Value) -> Result<MeasuredValue, EvalError> {
    value
        .as_number()
        .ok_or_else(|| type_mismatch("number", value.type_name()))
}

fn numbers(value: &Value) -> Result<Vec<MeasuredValue>, EvalError> {
    let items = value
        .as_list()
        .ok_or_else(|| type_mismatch("list", value.type_name()))?;
    items.iter().map(number).collect()
}
