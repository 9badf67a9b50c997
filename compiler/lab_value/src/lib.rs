//! Lab Value - runtime values, evaluation errors and control signals.
//!
//! Shared by the evaluator and any host construct (loops, calls) that needs
//! to consume the signals evaluation produces.

mod errors;
mod value;

pub use errors::{
    binary_type_mismatch, malformed_literal, malformed_node, stack_overflow,
    type_mismatch, undefined_function, undefined_variable, unknown_keyword,
    unresolved_control_signal, unresolved_package, wrong_arg_count, ControlAction, EvalError,
    EvalErrorKind, EvalNote, EvalResult,
};
pub use value::{Heap, Value};
