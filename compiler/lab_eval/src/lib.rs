//! Lab Eval - tree-walking evaluator for the Lab measurement language.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - [`ParseNode`](lab_ir::ParseNode): read-only view of the host's parse tree
//! - [`Environment`]: variable and package storage, threaded as `&mut E`
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `call_intrinsic`: the built-in function table
//! - `exec::control`: hooks loops and calls use to catch signals
//!
//! Values, errors and the `ControlAction` signal type come from `lab_value`
//! and are re-exported here.

mod environment;
mod evaluator;
pub mod exec;
mod intrinsics;
mod literal;
mod operators;
mod stack;
mod unary_operators;

use std::sync::Once;

pub use lab_value::{ControlAction, EvalError, EvalErrorKind, EvalResult, Value};

pub use environment::{resolve_package, Environment, PackageHandle, Scope};
pub use evaluator::{Evaluator, EvaluatorBuilder};
pub use exec::control::{catch_return, to_loop_action, ControlKeyword, LoopAction};
pub use intrinsics::{call_intrinsic, is_intrinsic, INTRINSICS};
pub use literal::{decode_number, decode_token};
pub use operators::evaluate_binary;
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lab_eval=debug` or `RUST_LOG=lab_eval=trace`; the
/// trace level shows the evaluation tree node by node.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
