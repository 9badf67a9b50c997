//! Evaluation helpers grouped by construct.
//!
//! - `control`: control keywords and the loop/call signal hooks
//! - `expr`: literals and names

pub mod control;
pub mod expr;
