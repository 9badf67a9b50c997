//! Arithmetic failures of the measurement engine.

use thiserror::Error;

/// Failure of a magnitude computation.
///
/// Uncertainty channels never fail: their zero-denominator terms are
/// substituted with zero. Only the primary magnitude can raise these.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MeasureError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("zero raised to negative power {exponent}")]
    ZeroToNegativePower { exponent: i32 },

    #[error("{operation} is undefined for magnitude {magnitude}")]
    DomainError {
        operation: &'static str,
        magnitude: f64,
    },

    #[error("cannot average an empty set of measurements")]
    EmptySample,
}
