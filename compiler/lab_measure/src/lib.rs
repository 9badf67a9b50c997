//! Lab Measure - measured values with propagated uncertainty.
//!
//! A [`MeasuredValue`] is a magnitude with two independently tracked
//! uncertainty channels:
//!
//! - **reading error**: the instrument resolution of a single reading
//! - **standard error**: the statistical spread of repeated readings
//!
//! Every operation propagates both channels separately. They are only
//! collapsed by [`MeasuredValue::error`], which reports the larger one, for
//! display and comparison.
//!
//! # Propagation rules
//!
//! | Operation      | Channel rule                                  |
//! |----------------|-----------------------------------------------|
//! | `x ± y`        | `sqrt(ex² + ey²)`                             |
//! | `x · y`, `x/y` | `|r| · sqrt((ex/x)² + (ey/y)²)`               |
//! | `xⁿ`           | `|n · xⁿ⁻¹ · e|`                              |
//! | `sin x`        | `|e · cos x|`                                 |
//! | `cos x`        | `|e · sin x|`                                 |
//! | `asin x`       | `e / sqrt(1 - x²)`                            |
//! | `atan x`       | `e / (1 + x²)`                                |
//!
//! Relative-error terms whose denominator magnitude is exactly zero
//! contribute zero instead of producing NaN or infinity. This applies to
//! uncertainty terms only; a zero divisor in the magnitude itself is a
//! [`MeasureError::DivisionByZero`].

mod average;
mod error;
mod format;
mod measured;

pub use average::{average_of_measurements, average_of_readings, from_set};
pub use error::MeasureError;
pub use measured::MeasuredValue;
