//! Averaging repeated measurements.
//!
//! Two entry points, two conventions:
//!
//! - [`average_of_readings`]: raw magnitudes that share one reading error.
//!   The standard channel is the standard error of the mean, the sample
//!   standard deviation (n - 1) divided by `sqrt(n)`.
//! - [`average_of_measurements`]: values that already carry uncertainty.
//!   The reading channel is dropped and the standard channel is the
//!   population standard deviation of the magnitudes, since the spread across
//!   repeats dominates each member's own stated error.

use crate::{MeasureError, MeasuredValue};

#[allow(
    clippy::cast_precision_loss,
    reason = "sample sizes never approach 2^52"
)]
fn count(n: usize) -> f64 {
    n as f64
}

fn mean(magnitudes: &[f64]) -> f64 {
    magnitudes.iter().sum::<f64>() / count(magnitudes.len())
}

fn sum_of_squared_deviations(magnitudes: &[f64], mean: f64) -> f64 {
    magnitudes.iter().map(|x| (x - mean).powi(2)).sum()
}

/// Average raw readings that share one reading error.
///
/// A single reading has no spread, so its standard error is zero.
pub fn average_of_readings(
    magnitudes: &[f64],
    reading_error: f64,
) -> Result<MeasuredValue, MeasureError> {
    if magnitudes.is_empty() {
        return Err(MeasureError::EmptySample);
    }
    let n = magnitudes.len();
    let average = mean(magnitudes);
    let standard_error = if n < 2 {
        0.0
    } else {
        let sample_variance =
            sum_of_squared_deviations(magnitudes, average) / count(n.saturating_sub(1));
        sample_variance.sqrt() / count(n).sqrt()
    };
    Ok(MeasuredValue::new(average, reading_error, standard_error))
}

/// Average values that already carry their own uncertainty.
pub fn average_of_measurements(
    measurements: &[MeasuredValue],
) -> Result<MeasuredValue, MeasureError> {
    if measurements.is_empty() {
        return Err(MeasureError::EmptySample);
    }
    let magnitudes: Vec<f64> = measurements.iter().map(MeasuredValue::magnitude).collect();
    let average = mean(&magnitudes);
    let population_variance =
        sum_of_squared_deviations(&magnitudes, average) / count(magnitudes.len());
    Ok(MeasuredValue::new(average, 0.0, population_variance.sqrt()))
}

/// One value per raw magnitude, all sharing the same error channels.
pub fn from_set(
    magnitudes: &[f64],
    reading_error: f64,
    standard_error: f64,
) -> Vec<MeasuredValue> {
    magnitudes
        .iter()
        .map(|&magnitude| MeasuredValue::new(magnitude, reading_error, standard_error))
        .collect()
}
