//! Display formatting for measured values.
//!
//! The uncertainty is shown to exactly one significant digit and the
//! magnitude is rounded to the decimal place of that digit:
//!
//! ```text
//! 1234.56789 ± 0.05333  ->  1234.57±0.05
//! 100.4      ± 4.3      ->  100.0±4.
//! 1234.567   ± 543      ->  1200.0±500.
//! ```
//!
//! When the significant digit sits at or left of the units place the error
//! keeps a trailing `.`; its position still decides how far the magnitude is
//! rounded.
//!
//! Magnitudes below `1e-4` or from `1e16` up switch to scientific notation
//! with a signed, two-digit exponent: `1.2e-05`, `1e+20`.

use std::fmt;

use crate::MeasuredValue;

/// An uncertainty rendered to one significant digit.
struct ErrorDigit {
    text: String,
    /// Decimal places implied by the digit's position. Negative means the
    /// magnitude is rounded left of the decimal point.
    places: i32,
}

fn error_digit(error: f64) -> ErrorDigit {
    if !error.is_finite() {
        return ErrorDigit {
            text: error.to_string(),
            places: 0,
        };
    }
    #[allow(clippy::float_cmp, reason = "zero has no significant digit")]
    let is_zero = error == 0.0;
    if is_zero {
        return ErrorDigit {
            text: "0.".to_string(),
            places: 0,
        };
    }

    // `{:.0e}` rounds to one significant digit exactly: "5e-2", "4e0", "1e1".
    let scientific = format!("{:.0e}", error.abs());
    let (digit, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let zeros = usize::try_from(exponent.unsigned_abs()).unwrap_or(0);

    let text = if exponent >= 0 {
        format!("{digit}{}.", "0".repeat(zeros))
    } else {
        format!("0.{}{digit}", "0".repeat(zeros.saturating_sub(1)))
    };
    ErrorDigit {
        text,
        places: exponent.saturating_neg(),
    }
}

/// Round `value` to `places` decimal places (negative: tens, hundreds, ...).
fn round_to_places(value: f64, places: i32) -> f64 {
    if places >= 0 {
        // Decimal formatting rounds on the exact binary value.
        let precision = usize::try_from(places).unwrap_or(0);
        format!("{value:.precision$}").parse().unwrap_or(value)
    } else {
        let scale = 10f64.powi(places.saturating_neg());
        (value / scale).round_ties_even() * scale
    }
}

/// Rewrite a `{:?}` exponent as sign plus at least two digits: `1e20` becomes
/// `1e+20`, `1.2e-5` becomes `1.2e-05`.
fn signed_exponent(repr: String) -> String {
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

impl MeasuredValue {
    /// The two display parts: rounded magnitude and one-digit error.
    fn display_parts(&self) -> (String, String) {
        let digit = error_digit(self.error());
        let magnitude = if self.magnitude().is_finite() {
            round_to_places(self.magnitude(), digit.places)
        } else {
            self.magnitude()
        };
        // `{:?}` is the shortest round-trip form and always keeps a fraction.
        (signed_exponent(format!("{magnitude:?}")), digit.text)
    }

    /// LaTeX math-mode rendering: `$1234.57 \pm 0.05$`.
    pub fn latex(&self) -> String {
        let (magnitude, error) = self.display_parts();
        format!("${magnitude} \\pm {error}$")
    }
}

impl fmt::Display for MeasuredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (magnitude, error) = self.display_parts();
        write!(f, "{magnitude}±{error}")
    }
}
