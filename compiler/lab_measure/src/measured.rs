//! The `MeasuredValue` type and its propagating operations.

use std::ops::{Add, Mul, Neg, Sub};

use crate::MeasureError;

/// A magnitude with independently propagated reading and standard errors.
///
/// Values are immutable; every operation returns a fresh value. Bare `f64`
/// operands are promoted with [`MeasuredValue::exact`] (both channels zero)
/// before any shared propagation logic runs.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct MeasuredValue {
    magnitude: f64,
    reading_error: f64,
    standard_error: f64,
}

/// `num / den`, or zero when the denominator magnitude is exactly zero.
#[inline]
#[allow(clippy::float_cmp, reason = "exact zero is the guarded case")]
fn safe_div(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Product/quotient rule for one channel.
#[inline]
fn relative_channel(result: f64, x: f64, ex: f64, y: f64, ey: f64) -> f64 {
    result.abs() * (safe_div(ex, x).powi(2) + safe_div(ey, y).powi(2)).sqrt()
}

/// Sum/difference rule for one channel.
#[inline]
fn quadrature(ex: f64, ey: f64) -> f64 {
    (ex.powi(2) + ey.powi(2)).sqrt()
}

impl MeasuredValue {
    pub const fn new(magnitude: f64, reading_error: f64, standard_error: f64) -> Self {
        MeasuredValue {
            magnitude,
            reading_error,
            standard_error,
        }
    }

    /// A value with a reading error and no standard error.
    pub const fn with_reading_error(magnitude: f64, reading_error: f64) -> Self {
        Self::new(magnitude, reading_error, 0.0)
    }

    /// An uncertainty-free value. This is the scalar promotion.
    pub const fn exact(magnitude: f64) -> Self {
        Self::new(magnitude, 0.0, 0.0)
    }

    #[inline]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[inline]
    pub const fn reading_error(&self) -> f64 {
        self.reading_error
    }

    #[inline]
    pub const fn standard_error(&self) -> f64 {
        self.standard_error
    }

    /// The larger of the two uncertainty channels.
    #[inline]
    pub fn error(&self) -> f64 {
        self.reading_error.abs().max(self.standard_error.abs())
    }

    /// The magnitude as a plain float.
    #[inline]
    pub const fn as_f64(&self) -> f64 {
        self.magnitude
    }

    /// The magnitude truncated toward zero.
    ///
    /// Saturates at the `i64` bounds; NaN truncates to 0.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "float-to-int `as` saturates, which is the intended behavior"
    )]
    pub fn truncate(&self) -> i64 {
        self.magnitude.trunc() as i64
    }

    /// Build a value with `magnitude`, applying `rule` to each channel of `self`.
    #[inline]
    fn propagate(self, magnitude: f64, rule: impl Fn(f64) -> f64) -> Self {
        Self::new(magnitude, rule(self.reading_error), rule(self.standard_error))
    }

    fn product(self, rhs: Self) -> Self {
        let magnitude = self.magnitude * rhs.magnitude;
        Self::new(
            magnitude,
            relative_channel(
                magnitude,
                self.magnitude,
                self.reading_error,
                rhs.magnitude,
                rhs.reading_error,
            ),
            relative_channel(
                magnitude,
                self.magnitude,
                self.standard_error,
                rhs.magnitude,
                rhs.standard_error,
            ),
        )
    }

    /// Quotient with the product rule for uncertainties.
    ///
    /// A zero divisor magnitude is an error; zero-magnitude terms inside the
    /// uncertainty rule are not.
    #[allow(clippy::float_cmp, reason = "only an exact zero divisor is rejected")]
    pub fn checked_div(self, rhs: impl Into<Self>) -> Result<Self, MeasureError> {
        let rhs = rhs.into();
        if rhs.magnitude == 0.0 {
            return Err(MeasureError::DivisionByZero);
        }
        let magnitude = self.magnitude / rhs.magnitude;
        Ok(Self::new(
            magnitude,
            relative_channel(
                magnitude,
                self.magnitude,
                self.reading_error,
                rhs.magnitude,
                rhs.reading_error,
            ),
            relative_channel(
                magnitude,
                self.magnitude,
                self.standard_error,
                rhs.magnitude,
                rhs.standard_error,
            ),
        ))
    }

    /// Integer power: `xⁿ`, channels `|n · xⁿ⁻¹ · e|`.
    #[allow(clippy::float_cmp, reason = "0^-n is only undefined at exact zero")]
    pub fn pow(self, exponent: i32) -> Result<Self, MeasureError> {
        if exponent < 0 && self.magnitude == 0.0 {
            return Err(MeasureError::ZeroToNegativePower { exponent });
        }
        let magnitude = self.magnitude.powi(exponent);
        if exponent == 0 {
            return Ok(Self::exact(magnitude));
        }
        let n = f64::from(exponent);
        let slope = n * self.magnitude.powi(exponent.saturating_sub(1));
        Ok(self.propagate(magnitude, |e| (slope * e).abs()))
    }

    /// Sine of a value in radians.
    pub fn sine(self) -> Self {
        let cos = self.magnitude.cos();
        self.propagate(self.magnitude.sin(), |e| (e * cos).abs())
    }

    /// Cosine of a value in radians.
    pub fn cosine(self) -> Self {
        let sin = self.magnitude.sin();
        self.propagate(self.magnitude.cos(), |e| (e * sin).abs())
    }

    /// Tangent, computed as `sine / cosine` with the quotient rule.
    pub fn tangent(self) -> Result<Self, MeasureError> {
        self.sine().checked_div(self.cosine())
    }

    /// Arcsine. Magnitudes outside `[-1, 1]` are a domain error.
    pub fn arcsin(self) -> Result<Self, MeasureError> {
        if !(-1.0..=1.0).contains(&self.magnitude) {
            return Err(MeasureError::DomainError {
                operation: "arcsin",
                magnitude: self.magnitude,
            });
        }
        let slope = (1.0 - self.magnitude.powi(2)).sqrt();
        Ok(self.propagate(self.magnitude.asin(), |e| safe_div(e, slope)))
    }

    /// Arctangent.
    pub fn arctan(self) -> Self {
        let slope = 1.0 + self.magnitude.powi(2);
        self.propagate(self.magnitude.atan(), |e| e / slope)
    }

    /// Absolute magnitude; channels unchanged.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(
            self.magnitude.abs(),
            self.reading_error,
            self.standard_error,
        )
    }
}

impl From<f64> for MeasuredValue {
    fn from(magnitude: f64) -> Self {
        Self::exact(magnitude)
    }
}

impl<R: Into<MeasuredValue>> Add<R> for MeasuredValue {
    type Output = MeasuredValue;

    fn add(self, rhs: R) -> MeasuredValue {
        let rhs = rhs.into();
        MeasuredValue::new(
            self.magnitude + rhs.magnitude,
            quadrature(self.reading_error, rhs.reading_error),
            quadrature(self.standard_error, rhs.standard_error),
        )
    }
}

impl<R: Into<MeasuredValue>> Sub<R> for MeasuredValue {
    type Output = MeasuredValue;

    fn sub(self, rhs: R) -> MeasuredValue {
        let rhs = rhs.into();
        MeasuredValue::new(
            self.magnitude - rhs.magnitude,
            quadrature(self.reading_error, rhs.reading_error),
            quadrature(self.standard_error, rhs.standard_error),
        )
    }
}

impl<R: Into<MeasuredValue>> Mul<R> for MeasuredValue {
    type Output = MeasuredValue;

    fn mul(self, rhs: R) -> MeasuredValue {
        self.product(rhs.into())
    }
}

impl Add<MeasuredValue> for f64 {
    type Output = MeasuredValue;

    fn add(self, rhs: MeasuredValue) -> MeasuredValue {
        MeasuredValue::from(self) + rhs
    }
}

impl Sub<MeasuredValue> for f64 {
    type Output = MeasuredValue;

    fn sub(self, rhs: MeasuredValue) -> MeasuredValue {
        MeasuredValue::from(self) - rhs
    }
}

impl Mul<MeasuredValue> for f64 {
    type Output = MeasuredValue;

    fn mul(self, rhs: MeasuredValue) -> MeasuredValue {
        MeasuredValue::from(self) * rhs
    }
}

/// Negation is multiplication by the exact scalar `-1`.
impl Neg for MeasuredValue {
    type Output = MeasuredValue;

    fn neg(self) -> MeasuredValue {
        self * -1.0
    }
}
