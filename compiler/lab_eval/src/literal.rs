//! Number literal decoding.
//!
//! A number literal is one or two numeric tokens: the magnitude and,
//! optionally, its uncertainty. Each token is a bare decimal or a mantissa
//! with a power-of-ten exponent:
//!
//! ```text
//! token    = digits [ "." digits ] [ "*10^" [ "-" ] digits ]
//! ```
//!
//! The uncertainty lands in the reading channel; the standard channel of a
//! literal is always zero.

use lab_measure::MeasuredValue;
use lab_value::{malformed_literal, EvalError};

/// Tokens a parser may leave between magnitude and uncertainty.
const SEPARATORS: [&str; 2] = ["±", "+-"];

/// Whether `token` separates magnitude and uncertainty in a number node.
pub fn is_separator(token: &str) -> bool {
    SEPARATORS.contains(&token)
}

/// Decode the numeric tokens of a number literal.
pub fn decode_number(tokens: &[&str]) -> Result<MeasuredValue, EvalError> {
    match tokens {
        [] => Err(malformed_literal("expected a magnitude, got no tokens")),
        [magnitude] => Ok(MeasuredValue::exact(decode_token(magnitude)?)),
        [magnitude, uncertainty] => Ok(MeasuredValue::with_reading_error(
            decode_token(magnitude)?,
            decode_token(uncertainty)?,
        )),
        _ => Err(malformed_literal(format!(
            "expected at most 2 tokens, got {}",
            tokens.len()
        ))),
    }
}

/// Decode a single numeric token.
pub fn decode_token(token: &str) -> Result<f64, EvalError> {
    let (mantissa, exponent) = match token.split_once('*') {
        Some((mantissa, power)) => {
            let exponent = power
                .strip_prefix("10^")
                .ok_or_else(|| malformed_literal(format!("`{token}`: exponent must be `*10^n`")))?;
            (mantissa, Some(exponent))
        }
        None => (token, None),
    };

    if !is_decimal(mantissa) {
        return Err(malformed_literal(format!("`{token}`: invalid mantissa")));
    }
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix('-').unwrap_or(exponent);
        if !is_digits(digits) {
            return Err(malformed_literal(format!("`{token}`: invalid exponent")));
        }
    }

    // Going through `e` notation keeps the decimal-to-binary rounding exact:
    // `1.2*10^-3` decodes to the same f64 as `0.0012`.
    let scientific = match exponent {
        Some(exponent) => format!("{mantissa}e{exponent}"),
        None => mantissa.to_string(),
    };
    let value: f64 = scientific
        .parse()
        .map_err(|_| malformed_literal(format!("`{token}`: not a number")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(malformed_literal(format!("`{token}`: out of range")))
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `digits [ "." digits ]`
fn is_decimal(s: &str) -> bool {
    match s.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(s),
    }
}
