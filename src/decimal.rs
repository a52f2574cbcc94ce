//! Conversion of finite floats into exact decimal ratios.
//!
//! The number of decimal places comes from the float's `Display` output, which Rust prints as the
//! shortest digit string that parses back to the same value and never in exponent notation. So
//! `0.4` is read as `4/10` rather than as the binary value it actually stores. Other runtimes'
//! float formatting can pick a different digit count for the same input; results are only
//! guaranteed to match Rust's own formatter.

use num_traits::{Float, NumCast};
use std::fmt::Display;

use crate::fract::{BaseInt, FractionError};

/// Splits a float into an unreduced `(numerator, denominator)` pair with a power-of-ten
/// denominator.
///
/// Errors with [`FractionError::InvalidValue`] for NaN and infinities, and for finite values whose
/// digits don't fit in [`BaseInt`].
pub(crate) fn to_ratio<T: Float + Display>(value: T) -> Result<(BaseInt, BaseInt), FractionError> {
    let invalid = || FractionError::InvalidValue(value.to_f64().unwrap_or(f64::NAN));

    if !value.is_finite() {
        tracing::debug!(%value, "rejected non-finite float");
        return Err(invalid());
    }
    if value.is_zero() {
        return Ok((0, 1));
    }

    let sign: BaseInt = if value.is_sign_negative() { -1 } else { 1 };
    let magnitude = value.abs();

    let text = magnitude.to_string();
    let Some((_, digits)) = text.split_once('.') else {
        // Whole number.
        let whole = magnitude.floor().to_i64().ok_or_else(|| {
            tracing::debug!(%value, "whole part out of range");
            invalid()
        })?;
        return Ok((sign * whole, 1));
    };

    let places = digits.len() as u32;
    let denominator = BaseInt::checked_pow(10, places).ok_or_else(|| {
        tracing::debug!(%value, places, "too many decimal places");
        invalid()
    })?;
    let scale: T = NumCast::from(denominator).ok_or_else(invalid)?;
    let numerator = (magnitude * scale).floor().to_i64().ok_or_else(|| {
        tracing::debug!(%value, places, "scaled value out of range");
        invalid()
    })?;

    Ok((sign * numerator, denominator))
}
