//! # Decimal to Fraction
//!
//! The number of fractional digits is read from the value's shortest
//! round-trip text (`0.75` has two, `0.1 + 0.2` has seventeen), capped at
//! `precision`. The scaled numerator is computed on those decimal digits
//! directly, rounding half away from zero at the cap, so no float product
//! is involved and any `precision` is safe.
//!
//! Values with more fractional digits than `precision` lose the excess
//! digits. That loss is intended.

use num_bigint::BigInt;
use num_traits::Zero;
use tracing::{debug, warn};

use super::{labeled, simplify, OperationResult};
use crate::errors::{FractionError, FractionResult, InvalidArgumentReason};
use crate::fraction::Fraction;
use crate::locale::Locale;

/// Fractional digits kept by [`from_decimal`].
pub const DEFAULT_PRECISION: u32 = 6;

/// Convert a decimal to a simplified fraction, keeping up to
/// [`DEFAULT_PRECISION`] fractional digits.
///
/// ```rust
/// use fraction_core::fraction::Fraction;
/// use fraction_core::locale::Locale;
/// use fraction_core::operations::from_decimal;
///
/// let result = from_decimal(0.75, Locale::En).unwrap();
/// assert_eq!(result.result, Fraction::new(3, 4));
/// ```
pub fn from_decimal(decimal: f64, locale: Locale) -> FractionResult<OperationResult> {
    from_decimal_with_precision(decimal, DEFAULT_PRECISION, locale)
}

/// Convert a decimal to a simplified fraction, keeping up to `precision`
/// fractional digits.
///
/// # Errors
///
/// `InvalidArgument` (non-finite decimal) for NaN and infinities.
pub fn from_decimal_with_precision(
    decimal: f64,
    precision: u32,
    locale: Locale,
) -> FractionResult<OperationResult> {
    if !decimal.is_finite() {
        warn!(decimal, %locale, "rejected non-finite decimal");
        return Err(FractionError::invalid_argument(
            InvalidArgumentReason::NonFiniteDecimal,
            locale,
        ));
    }

    let text = decimal.abs().to_string();
    let (integer_digits, fraction_digits) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let places = fraction_digits.len().min(precision as usize);
    let truncated = fraction_digits.len() > places;

    let mut magnitude = integer_digits
        .chars()
        .chain(fraction_digits.chars().take(places))
        .filter_map(|c| c.to_digit(10))
        .fold(BigInt::zero(), |acc, digit| acc * 10u32 + digit);
    let round_up = fraction_digits
        .chars()
        .nth(places)
        .and_then(|c| c.to_digit(10))
        .is_some_and(|digit| digit >= 5);
    if round_up {
        magnitude += 1u32;
    }

    let numerator = if decimal < 0.0 { -magnitude } else { magnitude };
    let scale = BigInt::from(10u32).pow(places as u32);

    let messages = locale.messages();
    let mut steps = vec![
        labeled(messages.decimal, decimal),
        labeled(messages.decimal_places, places),
        format!(
            "{} {}: {} × {} {} {}",
            messages.multiply_by,
            scale,
            decimal,
            scale,
            if truncated { "≈" } else { "=" },
            numerator
        ),
        labeled(
            messages.fraction,
            Fraction::new(numerator.clone(), scale.clone()),
        ),
    ];

    let (result, tail) = simplify(numerator, scale, locale)?.into_trail_tail();
    steps.extend(tail);

    debug!(decimal, precision, places, %result, "converted decimal to fraction");
    Ok(OperationResult::new(result, steps))
}
