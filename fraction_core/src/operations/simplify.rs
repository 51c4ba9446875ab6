//! # Simplification
//!
//! Reduce a fraction to lowest terms by dividing both parts by their GCD.
//! The result is always canonical: a negative denominator moves its sign to
//! the numerator, and any zero numerator yields `0/1`.

use num_bigint::BigInt;
use num_traits::Signed;
use tracing::debug;

use super::{ensure_denominator, labeled, operand, OperationResult};
use crate::errors::FractionResult;
use crate::fraction::{gcd, ratio_to_f64, Fraction};
use crate::locale::Locale;

/// Simplify `numerator / denominator`.
///
/// # Errors
///
/// `InvalidArgument` (zero denominator) when `denominator == 0`.
///
/// # Example
///
/// ```rust
/// use fraction_core::fraction::Fraction;
/// use fraction_core::locale::Locale;
/// use fraction_core::operations::simplify;
///
/// let reduced = simplify(12, 18, Locale::En).unwrap();
/// assert_eq!(reduced.result, Fraction::new(2, 3));
/// assert_eq!(reduced.steps[1], "Greatest common divisor: 6");
///
/// assert!(simplify(1, 0, Locale::En).is_err());
/// ```
pub fn simplify(
    numerator: impl Into<BigInt>,
    denominator: impl Into<BigInt>,
    locale: Locale,
) -> FractionResult<OperationResult> {
    let numerator = numerator.into();
    let denominator = denominator.into();
    ensure_denominator(&denominator, locale)?;

    let messages = locale.messages();
    let divisor = gcd(&numerator, &denominator);
    let mut reduced_numerator = &numerator / &divisor;
    let mut reduced_denominator = &denominator / &divisor;

    let mut steps = vec![
        labeled(
            messages.original_fraction,
            Fraction::new(numerator.clone(), denominator.clone()),
        ),
        labeled(messages.gcd, &divisor),
        labeled(
            messages.numerator,
            format!("{} ÷ {} = {}", operand(&numerator), divisor, reduced_numerator),
        ),
        labeled(
            messages.denominator,
            format!("{} ÷ {} = {}", operand(&denominator), divisor, reduced_denominator),
        ),
    ];

    if reduced_denominator.is_negative() {
        let before = Fraction::new(reduced_numerator.clone(), reduced_denominator.clone());
        reduced_numerator = -reduced_numerator;
        reduced_denominator = -reduced_denominator;
        let after = Fraction::new(reduced_numerator.clone(), reduced_denominator.clone());
        steps.push(labeled(messages.sign_moved, format!("{before} → {after}")));
    }

    let result = Fraction::new(reduced_numerator, reduced_denominator);
    debug!(%numerator, %denominator, %divisor, %result, "simplified fraction");

    Ok(OperationResult::new(result, steps))
}

/// Decimal value of `numerator / denominator`, without simplifying first.
///
/// # Errors
///
/// `InvalidArgument` (zero denominator) when `denominator == 0`.
pub fn to_decimal(
    numerator: impl Into<BigInt>,
    denominator: impl Into<BigInt>,
    locale: Locale,
) -> FractionResult<f64> {
    let numerator = numerator.into();
    let denominator = denominator.into();
    ensure_denominator(&denominator, locale)?;

    let decimal = ratio_to_f64(&numerator, &denominator);
    debug!(%numerator, %denominator, decimal, "converted fraction to decimal");
    Ok(decimal)
}
