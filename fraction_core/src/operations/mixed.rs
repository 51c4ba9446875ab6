//! # Mixed Numbers
//!
//! `whole + numerator/denominator` conversions. Neither direction
//! simplifies its fractional part.
//!
//! The whole part is the floor of the quotient and the remainder follows
//! the sign of the denominator, so `whole + remainder/denominator` always
//! equals the input value, negatives included (`-7/2` becomes `-4 1/2`).
//!
//! These conversions take no locale; their error text is the primary
//! locale's.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ensure_denominator;
use crate::errors::FractionResult;
use crate::fraction::{bigint_serde, Fraction};
use crate::locale::Locale;

/// A whole part plus a remainder fraction.
///
/// ## JSON Example
///
/// ```json
/// { "whole": 2, "fraction": { "numerator": 1, "denominator": 3 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedNumber {
    /// Integer part, `floor(numerator / denominator)`
    #[serde(with = "bigint_serde")]
    pub whole: BigInt,

    /// Remainder over the original denominator
    pub fraction: Fraction,
}

impl MixedNumber {
    /// The equivalent improper fraction, unsimplified.
    pub fn to_fraction(&self) -> Fraction {
        Fraction::new(
            &self.whole * &self.fraction.denominator + &self.fraction.numerator,
            self.fraction.denominator.clone(),
        )
    }
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fraction.is_zero() {
            write!(f, "{}", self.whole)
        } else if self.whole.is_zero() {
            write!(f, "{}", self.fraction)
        } else {
            write!(f, "{} {}", self.whole, self.fraction)
        }
    }
}

/// Split `numerator / denominator` into a whole part and a remainder.
///
/// # Errors
///
/// `InvalidArgument` (zero denominator) when `denominator == 0`.
///
/// # Example
///
/// ```rust
/// use fraction_core::fraction::Fraction;
/// use fraction_core::operations::to_mixed_number;
/// use fraction_core::BigInt;
///
/// let mixed = to_mixed_number(7, 3).unwrap();
/// assert_eq!(mixed.whole, BigInt::from(2));
/// assert_eq!(mixed.fraction, Fraction::new(1, 3));
/// assert_eq!(mixed.to_string(), "2 1/3");
/// ```
pub fn to_mixed_number(
    numerator: impl Into<BigInt>,
    denominator: impl Into<BigInt>,
) -> FractionResult<MixedNumber> {
    let numerator = numerator.into();
    let denominator = denominator.into();
    ensure_denominator(&denominator, Locale::default())?;

    let (whole, remainder) = numerator.div_mod_floor(&denominator);
    let mixed = MixedNumber {
        whole,
        fraction: Fraction::new(remainder, denominator),
    };
    debug!(%numerator, %mixed, "converted fraction to mixed number");
    Ok(mixed)
}

/// Combine `whole numerator/denominator` into `(whole·denominator + numerator)/denominator`.
///
/// # Errors
///
/// `InvalidArgument` (zero denominator) when `denominator == 0`.
pub fn from_mixed_number(
    whole: impl Into<BigInt>,
    numerator: impl Into<BigInt>,
    denominator: impl Into<BigInt>,
) -> FractionResult<Fraction> {
    let whole = whole.into();
    let numerator = numerator.into();
    let denominator = denominator.into();
    ensure_denominator(&denominator, Locale::default())?;

    let fraction = Fraction::new(&whole * &denominator + numerator, denominator);
    debug!(%whole, %fraction, "converted mixed number to fraction");
    Ok(fraction)
}
