//! # Fraction Operations
//!
//! The engine proper. Each operation is a pure function that takes its
//! operands plus a [`Locale`] and returns either a value or an
//! [`OperationResult`] carrying the simplified fraction, its decimal value
//! and a localized derivation trail.
//!
//! - [`simplify`] - Reduce to lowest terms; also [`to_decimal`]
//! - [`decimal`] - Decimal to fraction conversion
//! - [`arithmetic`] - Add, subtract, multiply, divide
//! - [`mixed`] - Mixed-number conversions
//!
//! ## Steps
//!
//! Trails follow the derivation order: operands first, then the
//! numerator/denominator computation, then the simplification trail.
//! Operations that delegate to [`simplify()`] drop its header line since
//! they already printed the unsimplified fraction.
//!
//! ```rust
//! use fraction_core::fraction::Fraction;
//! use fraction_core::locale::Locale;
//! use fraction_core::operations::add;
//!
//! let sum = add(&Fraction::new(1, 4), &Fraction::new(1, 3), Locale::En).unwrap();
//! assert_eq!(sum.result, Fraction::new(7, 12));
//! assert!((sum.decimal - 0.5833).abs() < 1e-4);
//! for step in &sum.steps {
//!     println!("{step}");
//! }
//! ```

pub mod arithmetic;
pub mod decimal;
pub mod mixed;
pub mod simplify;

#[cfg(test)]
mod properties;

use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::{FractionError, FractionResult};
use crate::fraction::Fraction;
use crate::locale::Locale;

pub use arithmetic::{add, divide, multiply, subtract, BinaryOperator};
pub use decimal::{from_decimal, from_decimal_with_precision, DEFAULT_PRECISION};
pub use mixed::{from_mixed_number, to_mixed_number, MixedNumber};
pub use simplify::{simplify, to_decimal};

/// Outcome of a fraction-producing operation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "result": { "numerator": 2, "denominator": 3 },
///   "decimal": 0.6666666666666666,
///   "steps": [
///     "Original fraction: 12/18",
///     "Greatest common divisor: 6",
///     "Numerator: 12 ÷ 6 = 2",
///     "Denominator: 18 ÷ 6 = 3"
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Simplified fraction
    pub result: Fraction,

    /// `result.numerator / result.denominator` in double precision
    pub decimal: f64,

    /// Localized derivation trail, in derivation order
    pub steps: Vec<String>,
}

impl OperationResult {
    pub(crate) fn new(result: Fraction, steps: Vec<String>) -> Self {
        OperationResult {
            decimal: result.to_f64(),
            result,
            steps,
        }
    }

    /// Steps after the header line.
    pub(crate) fn into_trail_tail(self) -> (Fraction, impl Iterator<Item = String>) {
        (self.result, self.steps.into_iter().skip(1))
    }
}

/// Reject a zero denominator with the locale's message.
pub(crate) fn ensure_denominator(denominator: &BigInt, locale: Locale) -> FractionResult<()> {
    if denominator.is_zero() {
        tracing::warn!(%locale, "rejected zero denominator");
        return Err(FractionError::zero_denominator(locale));
    }
    Ok(())
}

/// `"{label}: {detail}"`
pub(crate) fn labeled(label: &str, detail: impl fmt::Display) -> String {
    format!("{label}: {detail}")
}

/// Integer as it appears inside an expression; negatives are parenthesized.
pub(crate) fn operand(value: &BigInt) -> String {
    if value.is_negative() {
        format!("({value})")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_parenthesizes_negatives() {
        assert_eq!(operand(&BigInt::from(4)), "4");
        assert_eq!(operand(&BigInt::from(-4)), "(-4)");
        assert_eq!(operand(&BigInt::from(0)), "0");
    }

    #[test]
    fn test_result_decimal_tracks_fraction() {
        let result = OperationResult::new(Fraction::new(-3, 8), vec!["x".to_string()]);
        assert_eq!(result.decimal, -0.375);
    }

    #[test]
    fn test_ensure_denominator() {
        assert!(ensure_denominator(&BigInt::from(3), Locale::En).is_ok());
        let err = ensure_denominator(&BigInt::from(0), Locale::Es).unwrap_err();
        assert_eq!(err.to_string(), "El denominador no puede ser cero");
    }

    #[test]
    fn test_operation_result_serialization() {
        let result = simplify(12, 18, Locale::En).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"numerator\": 2"));
        assert!(json.contains("Greatest common divisor: 6"));

        let roundtrip: OperationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.result, result.result);
        assert_eq!(roundtrip.steps, result.steps);
        assert!((roundtrip.decimal - result.decimal).abs() < 1e-12);
    }
}
