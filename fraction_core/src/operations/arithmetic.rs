//! # Fraction Arithmetic
//!
//! The four binary operators, by cross-multiplication:
//!
//! | operator | numerator | denominator |
//! |----------|-----------|-------------|
//! | add      | n1·d2 + n2·d1 | d1·d2 |
//! | subtract | n1·d2 − n2·d1 | d1·d2 |
//! | multiply | n1·n2 | d1·d2 |
//! | divide   | n1·d2 | d1·n2 |
//!
//! No common-denominator shortcut is taken; the raw product is simplified
//! afterwards. Integers are arbitrary precision, so the products never
//! overflow.
//!
//! Operands are not re-validated. A zero denominator on an operand surfaces
//! from the final simplification as a zero-denominator error.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{labeled, operand, simplify, OperationResult};
use crate::errors::{FractionError, FractionResult, InvalidArgumentReason};
use crate::fraction::Fraction;
use crate::locale::Locale;

/// A binary fraction operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Display symbol
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "−",
            BinaryOperator::Multiply => "×",
            BinaryOperator::Divide => "÷",
        }
    }

    /// Apply the operator and simplify the result.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` (zero divisor) when dividing by a zero-valued fraction
    /// - `InvalidArgument` (zero denominator) when the unsimplified
    ///   denominator is zero
    pub fn apply(
        self,
        first: &Fraction,
        second: &Fraction,
        locale: Locale,
    ) -> FractionResult<OperationResult> {
        if self == BinaryOperator::Divide && second.is_zero() {
            warn!(%first, %second, %locale, "rejected division by a zero fraction");
            return Err(FractionError::invalid_argument(
                InvalidArgumentReason::ZeroDivisor,
                locale,
            ));
        }

        let CrossProduct {
            numerator,
            numerator_work,
            denominator,
            denominator_work,
        } = self.cross_multiply(first, second);

        let messages = locale.messages();
        let unsimplified = Fraction::new(numerator.clone(), denominator.clone());
        let mut steps = vec![
            labeled(messages.first_fraction, first),
            labeled(messages.second_fraction, second),
            labeled(messages.numerator, format!("{numerator_work} = {numerator}")),
            labeled(messages.denominator, format!("{denominator_work} = {denominator}")),
            labeled(messages.unsimplified_result, &unsimplified),
        ];

        let (result, tail) = simplify(numerator, denominator, locale)?.into_trail_tail();
        steps.extend(tail);

        debug!(operator = ?self, %first, %second, %unsimplified, %result, "applied fraction operator");
        Ok(OperationResult::new(result, steps))
    }

    fn cross_multiply(self, first: &Fraction, second: &Fraction) -> CrossProduct {
        let (n1, d1) = (&first.numerator, &first.denominator);
        let (n2, d2) = (&second.numerator, &second.denominator);

        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => {
                let left = n1 * d2;
                let right = n2 * d1;
                let numerator = if self == BinaryOperator::Add {
                    left + right
                } else {
                    left - right
                };
                CrossProduct {
                    numerator,
                    numerator_work: format!(
                        "{} × {} {} {} × {}",
                        operand(n1),
                        operand(d2),
                        self.symbol(),
                        operand(n2),
                        operand(d1)
                    ),
                    denominator: d1 * d2,
                    denominator_work: format!("{} × {}", operand(d1), operand(d2)),
                }
            }
            BinaryOperator::Multiply => CrossProduct {
                numerator: n1 * n2,
                numerator_work: format!("{} × {}", operand(n1), operand(n2)),
                denominator: d1 * d2,
                denominator_work: format!("{} × {}", operand(d1), operand(d2)),
            },
            BinaryOperator::Divide => CrossProduct {
                numerator: n1 * d2,
                numerator_work: format!("{} × {}", operand(n1), operand(d2)),
                denominator: d1 * n2,
                denominator_work: format!("{} × {}", operand(d1), operand(n2)),
            },
        }
    }
}

/// Unsimplified result plus the text of how each part was computed.
struct CrossProduct {
    numerator: BigInt,
    numerator_work: String,
    denominator: BigInt,
    denominator_work: String,
}

/// `first + second`, simplified.
pub fn add(first: &Fraction, second: &Fraction, locale: Locale) -> FractionResult<OperationResult> {
    BinaryOperator::Add.apply(first, second, locale)
}

/// `first − second`, simplified.
pub fn subtract(
    first: &Fraction,
    second: &Fraction,
    locale: Locale,
) -> FractionResult<OperationResult> {
    BinaryOperator::Subtract.apply(first, second, locale)
}

/// `first × second`, simplified.
pub fn multiply(
    first: &Fraction,
    second: &Fraction,
    locale: Locale,
) -> FractionResult<OperationResult> {
    BinaryOperator::Multiply.apply(first, second, locale)
}

/// `first ÷ second`, simplified.
///
/// # Errors
///
/// `InvalidArgument` (zero divisor) when `second.numerator == 0`.
///
/// ```rust
/// use fraction_core::fraction::Fraction;
/// use fraction_core::locale::Locale;
/// use fraction_core::operations::divide;
///
/// let err = divide(&Fraction::new(1, 2), &Fraction::new(0, 5), Locale::En).unwrap_err();
/// assert_eq!(err.error_code(), "ZERO_DIVISOR");
/// ```
pub fn divide(first: &Fraction, second: &Fraction, locale: Locale) -> FractionResult<OperationResult> {
    BinaryOperator::Divide.apply(first, second, locale)
}
