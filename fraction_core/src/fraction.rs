//! # Fraction Value Type
//!
//! [`Fraction`] is an immutable `numerator / denominator` pair of
//! arbitrary-precision integers. Construction does not validate or reduce;
//! the operations in [`crate::operations`] do that and always return a new
//! value in canonical form:
//!
//! - `denominator > 0`, the sign lives on the numerator
//! - `gcd(|numerator|, denominator) == 1`
//! - zero is `0/1`
//!
//! ## JSON
//!
//! Integers serialize as plain JSON numbers while they fit in `i64` and as
//! decimal strings beyond that. Both forms are accepted on input.
//!
//! ```json
//! { "numerator": 7, "denominator": 12 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fraction_core::fraction::Fraction;
//!
//! let half: Fraction = "2/4".parse().unwrap();
//! assert!(half.value_eq(&Fraction::new(1, 2)));
//! assert!(!half.is_canonical());
//! assert_eq!(half.to_string(), "2/4");
//! ```

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rational number as an ordered `(numerator, denominator)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    /// Top part; carries the sign in canonical form
    #[serde(with = "bigint_serde")]
    pub numerator: BigInt,

    /// Bottom part; positive in canonical form
    #[serde(with = "bigint_serde")]
    pub denominator: BigInt,
}

impl Fraction {
    /// Build a fraction exactly as given. No reduction, no validation.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Fraction {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// `n/1`
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Fraction::new(value, 1)
    }

    /// `0/1`
    pub fn zero() -> Self {
        Fraction::new(0, 1)
    }

    /// True when the value is zero (numerator is zero).
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// True when the pair is already in lowest terms with a positive denominator.
    pub fn is_canonical(&self) -> bool {
        if !self.denominator.is_positive() {
            return false;
        }
        if self.numerator.is_zero() {
            return self.denominator.is_one();
        }
        gcd(&self.numerator, &self.denominator).is_one()
    }

    /// Value equality for possibly unreduced pairs (`1/2 == 2/4 == -3/-6`).
    ///
    /// Pairs with a zero denominator are only equal to themselves.
    pub fn value_eq(&self, other: &Fraction) -> bool {
        if self.denominator.is_zero() || other.denominator.is_zero() {
            return self == other;
        }
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }

    /// IEEE double approximation of the value.
    pub fn to_f64(&self) -> f64 {
        ratio_to_f64(&self.numerator, &self.denominator)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::zero()
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Error from parsing `"n/d"` text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFractionError {
    #[error("empty fraction")]
    Empty,

    #[error("invalid integer '{0}' in fraction")]
    InvalidInteger(String),
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    /// Accepts `"n/d"` or a bare integer `"n"`. A zero denominator parses;
    /// the operations reject it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseFractionError::Empty);
        }

        let parse_part = |part: &str| {
            let part = part.trim();
            part.parse::<BigInt>()
                .map_err(|_| ParseFractionError::InvalidInteger(part.to_string()))
        };

        match s.split_once('/') {
            Some((numerator, denominator)) => Ok(Fraction {
                numerator: parse_part(numerator)?,
                denominator: parse_part(denominator)?,
            }),
            None => Ok(Fraction::from_integer(parse_part(s)?)),
        }
    }
}

/// Greatest common divisor by the Euclidean algorithm on `|a|` and `|b|`.
///
/// Always non-negative. `gcd(0, 0)` is `0`; callers must not divide by it.
///
/// ```rust
/// use fraction_core::fraction::gcd;
/// use num_bigint::BigInt;
///
/// assert_eq!(gcd(&BigInt::from(12), &BigInt::from(-18)), BigInt::from(6));
/// ```
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let remainder = &a % &b;
        a = b;
        b = remainder;
    }
    a
}

/// `numerator / denominator` rounded once to double precision.
///
/// The quotient is taken on the exact rational, so operands far beyond
/// `f64::MAX` still give a finite result when their ratio is finite.
pub(crate) fn ratio_to_f64(numerator: &BigInt, denominator: &BigInt) -> f64 {
    if denominator.is_zero() {
        return numerator.to_f64().unwrap_or(f64::NAN) / 0.0;
    }
    BigRational::new_raw(numerator.clone(), denominator.clone())
        .to_f64()
        .unwrap_or(f64::NAN)
}

/// Serde adapter: `i64`-sized values as JSON numbers, larger ones as strings.
pub(crate) mod bigint_serde {
    use num_bigint::BigInt;
    use num_traits::ToPrimitive;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        match value.to_i64() {
            Some(small) => serializer.serialize_i64(small),
            None => serializer.serialize_str(&value.to_string()),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Signed(i64),
        Unsigned(u64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Signed(value) => Ok(BigInt::from(value)),
            Repr::Unsigned(value) => Ok(BigInt::from(value)),
            Repr::Text(text) => text.trim().parse().map_err(de::Error::custom),
        }
    }
}
