//! # Error Types
//!
//! The engine has exactly one error kind, [`FractionError::InvalidArgument`].
//! It is raised synchronously for a zero denominator, for dividing by a
//! fraction whose value is zero, and for non-finite decimal input. The
//! message is taken from the caller's locale; the [`InvalidArgumentReason`]
//! tells the cases apart programmatically.
//!
//! ## Example
//!
//! ```rust
//! use fraction_core::errors::{FractionError, FractionResult, InvalidArgumentReason};
//! use fraction_core::locale::Locale;
//!
//! fn check_denominator(denominator: i64, locale: Locale) -> FractionResult<()> {
//!     if denominator == 0 {
//!         return Err(FractionError::invalid_argument(
//!             InvalidArgumentReason::ZeroDenominator,
//!             locale,
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_denominator(0, Locale::Es).unwrap_err();
//! assert_eq!(err.to_string(), "El denominador no puede ser cero");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Locale;

/// Result type alias for fraction_core operations
pub type FractionResult<T> = Result<T, FractionError>;

/// Which argument check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidArgumentReason {
    /// A denominator of zero was supplied
    ZeroDenominator,
    /// The divisor fraction has a zero numerator
    ZeroDivisor,
    /// A decimal input was NaN or infinite
    NonFiniteDecimal,
}

impl InvalidArgumentReason {
    /// Localized message for this reason.
    pub fn message(self, locale: Locale) -> &'static str {
        let messages = locale.messages();
        match self {
            InvalidArgumentReason::ZeroDenominator => messages.zero_denominator,
            InvalidArgumentReason::ZeroDivisor => messages.zero_divisor,
            InvalidArgumentReason::NonFiniteDecimal => messages.non_finite_decimal,
        }
    }
}

/// Structured error type for fraction operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FractionError {
    /// An argument is outside the domain of the operation
    #[error("{message}")]
    InvalidArgument {
        reason: InvalidArgumentReason,
        message: String,
    },
}

impl FractionError {
    /// Create an InvalidArgument error with the message for `locale`
    pub fn invalid_argument(reason: InvalidArgumentReason, locale: Locale) -> Self {
        FractionError::InvalidArgument {
            reason,
            message: reason.message(locale).to_string(),
        }
    }

    /// Shorthand for the zero-denominator case
    pub fn zero_denominator(locale: Locale) -> Self {
        Self::invalid_argument(InvalidArgumentReason::ZeroDenominator, locale)
    }

    /// Which check failed
    pub fn reason(&self) -> InvalidArgumentReason {
        match self {
            FractionError::InvalidArgument { reason, .. } => *reason,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self.reason() {
            InvalidArgumentReason::ZeroDenominator => "ZERO_DENOMINATOR",
            InvalidArgumentReason::ZeroDivisor => "ZERO_DIVISOR",
            InvalidArgumentReason::NonFiniteDecimal => "NON_FINITE_DECIMAL",
        }
    }
}
