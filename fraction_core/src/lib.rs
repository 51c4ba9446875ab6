//! # fraction_core - Fraction Arithmetic Engine
//!
//! `fraction_core` is the computational heart of the fraction calculator pages.
//! It performs exact rational arithmetic and explains every result with a
//! localized, step-by-step derivation. All inputs and outputs are
//! JSON-serializable so any presentation layer can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Exact**: Arbitrary-precision numerators and denominators, no overflow
//! - **Canonical**: Every simplified result has a positive denominator and is in lowest terms
//! - **Localized**: Error messages and steps follow the caller's [`Locale`]
//!
//! ## Quick Start
//!
//! ```rust
//! use fraction_core::{simplify, Fraction, Locale};
//!
//! let reduced = simplify(12, 18, Locale::En).unwrap();
//! assert_eq!(reduced.result, Fraction::new(2, 3));
//!
//! // Serialize to JSON for the page
//! let json = serde_json::to_string_pretty(&reduced).unwrap();
//! assert!(json.contains("steps"));
//! ```
//!
//! ## Modules
//!
//! - [`fraction`] - The `Fraction` value type and `gcd`
//! - [`operations`] - Simplify, arithmetic, decimal and mixed-number conversions
//! - [`locale`] - Supported locales and their message tables
//! - [`request`] - JSON request/response dispatch
//! - [`settings`] - Per-caller defaults (locale, decimal precision)
//! - [`errors`] - Structured error types

pub mod errors;
pub mod fraction;
pub mod locale;
pub mod operations;
pub mod request;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use errors::{FractionError, FractionResult, InvalidArgumentReason};
pub use fraction::{gcd, Fraction};
pub use locale::Locale;
pub use num_bigint::BigInt;
pub use operations::{
    add, divide, from_decimal, from_decimal_with_precision, from_mixed_number, multiply,
    simplify, subtract, to_decimal, to_mixed_number, BinaryOperator, MixedNumber,
    OperationResult,
};
pub use request::{evaluate, FractionRequest, FractionResponse};
pub use settings::EngineSettings;
