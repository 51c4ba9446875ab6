//! # Requests
//!
//! JSON-friendly front door to the engine. A presentation layer builds a
//! [`FractionRequest`] from its form fields, calls [`evaluate`], and renders
//! the [`FractionResponse`].
//!
//! ## JSON Example
//!
//! ```json
//! { "operation": "add",
//!   "first": { "numerator": 1, "denominator": 4 },
//!   "second": { "numerator": 1, "denominator": 3 } }
//! ```
//!
//! ```rust
//! use fraction_core::fraction::Fraction;
//! use fraction_core::request::{evaluate, FractionRequest, FractionResponse};
//! use fraction_core::settings::EngineSettings;
//!
//! let request: FractionRequest =
//!     serde_json::from_str(r#"{ "operation": "simplify", "numerator": 12, "denominator": 18 }"#)
//!         .unwrap();
//!
//! match evaluate(&request, &EngineSettings::default()).unwrap() {
//!     FractionResponse::Operation(result) => assert_eq!(result.result, Fraction::new(2, 3)),
//!     other => panic!("unexpected response: {other:?}"),
//! }
//! ```

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::FractionResult;
use crate::fraction::{bigint_serde, Fraction};
use crate::operations::{self, BinaryOperator, MixedNumber, OperationResult};
use crate::settings::EngineSettings;

/// One engine call with its operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum FractionRequest {
    /// Reduce `numerator/denominator` to lowest terms
    Simplify {
        #[serde(with = "bigint_serde")]
        numerator: BigInt,
        #[serde(with = "bigint_serde")]
        denominator: BigInt,
    },

    /// Decimal value of `numerator/denominator`
    ToDecimal {
        #[serde(with = "bigint_serde")]
        numerator: BigInt,
        #[serde(with = "bigint_serde")]
        denominator: BigInt,
    },

    /// Fraction from a decimal; `precision` defaults to the settings value
    FromDecimal {
        decimal: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        precision: Option<u32>,
    },

    Add { first: Fraction, second: Fraction },
    Subtract { first: Fraction, second: Fraction },
    Multiply { first: Fraction, second: Fraction },
    Divide { first: Fraction, second: Fraction },

    /// Whole part and remainder of `numerator/denominator`
    ToMixedNumber {
        #[serde(with = "bigint_serde")]
        numerator: BigInt,
        #[serde(with = "bigint_serde")]
        denominator: BigInt,
    },

    /// Improper fraction from `whole numerator/denominator`
    FromMixedNumber {
        #[serde(with = "bigint_serde")]
        whole: BigInt,
        #[serde(with = "bigint_serde")]
        numerator: BigInt,
        #[serde(with = "bigint_serde")]
        denominator: BigInt,
    },
}

impl FractionRequest {
    /// The `operation` tag, for logging
    pub fn operation_name(&self) -> &'static str {
        match self {
            FractionRequest::Simplify { .. } => "simplify",
            FractionRequest::ToDecimal { .. } => "to_decimal",
            FractionRequest::FromDecimal { .. } => "from_decimal",
            FractionRequest::Add { .. } => "add",
            FractionRequest::Subtract { .. } => "subtract",
            FractionRequest::Multiply { .. } => "multiply",
            FractionRequest::Divide { .. } => "divide",
            FractionRequest::ToMixedNumber { .. } => "to_mixed_number",
            FractionRequest::FromMixedNumber { .. } => "from_mixed_number",
        }
    }

    /// Build a binary-operator request
    pub fn binary(operator: BinaryOperator, first: Fraction, second: Fraction) -> Self {
        match operator {
            BinaryOperator::Add => FractionRequest::Add { first, second },
            BinaryOperator::Subtract => FractionRequest::Subtract { first, second },
            BinaryOperator::Multiply => FractionRequest::Multiply { first, second },
            BinaryOperator::Divide => FractionRequest::Divide { first, second },
        }
    }
}

/// What an engine call produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FractionResponse {
    /// Simplified fraction with decimal and steps
    Operation(OperationResult),
    /// Plain decimal value
    Decimal { decimal: f64 },
    /// Mixed number
    Mixed(MixedNumber),
    /// Unsimplified fraction
    Fraction(Fraction),
}

/// Run one request with the given settings.
///
/// # Errors
///
/// Whatever the underlying operation returns (always `InvalidArgument`).
pub fn evaluate(
    request: &FractionRequest,
    settings: &EngineSettings,
) -> FractionResult<FractionResponse> {
    let locale = settings.locale;
    debug!(operation = request.operation_name(), %locale, "evaluating request");

    let response = match request {
        FractionRequest::Simplify {
            numerator,
            denominator,
        } => FractionResponse::Operation(operations::simplify(
            numerator.clone(),
            denominator.clone(),
            locale,
        )?),
        FractionRequest::ToDecimal {
            numerator,
            denominator,
        } => FractionResponse::Decimal {
            decimal: operations::to_decimal(numerator.clone(), denominator.clone(), locale)?,
        },
        FractionRequest::FromDecimal { decimal, precision } => {
            FractionResponse::Operation(operations::from_decimal_with_precision(
                *decimal,
                precision.unwrap_or(settings.precision),
                locale,
            )?)
        }
        FractionRequest::Add { first, second } => {
            FractionResponse::Operation(operations::add(first, second, locale)?)
        }
        FractionRequest::Subtract { first, second } => {
            FractionResponse::Operation(operations::subtract(first, second, locale)?)
        }
        FractionRequest::Multiply { first, second } => {
            FractionResponse::Operation(operations::multiply(first, second, locale)?)
        }
        FractionRequest::Divide { first, second } => {
            FractionResponse::Operation(operations::divide(first, second, locale)?)
        }
        FractionRequest::ToMixedNumber {
            numerator,
            denominator,
        } => FractionResponse::Mixed(operations::to_mixed_number(
            numerator.clone(),
            denominator.clone(),
        )?),
        FractionRequest::FromMixedNumber {
            whole,
            numerator,
            denominator,
        } => FractionResponse::Fraction(operations::from_mixed_number(
            whole.clone(),
            numerator.clone(),
            denominator.clone(),
        )?),
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidArgumentReason;
    use crate::locale::Locale;

    fn run(json: &str) -> FractionResult<FractionResponse> {
        let request: FractionRequest = serde_json::from_str(json).unwrap();
        evaluate(&request, &EngineSettings::default())
    }

    #[test]
    fn test_simplify_request() {
        let response = run(r#"{"operation":"simplify","numerator":12,"denominator":18}"#).unwrap();
        let FractionResponse::Operation(result) = response else {
            panic!("expected operation result");
        };
        assert_eq!(result.result, Fraction::new(2, 3));
    }

    #[test]
    fn test_add_request() {
        let response = run(
            r#"{"operation":"add",
                "first":{"numerator":1,"denominator":4},
                "second":{"numerator":1,"denominator":3}}"#,
        )
        .unwrap();
        let FractionResponse::Operation(result) = response else {
            panic!("expected operation result");
        };
        assert_eq!(result.result, Fraction::new(7, 12));
    }

    #[test]
    fn test_to_decimal_request() {
        let response = run(r#"{"operation":"to_decimal","numerator":3,"denominator":8}"#).unwrap();
        assert_eq!(response, FractionResponse::Decimal { decimal: 0.375 });
    }

    #[test]
    fn test_from_decimal_uses_settings_precision() {
        let request = FractionRequest::FromDecimal {
            decimal: 0.125,
            precision: None,
        };
        let settings = EngineSettings::default().with_precision(2);
        let FractionResponse::Operation(result) = evaluate(&request, &settings).unwrap() else {
            panic!("expected operation result");
        };
        assert_eq!(result.result, Fraction::new(13, 100));

        let explicit = FractionRequest::FromDecimal {
            decimal: 0.125,
            precision: Some(3),
        };
        let FractionResponse::Operation(result) = evaluate(&explicit, &settings).unwrap() else {
            panic!("expected operation result");
        };
        assert_eq!(result.result, Fraction::new(1, 8));
    }

    #[test]
    fn test_mixed_requests() {
        let response = run(r#"{"operation":"to_mixed_number","numerator":7,"denominator":3}"#)
            .unwrap();
        let FractionResponse::Mixed(mixed) = response else {
            panic!("expected mixed number");
        };
        assert_eq!(mixed.to_string(), "2 1/3");

        let response = run(
            r#"{"operation":"from_mixed_number","whole":2,"numerator":1,"denominator":3}"#,
        )
        .unwrap();
        assert_eq!(response, FractionResponse::Fraction(Fraction::new(7, 3)));
    }

    #[test]
    fn test_errors_use_settings_locale() {
        let request = FractionRequest::binary(
            BinaryOperator::Divide,
            Fraction::new(1, 2),
            Fraction::new(0, 5),
        );
        let err = evaluate(&request, &EngineSettings::new(Locale::Es)).unwrap_err();
        assert_eq!(err.reason(), InvalidArgumentReason::ZeroDivisor);
        assert_eq!(err.to_string(), "No se puede dividir por una fracción igual a cero");
    }

    #[test]
    fn test_request_serialization() {
        let request = FractionRequest::binary(
            BinaryOperator::Multiply,
            Fraction::new(2, 3),
            Fraction::new(3, 4),
        );
        assert_eq!(request.operation_name(), "multiply");

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.starts_with(r#"{"operation":"multiply""#));
        let roundtrip: FractionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, request);
    }

    #[test]
    fn test_large_integers_as_strings() {
        let response = run(
            r#"{"operation":"simplify","numerator":"200000000000000000000","denominator":"400000000000000000000"}"#,
        )
        .unwrap();
        let FractionResponse::Operation(result) = response else {
            panic!("expected operation result");
        };
        assert_eq!(result.result, Fraction::new(1, 2));
    }

    #[test]
    fn test_unknown_operation_rejected() {
        let parsed: Result<FractionRequest, _> =
            serde_json::from_str(r#"{"operation":"modulo","numerator":1,"denominator":2}"#);
        assert!(parsed.is_err());
    }
}
