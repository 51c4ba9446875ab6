//! Command-line arguments.
//!
//! Every subcommand maps onto one [`FractionRequest`], so the CLI and the
//! `eval` JSON path share the same dispatch.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fraction_core::{BigInt, BinaryOperator, Fraction, FractionRequest};

#[derive(Parser, Debug)]
#[command(name = "fraction")]
#[command(version, about = "Fraction calculator with step-by-step explanations")]
pub struct Cli {
    /// Language for steps and errors (en, es, fr, de)
    #[arg(short, long, global = true, env = "FRACTION_LOCALE")]
    pub locale: Option<String>,

    /// Fractional digits kept when converting a decimal
    #[arg(short, long, global = true, env = "FRACTION_PRECISION")]
    pub precision: Option<u32>,

    /// JSON settings file ({"locale": "es", "precision": 6})
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Print the response as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Reduce a fraction to lowest terms
    Simplify {
        #[arg(allow_hyphen_values = true)]
        numerator: BigInt,
        #[arg(allow_hyphen_values = true)]
        denominator: BigInt,
    },

    /// Decimal value of a fraction
    Decimal {
        #[arg(allow_hyphen_values = true)]
        numerator: BigInt,
        #[arg(allow_hyphen_values = true)]
        denominator: BigInt,
    },

    /// Convert a decimal to a fraction
    FromDecimal {
        #[arg(allow_hyphen_values = true)]
        decimal: f64,
    },

    /// Add two fractions (written as n/d)
    Add {
        #[arg(allow_hyphen_values = true)]
        first: Fraction,
        #[arg(allow_hyphen_values = true)]
        second: Fraction,
    },

    /// Subtract the second fraction from the first
    Subtract {
        #[arg(allow_hyphen_values = true)]
        first: Fraction,
        #[arg(allow_hyphen_values = true)]
        second: Fraction,
    },

    /// Multiply two fractions
    Multiply {
        #[arg(allow_hyphen_values = true)]
        first: Fraction,
        #[arg(allow_hyphen_values = true)]
        second: Fraction,
    },

    /// Divide the first fraction by the second
    Divide {
        #[arg(allow_hyphen_values = true)]
        first: Fraction,
        #[arg(allow_hyphen_values = true)]
        second: Fraction,
    },

    /// Split a fraction into a whole part and a remainder
    Mixed {
        #[arg(allow_hyphen_values = true)]
        numerator: BigInt,
        #[arg(allow_hyphen_values = true)]
        denominator: BigInt,
    },

    /// Combine a mixed number into an improper fraction
    FromMixed {
        #[arg(allow_hyphen_values = true)]
        whole: BigInt,
        #[arg(allow_hyphen_values = true)]
        numerator: BigInt,
        #[arg(allow_hyphen_values = true)]
        denominator: BigInt,
    },

    /// Run a raw JSON request, e.g. '{"operation":"simplify","numerator":4,"denominator":6}'
    Eval { request: String },
}

impl Command {
    /// Build the engine request for this subcommand.
    pub fn into_request(self) -> anyhow::Result<FractionRequest> {
        let request = match self {
            Command::Simplify {
                numerator,
                denominator,
            } => FractionRequest::Simplify {
                numerator,
                denominator,
            },
            Command::Decimal {
                numerator,
                denominator,
            } => FractionRequest::ToDecimal {
                numerator,
                denominator,
            },
            Command::FromDecimal { decimal } => FractionRequest::FromDecimal {
                decimal,
                precision: None,
            },
            Command::Add { first, second } => {
                FractionRequest::binary(BinaryOperator::Add, first, second)
            }
            Command::Subtract { first, second } => {
                FractionRequest::binary(BinaryOperator::Subtract, first, second)
            }
            Command::Multiply { first, second } => {
                FractionRequest::binary(BinaryOperator::Multiply, first, second)
            }
            Command::Divide { first, second } => {
                FractionRequest::binary(BinaryOperator::Divide, first, second)
            }
            Command::Mixed {
                numerator,
                denominator,
            } => FractionRequest::ToMixedNumber {
                numerator,
                denominator,
            },
            Command::FromMixed {
                whole,
                numerator,
                denominator,
            } => FractionRequest::FromMixedNumber {
                whole,
                numerator,
                denominator,
            },
            Command::Eval { request } => serde_json::from_str(&request)
                .with_context(|| format!("invalid JSON request: {request}"))?,
        };
        Ok(request)
    }
}
