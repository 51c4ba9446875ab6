//! Plain-text rendering of engine responses.

use std::fmt::{self, Write};

use fraction_core::{FractionRequest, FractionResponse};

const RULE: &str = "═══════════════════════════════════════";

/// Banner, result lines and numbered steps.
pub fn render_text(
    request: &FractionRequest,
    response: &FractionResponse,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{RULE}")?;
    writeln!(out, "  {}", title(request))?;
    writeln!(out, "{RULE}")?;

    match response {
        FractionResponse::Operation(result) => {
            writeln!(out, "Result:   {}", result.result)?;
            writeln!(out, "Decimal:  {}", result.decimal)?;
            writeln!(out)?;
            writeln!(out, "Steps:")?;
            for (index, step) in result.steps.iter().enumerate() {
                writeln!(out, "  {:>2}. {}", index + 1, step)?;
            }
        }
        FractionResponse::Decimal { decimal } => {
            writeln!(out, "Decimal:  {decimal}")?;
        }
        FractionResponse::Mixed(mixed) => {
            writeln!(out, "Mixed:    {mixed}")?;
            writeln!(out, "Whole:    {}", mixed.whole)?;
            writeln!(out, "Fraction: {}", mixed.fraction)?;
        }
        FractionResponse::Fraction(fraction) => {
            writeln!(out, "Fraction: {fraction}")?;
        }
    }

    writeln!(out, "{RULE}")?;
    Ok(out)
}

fn title(request: &FractionRequest) -> String {
    request.operation_name().replace('_', " ").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraction_core::{evaluate, EngineSettings, Fraction, MixedNumber};

    #[test]
    fn test_operation_rendering() {
        let request = FractionRequest::Simplify {
            numerator: 12.into(),
            denominator: 18.into(),
        };
        let response = evaluate(&request, &EngineSettings::default()).unwrap();
        let text = render_text(&request, &response).unwrap();

        assert!(text.contains("  SIMPLIFY\n"));
        assert!(text.contains("Result:   2/3\n"));
        assert!(text.contains("   1. Original fraction: 12/18\n"));
        assert!(text.contains("   4. Denominator: 18 ÷ 6 = 3\n"));
    }

    #[test]
    fn test_mixed_rendering() {
        let request = FractionRequest::ToMixedNumber {
            numerator: 7.into(),
            denominator: 3.into(),
        };
        let response = FractionResponse::Mixed(MixedNumber {
            whole: 2.into(),
            fraction: Fraction::new(1, 3),
        });
        let text = render_text(&request, &response).unwrap();

        assert!(text.contains("  TO MIXED NUMBER\n"));
        assert!(text.contains("Mixed:    2 1/3\n"));
    }

    #[test]
    fn test_decimal_rendering() {
        let request = FractionRequest::ToDecimal {
            numerator: 3.into(),
            denominator: 8.into(),
        };
        let response = FractionResponse::Decimal { decimal: 0.375 };
        let text = render_text(&request, &response).unwrap();
        assert!(text.contains("Decimal:  0.375\n"));
    }
}
