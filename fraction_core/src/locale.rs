//! # Locales and Message Tables
//!
//! Every human-readable string the engine produces (error messages and the
//! labels used in step trails) comes from a static [`Messages`] table keyed
//! by [`Locale`]. The arithmetic never inspects the locale; it only hands
//! the table to the step builders.
//!
//! Locale resolution from free-form tags happens at the boundary:
//!
//! ```rust
//! use fraction_core::locale::Locale;
//!
//! assert_eq!(Locale::from_tag("es-MX"), Locale::Es);
//! assert_eq!(Locale::from_tag("xx"), Locale::En);
//! assert!("xx".parse::<Locale>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language used for error messages and step text.
///
/// Serialized as the lowercase language tag (`"en"`, `"es"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (primary)
    #[default]
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// German
    De,
}

/// Error returned by strict locale parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown locale '{0}' (expected one of: en, es, fr, de)")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// All supported locales, primary first.
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Es, Locale::Fr, Locale::De];

    /// Short language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    /// Resolve a free-form tag such as `"fr_CA"` or `"DE"`.
    ///
    /// Only the primary language subtag is considered. Unknown or empty
    /// tags fall back to [`Locale::En`].
    pub fn from_tag(tag: &str) -> Locale {
        tag.parse().unwrap_or_default()
    }

    /// Message table for this locale.
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Es => &ES,
            Locale::Fr => &FR,
            Locale::De => &DE,
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Locale::ALL
            .into_iter()
            .find(|locale| locale.tag() == primary)
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Localized strings for one language.
///
/// Step labels are rendered as `"{label}: {detail}"` by the step builders.
#[derive(Debug)]
pub struct Messages {
    // Errors
    pub zero_denominator: &'static str,
    pub zero_divisor: &'static str,
    pub non_finite_decimal: &'static str,

    // Simplification trail
    pub original_fraction: &'static str,
    pub gcd: &'static str,
    pub numerator: &'static str,
    pub denominator: &'static str,
    pub sign_moved: &'static str,

    // Binary operation trail
    pub first_fraction: &'static str,
    pub second_fraction: &'static str,
    pub unsimplified_result: &'static str,

    // Decimal conversion trail
    pub decimal: &'static str,
    pub decimal_places: &'static str,
    pub multiply_by: &'static str,
    pub fraction: &'static str,
}

static EN: Messages = Messages {
    zero_denominator: "Denominator cannot be zero",
    zero_divisor: "Cannot divide by a fraction equal to zero",
    non_finite_decimal: "Decimal value must be a finite number",
    original_fraction: "Original fraction",
    gcd: "Greatest common divisor",
    numerator: "Numerator",
    denominator: "Denominator",
    sign_moved: "Sign moved to the numerator",
    first_fraction: "First fraction",
    second_fraction: "Second fraction",
    unsimplified_result: "Unsimplified result",
    decimal: "Decimal",
    decimal_places: "Decimal places",
    multiply_by: "Multiply by",
    fraction: "Fraction",
};

static ES: Messages = Messages {
    zero_denominator: "El denominador no puede ser cero",
    zero_divisor: "No se puede dividir por una fracción igual a cero",
    non_finite_decimal: "El valor decimal debe ser un número finito",
    original_fraction: "Fracción original",
    gcd: "Máximo común divisor",
    numerator: "Numerador",
    denominator: "Denominador",
    sign_moved: "Signo movido al numerador",
    first_fraction: "Primera fracción",
    second_fraction: "Segunda fracción",
    unsimplified_result: "Resultado sin simplificar",
    decimal: "Decimal",
    decimal_places: "Cifras decimales",
    multiply_by: "Multiplicar por",
    fraction: "Fracción",
};

static FR: Messages = Messages {
    zero_denominator: "Le dénominateur ne peut pas être zéro",
    zero_divisor: "Impossible de diviser par une fraction nulle",
    non_finite_decimal: "La valeur décimale doit être un nombre fini",
    original_fraction: "Fraction d'origine",
    gcd: "Plus grand commun diviseur",
    numerator: "Numérateur",
    denominator: "Dénominateur",
    sign_moved: "Signe déplacé au numérateur",
    first_fraction: "Première fraction",
    second_fraction: "Deuxième fraction",
    unsimplified_result: "Résultat non simplifié",
    decimal: "Nombre décimal",
    decimal_places: "Décimales",
    multiply_by: "Multiplier par",
    fraction: "Fraction",
};

static DE: Messages = Messages {
    zero_denominator: "Der Nenner darf nicht null sein",
    zero_divisor: "Division durch einen Bruch mit dem Wert null ist nicht möglich",
    non_finite_decimal: "Der Dezimalwert muss eine endliche Zahl sein",
    original_fraction: "Ursprünglicher Bruch",
    gcd: "Größter gemeinsamer Teiler",
    numerator: "Zähler",
    denominator: "Nenner",
    sign_moved: "Vorzeichen in den Zähler verschoben",
    first_fraction: "Erster Bruch",
    second_fraction: "Zweiter Bruch",
    unsimplified_result: "Ungekürztes Ergebnis",
    decimal: "Dezimalzahl",
    decimal_places: "Nachkommastellen",
    multiply_by: "Multiplizieren mit",
    fraction: "Bruch",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ES".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("fr-CA".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!("de_AT".parse::<Locale>().unwrap(), Locale::De);
        assert_eq!(
            "pt-BR".parse::<Locale>(),
            Err(UnknownLocale("pt-BR".to_string()))
        );
    }

    #[test]
    fn test_lenient_tag_falls_back_to_english() {
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!(Locale::from_tag("zh-Hans"), Locale::En);
        assert_eq!(Locale::from_tag(" es "), Locale::Es);
    }

    #[test]
    fn test_locale_serialization() {
        let json = serde_json::to_string(&Locale::Fr).unwrap();
        assert_eq!(json, "\"fr\"");

        let roundtrip: Locale = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(roundtrip, Locale::De);
    }

    #[test]
    fn test_tables_are_distinct() {
        let en = Locale::En.messages();
        for locale in &Locale::ALL[1..] {
            assert_ne!(locale.messages().zero_denominator, en.zero_denominator);
            assert_ne!(locale.messages().zero_divisor, en.zero_divisor);
        }
    }

    #[test]
    fn test_display_matches_tag() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string(), locale.tag());
        }
    }
}
