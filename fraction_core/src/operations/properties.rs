//! Property tests over the whole engine.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use proptest::prelude::*;

use super::*;
use crate::fraction::gcd;

fn nonzero() -> impl Strategy<Value = i64> {
    prop_oneof![-100_000i64..=-1, 1i64..=100_000]
}

fn fraction() -> impl Strategy<Value = Fraction> {
    (-100_000i64..=100_000, nonzero()).prop_map(|(n, d)| Fraction::new(n, d))
}

fn nonzero_fraction() -> impl Strategy<Value = Fraction> {
    (nonzero(), nonzero()).prop_map(|(n, d)| Fraction::new(n, d))
}

fn locale() -> impl Strategy<Value = Locale> {
    prop::sample::select(Locale::ALL.to_vec())
}

proptest! {
    #[test]
    fn simplify_is_idempotent(n in -1_000_000i64..=1_000_000, d in nonzero(), locale in locale()) {
        let once = simplify(n, d, locale).unwrap();
        let twice = simplify(
            once.result.numerator.clone(),
            once.result.denominator.clone(),
            locale,
        )
        .unwrap();
        prop_assert_eq!(&twice.result, &once.result);
        prop_assert!(once.result.is_canonical());
        prop_assert!(once.result.value_eq(&Fraction::new(n, d)));
    }

    #[test]
    fn gcd_is_greatest_common_divisor(a in -10_000i64..=10_000, b in -10_000i64..=10_000) {
        prop_assume!(a != 0 || b != 0);
        let g = gcd(&BigInt::from(a), &BigInt::from(b));
        prop_assert!(g.is_positive());
        prop_assert!((BigInt::from(a) % &g).is_zero());
        prop_assert!((BigInt::from(b) % &g).is_zero());

        let reduced_a = BigInt::from(a) / &g;
        let reduced_b = BigInt::from(b) / &g;
        prop_assert_eq!(gcd(&reduced_a, &reduced_b), BigInt::from(1));
    }

    #[test]
    fn steps_are_never_empty(first in fraction(), second in nonzero_fraction(), locale in locale()) {
        for operator in [
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
        ] {
            let result = operator.apply(&first, &second, locale).unwrap();
            prop_assert!(!result.steps.is_empty());
            prop_assert!(result.result.is_canonical());
        }
    }

    #[test]
    fn decimal_round_trip(units in -1_000_000i64..=1_000_000, places in 0u32..=6) {
        let decimal = units as f64 / 10f64.powi(places as i32);
        let converted = from_decimal(decimal, Locale::En).unwrap();
        let back = to_decimal(
            converted.result.numerator.clone(),
            converted.result.denominator.clone(),
            Locale::En,
        )
        .unwrap();
        prop_assert!((back - decimal).abs() <= 1e-9 * decimal.abs().max(1.0));
    }

    #[test]
    fn mixed_number_round_trip(n in -1_000_000i64..=1_000_000, d in 1i64..=10_000) {
        let mixed = to_mixed_number(n, d).unwrap();
        let back = from_mixed_number(
            mixed.whole.clone(),
            mixed.fraction.numerator.clone(),
            d,
        )
        .unwrap();
        let expected = simplify(n, d, Locale::En).unwrap().result;
        let actual = simplify(back.numerator, back.denominator, Locale::En).unwrap().result;
        prop_assert_eq!(actual, expected);
        prop_assert!(!mixed.fraction.numerator.is_negative());
        prop_assert!(mixed.fraction.numerator < BigInt::from(d));
    }

    #[test]
    fn divide_then_multiply_is_identity(first in nonzero_fraction(), second in nonzero_fraction()) {
        let quotient = divide(&first, &second, Locale::En).unwrap();
        let product = multiply(&quotient.result, &second, Locale::En).unwrap();
        let expected = simplify(
            first.numerator.clone(),
            first.denominator.clone(),
            Locale::En,
        )
        .unwrap();
        prop_assert_eq!(product.result, expected.result);
    }

    #[test]
    fn add_then_subtract_is_identity(first in fraction(), second in fraction()) {
        let sum = add(&first, &second, Locale::En).unwrap();
        let difference = subtract(&sum.result, &second, Locale::En).unwrap();
        prop_assert!(difference.result.value_eq(&first));
    }

    #[test]
    fn locale_never_changes_the_value(first in fraction(), second in nonzero_fraction()) {
        let english = divide(&first, &second, Locale::En).unwrap();
        for locale in Locale::ALL {
            let localized = divide(&first, &second, locale).unwrap();
            prop_assert_eq!(&localized.result, &english.result);
            prop_assert_eq!(localized.steps.len(), english.steps.len());
        }
    }
}
