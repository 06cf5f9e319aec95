//! # Algebraic properties
//!
//! Checked over all combinations of a set of sample values.
use std::cmp::Ordering;

use itertools::Itertools;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use exact_ratio::{Rational, RationalError};

const PARTS: [i64; 13] = [-30, -12, -7, -4, -1, 0, 1, 2, 3, 5, 9, 16, 45];

fn samples() -> Vec<Rational> {
    PARTS.iter()
        .cartesian_product(PARTS.iter().filter(|&&denominator| denominator != 0))
        .map(|(&numerator, &denominator)| Rational::new_i64(numerator, denominator).unwrap())
        .collect()
}

#[test]
fn lowest_terms() {
    for (&numerator, &denominator) in PARTS.iter().cartesian_product(PARTS.iter()) {
        match Rational::new_i64(numerator, denominator) {
            Ok(value) => {
                assert!(value.denominator().is_positive());
                assert!(value.numerator().gcd(value.denominator()).is_one());
                if numerator == 0 {
                    assert!(value.numerator().is_zero());
                    assert!(value.denominator().is_one());
                }
            },
            Err(error) => {
                assert_eq!(denominator, 0);
                assert_eq!(error, RationalError::InvalidDenominator);
            },
        }
    }
}

#[test]
fn display_round_trip() {
    for value in samples() {
        assert_eq!(value.to_string().parse::<Rational>(), Ok(value));
    }
}

#[test]
fn commutativity() {
    for (a, b) in samples().iter().tuple_combinations() {
        assert_eq!(a.add(b), b.add(a));
        assert_eq!(a.multiply_by(b), b.multiply_by(a));
    }
}

#[test]
fn associativity() {
    let values = samples().into_iter().step_by(7).collect::<Vec<_>>();
    for (a, b, c) in values.iter().tuple_combinations() {
        assert_eq!(a.add(b).add(c), a.add(&b.add(c)));
        assert_eq!(a.multiply_by(b).multiply_by(c), a.multiply_by(&b.multiply_by(c)));
    }
}

#[test]
fn identities_and_inverses() {
    let zero = Rational::new_i64(0, 1).unwrap();
    let one = Rational::new_i64(1, 1).unwrap();

    for a in samples() {
        assert_eq!(a.add(&zero), a);
        assert_eq!(a.multiply_by(&one), a);
        assert_eq!(a.add(&a.negate()), zero);
        assert_eq!(a.divide_by(&zero), Err(RationalError::DivisionByZero));
        if !a.is_zero() {
            assert_eq!(a.divide_by(&a), Ok(one.clone()));
            assert_eq!(a.reciprocal().unwrap().multiply_by(&a), one);
        }
    }
}

#[test]
fn division_undoes_multiplication() {
    let values = samples();
    for (a, b) in values.iter().cartesian_product(values.iter()) {
        if b.is_zero() {
            continue;
        }
        assert_eq!(a.multiply_by(b).divide_by(b).as_ref(), Ok(a));
    }
}

#[test]
fn ordering_matches_floats() {
    let values = samples();
    for (a, b) in values.iter().cartesian_product(values.iter()) {
        let (x, y) = (a.to_f64(), b.to_f64());
        let expected = if (x - y).abs() < 1e-12 {
            Ordering::Equal
        } else if x < y {
            Ordering::Less
        } else {
            Ordering::Greater
        };

        assert_eq!(a.cmp(b), expected, "{} vs {}", a, b);
        assert_eq!(a == b, expected == Ordering::Equal);
    }
}

#[test]
fn total_order() {
    let mut values = samples();
    values.sort();
    for (a, b) in values.iter().tuple_windows() {
        assert!(a <= b);
        assert!(a.subtract(b).is_negative() || a == b);
    }
}
