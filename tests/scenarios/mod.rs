//! # Worked examples
//!
//! Small, concrete computations with their exact expected outcome.
use exact_ratio::{Rational, RationalError};

fn parse(text: &str) -> Rational {
    text.parse().unwrap()
}

#[test]
fn add_halves_and_thirds() {
    let sum = Rational::new_i64(1, 2).unwrap().add(&Rational::new_i64(1, 3).unwrap());
    assert_eq!(sum.to_string(), "5/6");
}

#[test]
fn normalization() {
    assert_eq!(Rational::new_i64(2, 4).unwrap().to_string(), "1/2");
    assert_eq!(Rational::new_i64(-1, -2).unwrap().to_string(), "1/2");
    assert_eq!(Rational::new_i64(1, -2).unwrap().to_string(), "-1/2");
    assert_eq!(Rational::new_i64(0, -3).unwrap().to_string(), "0/1");
}

#[test]
fn parse_and_float() {
    assert_eq!(parse("3/6").to_string(), "1/2");
    assert_eq!(Rational::from_float(0.5).unwrap().to_string(), "1/2");
}

#[test]
fn errors() {
    let half = Rational::new_i64(1, 2).unwrap();
    let zero = Rational::new_i64(0, 1).unwrap();
    assert_eq!(half.divide_by(&zero), Err(RationalError::DivisionByZero));
    assert_eq!(Rational::new_i64(1, 0), Err(RationalError::InvalidDenominator));
    assert!(matches!(
        "1/2/3".parse::<Rational>(),
        Err(RationalError::MalformedFraction(text)) if text == "1/2/3"
    ));
}

/// Splitting an amount in shares that must add up exactly.
#[test]
fn ledger() {
    let shares = ["1/3", "1/6", "1/4", "1/4"].into_iter().map(parse).collect::<Vec<_>>();
    let total = shares.iter().sum::<Rational>();
    assert_eq!(total, Rational::from(1));

    let amount = Rational::from(120);
    let parts = shares.iter().map(|share| share.multiply_by(&amount)).collect::<Vec<_>>();
    assert_eq!(
        parts.iter().map(Rational::to_string).collect::<Vec<_>>(),
        ["40/1", "20/1", "30/1", "30/1"],
    );

    let third = parse("1/3");
    let mut remaining = Rational::from(1);
    for _ in 0..3 {
        remaining = remaining.subtract(&third);
    }
    assert_eq!(remaining.to_string(), "0/1");
}

#[test]
fn large_values() {
    // 2^128 / 3
    let big = parse("340282366920938463463374607431768211456/3");
    let squared = big.multiply_by(&big);
    assert_eq!(
        squared.to_string(),
        "115792089237316195423570985008687907853269984665640564039457584007913129639936/9",
    );
    assert_eq!(squared.divide_by(&big), Ok(big.clone()));
    assert!(squared > big);
}

#[test]
fn decimals() {
    let value = parse("-7/40");
    assert_eq!(value.to_decimal().unwrap().to_string(), "-0.175");
    assert!(matches!(parse("2/3").to_decimal(), Err(RationalError::NonTerminatingExpansion(_))));
    assert_eq!(parse("2/3").to_decimal_rounded(3).to_string(), "0.667");
}
