//! # Creation
//!
//! Thin conversions that validate their input and delegate to the canonical constructor.
use std::str::FromStr;

use bigdecimal::BigDecimal;
use log::debug;
use num_bigint::BigInt;
use num_traits::{Float, FromPrimitive, One, Zero};

use crate::error::{RationalError, Result};
use crate::rational::Rational;

macro_rules! from_primitive_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Self::from_integer(value)
                }
            }
        )*
    };
}
from_primitive_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<&BigInt> for Rational {
    fn from(value: &BigInt) -> Self {
        Self::from_integer(value.clone())
    }
}

impl TryFrom<(BigInt, BigInt)> for Rational {
    type Error = RationalError;

    fn try_from((numerator, denominator): (BigInt, BigInt)) -> Result<Self> {
        Self::new(numerator, denominator)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self> {
        Self::new_i64(numerator, denominator)
    }
}

/// Exact: a decimal is an integer scaled by a power of ten.
impl From<&BigDecimal> for Rational {
    fn from(value: &BigDecimal) -> Self {
        let (digits, scale) = value.as_bigint_and_exponent();
        let ten = BigInt::from(10);

        if scale >= 0 {
            Self::normalized(digits, power(&ten, scale.unsigned_abs()))
        } else {
            Self::from_integer(digits * power(&ten, scale.unsigned_abs()))
        }
    }
}

impl From<BigDecimal> for Rational {
    fn from(value: BigDecimal) -> Self {
        Self::from(&value)
    }
}

/// `base^exponent`, in steps that fit a `usize` so no part of the exponent is dropped.
fn power(base: &BigInt, exponent: u64) -> BigInt {
    let mut result = BigInt::one();
    let mut remaining = exponent;
    while remaining > 0 {
        let step = usize::try_from(remaining).unwrap_or(usize::MAX);
        result *= num_traits::pow(base.clone(), step);
        remaining -= step as u64;
    }

    result
}

/// Reads `"n"` or `"n/d"`, where both parts are (optionally signed) integer literals.
///
/// Whitespace around either part is ignored.
impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(text: &str) -> Result<Self> {
        let parts = text.split('/').collect::<Vec<_>>();

        match parts.as_slice() {
            [numerator] => Ok(Self::from_integer(parse_integer(numerator, text)?)),
            [numerator, denominator] => {
                let denominator = parse_integer(denominator, text)?;
                if denominator.is_zero() {
                    return Err(RationalError::InvalidDenominator);
                }
                let numerator = parse_integer(numerator, text)?;

                Ok(Self::normalized(numerator, denominator))
            },
            _ => Err(RationalError::malformed(text)),
        }
    }
}

impl TryFrom<&str> for Rational {
    type Error = RationalError;

    fn try_from(text: &str) -> Result<Self> {
        text.parse()
    }
}

/// Parse one side of the fraction.
///
/// # Arguments
///
/// * `part`: Text that should contain a single integer literal.
/// * `text`: The full input, for the error message.
fn parse_integer(part: &str, text: &str) -> Result<BigInt> {
    let part = part.trim();
    let digits = part.strip_prefix(['+', '-']).unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(RationalError::malformed(text));
    }

    BigInt::from_str(part).map_err(|_| RationalError::malformed(text))
}

impl Rational {
    /// Approximate a floating point value by a fraction.
    ///
    /// Integral values are converted exactly. Otherwise, with `mantissa` the fractional part of
    /// the value, the denominator becomes `trunc(1 / mantissa)` and the numerator the rounded
    /// product of that denominator and the value. This reproduces simple fractions such as
    /// `0.5`, `0.25` or `4 / 3` well, but is not exact in general: `2.75` becomes `3/1`.
    ///
    /// Subnormal values, whose reciprocal overflows, are converted exactly from their binary
    /// representation instead.
    ///
    /// # Errors
    ///
    /// `MalformedFraction` if the value is NaN or infinite.
    pub fn from_float(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(RationalError::malformed(value.to_string()));
        }

        let mantissa = value.fract();
        if mantissa == 0.0 {
            return integral(value).map(Self::from_integer);
        }

        let multiplier = (1.0 / mantissa).trunc();
        if !multiplier.is_finite() {
            return Ok(Self::from_binary(value));
        }

        let numerator = integral((multiplier * value).round())?;
        let denominator = integral(multiplier)?;
        // |mantissa| < 1, so |multiplier| >= 1
        let result = Self::normalized(numerator, denominator);
        if result.to_f64() != value {
            debug!("approximated {} by {}", value, result);
        }

        Ok(result)
    }

    /// Exact conversion of the binary representation `sign * mantissa * 2^exponent`.
    fn from_binary(value: f64) -> Self {
        let (mantissa, exponent, sign) = Float::integer_decode(value);
        let numerator = BigInt::from(sign) * BigInt::from(mantissa);

        if exponent < 0 {
            Self::normalized(numerator, BigInt::one() << exponent.unsigned_abs())
        } else {
            Self::from_integer(numerator << exponent.unsigned_abs())
        }
    }
}

fn integral(value: f64) -> Result<BigInt> {
    BigInt::from_f64(value).ok_or_else(|| RationalError::malformed(value.to_string()))
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_f32(n: f32) -> Option<Self> {
        Self::from_float(f64::from(n)).ok()
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::from_float(n).ok()
    }
}
