//! # Conversion to other number types
//!
//! Floats are lossy, decimals are exact or rounded on request.
use bigdecimal::BigDecimal;
use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{RationalError, Result};
use crate::rational::Rational;

/// Number of digits after the decimal point used by `to_decimal_or_rounded` when the expansion
/// doesn't terminate.
///
/// Matches the default precision of `BigDecimal` division.
pub const DEFAULT_DECIMAL_DIGITS: u32 = 100;

/// Significant bits kept in the integer quotient when the parts are too large for an exact
/// float division.
const QUOTIENT_BITS: i64 = 64;

impl Rational {
    /// Nearest float, approximately.
    ///
    /// Precision is lost when the parts don't fit in the mantissa of a float. Values of a
    /// magnitude beyond the float range become infinite.
    pub fn to_f64(&self) -> f64 {
        let numerator_bits = self.numerator.bits();
        let denominator_bits = self.denominator.bits();

        let exact_bits = u64::from(f64::MANTISSA_DIGITS);
        if numerator_bits <= exact_bits && denominator_bits <= exact_bits {
            return as_f64(&self.numerator) / as_f64(&self.denominator);
        }

        // Quotient with about 64 significant bits, times 2^shift
        let shift = numerator_bits as i64 - denominator_bits as i64 - QUOTIENT_BITS;
        let quotient = if shift >= 0 {
            &self.numerator / (&self.denominator << shift.unsigned_abs())
        } else {
            (&self.numerator << shift.unsigned_abs()) / &self.denominator
        };

        // Two factors, neither of which overflows before the product does
        let (first, second) = (shift / 2, shift - shift / 2);
        as_f64(&quotient) * power_of_two(first) * power_of_two(second)
    }

    /// Exact decimal representation.
    ///
    /// # Errors
    ///
    /// `NonTerminatingExpansion` if the denominator has a prime factor other than two or five,
    /// such as for `1/3`.
    pub fn to_decimal(&self) -> Result<BigDecimal> {
        let two = BigInt::from(2);
        let five = BigInt::from(5);

        let mut rest = self.denominator.clone();
        let twos = remove_factor(&mut rest, &two);
        let fives = remove_factor(&mut rest, &five);
        if !rest.is_one() {
            return Err(RationalError::NonTerminatingExpansion(self.denominator.clone()));
        }

        // Extend the denominator to 10^scale
        let scale = twos.max(fives);
        let extension = num_traits::pow(two, (scale - twos) as usize)
            * num_traits::pow(five, (scale - fives) as usize);

        Ok(BigDecimal::new(&self.numerator * extension, i64::from(scale)))
    }

    /// Exact decimal representation if there is one, otherwise rounded to
    /// [`DEFAULT_DECIMAL_DIGITS`] digits after the decimal point.
    pub fn to_decimal_or_rounded(&self) -> BigDecimal {
        self.to_decimal().unwrap_or_else(|_| self.to_decimal_rounded(DEFAULT_DECIMAL_DIGITS))
    }

    /// Decimal representation with a fixed number of digits after the decimal point.
    ///
    /// Values that can't be represented exactly are rounded to the nearest decimal, ties going to
    /// the even last digit.
    pub fn to_decimal_rounded(&self, digits: u32) -> BigDecimal {
        let scaled = &self.numerator * num_traits::pow(BigInt::from(10), digits as usize);
        // Floored, so the remainder is non negative
        let (mut quotient, remainder) = scaled.div_mod_floor(&self.denominator);

        if !remainder.is_zero() {
            debug!("rounding {} to {} decimal digits", self, digits);
            let twice = remainder * 2;
            if twice > self.denominator || (twice == self.denominator && quotient.is_odd()) {
                quotient += 1;
            }
        }

        BigDecimal::new(quotient, i64::from(digits))
    }
}

/// Strip all factors `factor` from `value`, returning how many there were.
fn remove_factor(value: &mut BigInt, factor: &BigInt) -> u32 {
    let mut count = 0;
    loop {
        let (quotient, remainder) = value.div_rem(factor);
        if !remainder.is_zero() {
            break count;
        }
        *value = quotient;
        count += 1;
    }
}

fn power_of_two(exponent: i64) -> f64 {
    let exponent = exponent.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    2_f64.powi(exponent)
}

fn as_f64(value: &BigInt) -> f64 {
    // Only `None` for types without an infinity
    value.to_f64().unwrap_or(f64::NAN)
}

impl TryFrom<&Rational> for BigDecimal {
    type Error = RationalError;

    fn try_from(value: &Rational) -> Result<Self> {
        value.to_decimal()
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        if self.is_integer() { self.numerator.to_i64() } else { None }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_integer() { self.numerator.to_u64() } else { None }
    }

    fn to_i128(&self) -> Option<i128> {
        if self.is_integer() { self.numerator.to_i128() } else { None }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_integer() { self.numerator.to_u128() } else { None }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}
