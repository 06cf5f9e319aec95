//! # Arbitrary precision rational numbers
//!
//! A [`Rational`] is a pair of arbitrary size integers. It is kept in lowest terms, with the sign
//! carried by the numerator and a denominator that is strictly positive. As a consequence, two
//! values are equal exactly when their parts are equal, and the value zero is always `0/1`.
//!
//! All operations create new values. The only mutation happens inside normalization, before a
//! value is handed out.
use std::fmt;

use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{RationalError, Result};

pub use conversion::DEFAULT_DECIMAL_DIGITS;

mod creation;
mod field;
mod compare;
mod conversion;
mod macros;
#[cfg(feature = "serde")]
mod serialize;

/// An exact ratio of two arbitrary size integers.
///
/// Every value has exactly one normalized form, so equality and hashing compare the parts
/// directly.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rational {
    /// Carries the sign of the value.
    numerator: BigInt,
    /// Always strictly positive.
    denominator: BigInt,
}

impl Rational {
    /// Create a new instance from a numerator and a denominator.
    ///
    /// The pair doesn't need to be in lowest terms, and the sign may be on either (or both) of
    /// the parts.
    ///
    /// # Errors
    ///
    /// `InvalidDenominator` if the denominator is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(RationalError::InvalidDenominator);
        }

        Ok(Self::normalized(numerator.into(), denominator))
    }

    /// Create a new instance from a pair of machine integers.
    ///
    /// # Errors
    ///
    /// `InvalidDenominator` if the denominator is zero.
    pub fn new_i64(numerator: i64, denominator: i64) -> Result<Self> {
        Self::new(numerator, denominator)
    }

    /// Create an integral value, that is, with denominator one.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self { numerator: value.into(), denominator: BigInt::one() }
    }

    /// The numerator, which carries the sign of the value.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator, which is always positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Split into numerator and denominator.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// Move the sign to the numerator and reduce to lowest terms.
    ///
    /// The denominator should be nonzero; all callers check this or derive it from the
    /// invariants of their operands.
    pub(crate) fn normalized(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        if denominator.is_negative() {
            trace!("moving sign of {}/{} to the numerator", numerator, denominator);
            numerator = -numerator;
            denominator = -denominator;
        }

        // gcd(0, d) == d, so zero becomes 0/1
        let gcd = numerator.gcd(&denominator);
        if !gcd.is_one() {
            trace!("reducing {}/{} by {}", numerator, denominator, gcd);
            numerator /= &gcd;
            denominator /= &gcd;
        }

        Self { numerator, denominator }
    }
}

/// Always shows the denominator, also when it is one.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
