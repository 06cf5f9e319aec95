//! # Error reporting for rational numbers
//!
//! All failures that can happen while creating or operating on a [`Rational`] are described by a
//! single enum. None of these are ever hidden behind a placeholder value.
//!
//! [`Rational`]: crate::Rational
use num_bigint::BigInt;
use thiserror::Error;

/// Shorthand for results of fallible rational number operations.
pub type Result<T> = std::result::Result<T, RationalError>;

/// A `RationalError` is returned when a rational number can't be created, or when an operation
/// on one has no rational (or decimal) result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// A denominator of exactly zero was given explicitly.
    #[error("zero is not a valid denominator")]
    InvalidDenominator,
    /// Text could not be read as one or two integer literals separated by a single `/`.
    ///
    /// The contained `String` is the offending input, or a description of a value that has no
    /// fraction representation (such as a NaN float).
    #[error("not a fraction: \"{0}\"")]
    MalformedFraction(String),
    /// The divisor had value zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The decimal expansion of the value doesn't terminate.
    ///
    /// The contained value is the (reduced) denominator, which has a prime factor other than two
    /// or five.
    #[error("decimal expansion with denominator {0} does not terminate")]
    NonTerminatingExpansion(BigInt),
}

impl RationalError {
    /// Describe text that could not be parsed.
    pub(crate) fn malformed(text: impl Into<String>) -> Self {
        RationalError::MalformedFraction(text.into())
    }
}
