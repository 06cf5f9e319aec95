//! # Exact rational numbers
//!
//! An arbitrary precision rational number type for bookkeeping where floating point rounding is
//! not acceptable. Values are kept in lowest terms with a strictly positive denominator, so that
//! every value has exactly one representation.
//!
//! Fallible operations (construction with a zero denominator, parsing, division by zero and
//! conversion to a terminating decimal) report a [`RationalError`] instead of producing a
//! placeholder value.
#![warn(missing_docs)]

pub mod error;
pub mod rational;

pub use error::{RationalError, Result};
pub use rational::{Rational, DEFAULT_DECIMAL_DIGITS};
