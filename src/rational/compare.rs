//! # Ordering
//!
//! Equality is derived on the canonical parts. Ordering cross multiplies instead of converting to
//! floats; both denominators are positive, so this preserves the direction of the comparison.
use std::cmp::Ordering;

use crate::rational::Rational;

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;
        left.cmp(&right)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
