//! # Field operations
//!
//! Every operation produces a new, normalized value and leaves its operands untouched. Division
//! is the only operation that can fail; there is no `/` operator, use `divide_by` instead.
use num_traits::{One, Signed, Zero};

use crate::error::{RationalError, Result};
use crate::rational::Rational;

impl Rational {
    /// Sum of two values.
    pub fn add(&self, other: &Rational) -> Rational {
        let numerator = &self.numerator * &other.denominator + &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;

        Self::normalized(numerator, denominator)
    }

    /// Difference of two values.
    pub fn subtract(&self, other: &Rational) -> Rational {
        let numerator = &self.numerator * &other.denominator - &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;

        Self::normalized(numerator, denominator)
    }

    /// Product of two values.
    ///
    /// Both denominators are positive, so the product of them is as well and this can't fail.
    pub fn multiply_by(&self, other: &Rational) -> Rational {
        let numerator = &self.numerator * &other.numerator;
        let denominator = &self.denominator * &other.denominator;

        Self::normalized(numerator, denominator)
    }

    /// Quotient of two values.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the divisor is zero.
    pub fn divide_by(&self, divisor: &Rational) -> Result<Rational> {
        if divisor.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        let numerator = &self.numerator * &divisor.denominator;
        let denominator = &self.denominator * &divisor.numerator;

        Ok(Self::normalized(numerator, denominator))
    }

    /// Quotient of two values, `None` if the divisor is zero.
    pub fn checked_div(&self, divisor: &Rational) -> Option<Rational> {
        self.divide_by(divisor).ok()
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if this value is zero.
    pub fn reciprocal(&self) -> Result<Rational> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        Ok(Self::normalized(self.denominator.clone(), self.numerator.clone()))
    }

    /// The additive inverse.
    pub fn negate(&self) -> Rational {
        // Negation doesn't affect the gcd, the result is still in lowest terms
        Self { numerator: -&self.numerator, denominator: self.denominator.clone() }
    }

    /// The absolute value.
    pub fn abs(&self) -> Rational {
        Self { numerator: self.numerator.abs(), denominator: self.denominator.clone() }
    }

    /// `-1`, `0` or `1` depending on the sign of this value.
    pub fn signum(&self) -> Rational {
        Self::from_integer(self.numerator.signum())
    }

    /// Whether the value is strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Whether the value is strictly larger than zero.
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// Whether the value is a whole number.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }
}

mod operators {
    use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

    use crate::rational::Rational;

    macro_rules! forward_binary {
        ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $inherent:ident) => {
            impl $trait<&Rational> for &Rational {
                type Output = Rational;

                fn $method(self, rhs: &Rational) -> Self::Output {
                    Rational::$inherent(self, rhs)
                }
            }

            impl $trait<Rational> for &Rational {
                type Output = Rational;

                fn $method(self, rhs: Rational) -> Self::Output {
                    Rational::$inherent(self, &rhs)
                }
            }

            impl $trait<&Rational> for Rational {
                type Output = Rational;

                fn $method(self, rhs: &Rational) -> Self::Output {
                    Rational::$inherent(&self, rhs)
                }
            }

            impl $trait<Rational> for Rational {
                type Output = Rational;

                fn $method(self, rhs: Rational) -> Self::Output {
                    Rational::$inherent(&self, &rhs)
                }
            }

            impl $assign_trait<&Rational> for Rational {
                fn $assign_method(&mut self, rhs: &Rational) {
                    *self = Rational::$inherent(self, rhs);
                }
            }

            impl $assign_trait<Rational> for Rational {
                fn $assign_method(&mut self, rhs: Rational) {
                    *self = Rational::$inherent(self, &rhs);
                }
            }
        };
    }

    forward_binary!(Add, add, AddAssign, add_assign, add);
    forward_binary!(Sub, sub, SubAssign, sub_assign, subtract);
    forward_binary!(Mul, mul, MulAssign, mul_assign, multiply_by);

    impl Neg for Rational {
        type Output = Rational;

        fn neg(mut self) -> Self::Output {
            self.numerator = -self.numerator;
            self
        }
    }

    impl Neg for &Rational {
        type Output = Rational;

        fn neg(self) -> Self::Output {
            self.negate()
        }
    }
}

mod identities {
    use num_bigint::BigInt;
    use num_traits::{One, Zero};

    use crate::rational::Rational;

    impl Zero for Rational {
        fn zero() -> Self {
            Self::from_integer(BigInt::zero())
        }

        fn is_zero(&self) -> bool {
            self.numerator.is_zero()
        }
    }

    impl One for Rational {
        fn one() -> Self {
            Self::from_integer(BigInt::one())
        }

        fn is_one(&self) -> bool {
            self.numerator.is_one() && self.denominator.is_one()
        }
    }

    impl Default for Rational {
        fn default() -> Self {
            Self::zero()
        }
    }
}

mod iter {
    use std::iter::{Product, Sum};

    use num_traits::{One, Zero};

    use crate::rational::Rational;

    impl Sum for Rational {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total.add(&item))
        }
    }

    impl<'a> Sum<&'a Rational> for Rational {
        fn sum<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total.add(item))
        }
    }

    impl Product for Rational {
        fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total.multiply_by(&item))
        }
    }

    impl<'a> Product<&'a Rational> for Rational {
        fn product<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total.multiply_by(item))
        }
    }
}
