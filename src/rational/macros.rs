/// Shorthand for creating a rational number in tests.
///
/// With one argument, an integral value. With two, a numerator and a (nonzero) denominator.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::Rational::from_integer($value as i64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational::new_i64($numer, $denom).unwrap()
    };
}
