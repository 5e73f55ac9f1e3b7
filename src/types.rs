//! Core value types shared by the transformations.
//!
//! Numeric operations are generic over [`Number`]; lenient string parsing produces a
//! [`ParsedInt`].

use std::fmt;

/// Element type accepted by the numeric transformations.
///
/// Integer implementations saturate at the type bounds instead of overflowing, so every
/// operation stays total. Float implementations follow IEEE arithmetic.
pub trait Number: Copy + PartialOrd + fmt::Display {
    /// Additive identity.
    const ZERO: Self;

    /// `self + rhs`.
    fn plus(self, rhs: Self) -> Self;

    /// `self * factor`.
    fn times(self, factor: u8) -> Self;

    /// Returns `true` if the value is strictly less than zero.
    ///
    /// Neither `NaN` nor `-0.0` is below zero.
    fn is_below_zero(self) -> bool {
        self < Self::ZERO
    }

    /// Text form used in formatted expressions.
    ///
    /// Integers use `Display`. Floats print both zeros as `"0"`, infinities as `"Infinity"` /
    /// `"-Infinity"` and otherwise the shortest round-trip form (`1.0` prints as `"1"`).
    fn render(self) -> String {
        self.to_string()
    }
}

macro_rules! impl_int_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0;

                fn plus(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }

                fn times(self, factor: u8) -> Self {
                    self.saturating_mul(<$t>::from(factor))
                }
            }
        )*
    };
}

macro_rules! impl_float_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0.0;

                fn plus(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn times(self, factor: u8) -> Self {
                    self * <$t>::from(factor)
                }

                fn render(self) -> String {
                    if self == 0.0 {
                        "0".to_owned()
                    } else if self == <$t>::INFINITY {
                        "Infinity".to_owned()
                    } else if self == <$t>::NEG_INFINITY {
                        "-Infinity".to_owned()
                    } else {
                        self.to_string()
                    }
                }
            }
        )*
    };
}

impl_int_number!(i32, i64, i128, isize, u32, u64, usize);
impl_float_number!(f32, f64);

/// Result of a lenient integer parse.
///
/// `valid` is `false` when the input had no integer prefix; `value` is then meaningless and
/// callers collapse it with [`ParsedInt::or_zero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInt {
    /// Whether an integer prefix was found.
    pub valid: bool,
    /// Parsed value (only meaningful when `valid`).
    pub value: i64,
}

impl ParsedInt {
    /// A successful parse.
    pub fn valid(value: i64) -> Self {
        Self { valid: true, value }
    }

    /// A failed parse.
    pub fn invalid() -> Self {
        Self {
            valid: false,
            value: 0,
        }
    }

    /// The parsed value, or `0` if the parse failed.
    pub fn or_zero(self) -> i64 {
        if self.valid { self.value } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::{Number, ParsedInt};

    #[test]
    fn integer_arithmetic_saturates() {
        assert_eq!(i64::MAX.plus(1), i64::MAX);
        assert_eq!(i64::MIN.plus(-1), i64::MIN);
        assert_eq!((i64::MAX / 2).times(3), i64::MAX);
        assert_eq!(7u32.times(3), 21);
    }

    #[test]
    fn float_arithmetic_is_plain() {
        assert_eq!(1.5f64.plus(2.25), 3.75);
        assert_eq!(0.5f32.times(3), 1.5);
    }

    #[test]
    fn negativity_excludes_zero_and_nan() {
        assert!((-1i32).is_below_zero());
        assert!(!0i32.is_below_zero());
        assert!(!f64::NAN.is_below_zero());
        assert!(!(-0.0f64).is_below_zero());
        assert!((-0.1f64).is_below_zero());
        assert!(!u32::MAX.is_below_zero());
    }

    #[test]
    fn render_normalizes_float_edge_cases() {
        assert_eq!(0.0f64.render(), "0");
        assert_eq!((-0.0f64).render(), "0");
        assert_eq!(f64::INFINITY.render(), "Infinity");
        assert_eq!(f64::NEG_INFINITY.render(), "-Infinity");
        assert_eq!(f32::INFINITY.render(), "Infinity");
        assert_eq!(f64::NAN.render(), "NaN");
        assert_eq!(1.0f64.render(), "1");
        assert_eq!((-2.5f64).render(), "-2.5");
    }

    #[test]
    fn render_integers_with_display() {
        assert_eq!((-7i64).render(), "-7");
        assert_eq!(0usize.render(), "0");
        assert_eq!(i128::MAX.render(), "170141183460469231731687303715884105727");
    }

    #[test]
    fn parsed_int_collapses_to_zero_when_invalid() {
        assert_eq!(ParsedInt::valid(-4).or_zero(), -4);
        assert_eq!(ParsedInt::invalid().or_zero(), 0);
        assert_eq!(
            ParsedInt {
                valid: false,
                value: 99
            }
            .or_zero(),
            0
        );
    }
}
