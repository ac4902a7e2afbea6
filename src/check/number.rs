//! Numeric checks, shared across integer and float types.
//!
//! One generic façade, [`NumberCheck`], serves every numeric type. Checks
//! common to all numbers need only [`Number`]; integer-only and float-only
//! checks are gated on [`Integer`] and [`Float`].

use crate::i18n::{MessageKey, MessageParams};
use crate::Validator;
use std::fmt;

/// Ordered numeric value usable with [`NumberCheck`].
///
/// `Default` is the zero value `required` compares against.
pub trait Number:
    Copy + PartialOrd + Default + fmt::Display + fmt::Debug + Send + Sync + 'static
{
}

/// Integer types up to 64 bits.
pub trait Integer: Number {
    /// Width of the type in bits.
    const BITS: u32;

    /// Lossless widening used for sign, parity and bit arithmetic.
    fn to_i128(self) -> i128;
}

/// Floating-point types.
pub trait Float: Number {
    fn to_f64(self) -> f64;

    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty),+) => {
        $(
            impl Number for $t {}

            impl Integer for $t {
                const BITS: u32 = <$t>::BITS;

                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Number for f32 {}

impl Float for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Number for f64 {}

impl Float for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Chainable checks over one numeric value.
pub struct NumberCheck<'a, T> {
    validator: &'a mut Validator,
    field: &'a str,
    value: T,
}

/// Façade over a signed 64-bit integer.
pub type IntCheck<'a> = NumberCheck<'a, i64>;

/// Façade over an unsigned 64-bit integer.
pub type UintCheck<'a> = NumberCheck<'a, u64>;

/// Façade over a 64-bit float.
pub type FloatCheck<'a> = NumberCheck<'a, f64>;

impl<'a, T: Number> NumberCheck<'a, T> {
    pub(crate) fn new(validator: &'a mut Validator, field: &'a str, value: T) -> Self {
        Self {
            validator,
            field,
            value,
        }
    }

    pub fn field(&self) -> &str {
        self.field
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Record a failure for this field. Used by custom checks.
    pub fn report(&mut self, key: MessageKey, params: MessageParams) -> &mut Self {
        self.validator.add_error(self.field, key, params);
        self
    }

    /// Run an ad-hoc check against this façade.
    pub fn custom<F>(&mut self, check: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        check(self);
        self
    }

    /// Fails when the value is zero.
    pub fn required(&mut self) -> &mut Self {
        if self.value == T::default() {
            self.report(MessageKey::REQUIRED, MessageParams::new());
        }
        self
    }

    /// Fails when the value is below `min`.
    pub fn min(&mut self, min: T) -> &mut Self {
        if self.value < min {
            self.report(MessageKey::MIN_VALUE, MessageParams::new().with("v", min));
        }
        self
    }

    /// Fails when the value is above `max`.
    pub fn max(&mut self, max: T) -> &mut Self {
        if self.value > max {
            self.report(MessageKey::MAX_VALUE, MessageParams::new().with("v", max));
        }
        self
    }

    /// Fails when the value is outside `min..=max`.
    pub fn between(&mut self, min: T, max: T) -> &mut Self {
        if self.value < min || self.value > max {
            self.report(
                MessageKey::BETWEEN,
                MessageParams::new().with("v1", min).with("v2", max),
            );
        }
        self
    }
}

impl<'a, T: Integer> NumberCheck<'a, T> {
    pub fn positive(&mut self) -> &mut Self {
        if self.value.to_i128() <= 0 {
            self.report(MessageKey::POSITIVE, MessageParams::new());
        }
        self
    }

    pub fn negative(&mut self) -> &mut Self {
        if self.value.to_i128() >= 0 {
            self.report(MessageKey::NEGATIVE, MessageParams::new());
        }
        self
    }

    /// Fails unless the value is a multiple of `base`. Only zero is a
    /// multiple of zero.
    pub fn multiple_of(&mut self, base: T) -> &mut Self {
        let value = self.value.to_i128();
        let divisor = base.to_i128();
        let is_multiple = if divisor == 0 {
            value == 0
        } else {
            value % divisor == 0
        };
        if !is_multiple {
            self.report(MessageKey::MULTIPLE_OF, MessageParams::new().with("v", base));
        }
        self
    }

    /// Fails unless the value is a positive power of two.
    pub fn power_of_two(&mut self) -> &mut Self {
        let value = self.value.to_i128();
        if value <= 0 || !value.unsigned_abs().is_power_of_two() {
            self.report(MessageKey::POWER_OF_TWO, MessageParams::new());
        }
        self
    }

    /// Fails when the value needs more than `bits` significant bits.
    ///
    /// `bits` is capped at the type's width. Negative values are measured
    /// by magnitude.
    pub fn max_bits(&mut self, bits: u32) -> &mut Self {
        let limit = bits.min(T::BITS);
        let used = u128::BITS - self.value.to_i128().unsigned_abs().leading_zeros();
        if used > limit {
            self.report(MessageKey::MAX_BITS, MessageParams::new().with("d", limit));
        }
        self
    }

    /// Fails unless the value is a TCP/UDP port number (1-65535).
    pub fn port(&mut self) -> &mut Self {
        if !(1..=65_535).contains(&self.value.to_i128()) {
            self.report(MessageKey::PORT, MessageParams::new());
        }
        self
    }
}

impl<'a, T: Float> NumberCheck<'a, T> {
    /// Fails when the value has more than `decimals` decimal places.
    ///
    /// Non-finite values always fail. Precision beyond what the type can
    /// represent always passes.
    pub fn precision(&mut self, decimals: u32) -> &mut Self {
        let value = self.value.to_f64();
        let multiplier = 10f64.powi(decimals.min(i32::MAX as u32) as i32);
        let scaled = value * multiplier;

        let within = if !value.is_finite() {
            false
        } else if !scaled.is_finite() {
            true
        } else {
            T::from_f64(scaled.round() / multiplier) == self.value
        };

        if !within {
            self.report(MessageKey::PRECISION, MessageParams::new().with("d", decimals));
        }
        self
    }

    /// Fails on NaN and infinities.
    pub fn finite(&mut self) -> &mut Self {
        if !self.value.to_f64().is_finite() {
            self.report(MessageKey::FINITE, MessageParams::new());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::i18n::{MessageCatalog, Translator};
    use crate::Validator;
    use std::sync::Arc;

    fn validator() -> Validator {
        Validator::with_translator(Translator::new(Arc::new(MessageCatalog::new())))
    }

    fn keys(v: &Validator) -> Vec<&str> {
        v.errors().iter().map(|e| e.message_key().as_str()).collect()
    }

    // ==================== Shared Check Tests ====================

    #[test]
    fn test_required_zero() {
        let mut v = validator();
        v.int("count", 0).required();
        v.uint("count", 0).required();
        v.float("ratio", 0.0).required();
        assert_eq!(keys(&v), vec!["required", "required", "required"]);
    }

    #[test]
    fn test_required_nonzero() {
        let mut v = validator();
        v.int("count", -1).required();
        v.float32("ratio", 0.5).required();
        assert!(!v.has_errors());
    }

    #[test]
    fn test_min_boundary_inclusive() {
        let mut v = validator();
        v.int("age", 18).min(18);
        v.int("age", 17).min(18);
        assert_eq!(keys(&v), vec!["min_value"]);
        assert_eq!(
            v.errors().as_slice()[0].message(),
            "must be greater than or equal to 18"
        );
    }

    #[test]
    fn test_max_boundary_inclusive() {
        let mut v = validator();
        v.uint("size", 10).max(10);
        v.uint("size", 11).max(10);
        assert_eq!(keys(&v), vec!["max_value"]);
    }

    #[test]
    fn test_between_params() {
        let mut v = validator();
        v.int("score", 11).between(1, 10);
        let error = &v.errors().as_slice()[0];
        assert_eq!(error.message(), "must be between 1 and 10");
        assert_eq!(error.params().get("v1"), Some("1"));
        assert_eq!(error.params().get("v2"), Some("10"));
    }

    #[test]
    fn test_float_between_renders_decimals() {
        let mut v = validator();
        v.float("temp", 99.9).between(-0.5, 42.25);
        assert_eq!(
            v.errors().as_slice()[0].message(),
            "must be between -0.5 and 42.25"
        );
    }

    #[test]
    fn test_generic_number_factory() {
        let mut v = validator();
        v.number("small", 200u8).max(100);
        v.number("tiny", -3i8).min(0);
        assert_eq!(keys(&v), vec!["max_value", "min_value"]);
    }

    // ==================== Integer Check Tests ====================

    #[test]
    fn test_positive_and_negative() {
        let mut v = validator();
        v.int("n", 0).positive().negative();
        v.int("n", 5).positive().negative();
        v.int("n", -5).positive().negative();
        assert_eq!(keys(&v), vec!["positive", "negative", "negative", "positive"]);
    }

    #[test]
    fn test_multiple_of() {
        let mut v = validator();
        v.int("n", 15).multiple_of(5);
        v.int("n", -15).multiple_of(5);
        v.int("n", 16).multiple_of(5);
        assert_eq!(keys(&v), vec!["multiple_of"]);
        assert_eq!(v.errors().as_slice()[0].message(), "must be a multiple of 5");
    }

    #[test]
    fn test_multiple_of_zero_base() {
        let mut v = validator();
        v.int("n", 0).multiple_of(0);
        v.int("n", 3).multiple_of(0);
        assert_eq!(keys(&v), vec!["multiple_of"]);
    }

    #[test]
    fn test_power_of_two() {
        let mut v = validator();
        for n in [1u64, 2, 64, 1 << 63] {
            v.uint("n", n).power_of_two();
        }
        assert!(!v.has_errors());

        for n in [0u64, 3, 6, 100] {
            v.uint("n", n).power_of_two();
        }
        assert_eq!(v.error_count(), 4);
    }

    #[test]
    fn test_power_of_two_negative_fails() {
        let mut v = validator();
        v.int("n", -4).power_of_two();
        assert_eq!(keys(&v), vec!["power_of_two"]);
    }

    #[test]
    fn test_max_bits() {
        let mut v = validator();
        v.uint("n", 255).max_bits(8);
        v.uint("n", 256).max_bits(8);
        assert_eq!(keys(&v), vec!["max_bits"]);
        assert_eq!(
            v.errors().as_slice()[0].message(),
            "must not use more than 8 bits"
        );
    }

    #[test]
    fn test_max_bits_capped_at_type_width() {
        let mut v = validator();
        v.uint("n", u64::MAX).max_bits(100);
        v.number("n", u8::MAX).max_bits(100);
        assert!(!v.has_errors());
    }

    #[test]
    fn test_port() {
        let mut v = validator();
        v.uint("port", 1).port();
        v.uint("port", 65_535).port();
        v.uint("port", 0).port();
        v.uint("port", 65_536).port();
        v.int("port", -80).port();
        assert_eq!(keys(&v), vec!["port", "port", "port"]);
    }

    // ==================== Float Check Tests ====================

    #[test]
    fn test_precision() {
        let mut v = validator();
        v.float("price", 19.99).precision(2);
        v.float("price", 0.29).precision(2);
        v.float("price", 3.0).precision(0);
        assert!(!v.has_errors());

        v.float("price", 19.999).precision(2);
        assert_eq!(keys(&v), vec!["precision"]);
        assert_eq!(
            v.errors().as_slice()[0].message(),
            "must have maximum 2 decimal places"
        );
    }

    #[test]
    fn test_precision_f32() {
        let mut v = validator();
        v.float32("price", 0.29).precision(2);
        v.float32("price", 1.125).precision(2);
        assert_eq!(keys(&v), vec!["precision"]);
    }

    #[test]
    fn test_precision_non_finite_fails() {
        let mut v = validator();
        v.float("x", f64::NAN).precision(2);
        v.float("x", f64::INFINITY).precision(2);
        assert_eq!(keys(&v), vec!["precision", "precision"]);
    }

    #[test]
    fn test_finite() {
        let mut v = validator();
        v.float("x", 1.5).finite();
        v.float("x", f64::NAN).finite();
        v.float("x", f64::NEG_INFINITY).finite();
        assert_eq!(keys(&v), vec!["finite", "finite"]);
    }
}
