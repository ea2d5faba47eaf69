//! # Numerical tolerance
//!
//! Deciding whether a value computed with floating point arithmetic should be read as zero.
use crate::data::number_types::Scalar;

/// Numerical context in which the values of a tableau are interpreted.
///
/// A value is "small" if it is below an absolute threshold, increased by a fraction of a reference
/// magnitude. The reference is typically the largest value that took part in the computation of
/// the value, such that cancellation errors of large numbers are not mistaken for information.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NumericalContext<F> {
    absolute: F,
    relative: F,
}

impl<F: Scalar> NumericalContext<F> {
    /// Create a new context.
    ///
    /// # Arguments
    ///
    /// * `absolute`: Non negative threshold below which any value is small.
    /// * `relative`: Non negative fraction of the reference magnitude that is added to the
    /// absolute threshold.
    #[must_use]
    pub fn new(absolute: F, relative: F) -> Self {
        debug_assert!(absolute >= F::zero());
        debug_assert!(relative >= F::zero());

        Self { absolute, relative }
    }

    /// Whether `value` is indistinguishable from zero, relative to `reference`.
    ///
    /// # Arguments
    ///
    /// * `reference`: Magnitude of the quantities that `value` was computed from. Its sign is
    /// ignored.
    /// * `value`: Value to test.
    pub fn is_small(&self, reference: F, value: F) -> bool {
        value.abs() <= self.absolute + self.relative * reference.abs()
    }

    /// Whether `value` is indistinguishable from zero in absolute terms.
    pub fn is_zero(&self, value: F) -> bool {
        self.is_small(F::zero(), value)
    }

    /// Whether `value` is negative beyond the tolerance.
    pub fn is_negative(&self, value: F) -> bool {
        value < F::zero() && !self.is_zero(value)
    }

    /// Whether `value` is positive beyond the tolerance.
    pub fn is_positive(&self, value: F) -> bool {
        value > F::zero() && !self.is_zero(value)
    }

    /// Whether two values are equal within tolerance, relative to the largest of the two.
    pub fn is_equal(&self, left: F, right: F) -> bool {
        self.is_small(left.abs().max(right.abs()), left - right)
    }

    /// The absolute threshold.
    pub fn absolute(&self) -> F {
        self.absolute
    }

    /// The relative threshold.
    pub fn relative(&self) -> F {
        self.relative
    }
}

impl<F: Scalar> Default for NumericalContext<F> {
    fn default() -> Self {
        Self::new(F::default_absolute_tolerance(), F::default_relative_tolerance())
    }
}

#[cfg(test)]
mod test {
    use crate::data::number_types::tolerance::NumericalContext;

    #[test]
    fn small_values() {
        let context = NumericalContext::<f64>::default();
        assert_eq!(context.absolute(), 1e-9);
        assert_eq!(context.relative(), 1e-12);

        assert!(context.is_zero(0f64));
        assert!(context.is_zero(1e-12));
        assert!(context.is_zero(-1e-12));
        assert!(!context.is_zero(1e-3));
    }

    #[test]
    fn relative_to_reference() {
        let context = NumericalContext::new(1e-9f64, 1e-6);

        assert!(!context.is_small(1f64, 1e-4));
        assert!(context.is_small(1e3, 1e-4));
        // Sign of the reference is irrelevant
        assert!(context.is_small(-1e3, -1e-4));
    }

    #[test]
    fn signs() {
        let context = NumericalContext::<f64>::default();

        assert!(context.is_negative(-1f64));
        assert!(!context.is_negative(-1e-15));
        assert!(context.is_positive(2f64));
        assert!(!context.is_positive(1e-15));
        assert!(context.is_equal(1f64, 1f64 + 1e-13));
        assert!(!context.is_equal(1f64, 1.1));
    }

    #[test]
    fn single_precision() {
        let context = NumericalContext::<f32>::default();
        assert_eq!(context.absolute(), 1e-5);
        assert_eq!(context.relative(), 1e-6);

        assert!(context.is_zero(1e-7f32));
        assert!(!context.is_zero(1e-2f32));
    }
}
