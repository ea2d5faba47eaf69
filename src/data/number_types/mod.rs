//! # Number types
//!
//! The tableau is defined over floating point numbers. Because every computation accumulates
//! rounding errors, all "is this value zero" decisions are made relative to a tolerance, see the
//! `tolerance` module.
use std::fmt::{Debug, Display};

use num_traits::Float;

pub mod tolerance;

/// Floating point number that the tableau can be computed with.
///
/// Implemented for `f32` and `f64`, each with their own default tolerances.
pub trait Scalar: Float + Send + Sync + Debug + Display + 'static {
    /// Largest absolute value that is still considered to be zero, independent of any reference
    /// magnitude.
    fn default_absolute_tolerance() -> Self;
    /// Fraction of a reference magnitude below which a value is considered to be zero.
    fn default_relative_tolerance() -> Self;
}

macro_rules! impl_scalar {
    ($f_t:ident, $absolute:expr, $relative:expr) => {
        impl Scalar for $f_t {
            fn default_absolute_tolerance() -> Self {
                $absolute
            }

            fn default_relative_tolerance() -> Self {
                $relative
            }
        }
    }
}
impl_scalar!(f64, 1e-9, 1e-12);
impl_scalar!(f32, 1e-5, 1e-6);
