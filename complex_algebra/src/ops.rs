//! `+` and `*` for every operand kind
//!
//! All impls forward to [`crate::dispatch`]; no promotion logic lives here.

use std::ops::{Add, Mul};

use crate::dispatch;
use crate::operand::{Operand, Scalar};
use crate::value::{Complex, Imaginary, Number, Real};

macro_rules! impl_ops_for_kind {
    ($($ty:ty),*) => {$(
        impl<T: Into<Operand>> Add<T> for $ty {
            type Output = Number;
            #[inline]
            fn add(self, rhs: T) -> Number {
                dispatch::add(self, rhs)
            }
        }

        impl<T: Into<Operand>> Mul<T> for $ty {
            type Output = Number;
            #[inline]
            fn mul(self, rhs: T) -> Number {
                dispatch::multiply(self, rhs)
            }
        }
    )*};
}

impl_ops_for_kind!(Real, Imaginary, Complex, Number, Operand, Scalar);

// Bare scalars on the left-hand side
macro_rules! impl_ops_for_primitive {
    (@rhs $prim:ty: $($rhs:ty),*) => {$(
        impl Add<$rhs> for $prim {
            type Output = Number;
            #[inline]
            fn add(self, rhs: $rhs) -> Number {
                dispatch::add(self, rhs)
            }
        }

        impl Mul<$rhs> for $prim {
            type Output = Number;
            #[inline]
            fn mul(self, rhs: $rhs) -> Number {
                dispatch::multiply(self, rhs)
            }
        }
    )*};
    ($($prim:ty),*) => {$(
        impl_ops_for_primitive!(@rhs $prim: Real, Imaginary, Complex, Number);
    )*};
}

impl_ops_for_primitive!(i64, i32, f64, f32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_operators() {
        assert_eq!(
            Real::new(5.0) + Imaginary::new(4.0),
            Number::Complex(Complex::new(Real::new(5.0), Imaginary::new(4.0)))
        );
        assert_eq!(
            Imaginary::new(2.0) * Imaginary::new(3.0),
            Number::Real(Real::new(-6.0))
        );
    }

    #[test]
    fn test_primitive_on_either_side() {
        assert_eq!(
            Imaginary::new(4.0) * 2i64,
            Number::Imaginary(Imaginary::new(8.0))
        );
        assert_eq!(
            2i64 * Imaginary::new(4.0),
            Number::Imaginary(Imaginary::new(8.0))
        );
        assert_eq!(1.5f64 + Real::new(1.0), Number::Real(Real::new(2.5)));
    }

    #[test]
    fn test_results_chain() {
        let z = Real::new(1.0) + Imaginary::new(1.0);
        // (1 + i)^2 = 2i
        assert_eq!(z * z, Number::Imaginary(Imaginary::new(2.0)));
        assert_eq!(
            (z * z) + Real::new(3.0),
            Number::Complex(Complex::new(Real::new(3.0), Imaginary::new(2.0)))
        );
    }
}
