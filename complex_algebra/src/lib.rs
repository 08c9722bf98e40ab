//! Closed algebra of Real, Imaginary and Complex values
//!
//! This crate provides addition and multiplication over every pairing of
//! the value kinds (and bare `i64`/`f64` scalars) with result narrowing:
//! a result whose imaginary or real component is exactly zero comes back
//! as a `Real` or `Imaginary` instead of a `Complex`.
//!
//! - `Real`, `Imaginary`, `Complex` value kinds and the `Number` result union
//! - `Operand` union accepted by every operation
//! - `add` / `multiply` engine with narrowing
//! - `dynamic_binop` for untyped (JSON) operands
//! - `+` / `*` operator overloads
//!
//! ```
//! use complex_algebra::prelude::*;
//!
//! let z = add(Real::new(5.0), Imaginary::new(4.0));
//! assert_eq!(z.to_string(), "5.0 + 4.0im");
//!
//! let w = multiply(Complex::new(Real::new(0.0), Imaginary::new(7.0)), 3);
//! assert_eq!(w, Number::Imaginary(Imaginary::new(21.0)));
//! ```

pub mod convert;
pub mod dispatch;
pub mod error;
pub mod operand;
pub mod ops;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use complex_algebra::prelude::*;
/// ```
pub mod prelude {
    pub use super::dispatch::{
        add, binop, dynamic_add, dynamic_binop, dynamic_multiply, multiply, narrow, BinOp,
    };
    pub use super::error::{ArithmeticError, ArithmeticResult};
    pub use super::operand::{Operand, Scalar};
    pub use super::value::{Complex, Imaginary, Number, Real};
    pub use super::{
        construct_complex, construct_imaginary, construct_real, imaginary_part, real_part,
        scalar_value, ScalarValue,
    };
}

pub use prelude::*;

pub fn construct_real(scalar: impl Into<Scalar>) -> Real {
    Real::from(scalar.into())
}

pub fn construct_imaginary(scalar: impl Into<Scalar>) -> Imaginary {
    Imaginary::from(scalar.into())
}

pub fn construct_complex(re: Real, im: Imaginary) -> Complex {
    Complex::new(re, im)
}

pub fn real_part(c: &Complex) -> Real {
    c.real_part()
}

pub fn imaginary_part(c: &Complex) -> Imaginary {
    c.imaginary_part()
}

/// Leaf kinds that expose a single scalar
pub trait ScalarValue {
    fn scalar_value(&self) -> f64;
}

impl ScalarValue for Real {
    fn scalar_value(&self) -> f64 {
        self.value()
    }
}

impl ScalarValue for Imaginary {
    fn scalar_value(&self) -> f64 {
        self.value()
    }
}

pub fn scalar_value(leaf: &impl ScalarValue) -> f64 {
    leaf.scalar_value()
}
