//! Operand union and classification
//!
//! Every operation accepts an [`Operand`]. Before any arithmetic runs, each
//! operand is classified into a [`Class`] that carries its scalar data:
//! a bare scalar is always real-like, never imaginary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::{fmt_float, Complex, Imaginary, Number, Real};

/// Bare numeric scalar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Int(v) => *v as f64,
            Scalar::Float(v) => *v,
        }
    }

    /// Rust-side type name, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Int(_) => "i64",
            Scalar::Float(_) => "f64",
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(v as f64)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => fmt_float(f, *v),
        }
    }
}

/// Anything `add` and `multiply` accept
///
/// Serialized externally tagged in lowercase (`{"real": 5}`), except scalars
/// which are bare numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    Real(Real),
    Imaginary(Imaginary),
    Complex(Complex),
    #[serde(untagged)]
    Scalar(Scalar),
}

/// Classification of an operand, carrying the data each arm needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Class {
    /// `Real` or a bare scalar
    RealLike(f64),
    /// `Imaginary` only
    ImaginaryLike(f64),
    /// `Complex` only, as `(re, im)`
    Complex(f64, f64),
}

impl Class {
    /// Decompose into a `(real, imaginary)` contribution pair
    pub fn parts(&self) -> (f64, f64) {
        match *self {
            Class::RealLike(v) => (v, 0.0),
            Class::ImaginaryLike(v) => (0.0, v),
            Class::Complex(re, im) => (re, im),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Class::RealLike(_) => "real-like",
            Class::ImaginaryLike(_) => "imaginary-like",
            Class::Complex(..) => "complex",
        }
    }
}

impl Operand {
    pub fn classify(&self) -> Class {
        match self {
            Operand::Real(r) => Class::RealLike(r.value()),
            Operand::Scalar(s) => Class::RealLike(s.as_f64()),
            Operand::Imaginary(i) => Class::ImaginaryLike(i.value()),
            Operand::Complex(c) => Class::Complex(c.real_part().value(), c.imaginary_part().value()),
        }
    }

    /// Name of the operand kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Operand::Real(_) => "Real",
            Operand::Imaginary(_) => "Imaginary",
            Operand::Complex(_) => "Complex",
            Operand::Scalar(s) => s.type_name(),
        }
    }
}

// ========== From implementations ==========

impl From<Real> for Operand {
    fn from(v: Real) -> Self {
        Operand::Real(v)
    }
}

impl From<Imaginary> for Operand {
    fn from(v: Imaginary) -> Self {
        Operand::Imaginary(v)
    }
}

impl From<Complex> for Operand {
    fn from(v: Complex) -> Self {
        Operand::Complex(v)
    }
}

impl From<Scalar> for Operand {
    fn from(v: Scalar) -> Self {
        Operand::Scalar(v)
    }
}

impl From<Number> for Operand {
    fn from(v: Number) -> Self {
        match v {
            Number::Real(r) => Operand::Real(r),
            Number::Imaginary(i) => Operand::Imaginary(i),
            Number::Complex(c) => Operand::Complex(c),
        }
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Scalar(Scalar::Int(v))
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Scalar(Scalar::Int(v as i64))
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Scalar(Scalar::Float(v))
    }
}

impl From<f32> for Operand {
    fn from(v: f32) -> Self {
        Operand::Scalar(Scalar::Float(v as f64))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Real(r) => write!(f, "{}", r),
            Operand::Imaginary(i) => write!(f, "{}", i),
            Operand::Complex(c) => write!(f, "{}", c),
            Operand::Scalar(s) => write!(f, "{}", s),
        }
    }
}
