//! Value kinds of the algebra
//!
//! `Real` and `Imaginary` are passive leaves holding one `f64`, `Complex`
//! pairs one of each, and `Number` is the union every operation returns.
//! None of these types carry arithmetic of their own; see [`crate::dispatch`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operand::Scalar;

/// Write a float the way Julia prints `Float64` (integral values keep `.0`)
pub(crate) fn fmt_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        write!(f, "{}.0", v)
    } else {
        write!(f, "{}", v)
    }
}

// ========== Leaves ==========

/// Real number `r + 0i`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Real(f64);

impl Real {
    pub const fn new(value: f64) -> Self {
        Real(value)
    }

    /// The stored scalar
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Absolute value, used for zero detection
    pub fn abs(&self) -> f64 {
        self.0.abs()
    }
}

/// Pure imaginary number `0 + c·i`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Imaginary(f64);

impl Imaginary {
    pub const fn new(value: f64) -> Self {
        Imaginary(value)
    }

    /// Coefficient of the imaginary unit
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Absolute value of the coefficient, used for zero detection
    pub fn abs(&self) -> f64 {
        self.0.abs()
    }
}

macro_rules! impl_leaf_from {
    ($leaf:ident) => {
        impl From<f64> for $leaf {
            fn from(v: f64) -> Self {
                $leaf::new(v)
            }
        }

        impl From<f32> for $leaf {
            fn from(v: f32) -> Self {
                $leaf::new(v as f64)
            }
        }

        impl From<i64> for $leaf {
            fn from(v: i64) -> Self {
                $leaf::new(v as f64)
            }
        }

        impl From<i32> for $leaf {
            fn from(v: i32) -> Self {
                $leaf::new(v as f64)
            }
        }

        impl From<Scalar> for $leaf {
            fn from(v: Scalar) -> Self {
                $leaf::new(v.as_f64())
            }
        }
    };
}

impl_leaf_from!(Real);
impl_leaf_from!(Imaginary);

// ========== Composite ==========

/// Complex number `re + im·i`
///
/// Both parts are always present; a zero real part is `Real(0)`. Constructing
/// a `Complex` never narrows it, only operation results are narrowed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    #[serde(rename = "real")]
    re: Real,
    #[serde(rename = "imaginary")]
    im: Imaginary,
}

impl Complex {
    pub const fn new(re: Real, im: Imaginary) -> Self {
        Complex { re, im }
    }

    pub const fn real_part(&self) -> Real {
        self.re
    }

    pub const fn imaginary_part(&self) -> Imaginary {
        self.im
    }
}

// ========== Result union ==========

/// Result of an arithmetic operation, already narrowed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Real(Real),
    Imaginary(Imaginary),
    Complex(Complex),
}

impl Number {
    /// Name of the result kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Number::Real(_) => "Real",
            Number::Imaginary(_) => "Imaginary",
            Number::Complex(_) => "Complex",
        }
    }

    /// Real component; `Real(0)` for a pure imaginary
    pub fn real_part(&self) -> Real {
        match self {
            Number::Real(r) => *r,
            Number::Imaginary(_) => Real::new(0.0),
            Number::Complex(c) => c.real_part(),
        }
    }

    /// Imaginary component; `Imaginary(0)` for a real
    pub fn imaginary_part(&self) -> Imaginary {
        match self {
            Number::Real(_) => Imaginary::new(0.0),
            Number::Imaginary(i) => *i,
            Number::Complex(c) => c.imaginary_part(),
        }
    }

    pub fn as_real(&self) -> Option<Real> {
        match self {
            Number::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_imaginary(&self) -> Option<Imaginary> {
        match self {
            Number::Imaginary(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex> {
        match self {
            Number::Complex(c) => Some(*c),
            _ => None,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Number::Complex(_))
    }
}

impl From<Real> for Number {
    fn from(v: Real) -> Self {
        Number::Real(v)
    }
}

impl From<Imaginary> for Number {
    fn from(v: Imaginary) -> Self {
        Number::Imaginary(v)
    }
}

impl From<Complex> for Number {
    fn from(v: Complex) -> Self {
        Number::Complex(v)
    }
}

// ========== Display implementation ==========

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_float(f, self.0)
    }
}

impl fmt::Display for Imaginary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_float(f, self.0)?;
        write!(f, "im")
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_float(f, self.re.value())?;
        let im = self.im.value();
        if im.is_sign_negative() {
            write!(f, " - ")?;
        } else {
            write!(f, " + ")?;
        }
        fmt_float(f, im.abs())?;
        write!(f, "im")
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Real(r) => write!(f, "{}", r),
            Number::Imaginary(i) => write!(f, "{}", i),
            Number::Complex(c) => write!(f, "{}", c),
        }
    }
}
