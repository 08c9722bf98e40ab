//! Shared helpers for integration tests
// Not every test target uses every helper.
#![allow(dead_code)]

use complex_algebra::prelude::*;

pub fn real(v: f64) -> Operand {
    Operand::Real(Real::new(v))
}

pub fn imag(v: f64) -> Operand {
    Operand::Imaginary(Imaginary::new(v))
}

pub fn complex(re: f64, im: f64) -> Operand {
    Operand::Complex(Complex::new(Real::new(re), Imaginary::new(im)))
}

/// One operand of every kind, including zero components and bare scalars
pub fn sample_operands() -> Vec<Operand> {
    vec![
        real(0.0),
        real(5.0),
        real(-2.5),
        imag(0.0),
        imag(4.0),
        imag(-7.0),
        complex(5.0, 4.0),
        complex(0.0, 7.0),
        complex(3.0, 0.0),
        complex(-1.5, 2.0),
        Operand::from(3i64),
        Operand::from(-4i64),
        Operand::from(0.5f64),
    ]
}
