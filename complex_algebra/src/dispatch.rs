//! Arithmetic engine
//!
//! Both operations follow the same pipeline: classify each operand, pick the
//! rule for the pair of classes, compute the components, narrow the result.
//!
//! ## Debug Logging
//!
//! Set `COMPLEX_ALGEBRA_DISPATCH_DEBUG=1` to trace every dispatch (debug builds only).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use crate::convert::to_operand;
use crate::error::ArithmeticResult;
use crate::operand::{Class, Operand};
use crate::value::{Complex, Imaginary, Number, Real};

/// Check if dispatch debug logging is enabled via `COMPLEX_ALGEBRA_DISPATCH_DEBUG`.
#[cfg(debug_assertions)]
fn dispatch_debug_enabled() -> bool {
    use std::sync::OnceLock;
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var("COMPLEX_ALGEBRA_DISPATCH_DEBUG").is_ok())
}

#[cfg(debug_assertions)]
fn dispatch_debug_log(args: std::fmt::Arguments<'_>) {
    use std::io::Write;
    let _ = writeln!(std::io::stderr(), "{args}");
}

#[inline]
fn trace(op: BinOp, lhs: Class, rhs: Class, result: &Number) {
    #[cfg(debug_assertions)]
    if dispatch_debug_enabled() {
        dispatch_debug_log(format_args!(
            "[dispatch] {}({}, {}) -> {}",
            op.as_str(),
            lhs.name(),
            rhs.name(),
            result.kind_name()
        ));
    }
    #[cfg(not(debug_assertions))]
    let _ = (op, lhs, rhs, result);
}

/// Binary operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Mul,
}

impl BinOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Mul => "*",
        }
    }
}

/// Collapse a freshly computed `(re, im)` pair to the simplest kind.
///
/// Zero tests are exact: `1e-300` is not zero.
pub fn narrow(re: f64, im: f64) -> Number {
    if im.abs() == 0.0 {
        Number::Real(Real::new(re))
    } else if re.abs() == 0.0 {
        Number::Imaginary(Imaginary::new(im))
    } else {
        Number::Complex(Complex::new(Real::new(re), Imaginary::new(im)))
    }
}

/// Add two operands
pub fn add(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Number {
    let (lhs, rhs) = (lhs.into().classify(), rhs.into().classify());
    let result = match (lhs, rhs) {
        (Class::Complex(..), _) | (_, Class::Complex(..)) => {
            let (ar, ai) = lhs.parts();
            let (br, bi) = rhs.parts();
            narrow(ar + br, ai + bi)
        }
        (Class::RealLike(a), Class::RealLike(b)) => Number::Real(Real::new(a + b)),
        (Class::ImaginaryLike(a), Class::ImaginaryLike(b)) => {
            Number::Imaginary(Imaginary::new(a + b))
        }
        (Class::RealLike(re), Class::ImaginaryLike(im))
        | (Class::ImaginaryLike(im), Class::RealLike(re)) => narrow(re, im),
    };
    trace(BinOp::Add, lhs, rhs, &result);
    result
}

/// Multiply two operands
pub fn multiply(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Number {
    let (lhs, rhs) = (lhs.into().classify(), rhs.into().classify());
    let result = match (lhs, rhs) {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        (Class::Complex(..), _) | (_, Class::Complex(..)) => {
            let (ar, ai) = lhs.parts();
            let (br, bi) = rhs.parts();
            narrow(ar * br - ai * bi, ar * bi + ai * br)
        }
        (Class::RealLike(a), Class::ImaginaryLike(b))
        | (Class::ImaginaryLike(b), Class::RealLike(a)) => Number::Imaginary(Imaginary::new(a * b)),
        // i * i = -1
        (Class::ImaginaryLike(a), Class::ImaginaryLike(b)) => Number::Real(Real::new(-(a * b))),
        (Class::RealLike(a), Class::RealLike(b)) => Number::Real(Real::new(a * b)),
    };
    trace(BinOp::Mul, lhs, rhs, &result);
    result
}

/// Perform a typed binary operation
pub fn binop(op: BinOp, lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Number {
    match op {
        BinOp::Add => add(lhs, rhs),
        BinOp::Mul => multiply(lhs, rhs),
    }
}

/// Perform a binary operation on untyped operands
///
/// Dispatches based on the runtime shape of the operands.
pub fn dynamic_binop(
    op: BinOp,
    lhs: &serde_json::Value,
    rhs: &serde_json::Value,
) -> ArithmeticResult<Number> {
    let lhs = to_operand(lhs)?;
    let rhs = to_operand(rhs)?;
    Ok(binop(op, lhs, rhs))
}

/// Dynamic addition
pub fn dynamic_add(lhs: &serde_json::Value, rhs: &serde_json::Value) -> ArithmeticResult<Number> {
    dynamic_binop(BinOp::Add, lhs, rhs)
}

/// Dynamic multiplication
pub fn dynamic_multiply(
    lhs: &serde_json::Value,
    rhs: &serde_json::Value,
) -> ArithmeticResult<Number> {
    dynamic_binop(BinOp::Mul, lhs, rhs)
}
