//! Error types for the arithmetic engine
//!
//! The typed API is total; errors only surface at the dynamic boundary
//! where operands arrive as untyped serialized values.

use thiserror::Error;

/// Arithmetic error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Operand is not a Real, Imaginary, Complex or numeric scalar
    #[error("InvalidOperand: {0}")]
    InvalidOperand(String),
}

impl ArithmeticError {
    /// Create an invalid operand error
    pub fn invalid_operand<S: Into<String>>(msg: S) -> Self {
        ArithmeticError::InvalidOperand(msg.into())
    }
}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
