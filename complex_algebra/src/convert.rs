//! Conversion between untyped JSON values and the algebra's types

use serde::{Deserialize, Serialize};

use crate::error::{ArithmeticError, ArithmeticResult};
use crate::operand::Operand;
use crate::value::Number;

/// Short description of a JSON value's shape, used in diagnostics
fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "Bool",
        serde_json::Value::Number(_) => "Number",
        serde_json::Value::String(_) => "String",
        serde_json::Value::Array(_) => "Array",
        serde_json::Value::Object(_) => "Object",
    }
}

/// Convert a JSON value to an `Operand`
pub fn to_operand(value: &serde_json::Value) -> ArithmeticResult<Operand> {
    Operand::deserialize(value).map_err(|e| {
        ArithmeticError::invalid_operand(format!(
            "cannot use {}::{} as an operand ({})",
            value,
            json_type_name(value),
            e
        ))
    })
}

/// Convert a `Number` to its JSON encoding
pub fn to_json(number: &Number) -> serde_json::Value {
    match number.serialize(serde_json::value::Serializer) {
        Ok(v) => v,
        // f64 fields and enum tags always serialize
        Err(_) => serde_json::Value::Null,
    }
}
