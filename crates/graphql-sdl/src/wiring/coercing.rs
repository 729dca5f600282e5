use crate::ast::Value;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercingError {
    #[error("cannot serialize value as `{type_name}`: {message}")]
    Serialize { type_name: String, message: String },

    #[error("cannot parse value as `{type_name}`: {message}")]
    ParseValue { type_name: String, message: String },

    #[error("cannot parse literal as `{type_name}`: {message}")]
    ParseLiteral { type_name: String, message: String },
}

/// Conversion behavior for a scalar type: runtime value to output form,
/// input value to runtime form, and SDL literal to runtime form.
pub trait Coercing: Send + Sync {
    fn serialize(&self, value: &Value) -> Result<Value, CoercingError>;

    fn parse_value(&self, value: &Value) -> Result<Value, CoercingError>;

    fn parse_literal(&self, literal: &Value) -> Result<Value, CoercingError>;
}

/// Pass-through coercing attached to custom scalars nobody registered
/// behavior for.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityCoercing;
impl Coercing for IdentityCoercing {
    fn serialize(&self, value: &Value) -> Result<Value, CoercingError> {
        Ok(value.clone())
    }

    fn parse_value(&self, value: &Value) -> Result<Value, CoercingError> {
        Ok(value.clone())
    }

    fn parse_literal(&self, literal: &Value) -> Result<Value, CoercingError> {
        Ok(literal.clone())
    }
}

/// Coercing for the five built-in scalars. Accepts exactly the literal
/// kinds the scalar admits (with the standard Int-to-Float widening and the
/// String-or-Int leniency of ID) and rejects everything else.
#[derive(Clone, Copy, Debug)]
pub struct SpecifiedScalarCoercing {
    name: &'static str,
}
impl SpecifiedScalarCoercing {
    pub(crate) fn for_scalar(name: &str) -> Option<Self> {
        match name {
            "Boolean" => Some(Self { name: "Boolean" }),
            "Float" => Some(Self { name: "Float" }),
            "ID" => Some(Self { name: "ID" }),
            "Int" => Some(Self { name: "Int" }),
            "String" => Some(Self { name: "String" }),
            _ => None,
        }
    }

    fn admit(&self, value: &Value) -> Option<Value> {
        match (self.name, value) {
            ("Boolean", Value::Boolean(_)) => Some(value.clone()),
            ("Float", Value::Float(_)) => Some(value.clone()),
            ("Float", Value::Int(int)) => Some(Value::float(int.value as f64)),
            ("ID", Value::String(_) | Value::Int(_)) => Some(value.clone()),
            ("Int", Value::Int(_)) => Some(value.clone()),
            ("String", Value::String(_)) => Some(value.clone()),
            _ => None,
        }
    }

    fn reject(&self, value: &Value, make: impl Fn(String, String) -> CoercingError) -> CoercingError {
        make(
            self.name.to_string(),
            format!("incompatible value `{value:?}`"),
        )
    }
}
impl Coercing for SpecifiedScalarCoercing {
    fn serialize(&self, value: &Value) -> Result<Value, CoercingError> {
        self.admit(value).ok_or_else(|| {
            self.reject(value, |type_name, message| CoercingError::Serialize {
                type_name,
                message,
            })
        })
    }

    fn parse_value(&self, value: &Value) -> Result<Value, CoercingError> {
        self.admit(value).ok_or_else(|| {
            self.reject(value, |type_name, message| CoercingError::ParseValue {
                type_name,
                message,
            })
        })
    }

    fn parse_literal(&self, literal: &Value) -> Result<Value, CoercingError> {
        self.admit(literal).ok_or_else(|| {
            self.reject(literal, |type_name, message| {
                CoercingError::ParseLiteral { type_name, message }
            })
        })
    }
}
