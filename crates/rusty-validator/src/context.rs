// File: src/context.rs
// Purpose: The field a rule chain is currently checking

use crate::value::Value;

/// Name and value of the field under validation
#[derive(Debug, Clone, PartialEq)]
pub struct FieldContext {
    pub name: String,
    pub value: Value,
}

impl FieldContext {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
