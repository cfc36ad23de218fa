//! Value references shared by conditions and calculate actions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::VariableId;
use crate::domain::survey::VariableType;

/// A literal value, either numeric or textual.
///
/// Serialized untagged so it appears on the wire as a bare JSON number or
/// string, matching the form inputs it originates from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StaticValue {
    Number(f64),
    Text(String),
}

impl StaticValue {
    /// Returns the empty value for the given variable type.
    pub fn empty_for(variable_type: VariableType) -> Self {
        match variable_type {
            VariableType::Number => StaticValue::Number(0.0),
            VariableType::Text => StaticValue::Text(String::new()),
        }
    }

    /// Checks whether this value matches the given variable type.
    pub fn matches(&self, variable_type: VariableType) -> bool {
        matches!(
            (self, variable_type),
            (StaticValue::Number(_), VariableType::Number)
                | (StaticValue::Text(_), VariableType::Text)
        )
    }
}

/// A value operand: a literal, a variable reference, or a hidden field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OperandValue {
    #[serde(rename_all = "camelCase")]
    Static { value: StaticValue },
    #[serde(rename_all = "camelCase")]
    Variable { variable_id: VariableId },
    #[serde(rename_all = "camelCase")]
    HiddenField { field_id: String },
}

impl OperandValue {
    /// Convenience constructor for a static literal.
    pub fn literal(value: StaticValue) -> Self {
        OperandValue::Static { value }
    }
}
