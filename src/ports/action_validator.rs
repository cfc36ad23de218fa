//! Action validation port.
//!
//! Reconciled actions are checked against the survey they belong to before
//! the edit is emitted. The editing service treats a failure as "discard
//! the edit and log": the previous state stays in place and the user is not
//! interrupted.

use thiserror::Error;

use crate::domain::foundation::{TargetId, VariableId};
use crate::domain::logic::{Action, CalculateOperator};
use crate::domain::survey::{Survey, VariableType};

/// Reasons a reconciled action fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionValidationError {
    #[error("Target '{target}' does not resolve on this survey")]
    UnknownTarget { target: TargetId },

    #[error("Variable '{variable_id}' is not declared on this survey")]
    UnknownVariable { variable_id: VariableId },

    #[error("Operator '{operator:?}' does not apply to a {variable_type:?} variable")]
    OperatorMismatch {
        operator: CalculateOperator,
        variable_type: VariableType,
    },

    #[error("Value type does not match the {variable_type:?} variable")]
    ValueTypeMismatch { variable_type: VariableType },
}

/// Port for validating a reconciled action against its survey.
pub trait ActionValidator: Send + Sync {
    /// Returns `Ok(())` when the action's references and field types are
    /// consistent with the survey, `Err` describing the first violation
    /// otherwise.
    fn validate(&self, survey: &Survey, action: &Action) -> Result<(), ActionValidationError>;
}
