//! SurveyActionValidator - validates reconciled actions against the survey.

use crate::domain::foundation::{EndingId, QuestionId};
use crate::domain::logic::{Action, OperandValue};
use crate::domain::survey::Survey;
use crate::ports::{ActionValidationError, ActionValidator};

/// Validator backed by the survey object graph itself.
///
/// Checks that every reference an action carries (jump/require target,
/// variable, value source) resolves on the survey and that operator and
/// value types line up with the chosen variable. Jumps may land on a
/// question or an ending card; requiring an answer only makes sense for a
/// question.
#[derive(Debug, Default)]
pub struct SurveyActionValidator;

impl SurveyActionValidator {
    pub fn new() -> Self {
        Self
    }
}

impl ActionValidator for SurveyActionValidator {
    fn validate(&self, survey: &Survey, action: &Action) -> Result<(), ActionValidationError> {
        match action {
            Action::JumpToQuestion { target, .. } => {
                // An empty target is the not-yet-chosen state of a fresh
                // action and stays valid.
                let resolves = target.as_str().is_empty()
                    || survey.has_question(&QuestionId::from(target.as_str()))
                    || survey.has_ending(&EndingId::from(target.as_str()));
                if !resolves {
                    return Err(ActionValidationError::UnknownTarget {
                        target: target.clone(),
                    });
                }
                Ok(())
            }
            Action::RequireAnswer { target, .. } => {
                let resolves = target.as_str().is_empty()
                    || survey.has_question(&QuestionId::from(target.as_str()));
                if !resolves {
                    return Err(ActionValidationError::UnknownTarget {
                        target: target.clone(),
                    });
                }
                Ok(())
            }
            Action::Calculate {
                variable_id,
                operator,
                value,
                ..
            } => {
                let variable = survey.variable(variable_id).ok_or_else(|| {
                    ActionValidationError::UnknownVariable {
                        variable_id: variable_id.clone(),
                    }
                })?;

                if !operator.supports(variable.variable_type) {
                    return Err(ActionValidationError::OperatorMismatch {
                        operator: *operator,
                        variable_type: variable.variable_type,
                    });
                }

                match value {
                    OperandValue::Static { value } => {
                        if !value.matches(variable.variable_type) {
                            return Err(ActionValidationError::ValueTypeMismatch {
                                variable_type: variable.variable_type,
                            });
                        }
                    }
                    OperandValue::Variable { variable_id: source } => {
                        let source_variable = survey.variable(source).ok_or_else(|| {
                            ActionValidationError::UnknownVariable {
                                variable_id: source.clone(),
                            }
                        })?;
                        if source_variable.variable_type != variable.variable_type {
                            return Err(ActionValidationError::ValueTypeMismatch {
                                variable_type: variable.variable_type,
                            });
                        }
                    }
                    // Hidden-field values are strings coerced at fill time.
                    OperandValue::HiddenField { .. } => {}
                }
                Ok(())
            }
        }
    }
}
