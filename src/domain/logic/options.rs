//! Dynamic option derivation for the action editor inputs.
//!
//! Option lists depend on runtime survey state (declared variables, other
//! questions, hidden fields), so they are computed on demand as pure
//! functions of that state rather than cached anywhere.

use crate::domain::foundation::VariableId;
use crate::domain::survey::{Survey, VariableType};

use super::action::{ActionObjective, CalculateOperator};
use super::value::StaticValue;

/// One selectable entry in a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOption {
    pub label: String,
    pub value: String,
}

impl ComboOption {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The fixed objective choices.
pub fn objective_options() -> Vec<(ActionObjective, ComboOption)> {
    vec![
        (
            ActionObjective::JumpToQuestion,
            ComboOption::new("Jump to question", "jumpToQuestion"),
        ),
        (
            ActionObjective::RequireAnswer,
            ComboOption::new("Require answer", "requireAnswer"),
        ),
        (
            ActionObjective::Calculate,
            ComboOption::new("Calculate", "calculate"),
        ),
    ]
}

/// Jump/require targets: every question except the one being edited,
/// followed by the survey's ending cards.
pub fn target_options(survey: &Survey, question_idx: usize) -> Vec<ComboOption> {
    let mut options: Vec<ComboOption> = survey
        .questions
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != question_idx)
        .map(|(_, question)| ComboOption::new(question.headline.clone(), question.id.as_str()))
        .collect();

    options.extend(
        survey
            .endings
            .iter()
            .map(|ending| ComboOption::new(ending.headline.clone(), ending.id.as_str())),
    );
    options
}

/// Calculate targets: the survey's declared variables.
pub fn variable_options(survey: &Survey) -> Vec<ComboOption> {
    survey
        .variables
        .iter()
        .map(|variable| ComboOption::new(variable.name.clone(), variable.id.as_str()))
        .collect()
}

/// Operators applicable to a variable of the given type.
///
/// `None` (no variable chosen yet) offers only assignment.
pub fn operator_options(variable_type: Option<VariableType>) -> Vec<CalculateOperator> {
    match variable_type {
        Some(VariableType::Number) => vec![
            CalculateOperator::Add,
            CalculateOperator::Subtract,
            CalculateOperator::Multiply,
            CalculateOperator::Divide,
            CalculateOperator::Assign,
        ],
        Some(VariableType::Text) => vec![CalculateOperator::Assign, CalculateOperator::Concat],
        None => vec![CalculateOperator::Assign],
    }
}

/// Value sources for a calculate action: other variables of the same type
/// as the chosen one, plus the survey's hidden fields.
pub fn value_options(survey: &Survey, variable_id: &VariableId) -> Vec<ComboOption> {
    let Some(chosen) = survey.variable(variable_id) else {
        return Vec::new();
    };

    let mut options: Vec<ComboOption> = survey
        .variables
        .iter()
        .filter(|v| &v.id != variable_id && v.variable_type == chosen.variable_type)
        .map(|v| ComboOption::new(v.name.clone(), v.id.as_str()))
        .collect();

    options.extend(
        survey
            .hidden_fields
            .iter()
            .map(|field| ComboOption::new(field.clone(), field.clone())),
    );
    options
}

/// Coerces raw form input to the primitive type the variable expects.
///
/// Numeric variables parse the string to a number; input that does not
/// parse is rejected so the edit never reaches the validator.
pub fn coerce_static_value(raw: &str, variable_type: VariableType) -> Option<StaticValue> {
    match variable_type {
        VariableType::Number => raw.trim().parse().ok().map(StaticValue::Number),
        VariableType::Text => Some(StaticValue::Text(raw.to_string())),
    }
}
