//! Actions - the effects a logic item performs when its conditions hold.
//!
//! `Action` is a sum type discriminated on the `objective` field: the
//! variant decides which fields exist, so an action can never carry fields
//! that are stale for its objective. Partial edits arrive as an
//! [`ActionPatch`] and go through [`Action::reconciled`], which re-derives
//! the full shape for the (possibly new) objective.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActionId, TargetId, VariableId};
use crate::domain::survey::{Survey, VariableType};
use crate::ports::IdMinter;

use super::value::{OperandValue, StaticValue};

/// Discriminator selecting an action's behavior and valid field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionObjective {
    JumpToQuestion,
    RequireAnswer,
    Calculate,
}

/// Operator applied by a calculate action to its variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculateOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Assign,
    Concat,
}

impl CalculateOperator {
    /// Checks whether this operator is usable with the given variable type.
    ///
    /// Arithmetic needs a numeric variable, concatenation a text one;
    /// assignment works for both.
    pub fn supports(&self, variable_type: VariableType) -> bool {
        match self {
            CalculateOperator::Assign => true,
            CalculateOperator::Concat => variable_type == VariableType::Text,
            CalculateOperator::Add
            | CalculateOperator::Subtract
            | CalculateOperator::Multiply
            | CalculateOperator::Divide => variable_type == VariableType::Number,
        }
    }
}

/// An effect performed when a logic item's conditions match.
///
/// `target` holds the destination id, a question or (for jumps) an ending
/// card; an empty id means the user has not picked a destination yet (the
/// state a freshly added action is created in).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "objective", rename_all = "camelCase")]
pub enum Action {
    #[serde(rename_all = "camelCase")]
    JumpToQuestion { id: ActionId, target: TargetId },
    #[serde(rename_all = "camelCase")]
    RequireAnswer { id: ActionId, target: TargetId },
    #[serde(rename_all = "camelCase")]
    Calculate {
        id: ActionId,
        variable_id: VariableId,
        operator: CalculateOperator,
        value: OperandValue,
    },
}

impl Action {
    /// The default action for new logic items and `addBelow`: jump with no
    /// destination chosen yet.
    pub fn default_jump(minter: &dyn IdMinter) -> Self {
        Action::JumpToQuestion {
            id: ActionId::from(minter.mint()),
            target: TargetId::from(""),
        }
    }

    /// Returns this action's id.
    pub fn id(&self) -> &ActionId {
        match self {
            Action::JumpToQuestion { id, .. }
            | Action::RequireAnswer { id, .. }
            | Action::Calculate { id, .. } => id,
        }
    }

    /// Returns this action's objective discriminator.
    pub fn objective(&self) -> ActionObjective {
        match self {
            Action::JumpToQuestion { .. } => ActionObjective::JumpToQuestion,
            Action::RequireAnswer { .. } => ActionObjective::RequireAnswer,
            Action::Calculate { .. } => ActionObjective::Calculate,
        }
    }

    /// Returns a copy of this action carrying a freshly minted id.
    pub fn with_fresh_id(&self, minter: &dyn IdMinter) -> Self {
        let mut copy = self.clone();
        let fresh = ActionId::from(minter.mint());
        match &mut copy {
            Action::JumpToQuestion { id, .. }
            | Action::RequireAnswer { id, .. }
            | Action::Calculate { id, .. } => *id = fresh,
        }
        copy
    }

    /// Merges a partial edit into this action and re-derives the full shape.
    ///
    /// When the patch keeps the objective, patch fields that apply to the
    /// current variant are merged and the rest ignored. When the patch
    /// switches objective, the previous variant's fields are dropped and the
    /// new variant is built from the patch plus defaults: an empty jump
    /// target, or for calculate the survey's first declared variable with an
    /// `assign` of the empty value for its type. Switching a calculate
    /// action to a variable whose type no longer supports the current
    /// operator also falls back to `assign` with a retyped empty value.
    ///
    /// The result is not guaranteed valid; callers pass it through the
    /// action validator and discard the edit if it fails.
    pub fn reconciled(&self, patch: ActionPatch, survey: &Survey) -> Action {
        let id = self.id().clone();
        let next_objective = patch.objective.unwrap_or_else(|| self.objective());

        if next_objective != self.objective() {
            return Self::rebuilt(id, next_objective, patch, survey);
        }

        match self.clone() {
            Action::JumpToQuestion { target, .. } => Action::JumpToQuestion {
                id,
                target: patch.target.unwrap_or(target),
            },
            Action::RequireAnswer { target, .. } => Action::RequireAnswer {
                id,
                target: patch.target.unwrap_or(target),
            },
            Action::Calculate {
                variable_id,
                operator,
                value,
                ..
            } => {
                let variable_changed = patch
                    .variable_id
                    .as_ref()
                    .is_some_and(|next| next != &variable_id);
                let variable_id = patch.variable_id.unwrap_or(variable_id);
                let mut operator = patch.operator.unwrap_or(operator);
                let mut value = patch.value.unwrap_or(value);

                if variable_changed && patch.operator.is_none() {
                    if let Some(variable) = survey.variable(&variable_id) {
                        if !operator.supports(variable.variable_type) {
                            operator = CalculateOperator::Assign;
                            value = OperandValue::literal(StaticValue::empty_for(
                                variable.variable_type,
                            ));
                        }
                    }
                }

                Action::Calculate {
                    id,
                    variable_id,
                    operator,
                    value,
                }
            }
        }
    }

    fn rebuilt(
        id: ActionId,
        objective: ActionObjective,
        patch: ActionPatch,
        survey: &Survey,
    ) -> Action {
        match objective {
            ActionObjective::JumpToQuestion => Action::JumpToQuestion {
                id,
                target: patch.target.unwrap_or_else(|| TargetId::from("")),
            },
            ActionObjective::RequireAnswer => Action::RequireAnswer {
                id,
                target: patch.target.unwrap_or_else(|| TargetId::from("")),
            },
            ActionObjective::Calculate => {
                let variable_id = patch
                    .variable_id
                    .or_else(|| survey.variables.first().map(|v| v.id.clone()))
                    .unwrap_or_else(|| VariableId::from(""));
                let variable_type = survey
                    .variable(&variable_id)
                    .map(|v| v.variable_type)
                    .unwrap_or(VariableType::Text);

                Action::Calculate {
                    id,
                    variable_id,
                    operator: patch.operator.unwrap_or(CalculateOperator::Assign),
                    value: patch
                        .value
                        .unwrap_or_else(|| OperandValue::literal(StaticValue::empty_for(variable_type))),
                }
            }
        }
    }
}

/// A partial action edit, as produced by one form input changing.
///
/// Unset fields leave the current action untouched; set fields that do not
/// apply to the resulting objective are dropped during reconciliation.
#[derive(Debug, Clone, Default)]
pub struct ActionPatch {
    pub objective: Option<ActionObjective>,
    pub target: Option<TargetId>,
    pub variable_id: Option<VariableId>,
    pub operator: Option<CalculateOperator>,
    pub value: Option<OperandValue>,
}

impl ActionPatch {
    /// Patch switching the objective.
    pub fn objective(objective: ActionObjective) -> Self {
        Self {
            objective: Some(objective),
            ..Self::default()
        }
    }

    /// Patch setting the jump/require target.
    pub fn target(target: TargetId) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }

    /// Patch setting the calculate variable.
    pub fn variable(variable_id: VariableId) -> Self {
        Self {
            variable_id: Some(variable_id),
            ..Self::default()
        }
    }

    /// Patch setting the calculate operator.
    pub fn operator(operator: CalculateOperator) -> Self {
        Self {
            operator: Some(operator),
            ..Self::default()
        }
    }

    /// Patch setting the calculate value.
    pub fn value(value: OperandValue) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}
