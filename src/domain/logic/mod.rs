//! Conditional logic - condition trees, actions, and the list edit algebra.
//!
//! A question carries an ordered list of [`LogicItem`]s. Each item pairs a
//! recursive AND/OR condition tree with an ordered, non-empty action list.
//! Every edit here is copy-then-replace: operations take the current state
//! by reference and return a fully new value, which the application layer
//! emits upward as a single replacement.

mod action;
mod condition;
mod errors;
mod item;
mod list;
mod options;
mod value;

pub use action::{Action, ActionObjective, ActionPatch, CalculateOperator};
pub use condition::{
    ConditionGroup, ConditionNode, ConditionOperator, Connector, LeafCondition, Operand,
    OperandKind,
};
pub use errors::LogicError;
pub use item::LogicItem;
pub use list::{appended, duplicated, relocated, removed};
pub use options::{
    coerce_static_value, objective_options, operator_options, target_options, value_options,
    variable_options, ComboOption,
};
pub use value::{OperandValue, StaticValue};
