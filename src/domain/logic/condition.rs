//! Recursive boolean condition trees.
//!
//! A condition is either a leaf comparison or a group combining child
//! conditions with a single AND/OR connector. Groups nest arbitrarily.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConditionId, QuestionId};
use crate::ports::IdMinter;

use super::value::OperandValue;

/// Boolean connector for a condition group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connector {
    And,
    Or,
}

/// What a leaf condition's left operand refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperandKind {
    Question,
    Variable,
    HiddenField,
}

/// The left-hand side of a leaf comparison: a reference into the survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operand {
    #[serde(rename = "type")]
    pub kind: OperandKind,
    pub id: String,
}

impl Operand {
    /// Operand referring to a question's answer.
    pub fn question(id: &QuestionId) -> Self {
        Self {
            kind: OperandKind::Question,
            id: id.as_str().to_string(),
        }
    }
}

/// Comparison applied by a leaf condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionOperator {
    IsSkipped,
    IsSubmitted,
    Equals,
    DoesNotEqual,
    IsGreaterThan,
    IsLessThan,
    Contains,
    DoesNotContain,
}

impl ConditionOperator {
    /// Unary operators compare against nothing and take no right operand.
    pub fn is_unary(&self) -> bool {
        matches!(
            self,
            ConditionOperator::IsSkipped | ConditionOperator::IsSubmitted
        )
    }
}

/// A single comparison between a survey reference and a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafCondition {
    pub id: ConditionId,
    pub left_operand: Operand,
    pub operator: ConditionOperator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_operand: Option<OperandValue>,
}

/// A node of the condition tree.
///
/// Serialized untagged: groups and leaves have disjoint field sets, so the
/// wire shape is unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionNode {
    Group(ConditionGroup),
    Leaf(LeafCondition),
}

/// An AND/OR combination of leaf conditions and nested groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionGroup {
    pub id: ConditionId,
    pub connector: Connector,
    pub conditions: Vec<ConditionNode>,
}

impl ConditionGroup {
    /// The default condition attached to a new logic item: "this question
    /// was skipped", under a single AND group.
    pub fn skip_check(question_id: &QuestionId, minter: &dyn IdMinter) -> Self {
        Self {
            id: ConditionId::from(minter.mint()),
            connector: Connector::And,
            conditions: vec![ConditionNode::Leaf(LeafCondition {
                id: ConditionId::from(minter.mint()),
                left_operand: Operand::question(question_id),
                operator: ConditionOperator::IsSkipped,
                right_operand: None,
            })],
        }
    }

    /// Mints fresh ids for this group and every descendant node.
    ///
    /// Used on duplication so the copy shares no id with its source.
    pub fn refresh_ids(&mut self, minter: &dyn IdMinter) {
        self.id = ConditionId::from(minter.mint());
        for node in &mut self.conditions {
            match node {
                ConditionNode::Group(group) => group.refresh_ids(minter),
                ConditionNode::Leaf(leaf) => leaf.id = ConditionId::from(minter.mint()),
            }
        }
    }

    /// Appends every condition id in this subtree to `out`.
    pub fn collect_ids(&self, out: &mut Vec<String>) {
        out.push(self.id.as_str().to_string());
        for node in &self.conditions {
            match node {
                ConditionNode::Group(group) => group.collect_ids(out),
                ConditionNode::Leaf(leaf) => out.push(leaf.id.as_str().to_string()),
            }
        }
    }
}
