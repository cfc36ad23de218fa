//! Survey object graph consumed by the logic editor.
//!
//! This is the inbound state the editor reads: ordered questions (each
//! carrying its logic list), declared variables, hidden-field keys, and the
//! optionally attached audience segment. The editor never mutates a survey
//! directly; it emits replacement logic lists through the question-update
//! port.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EndingId, EnvironmentId, QuestionId, SurveyId, VariableId};
use crate::domain::logic::LogicItem;
use crate::domain::segment::Segment;

/// Primitive type of a survey variable, which drives the operators and
/// value coercion available to calculate actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    Number,
    Text,
}

/// A variable declared on a survey, assignable by calculate actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyVariable {
    pub id: VariableId,
    pub name: String,
    #[serde(rename = "type")]
    pub variable_type: VariableType,
}

/// A single survey question with its conditional logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub headline: String,
    #[serde(default)]
    pub logic: Vec<LogicItem>,
}

/// An ending card shown when a respondent finishes or is jumped out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyEnding {
    pub id: EndingId,
    pub headline: String,
}

/// A survey: ordered questions, declared variables, and audience filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: SurveyId,
    pub environment_id: EnvironmentId,
    pub name: String,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub endings: Vec<SurveyEnding>,
    #[serde(default)]
    pub variables: Vec<SurveyVariable>,
    #[serde(default)]
    pub hidden_fields: Vec<String>,
    #[serde(default)]
    pub segment: Option<Segment>,
}

impl Survey {
    /// Returns the question at the given index, if any.
    pub fn question(&self, question_idx: usize) -> Option<&Question> {
        self.questions.get(question_idx)
    }

    /// Looks up a declared variable by id.
    pub fn variable(&self, variable_id: &VariableId) -> Option<&SurveyVariable> {
        self.variables.iter().find(|v| &v.id == variable_id)
    }

    /// Checks whether a question with the given id exists on this survey.
    pub fn has_question(&self, question_id: &QuestionId) -> bool {
        self.questions.iter().any(|q| &q.id == question_id)
    }

    /// Checks whether an ending with the given id exists on this survey.
    pub fn has_ending(&self, ending_id: &EndingId) -> bool {
        self.endings.iter().any(|e| &e.id == ending_id)
    }
}
