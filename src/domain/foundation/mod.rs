//! Foundation - shared value objects for the domain layer.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{
    ActionId, ConditionId, EndingId, EnvironmentId, LogicItemId, QuestionId, SegmentId, SurveyId,
    TargetId, VariableId,
};
pub use timestamp::Timestamp;
