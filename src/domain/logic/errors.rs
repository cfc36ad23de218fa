//! Error types for logic editing.

use thiserror::Error;

/// Errors raised by the logic edit operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    #[error("Index {index} is out of bounds for a list of {len} element(s)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Question index {question_idx} does not exist on this survey")]
    UnknownQuestion { question_idx: usize },

    #[error("Logic item {logic_idx} does not exist on this question")]
    UnknownLogicItem { logic_idx: usize },

    #[error("A logic item must keep at least one action")]
    LastAction,
}

impl LogicError {
    /// Bounds-check helper for list indices.
    pub fn check_index(index: usize, len: usize) -> Result<(), LogicError> {
        if index < len {
            Ok(())
        } else {
            Err(LogicError::IndexOutOfBounds { index, len })
        }
    }
}
