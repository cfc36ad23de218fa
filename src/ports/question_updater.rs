//! Question update port - the single outbound channel for logic edits.

use crate::domain::logic::LogicItem;

/// Replacement attributes for one question.
///
/// Carries the whole new logic list; there is no diff-based partial update.
/// Either the full list replaces the old one or nothing changes, which
/// keeps every edit atomic from the owner's point of view.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionUpdate {
    pub logic: Vec<LogicItem>,
}

/// Port through which the editor reports mutated logic state upward.
///
/// The owner of the canonical survey state implements this and swaps in the
/// replacement list. Edits are synchronous and applied in trigger order on
/// the single UI execution thread, so there is no async boundary here.
pub trait QuestionUpdater: Send + Sync {
    /// Replaces the logic list of the question at `question_idx`.
    fn update_question(&self, question_idx: usize, update: QuestionUpdate);
}
