//! Logic items - one branching rule: a condition tree plus its actions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LogicItemId, QuestionId};
use crate::ports::IdMinter;

use super::action::Action;
use super::condition::ConditionGroup;
use super::errors::LogicError;

/// One branching rule on a question.
///
/// The action list is ordered and, by editor convention, never empty: the
/// data model does not enforce this, but the editing service refuses the
/// delete that would empty it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicItem {
    pub id: LogicItemId,
    pub conditions: ConditionGroup,
    pub actions: Vec<Action>,
}

impl LogicItem {
    /// The item appended by "add logic": a single skip-detection condition
    /// on the owning question and a single default jump action.
    pub fn default_for_question(question_id: &QuestionId, minter: &dyn IdMinter) -> Self {
        Self {
            id: LogicItemId::from(minter.mint()),
            conditions: ConditionGroup::skip_check(question_id, minter),
            actions: vec![Action::default_jump(minter)],
        }
    }

    /// Deep-duplicates this item, minting fresh ids for the item itself and
    /// recursively for every condition node and action. The duplicate shares
    /// no id with its source.
    pub fn duplicated(&self, minter: &dyn IdMinter) -> Self {
        let mut conditions = self.conditions.clone();
        conditions.refresh_ids(minter);

        Self {
            id: LogicItemId::from(minter.mint()),
            conditions,
            actions: self
                .actions
                .iter()
                .map(|action| action.with_fresh_id(minter))
                .collect(),
        }
    }

    /// Returns a copy with a fresh default action inserted after `action_idx`.
    pub fn with_action_added_below(
        &self,
        action_idx: usize,
        minter: &dyn IdMinter,
    ) -> Result<Self, LogicError> {
        LogicError::check_index(action_idx, self.actions.len())?;
        let mut copy = self.clone();
        copy.actions
            .insert(action_idx + 1, Action::default_jump(minter));
        Ok(copy)
    }

    /// Returns a copy with the action at `action_idx` duplicated (fresh id,
    /// all other fields verbatim) into `action_idx + 1`.
    pub fn with_action_duplicated(
        &self,
        action_idx: usize,
        minter: &dyn IdMinter,
    ) -> Result<Self, LogicError> {
        LogicError::check_index(action_idx, self.actions.len())?;
        let mut copy = self.clone();
        let duplicate = copy.actions[action_idx].with_fresh_id(minter);
        copy.actions.insert(action_idx + 1, duplicate);
        Ok(copy)
    }

    /// Returns a copy with the action at `action_idx` removed.
    ///
    /// Does not guard against emptying the list; that gate lives in the
    /// editing service.
    pub fn with_action_removed(&self, action_idx: usize) -> Result<Self, LogicError> {
        LogicError::check_index(action_idx, self.actions.len())?;
        let mut copy = self.clone();
        copy.actions.remove(action_idx);
        Ok(copy)
    }

    /// Returns a copy with the action at `action_idx` replaced wholesale.
    pub fn with_action_replaced(&self, action_idx: usize, action: Action) -> Result<Self, LogicError> {
        LogicError::check_index(action_idx, self.actions.len())?;
        let mut copy = self.clone();
        copy.actions[action_idx] = action;
        Ok(copy)
    }

    /// Every id carried by this item: its own, all condition node ids, and
    /// all action ids.
    pub fn collect_ids(&self) -> Vec<String> {
        let mut ids = vec![self.id.as_str().to_string()];
        self.conditions.collect_ids(&mut ids);
        ids.extend(
            self.actions
                .iter()
                .map(|action| action.id().as_str().to_string()),
        );
        ids
    }
}
