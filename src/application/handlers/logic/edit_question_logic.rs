//! LogicEditorService - the per-question logic editing surface.
//!
//! Each operation reads the latest survey state the caller provides,
//! deep-clones the owning question's logic list, applies exactly one edit,
//! and emits the whole replacement through the question-update port. An
//! operation that fails emits nothing, so the canonical state only ever
//! moves between consistent snapshots.

use std::sync::Arc;

use tracing::warn;

use crate::domain::logic::{self, ActionPatch, LogicError, LogicItem};
use crate::domain::survey::{Question, Survey};
use crate::ports::{ActionValidator, IdMinter, QuestionUpdate, QuestionUpdater};

/// One edit to a logic item's action list.
#[derive(Debug, Clone)]
pub enum ActionEdit {
    /// Remove the action at `action_idx`. Rejected when it is the item's
    /// last remaining action.
    Delete { action_idx: usize },
    /// Insert a fresh default action immediately after `action_idx`.
    AddBelow { action_idx: usize },
    /// Insert a copy of the action at `action_idx` (fresh id) after it.
    Duplicate { action_idx: usize },
    /// Merge a partial edit into the action at `action_idx`, reconciling
    /// its shape to the resulting objective.
    Update {
        action_idx: usize,
        patch: ActionPatch,
    },
}

/// Editing service for a question's logic list.
pub struct LogicEditorService {
    minter: Arc<dyn IdMinter>,
    validator: Arc<dyn ActionValidator>,
    updater: Arc<dyn QuestionUpdater>,
}

impl LogicEditorService {
    pub fn new(
        minter: Arc<dyn IdMinter>,
        validator: Arc<dyn ActionValidator>,
        updater: Arc<dyn QuestionUpdater>,
    ) -> Self {
        Self {
            minter,
            validator,
            updater,
        }
    }

    /// Appends a new logic item with the default skip condition and a
    /// single default jump action.
    pub fn add_logic(&self, survey: &Survey, question_idx: usize) -> Result<(), LogicError> {
        let question = self.question(survey, question_idx)?;
        let item = LogicItem::default_for_question(&question.id, self.minter.as_ref());
        self.emit(question_idx, logic::appended(&question.logic, item));
        Ok(())
    }

    /// Deletes the logic item at `logic_idx`.
    pub fn delete_logic(
        &self,
        survey: &Survey,
        question_idx: usize,
        logic_idx: usize,
    ) -> Result<(), LogicError> {
        let question = self.question(survey, question_idx)?;
        self.emit(question_idx, logic::removed(&question.logic, logic_idx)?);
        Ok(())
    }

    /// Deep-duplicates the logic item at `logic_idx` into `logic_idx + 1`,
    /// minting fresh ids throughout the copy.
    pub fn duplicate_logic(
        &self,
        survey: &Survey,
        question_idx: usize,
        logic_idx: usize,
    ) -> Result<(), LogicError> {
        let question = self.question(survey, question_idx)?;
        self.emit(
            question_idx,
            logic::duplicated(&question.logic, logic_idx, self.minter.as_ref())?,
        );
        Ok(())
    }

    /// Relocates the logic item at `from` to position `to`. Used for "move
    /// up" (`to = from - 1`) and "move down" (`to = from + 1`); the caller
    /// disables those at the list edges.
    pub fn move_logic(
        &self,
        survey: &Survey,
        question_idx: usize,
        from: usize,
        to: usize,
    ) -> Result<(), LogicError> {
        let question = self.question(survey, question_idx)?;
        self.emit(question_idx, logic::relocated(&question.logic, from, to)?);
        Ok(())
    }

    /// Applies one action edit inside the logic item at `logic_idx`.
    ///
    /// An update whose reconciled action fails validation is discarded:
    /// the failure is logged and nothing is emitted.
    pub fn edit_action(
        &self,
        survey: &Survey,
        question_idx: usize,
        logic_idx: usize,
        edit: ActionEdit,
    ) -> Result<(), LogicError> {
        let question = self.question(survey, question_idx)?;
        let item = question
            .logic
            .get(logic_idx)
            .ok_or(LogicError::UnknownLogicItem { logic_idx })?;

        let edited = match edit {
            ActionEdit::Delete { action_idx } => {
                if item.actions.len() <= 1 {
                    return Err(LogicError::LastAction);
                }
                item.with_action_removed(action_idx)?
            }
            ActionEdit::AddBelow { action_idx } => {
                item.with_action_added_below(action_idx, self.minter.as_ref())?
            }
            ActionEdit::Duplicate { action_idx } => {
                item.with_action_duplicated(action_idx, self.minter.as_ref())?
            }
            ActionEdit::Update { action_idx, patch } => {
                let action = item.actions.get(action_idx).ok_or_else(|| {
                    LogicError::IndexOutOfBounds {
                        index: action_idx,
                        len: item.actions.len(),
                    }
                })?;
                let reconciled = action.reconciled(patch, survey);
                if let Err(err) = self.validator.validate(survey, &reconciled) {
                    warn!(
                        action_id = %reconciled.id(),
                        error = %err,
                        "discarding action update that failed validation"
                    );
                    return Ok(());
                }
                item.with_action_replaced(action_idx, reconciled)?
            }
        };

        let mut logic = question.logic.clone();
        logic[logic_idx] = edited;
        self.emit(question_idx, logic);
        Ok(())
    }

    fn question<'a>(
        &self,
        survey: &'a Survey,
        question_idx: usize,
    ) -> Result<&'a Question, LogicError> {
        survey
            .question(question_idx)
            .ok_or(LogicError::UnknownQuestion { question_idx })
    }

    fn emit(&self, question_idx: usize, logic: Vec<LogicItem>) {
        self.updater
            .update_question(question_idx, QuestionUpdate { logic });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{SequenceMinter, SurveyActionValidator};
    use crate::domain::foundation::{EnvironmentId, QuestionId, SurveyId, VariableId};
    use crate::domain::logic::{Action, ActionObjective};
    use crate::domain::survey::{SurveyVariable, VariableType};
    use std::sync::Mutex;

    struct RecordingUpdater {
        updates: Mutex<Vec<(usize, QuestionUpdate)>>,
    }

    impl RecordingUpdater {
        fn new() -> Self {
            Self {
                updates: Mutex::new(Vec::new()),
            }
        }

        fn updates(&self) -> Vec<(usize, QuestionUpdate)> {
            self.updates.lock().expect("updates lock poisoned").clone()
        }

        fn last_logic(&self) -> Vec<LogicItem> {
            self.updates()
                .last()
                .expect("no update was emitted")
                .1
                .logic
                .clone()
        }
    }

    impl QuestionUpdater for RecordingUpdater {
        fn update_question(&self, question_idx: usize, update: QuestionUpdate) {
            self.updates
                .lock()
                .expect("updates lock poisoned")
                .push((question_idx, update));
        }
    }

    struct Fixture {
        service: LogicEditorService,
        updater: Arc<RecordingUpdater>,
        minter: Arc<SequenceMinter>,
    }

    fn fixture() -> Fixture {
        let minter = Arc::new(SequenceMinter::new("id"));
        let updater = Arc::new(RecordingUpdater::new());
        let service = LogicEditorService::new(
            minter.clone(),
            Arc::new(SurveyActionValidator::new()),
            updater.clone(),
        );
        Fixture {
            service,
            updater,
            minter,
        }
    }

    fn survey_with_logic(minter: &SequenceMinter, item_count: usize) -> Survey {
        let question_id = QuestionId::from("q1");
        let logic = (0..item_count)
            .map(|_| LogicItem::default_for_question(&question_id, minter))
            .collect();
        Survey {
            id: SurveyId::from("s1"),
            environment_id: EnvironmentId::from("env1"),
            name: "Test".to_string(),
            questions: vec![
                Question {
                    id: question_id,
                    headline: "First".to_string(),
                    logic,
                },
                Question {
                    id: QuestionId::from("q2"),
                    headline: "Second".to_string(),
                    logic: vec![],
                },
            ],
            endings: vec![],
            variables: vec![SurveyVariable {
                id: VariableId::from("score"),
                name: "score".to_string(),
                variable_type: VariableType::Number,
            }],
            hidden_fields: vec![],
            segment: None,
        }
    }

    #[test]
    fn add_logic_appends_a_default_item() {
        let f = fixture();
        let survey = survey_with_logic(&f.minter, 1);

        f.service.add_logic(&survey, 0).unwrap();

        let logic = f.updater.last_logic();
        assert_eq!(logic.len(), 2);
        assert_eq!(logic[0], survey.questions[0].logic[0]);
        assert_eq!(logic[1].actions.len(), 1);
    }

    #[test]
    fn move_logic_relocates_within_the_emitted_copy() {
        let f = fixture();
        let survey = survey_with_logic(&f.minter, 3);
        let ids: Vec<_> = survey.questions[0].logic.iter().map(|i| i.id.clone()).collect();

        f.service.move_logic(&survey, 0, 2, 1).unwrap();

        let moved: Vec<_> = f.updater.last_logic().iter().map(|i| i.id.clone()).collect();
        assert_eq!(moved, vec![ids[0].clone(), ids[2].clone(), ids[1].clone()]);
        // The caller's state is untouched; only the emitted copy moved.
        assert_eq!(survey.questions[0].logic.len(), 3);
    }

    #[test]
    fn delete_last_action_is_rejected_and_emits_nothing() {
        let f = fixture();
        let survey = survey_with_logic(&f.minter, 1);

        let result = f
            .service
            .edit_action(&survey, 0, 0, ActionEdit::Delete { action_idx: 0 });

        assert_eq!(result, Err(LogicError::LastAction));
        assert!(f.updater.updates().is_empty());
    }

    #[test]
    fn add_below_then_delete_goes_through() {
        let f = fixture();
        let mut survey = survey_with_logic(&f.minter, 1);

        f.service
            .edit_action(&survey, 0, 0, ActionEdit::AddBelow { action_idx: 0 })
            .unwrap();
        survey.questions[0].logic = f.updater.last_logic();
        assert_eq!(survey.questions[0].logic[0].actions.len(), 2);

        f.service
            .edit_action(&survey, 0, 0, ActionEdit::Delete { action_idx: 1 })
            .unwrap();
        assert_eq!(f.updater.last_logic()[0].actions.len(), 1);
    }

    #[test]
    fn update_switching_objective_reconciles_and_validates() {
        let f = fixture();
        let survey = survey_with_logic(&f.minter, 1);

        f.service
            .edit_action(
                &survey,
                0,
                0,
                ActionEdit::Update {
                    action_idx: 0,
                    patch: ActionPatch::objective(ActionObjective::Calculate),
                },
            )
            .unwrap();

        match &f.updater.last_logic()[0].actions[0] {
            Action::Calculate { variable_id, .. } => {
                assert_eq!(variable_id, &VariableId::from("score"));
            }
            other => panic!("expected calculate, got {:?}", other),
        }
    }

    #[test]
    fn invalid_update_is_discarded_without_an_emit() {
        let f = fixture();
        let mut survey = survey_with_logic(&f.minter, 1);
        // No declared variables: a calculate action cannot validate.
        survey.variables.clear();

        let result = f.service.edit_action(
            &survey,
            0,
            0,
            ActionEdit::Update {
                action_idx: 0,
                patch: ActionPatch::objective(ActionObjective::Calculate),
            },
        );

        assert_eq!(result, Ok(()));
        assert!(f.updater.updates().is_empty());
    }

    #[test]
    fn unknown_question_index_is_an_error() {
        let f = fixture();
        let survey = survey_with_logic(&f.minter, 1);
        assert_eq!(
            f.service.add_logic(&survey, 5),
            Err(LogicError::UnknownQuestion { question_idx: 5 })
        );
    }
}
