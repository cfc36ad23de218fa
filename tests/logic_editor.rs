//! End-to-end tests for the logic edit algebra, driven the way the owning
//! editor drives it: each emitted list becomes the next canonical state.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use formflow::adapters::{SequenceMinter, SurveyActionValidator};
use formflow::application::handlers::logic::{ActionEdit, LogicEditorService};
use formflow::domain::foundation::{EndingId, EnvironmentId, QuestionId, SurveyId, TargetId, VariableId};
use formflow::domain::logic::{
    self, Action, ActionObjective, ActionPatch, CalculateOperator, LogicItem, OperandValue,
    StaticValue,
};
use formflow::domain::survey::{Question, Survey, SurveyEnding, SurveyVariable, VariableType};
use formflow::ports::{IdMinter, QuestionUpdate, QuestionUpdater};

struct RecordingUpdater {
    updates: Mutex<Vec<(usize, QuestionUpdate)>>,
}

impl RecordingUpdater {
    fn new() -> Self {
        Self {
            updates: Mutex::new(Vec::new()),
        }
    }

    fn last_logic(&self) -> Option<Vec<LogicItem>> {
        self.updates
            .lock()
            .expect("updates lock poisoned")
            .last()
            .map(|(_, update)| update.logic.clone())
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

fn survey() -> Survey {
    Survey {
        id: SurveyId::from("s1"),
        environment_id: EnvironmentId::from("env1"),
        name: "Churn survey".to_string(),
        questions: vec![
            Question {
                id: QuestionId::from("q1"),
                headline: "Why are you leaving?".to_string(),
                logic: vec![],
            },
            Question {
                id: QuestionId::from("q2"),
                headline: "Anything else?".to_string(),
                logic: vec![],
            },
        ],
        endings: vec![SurveyEnding {
            id: EndingId::from("end1"),
            headline: "Thanks for your feedback".to_string(),
        }],
        variables: vec![SurveyVariable {
            id: VariableId::from("score"),
            name: "score".to_string(),
            variable_type: VariableType::Number,
        }],
        hidden_fields: vec![],
        segment: None,
    }
}

struct Editor {
    survey: Survey,
    service: LogicEditorService,
    updater: Arc<RecordingUpdater>,
}

impl Editor {
    fn new() -> Self {
        let updater = Arc::new(RecordingUpdater::new());
        let service = LogicEditorService::new(
            Arc::new(SequenceMinter::new("id")),
            Arc::new(SurveyActionValidator::new()),
            updater.clone(),
        );
        Self {
            survey: survey(),
            service,
            updater,
        }
    }

    /// Folds the emitted replacement back into the canonical state, the way
    /// the owning component applies the update callback.
    fn absorb(&mut self) {
        if let Some(logic) = self.updater.last_logic() {
            self.survey.questions[0].logic = logic;
        }
    }

    fn logic(&self) -> &[LogicItem] {
        &self.survey.questions[0].logic
    }
}

fn all_ids(list: &[LogicItem]) -> Vec<String> {
    list.iter().flat_map(|item| item.collect_ids()).collect()
}

#[test]
fn add_below_yields_a_fresh_default_jump() {
    let mut editor = Editor::new();
    editor.service.add_logic(&editor.survey, 0).unwrap();
    editor.absorb();

    editor
        .service
        .edit_action(&editor.survey, 0, 0, ActionEdit::AddBelow { action_idx: 0 })
        .unwrap();
    editor.absorb();

    let actions = &editor.logic()[0].actions;
    assert_eq!(actions.len(), 2);
    match &actions[1] {
        Action::JumpToQuestion { id, target } => {
            assert_eq!(target.as_str(), "");
            assert_ne!(id, actions[0].id());
        }
        other => panic!("expected default jump, got {:?}", other),
    }
}

#[test]
fn duplicate_then_delete_restores_the_list() {
    let mut editor = Editor::new();
    for _ in 0..3 {
        editor.service.add_logic(&editor.survey, 0).unwrap();
        editor.absorb();
    }
    let before = editor.logic().to_vec();

    editor.service.duplicate_logic(&editor.survey, 0, 1).unwrap();
    editor.absorb();
    assert_eq!(editor.logic().len(), 4);

    editor.service.delete_logic(&editor.survey, 0, 2).unwrap();
    editor.absorb();
    assert_eq!(editor.logic(), &before[..]);
}

#[test]
fn duplicated_item_shares_no_nested_id_with_its_source() {
    let mut editor = Editor::new();
    editor.service.add_logic(&editor.survey, 0).unwrap();
    editor.absorb();

    // Grow the item so the duplicate has nested structure to copy.
    editor
        .service
        .edit_action(&editor.survey, 0, 0, ActionEdit::AddBelow { action_idx: 0 })
        .unwrap();
    editor.absorb();
    editor
        .service
        .edit_action(
            &editor.survey,
            0,
            0,
            ActionEdit::Update {
                action_idx: 1,
                patch: ActionPatch::objective(ActionObjective::Calculate),
            },
        )
        .unwrap();
    editor.absorb();

    editor.service.duplicate_logic(&editor.survey, 0, 0).unwrap();
    editor.absorb();

    let source_ids: HashSet<_> = editor.logic()[0].collect_ids().into_iter().collect();
    for id in editor.logic()[1].collect_ids() {
        assert!(!source_ids.contains(&id), "duplicate shares id {id}");
    }
}

#[test]
fn objective_round_trip_keeps_the_action_valid() {
    let mut editor = Editor::new();
    editor.service.add_logic(&editor.survey, 0).unwrap();
    editor.absorb();

    editor
        .service
        .edit_action(
            &editor.survey,
            0,
            0,
            ActionEdit::Update {
                action_idx: 0,
                patch: ActionPatch::objective(ActionObjective::Calculate),
            },
        )
        .unwrap();
    editor.absorb();
    assert_eq!(
        editor.logic()[0].actions[0].objective(),
        ActionObjective::Calculate
    );

    editor
        .service
        .edit_action(
            &editor.survey,
            0,
            0,
            ActionEdit::Update {
                action_idx: 0,
                patch: ActionPatch::target(TargetId::from("q2")),
            },
        )
        .unwrap();
    editor.absorb();
    // The target patch does not apply to a calculate action.
    assert_eq!(
        editor.logic()[0].actions[0].objective(),
        ActionObjective::Calculate
    );
}

#[test]
fn jump_to_an_ending_survives_validation_and_is_emitted() {
    let mut editor = Editor::new();
    editor.service.add_logic(&editor.survey, 0).unwrap();
    editor.absorb();

    editor
        .service
        .edit_action(
            &editor.survey,
            0,
            0,
            ActionEdit::Update {
                action_idx: 0,
                patch: ActionPatch::target(TargetId::from("end1")),
            },
        )
        .unwrap();
    editor.absorb();

    match &editor.logic()[0].actions[0] {
        Action::JumpToQuestion { target, .. } => assert_eq!(target.as_str(), "end1"),
        other => panic!("expected jump, got {:?}", other),
    }

    // A destination that is neither a question nor an ending is discarded.
    editor
        .service
        .edit_action(
            &editor.survey,
            0,
            0,
            ActionEdit::Update {
                action_idx: 0,
                patch: ActionPatch::target(TargetId::from("nowhere")),
            },
        )
        .unwrap();
    editor.absorb();
    match &editor.logic()[0].actions[0] {
        Action::JumpToQuestion { target, .. } => assert_eq!(target.as_str(), "end1"),
        other => panic!("expected jump, got {:?}", other),
    }
}

#[test]
fn calculate_fields_update_through_patches() {
    let mut editor = Editor::new();
    editor.service.add_logic(&editor.survey, 0).unwrap();
    editor.absorb();

    editor
        .service
        .edit_action(
            &editor.survey,
            0,
            0,
            ActionEdit::Update {
                action_idx: 0,
                patch: ActionPatch::objective(ActionObjective::Calculate),
            },
        )
        .unwrap();
    editor.absorb();

    editor
        .service
        .edit_action(
            &editor.survey,
            0,
            0,
            ActionEdit::Update {
                action_idx: 0,
                patch: ActionPatch::operator(CalculateOperator::Add),
            },
        )
        .unwrap();
    editor.absorb();

    // Raw form input is coerced to the variable's numeric type.
    editor
        .service
        .edit_action(
            &editor.survey,
            0,
            0,
            ActionEdit::Update {
                action_idx: 0,
                patch: ActionPatch::value(OperandValue::literal(
                    logic::coerce_static_value("15", VariableType::Number).unwrap(),
                )),
            },
        )
        .unwrap();
    editor.absorb();

    match &editor.logic()[0].actions[0] {
        Action::Calculate {
            variable_id,
            operator,
            value,
            ..
        } => {
            assert_eq!(variable_id, &VariableId::from("score"));
            assert_eq!(*operator, CalculateOperator::Add);
            assert_eq!(value, &OperandValue::literal(StaticValue::Number(15.0)));
        }
        other => panic!("expected calculate, got {:?}", other),
    }
}

#[test]
fn logic_item_wire_shape_matches_the_editor_format() {
    let json = serde_json::json!({
        "id": "item1",
        "conditions": {
            "id": "group1",
            "connector": "and",
            "conditions": [{
                "id": "leaf1",
                "leftOperand": { "type": "question", "id": "q1" },
                "operator": "isSkipped"
            }]
        },
        "actions": [{
            "id": "action1",
            "objective": "jumpToQuestion",
            "target": "q2"
        }]
    });

    let item: LogicItem = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(item.actions[0].objective(), ActionObjective::JumpToQuestion);

    let back = serde_json::to_value(&item).unwrap();
    assert_eq!(back, json);
}

// Property coverage for the raw list algebra.

#[derive(Debug, Clone)]
enum Op {
    Add,
    Delete(usize),
    Duplicate(usize),
    Move(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0usize..16).prop_map(Op::Delete),
        (0usize..16).prop_map(Op::Duplicate),
        ((0usize..16), (0usize..16)).prop_map(|(from, to)| Op::Move(from, to)),
    ]
}

fn apply(list: Vec<LogicItem>, op: &Op, minter: &dyn IdMinter) -> Vec<LogicItem> {
    let question_id = QuestionId::from("q1");
    match op {
        Op::Add => logic::appended(
            &list,
            LogicItem::default_for_question(&question_id, minter),
        ),
        Op::Delete(seed) if !list.is_empty() => {
            logic::removed(&list, seed % list.len()).unwrap()
        }
        Op::Duplicate(seed) if !list.is_empty() => {
            logic::duplicated(&list, seed % list.len(), minter).unwrap()
        }
        Op::Move(from, to) if !list.is_empty() => {
            logic::relocated(&list, from % list.len(), to % list.len()).unwrap()
        }
        _ => list,
    }
}

proptest! {
    #[test]
    fn edit_sequences_preserve_global_id_uniqueness(
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        let minter = SequenceMinter::new("p");
        let mut list = Vec::new();
        for op in &ops {
            list = apply(list, op, &minter);
            let ids = all_ids(&list);
            let unique: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len(), "duplicate id after {:?}", op);
        }
    }

    #[test]
    fn relocation_preserves_the_item_multiset(
        len in 1usize..8,
        from in 0usize..8,
        to in 0usize..8,
    ) {
        let minter = SequenceMinter::new("p");
        let question_id = QuestionId::from("q1");
        let list: Vec<_> = (0..len)
            .map(|_| LogicItem::default_for_question(&question_id, &minter))
            .collect();

        let moved = logic::relocated(&list, from % len, to % len).unwrap();

        let mut before: Vec<_> = list.iter().map(|i| i.id.clone()).collect();
        let mut after: Vec<_> = moved.iter().map(|i| i.id.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }
}
