//! Logic editing handlers.

mod edit_question_logic;

pub use edit_question_logic::{ActionEdit, LogicEditorService};
