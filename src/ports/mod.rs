//! Ports - interfaces between the editing domain and its collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement them.
//!
//! Inbound capabilities consumed by the editor:
//! - `IdMinter` - collision-free identifier generation
//! - `ActionValidator` - schema-style validation of reconciled actions
//!
//! Outbound channels:
//! - `QuestionUpdater` - the single update callback carrying replacement logic lists
//! - `SegmentRepository` - segment create/update persistence
//! - `SurveyCache` - survey view refresh after a segment changes
//! - `Notifier` - transient success/error notifications

mod action_validator;
mod id_minter;
mod notifier;
mod question_updater;
mod segment_repository;
mod survey_cache;

pub use action_validator::{ActionValidationError, ActionValidator};
pub use id_minter::IdMinter;
pub use notifier::Notifier;
pub use question_updater::{QuestionUpdate, QuestionUpdater};
pub use segment_repository::{SegmentDraft, SegmentRepository, SegmentUpdate};
pub use survey_cache::SurveyCache;
