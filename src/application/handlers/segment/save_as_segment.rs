//! SaveAsSegmentHandler - promotes a survey's filter set to a named segment.
//!
//! The flow behind the "save as new segment" dialog: a private ad-hoc
//! filter set is promoted in place (same id, `is_private` cleared), while
//! anything else produces a brand-new public segment. An empty or absent
//! filter set aborts before any network call.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::foundation::ValidationError;
use crate::domain::segment::{Segment, SegmentError};
use crate::domain::survey::Survey;
use crate::ports::{Notifier, SegmentDraft, SegmentRepository, SegmentUpdate, SurveyCache};

/// The dialog's form input.
#[derive(Debug, Clone)]
pub struct SaveAsSegmentForm {
    pub title: String,
    pub description: String,
}

impl SaveAsSegmentForm {
    /// Both fields are required.
    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        Ok(())
    }
}

/// What the save attempt did.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// No segment or no filters: nothing was persisted, nothing notified.
    Skipped,
    /// The existing private segment was promoted in place.
    Promoted(Segment),
    /// A new public segment was created.
    Created(Segment),
}

impl SaveOutcome {
    /// Whether the dialog should close after this outcome.
    pub fn closes_dialog(&self) -> bool {
        matches!(self, SaveOutcome::Promoted(_) | SaveOutcome::Created(_))
    }
}

/// Handler for the save-as-segment flow.
pub struct SaveAsSegmentHandler {
    segments: Arc<dyn SegmentRepository>,
    survey_cache: Arc<dyn SurveyCache>,
    notifier: Arc<dyn Notifier>,
}

impl SaveAsSegmentHandler {
    pub fn new(
        segments: Arc<dyn SegmentRepository>,
        survey_cache: Arc<dyn SurveyCache>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            segments,
            survey_cache,
            notifier,
        }
    }

    /// Persists the survey's current filter set under the given title.
    ///
    /// Form errors come back as `SegmentError::Validation` before any I/O.
    /// Persistence failures are surfaced through the notifier and returned;
    /// the caller keeps the dialog open so the user can retry.
    pub async fn handle(
        &self,
        survey: &Survey,
        form: SaveAsSegmentForm,
    ) -> Result<SaveOutcome, SegmentError> {
        form.validate()?;

        let Some(segment) = &survey.segment else {
            return Ok(SaveOutcome::Skipped);
        };
        if !segment.has_filters() {
            return Ok(SaveOutcome::Skipped);
        }

        let (result, success_message) = if segment.is_private {
            let update = SegmentUpdate {
                title: form.title,
                description: form.description,
                is_private: false,
                filters: segment.filters.clone(),
            };
            (
                self.segments.update(&segment.id, update).await,
                "Segment updated successfully",
            )
        } else {
            let draft = SegmentDraft {
                environment_id: survey.environment_id.clone(),
                survey_id: survey.id.clone(),
                title: form.title,
                description: form.description,
                is_private: false,
                filters: segment.filters.clone(),
            };
            (
                self.segments.create(draft).await,
                "Segment created successfully",
            )
        };

        match result {
            Ok(saved) => {
                info!(segment_id = %saved.id, survey_id = %survey.id, "segment saved");
                self.notifier.success(success_message);
                self.survey_cache
                    .invalidate(&survey.environment_id, &survey.id)
                    .await;
                if segment.is_private {
                    Ok(SaveOutcome::Promoted(saved))
                } else {
                    Ok(SaveOutcome::Created(saved))
                }
            }
            Err(err) => {
                error!(survey_id = %survey.id, error = %err, "segment save failed");
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }
}
