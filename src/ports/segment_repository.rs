//! Segment repository port.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{EnvironmentId, SegmentId, SurveyId};
use crate::domain::segment::{Segment, SegmentError, SegmentFilter};

/// Payload for creating a new segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDraft {
    pub environment_id: EnvironmentId,
    pub survey_id: SurveyId,
    pub title: String,
    pub description: String,
    pub is_private: bool,
    pub filters: Vec<SegmentFilter>,
}

/// Payload for updating an existing segment.
///
/// The save-as-segment flow uses this to promote a private filter set:
/// title and description are set and `is_private` cleared while the
/// filters are preserved, all under the same id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentUpdate {
    pub title: String,
    pub description: String,
    pub is_private: bool,
    pub filters: Vec<SegmentFilter>,
}

/// Repository port for segment persistence.
///
/// Implementations call the segment API (or an in-memory store under test).
/// Both operations are asynchronous network requests; failures carry a
/// descriptive message suitable for surfacing to the user.
#[async_trait]
pub trait SegmentRepository: Send + Sync {
    /// Creates a new segment from the draft and returns it.
    async fn create(&self, draft: SegmentDraft) -> Result<Segment, SegmentError>;

    /// Updates the segment with the given id and returns the new state.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no segment has that id
    /// - `Persistence` on transport or server failure
    async fn update(&self, id: &SegmentId, update: SegmentUpdate) -> Result<Segment, SegmentError>;
}
